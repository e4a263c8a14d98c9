pub mod slash_comment;

pub use slash_comment::SlashCommentProcessor;
