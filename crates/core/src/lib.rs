#![no_std]
#![allow(clippy::cargo_common_metadata)]

extern crate alloc;

pub mod language;
pub mod stats;

pub use language::{LineKind, LineProcessor, SlashCommentProcessor};
pub use stats::LineTally;
