pub mod processor_trait;
pub mod processors;

pub use processor_trait::{LineKind, LineProcessor};
pub use processors::SlashCommentProcessor;

use alloc::boxed::Box;

/// 既定のプロセッサを生成する
///
/// コメント記法は `//` 固定で、拡張子による切り替えは行わない。
#[must_use]
pub fn default_processor() -> Box<dyn LineProcessor> {
    Box::new(SlashCommentProcessor::new())
}
