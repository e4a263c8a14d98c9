//! 行分類トレイト
//!
//! 行がコード・コメント・空行のどれに当たるかを判定する共通インターフェース。
//!
//! # Example
//!
//! ```rust
//! use sloc_tally_core::language::{LineKind, LineProcessor};
//!
//! struct HashProcessor;
//!
//! impl LineProcessor for HashProcessor {
//!     fn classify(&mut self, line: &str) -> LineKind {
//!         let trimmed = line.trim();
//!         if trimmed.is_empty() {
//!             LineKind::Blank
//!         } else if trimmed.starts_with('#') {
//!             LineKind::Comment
//!         } else {
//!             LineKind::Code
//!         }
//!     }
//! }
//!
//! let mut p = HashProcessor;
//! assert_eq!(p.process_line("# note"), 0);
//! assert_eq!(p.process_line("x = 1"), 1);
//! ```

use alloc::boxed::Box;
use serde::{Deserialize, Serialize};

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Empty after trimming surrounding whitespace.
    Blank,
    /// Starts with the comment marker after trimming.
    Comment,
    /// Anything else. Only these lines are significant.
    Code,
}

impl LineKind {
    #[inline]
    #[must_use]
    pub const fn is_significant(self) -> bool {
        matches!(self, Self::Code)
    }
}

/// 行分類トレイト
pub trait LineProcessor: Send {
    /// 行を分類する
    ///
    /// `line` may still carry its trailing `\n` / `\r\n`; implementations trim it.
    fn classify(&mut self, line: &str) -> LineKind;

    /// 行を処理し、SLOCカウント (0 or 1) を返す
    fn process_line(&mut self, line: &str) -> usize {
        usize::from(self.classify(line).is_significant())
    }

    /// 処理状態をリセット
    ///
    /// 新しいファイルの処理を開始する前に呼び出します。
    fn reset(&mut self) {}
}

impl LineProcessor for Box<dyn LineProcessor> {
    fn classify(&mut self, line: &str) -> LineKind {
        (**self).classify(line)
    }

    fn process_line(&mut self, line: &str) -> usize {
        (**self).process_line(line)
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}
