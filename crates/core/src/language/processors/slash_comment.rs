//! # Slash Comment Processor
//!
//! Treats a line as a comment when, after trimming, it begins with `//`.
//!
//! > **Note**: inline comments are not recognised. `x = 1; // note` is code.
//! > Block comments (`/* ... */`) are not recognised either; `/*` is code.
//!
//! ## Usage Example
//!
//! ```rust
//! use sloc_tally_core::language::{LineKind, LineProcessor, SlashCommentProcessor};
//!
//! let mut p = SlashCommentProcessor::new();
//! assert_eq!(p.classify("   // header"), LineKind::Comment);
//! assert_eq!(p.classify("\t\n"), LineKind::Blank);
//! assert_eq!(p.classify("/"), LineKind::Code);
//! ```

use crate::language::processor_trait::{LineKind, LineProcessor};

/// `//` 行コメントのみを扱うプロセッサ
#[derive(Debug, Default, Clone, Copy)]
pub struct SlashCommentProcessor;

impl SlashCommentProcessor {
    pub const MARKER: &'static str = "//";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// 行を分類する (状態を持たないので関連関数として呼べる)
    #[must_use]
    pub fn classify_line(line: &str) -> LineKind {
        let trimmed = line.trim_matches(is_strip_char);
        if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.len() >= Self::MARKER.len() && trimmed.starts_with(Self::MARKER) {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }
}

/// Unicode `White_Space` plus the information separators `\x1c`..=`\x1f`.
#[inline]
fn is_strip_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

impl LineProcessor for SlashCommentProcessor {
    fn classify(&mut self, line: &str) -> LineKind {
        Self::classify_line(line)
    }
}
