//! Tokenizer for inline reference markers.
//!
//! A marker is an opening bracket, one or more ASCII digits and a closing
//! bracket (`[3]`). Anything else in brackets is ordinary text. The token
//! sequence partitions the input: joining the token texts gives back the
//! original string.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Pattern for reference markers. `[0-9]` rather than `\d`, which would
/// also accept non-ASCII digits.
static MARKER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([0-9]+)\]").expect("Invalid regex"));

/// One piece of tokenized answer text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReferenceToken {
    /// Plain text between markers
    Literal { text: String },
    /// A `[n]` marker
    Marker {
        /// Original marker text, brackets included
        text: String,
        /// 1-based citation number (saturates on overflow)
        number: u64,
        /// Whether `number` refers to an existing citation
        valid: bool,
    },
}

impl ReferenceToken {
    /// Create a literal token.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal { text: text.into() }
    }

    /// Create a marker token for `number`, validated against `citation_count`.
    pub fn marker(number: u64, citation_count: usize) -> Self {
        Self::Marker {
            text: format!("[{}]", number),
            number,
            valid: is_valid_number(number, citation_count),
        }
    }

    /// The exact source text this token covers.
    pub fn text(&self) -> &str {
        match self {
            Self::Literal { text } | Self::Marker { text, .. } => text,
        }
    }

    /// Whether this is a marker pointing at an existing citation.
    pub fn is_valid_marker(&self) -> bool {
        matches!(self, Self::Marker { valid: true, .. })
    }

    /// Zero-based citation index for a valid marker.
    pub fn citation_index(&self) -> Option<usize> {
        match self {
            Self::Marker {
                number,
                valid: true,
                ..
            } => usize::try_from(*number - 1).ok(),
            _ => None,
        }
    }
}

fn is_valid_number(number: u64, citation_count: usize) -> bool {
    number >= 1 && number <= citation_count as u64
}

/// Split `text` into literal segments and reference markers.
pub fn parse_markers(text: &str, citation_count: usize) -> Vec<ReferenceToken> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    for caps in MARKER_PATTERN.captures_iter(text) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        if whole.start() > cursor {
            tokens.push(ReferenceToken::literal(&text[cursor..whole.start()]));
        }

        // Digit runs too long for u64 keep a saturated number but never resolve.
        let parsed = digits.as_str().parse::<u64>().ok();
        tokens.push(ReferenceToken::Marker {
            text: whole.as_str().to_string(),
            number: parsed.unwrap_or(u64::MAX),
            valid: parsed.is_some_and(|n| is_valid_number(n, citation_count)),
        });

        cursor = whole.end();
    }

    if cursor < text.len() {
        tokens.push(ReferenceToken::literal(&text[cursor..]));
    }

    tokens
}

/// Join token texts back into the original string.
pub fn reassemble(tokens: &[ReferenceToken]) -> String {
    tokens.iter().map(ReferenceToken::text).collect()
}
