//! Compiled regex patterns for markdown analysis.
//!
//! All patterns are compiled once on first use via `LazyLock`.
//! Digit classes are spelled `[0-9]` because `\d` in the `regex` crate also
//! matches full-width and other Unicode digits.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Line Structure Patterns
// =============================================================================

/// A hashtag line: `#` immediately followed by an ASCII letter, hiragana,
/// katakana or CJK ideograph.
pub static HASHTAG_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[A-Za-z\x{3040}-\x{309F}\x{30A0}-\x{30FF}\x{4E00}-\x{9FFF}]")
        .expect("HASHTAG_LINE regex")
});

/// Leading heading marker with its trailing whitespace.
pub static HEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*").expect("HEADING_MARKER regex"));

/// An H1 line anywhere in the document (used for article listings).
pub static H1_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").expect("H1_LINE regex"));

/// Leading pros item marker.
pub static PROS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-・✓]\s*").expect("PROS_MARKER regex"));

/// Leading cons item marker.
pub static CONS_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-・▼]\s*").expect("CONS_MARKER regex"));

// =============================================================================
// Numeric Patterns
// =============================================================================

/// A number followed by a recognised unit, e.g. `1,200件` or `35%`.
pub static STAT_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+[0-9,]*)(件|万円|千円|億円|年|%|GB|TB|時間|日|ヶ月|倍)")
        .expect("STAT_TOKEN regex")
});

/// `3つ` style counters.
pub static COUNTER_TSU: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)つ").expect("COUNTER_TSU regex"));

/// `3分の1` style fractions.
pub static JA_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)分の([0-9]+)").expect("JA_FRACTION regex"));

// =============================================================================
// Before/After Patterns
// =============================================================================

/// `label: before → after` on a single line (full-width or ASCII colon).
pub static LABELED_ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^：:\n]+)[：:]([^\n→]+)\s*→\s*([^\n]+)").expect("LABELED_ARROW regex")
});

/// `**before → after**` bold pairs without a label.
pub static BOLD_ARROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\*\*([^*]+)\s*→\s*([^*]+)\*\*").expect("BOLD_ARROW regex")
});
