//! Line-level markdown helpers shared by the extractor passes.
//!
//! The extractor works on raw lines rather than a markdown AST: headings,
//! table rows and bullets are recognised by their leading characters only.

use std::borrow::Cow;

use crate::patterns::HEADING_MARKER;

/// Splits on `'\n'` only, keeping any `'\r'` attached to its line.
#[must_use]
pub fn split_lines(content: &str) -> Vec<&str> {
    content.split('\n').collect()
}

/// True for `# ` (H1) lines.
#[must_use]
pub fn is_title_heading(line: &str) -> bool {
    line.starts_with("# ")
}

/// True for `## ` and `### ` lines.
#[must_use]
pub fn is_section_heading(line: &str) -> bool {
    line.starts_with("## ") || line.starts_with("### ")
}

/// Removes leading `#` characters and the whitespace after them.
#[must_use]
pub fn strip_heading_marker(line: &str) -> Cow<'_, str> {
    HEADING_MARKER.replace(line, "")
}

/// Removes every `**` bold marker.
#[must_use]
pub fn strip_bold(text: &str) -> String {
    text.replace("**", "")
}

/// True for lines that open a markdown table.
#[must_use]
pub fn is_table_row(line: &str) -> bool {
    line.contains('|') && line.trim().starts_with('|')
}

/// Table cells: fragments between `|` that are not blank. Cells are untrimmed.
#[must_use]
pub fn table_cells(line: &str) -> Vec<&str> {
    line.split('|').filter(|cell| !cell.trim().is_empty()).collect()
}

#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First `max` characters of `text`.
#[must_use]
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Breaks a title after its last `】` so the bracketed lead sits on its own line.
///
/// # Examples
///
/// ```
/// use article_insight::markdown::format_title_for_display;
///
/// assert_eq!(
///     format_title_for_display("【2025年版】AIツール比較"),
///     "【2025年版】\nAIツール比較"
/// );
/// assert_eq!(format_title_for_display("No brackets"), "No brackets");
/// ```
#[must_use]
pub fn format_title_for_display(title: &str) -> String {
    match title.rfind('】') {
        Some(pos) => {
            let split = pos + '】'.len_utf8();
            format!("{}\n{}", &title[..split], &title[split..])
        }
        None => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_keeps_carriage_returns() {
        assert_eq!(split_lines("a\r\nb"), vec!["a\r", "b"]);
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn section_heading_requires_space() {
        assert!(is_section_heading("## 概要"));
        assert!(is_section_heading("### 詳細"));
        assert!(!is_section_heading("##概要"));
        assert!(!is_section_heading("# タイトル"));
        assert!(!is_section_heading("#### 深い"));
    }

    #[test]
    fn strip_heading_marker_removes_hashes_and_space() {
        assert_eq!(strip_heading_marker("### 料金比較"), "料金比較");
        assert_eq!(strip_heading_marker("plain"), "plain");
    }

    #[test]
    fn table_cells_drop_blank_fragments() {
        assert_eq!(table_cells("| A | B |  |"), vec![" A ", " B "]);
        assert!(table_cells("|---|").iter().all(|c| c.contains("---")));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("あいうえお", 3), "あいう");
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn title_breaks_after_last_closing_bracket_only() {
        assert_eq!(
            format_title_for_display("【速報】【無料】新機能"),
            "【速報】【無料】\n新機能"
        );
    }
}
