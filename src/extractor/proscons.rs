//! Merit / demerit list detection.
//!
//! The pros section is located by merit keywords and the cons section by
//! demerit keywords. Bullets are collected from a fixed window below each
//! heading; both lists must be long enough for the section to count.

use regex::Regex;

use crate::markdown::{char_len, is_section_heading, strip_bold, strip_heading_marker};
use crate::patterns::{CONS_MARKER, PROS_MARKER};
use crate::result::ProsCons;
use crate::Options;

const MERIT: &str = "メリット";
const DEMERIT: &str = "デメリット";

const PROS_KEYWORDS: &[&str] = &[MERIT, "強み", "良い点"];
const CONS_KEYWORDS: &[&str] = &[DEMERIT, "注意点", "弱み", "制約"];

const DEFAULT_PROSCONS_TITLE: &str = "メリット・デメリット";

/// `メリット` on its own, not only as the tail of `デメリット`.
fn mentions_merit(line: &str) -> bool {
    line.replace(DEMERIT, "").contains(MERIT)
}

fn is_pros_line(line: &str) -> bool {
    PROS_KEYWORDS.iter().any(|k| line.contains(k)) && !line.contains(DEMERIT)
}

fn is_cons_line(line: &str) -> bool {
    CONS_KEYWORDS.iter().any(|k| line.contains(k)) && !mentions_merit(line)
}

/// Extracts pros and cons when both sections have enough items.
#[must_use]
pub fn extract_proscons(lines: &[&str], options: &Options) -> Option<ProsCons> {
    let pros_index = lines.iter().position(|line| is_pros_line(line))?;
    let cons_index = lines.iter().position(|line| is_cons_line(line))?;

    let pros_line = lines[pros_index];
    let title = if is_section_heading(pros_line) {
        strip_heading_marker(pros_line).into_owned()
    } else {
        DEFAULT_PROSCONS_TITLE.to_string()
    };

    let mut pros = collect_items(lines, pros_index, &PROS_MARKER, options);
    let mut cons = collect_items(lines, cons_index, &CONS_MARKER, options);

    if pros.len() < options.min_list_items || cons.len() < options.min_list_items {
        return None;
    }
    pros.truncate(options.max_list_items);
    cons.truncate(options.max_list_items);

    Some(ProsCons { title, pros, cons })
}

/// Bullets within the scan window below `start`.
///
/// Scanning ends at a section heading found more than two lines below
/// `start`, so a heading immediately under the section title does not end it.
fn collect_items(lines: &[&str], start: usize, marker: &Regex, options: &Options) -> Vec<String> {
    let end = lines.len().min(start + options.list_scan_window);
    let mut items = Vec::new();

    for (i, raw) in lines.iter().enumerate().take(end).skip(start + 1) {
        let line = raw.trim();
        if marker.is_match(line) {
            let text = strip_bold(&marker.replace(line, ""));
            let len = char_len(&text);
            if len > options.min_list_item_chars
                && len < options.max_list_item_chars
                && !text.contains("**")
            {
                items.push(text);
            }
        }
        if is_section_heading(line) && i > start + 2 {
            break;
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demerit_heading_is_not_a_pros_heading() {
        assert!(!is_pros_line("## デメリット"));
        assert!(is_pros_line("## メリット"));
        assert!(is_pros_line("### Claudeの強み"));
    }

    #[test]
    fn demerit_heading_is_a_cons_heading() {
        assert!(is_cons_line("## デメリット"));
        assert!(is_cons_line("## 注意点"));
        assert!(!is_cons_line("## メリット・デメリット"));
        assert!(!is_cons_line("## メリット"));
    }

    #[test]
    fn items_strip_marker_and_bold() {
        let lines = ["## メリット", "- **高速**に動作する", "・日本語に強いです", "✓ 無料で使えます"];
        let items = collect_items(&lines, 0, &PROS_MARKER, &Options::default());
        assert_eq!(items, vec!["高速に動作する", "日本語に強いです", "無料で使えます"]);
    }

    #[test]
    fn items_outside_length_bounds_are_dropped() {
        let long = format!("- {}", "あ".repeat(60));
        let lines = ["## 注意点", "- 短い", long.as_str(), "- 六文字より長い"];
        let items = collect_items(&lines, 0, &CONS_MARKER, &Options::default());
        assert_eq!(items, vec!["六文字より長い"]);
    }

    #[test]
    fn stray_asterisk_survives_bold_removal() {
        let lines = ["## メリット", "- ***強調が崩れた項目です"];
        let items = collect_items(&lines, 0, &PROS_MARKER, &Options::default());
        assert_eq!(items, vec!["*強調が崩れた項目です"]);
    }

    #[test]
    fn heading_near_start_does_not_stop_scan() {
        let lines = [
            "## メリット",
            "",
            "### 詳細",
            "- 一つ目のメリット項目",
            "- 二つ目のメリット項目",
            "## 次の章",
            "- 章の外にある項目です",
        ];
        let items = collect_items(&lines, 0, &PROS_MARKER, &Options::default());
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn cons_marker_accepts_triangle_but_not_check() {
        let lines = ["## 弱み", "▼ 料金がやや高めです", "✓ これは対象外の項目"];
        let items = collect_items(&lines, 0, &CONS_MARKER, &Options::default());
        assert_eq!(items, vec!["料金がやや高めです"]);
    }
}
