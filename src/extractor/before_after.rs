//! `before → after` change detection.
//!
//! Two passes run over the whole text: labelled `label: A → B` lines first,
//! then bold `**A → B**` pairs whose label is guessed from the values.

use crate::markdown::{char_len, strip_bold};
use crate::patterns::{BOLD_ARROW, COUNTER_TSU, JA_FRACTION, LABELED_ARROW};
use crate::result::BeforeAfter;
use crate::Options;

const MAX_LABEL_CHARS: usize = 30;
const MAX_VALUE_CHARS: usize = 20;

/// Units dropped from a label's tail when the values already carry them.
const LABEL_UNITS: &[&str] = &["時間", "日", "個", "件", "分"];

/// Vague quantities replaced by rough figures, in application order.
const VAGUE_QUANTITIES: &[(&str, &str)] = &[
    ("数十個", "30+個"),
    ("数十", "30+"),
    ("数百", "100+"),
    ("数千", "1000+"),
];

/// Rewrites Japanese quantity notation into compact numeric form.
///
/// Idempotent: the output contains nothing the rules match again.
///
/// ```
/// use article_insight::extractor::before_after::normalize_value;
///
/// assert_eq!(normalize_value("数十個"), "30+個");
/// assert_eq!(normalize_value("3分の1"), "1/3");
/// assert_eq!(normalize_value("5つ"), "5個");
/// assert_eq!(normalize_value("2〜3日"), "2-3日");
/// ```
#[must_use]
pub fn normalize_value(text: &str) -> String {
    let mut out = text.to_string();
    for (from, to) in VAGUE_QUANTITIES {
        out = out.replace(from, to);
    }
    out = COUNTER_TSU.replace_all(&out, "${1}個").into_owned();
    // A rewrite can expose another `N分のM` (`3分の1分の2`), so repeat until stable.
    loop {
        let next = JA_FRACTION.replace_all(&out, "${2}/${1}").into_owned();
        if next == out {
            break;
        }
        out = next;
    }
    out.replace('〜', "-")
}

/// Drops a trailing unit from `label` when either value already shows it.
///
/// Each unit is tested against the original label; the last one that applies
/// wins. An empty result falls back to the original label.
fn clean_label(label: &str, before: &str, after: &str) -> String {
    let mut cleaned = label;
    for unit in LABEL_UNITS {
        if (before.contains(unit) || after.contains(unit)) && label.ends_with(unit) {
            cleaned = &label[..label.len() - unit.len()];
        }
    }
    if cleaned.is_empty() {
        label.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Label for an unlabelled bold pair, guessed from its values.
fn infer_label(before: &str, after: &str) -> &'static str {
    if before.contains('個') || after.contains('個') {
        "数量"
    } else if before.contains('日') || after.contains("時間") || before.contains("時間") {
        "所要時間"
    } else if before.contains('/') {
        "効率"
    } else {
        "変化"
    }
}

fn values_fit(before: &str, after: &str) -> bool {
    char_len(before) < MAX_VALUE_CHARS && char_len(after) < MAX_VALUE_CHARS
}

/// Changes found in `content`, labelled ones first. `None` below the threshold.
#[must_use]
pub fn extract_before_after(content: &str, options: &Options) -> Option<Vec<BeforeAfter>> {
    let mut pairs = Vec::new();

    for caps in LABELED_ARROW.captures_iter(content) {
        let before = normalize_value(strip_bold(&caps[2]).trim());
        let after = normalize_value(strip_bold(&caps[3]).trim());
        let label = clean_label(strip_bold(&caps[1]).trim(), &before, &after);
        if char_len(&label) < MAX_LABEL_CHARS && values_fit(&before, &after) {
            pairs.push(BeforeAfter {
                label,
                before,
                after,
            });
        }
    }

    for caps in BOLD_ARROW.captures_iter(content) {
        let before = normalize_value(caps[1].trim());
        let after = normalize_value(caps[2].trim());
        if values_fit(&before, &after) {
            pairs.push(BeforeAfter {
                label: infer_label(&before, &after).to_string(),
                before,
                after,
            });
        }
    }

    if pairs.len() < options.min_before_after {
        return None;
    }
    pairs.truncate(options.max_before_after);
    Some(pairs)
}
