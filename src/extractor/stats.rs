//! Number-with-unit statistics.

use crate::patterns::STAT_TOKEN;
use crate::result::Stat;
use crate::Options;

/// Display colors assigned in extraction order.
pub const STAT_COLORS: [&str; 6] = [
    "#3b82f6", "#22c55e", "#f97316", "#a855f7", "#22d3ee", "#2563eb",
];

/// Unit substrings and the label each implies. First match wins.
const UNIT_LABELS: &[(&[&str], &str)] = &[
    (&["件"], "実績数"),
    (&["万円", "円"], "金額"),
    (&["年", "ヶ月"], "期間"),
    (&["%"], "割合"),
    (&["GB", "TB"], "容量"),
    (&["時間"], "時間"),
    (&["倍"], "倍率"),
];

const DEFAULT_STAT_LABEL: &str = "指標";

/// Label implied by the unit in a matched token.
#[must_use]
pub fn label_for(token: &str) -> &'static str {
    UNIT_LABELS
        .iter()
        .find(|(units, _)| units.iter().any(|u| token.contains(u)))
        .map_or(DEFAULT_STAT_LABEL, |&(_, label)| label)
}

/// Unique number-with-unit tokens in order of first appearance, filtered to a
/// plausible numeric range. `None` unless at least `min_stats` survive.
#[must_use]
pub fn extract_stats(content: &str, options: &Options) -> Option<Vec<Stat>> {
    let mut unique: Vec<&str> = Vec::new();
    for token in STAT_TOKEN.find_iter(content).map(|m| m.as_str()) {
        if !unique.contains(&token) {
            unique.push(token);
        }
    }

    let accepted: Vec<&str> = unique
        .into_iter()
        .filter(|token| {
            numeric_value(token)
                .is_some_and(|n| (options.min_stat_value..=options.max_stat_value).contains(&n))
        })
        .collect();

    if accepted.len() < options.min_stats {
        return None;
    }

    Some(
        accepted
            .into_iter()
            .take(options.max_stats)
            .enumerate()
            .map(|(i, token)| Stat {
                value: token.to_string(),
                label: label_for(token).to_string(),
                color: STAT_COLORS[i % STAT_COLORS.len()].to_string(),
            })
            .collect(),
    )
}

/// All ASCII digits of the token read as one number; `None` on overflow.
fn numeric_value(token: &str) -> Option<u64> {
    let digits: String = token.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}
