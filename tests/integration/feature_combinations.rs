//! Thresholds changed together against one realistic article.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use article_insight::{parse_with_options, Options};

use super::read_fixture;

#[test]
fn test_tighter_caps_shrink_lists_and_drop_bar_chart() {
    let options = Options {
        max_table_rows: 2,
        max_list_items: 2,
        max_stats: 3,
        ..Options::default()
    };
    let article = parse_with_options(&read_fixture("tools_comparison.md"), &options);

    assert_eq!(article.comparison_data.expect("table").rows.len(), 2);
    let proscons = article.proscons.expect("proscons");
    assert_eq!(proscons.pros.len(), 2);
    assert_eq!(proscons.cons.len(), 2);
    assert_eq!(article.stats.expect("stats").len(), 3);

    // Two rows and two list items no longer earn their infographics.
    assert_eq!(article.suggested_templates.infographic_ids(), vec!["stats"]);
}

#[test]
fn test_raised_minimums_remove_structures() {
    let options = Options {
        min_list_items: 4,
        min_before_after: 4,
        min_stats: 5,
        ..Options::default()
    };
    let article = parse_with_options(&read_fixture("tools_comparison.md"), &options);

    assert!(article.proscons.is_none());
    assert!(article.before_after.is_none());
    assert!(article.stats.is_none());
    assert_eq!(
        article.suggested_templates.infographic_ids(),
        vec!["comparison-table"]
    );
}

#[test]
fn test_stat_range_and_item_length_bounds() {
    let options = Options {
        min_stat_value: 100,
        max_stat_value: 10_000,
        max_list_item_chars: 12,
        ..Options::default()
    };
    let article = parse_with_options(&read_fixture("tools_comparison.md"), &options);

    // Only 2025年 and 1,200件 fall inside 100..=10000.
    assert!(article.stats.is_none());
    // "コード生成の精度が高い" (11 chars) is the only pros item under 12.
    assert!(article.proscons.is_none());
}
