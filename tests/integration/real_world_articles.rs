//! Full articles of the kinds the tool is used on.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use article_insight::{parse, BeforeAfter, CellValue};

use super::read_fixture;

#[test]
fn test_comparison_article_every_structure() {
    let article = parse(&read_fixture("tools_comparison.md"));

    assert_eq!(article.title, "【2025年版】ChatGPT vs Claude 徹底比較");
    assert_eq!(
        article.subtitle,
        "二つのAIアシスタントを一か月使い比べた結果をまとめました。"
    );
    assert_eq!(article.hashtags, vec!["AI", "ChatGPT", "Claude"]);
    assert!(article.is_comparison);
    assert!(!article.is_news);
    assert!(!article.is_tutorial);

    let table = article.comparison_data.as_ref().expect("table expected");
    assert_eq!(table.title, "料金比較");
    assert_eq!(table.headers, vec!["ChatGPT", "Claude"]);
    assert_eq!(table.rows.len(), 4);
    assert_eq!(
        table.rows[1].values,
        vec![CellValue::Text("20ドル".into()), CellValue::Text("20ドル".into())]
    );
    assert_eq!(
        table.rows[2].values,
        vec![CellValue::Bool(true), CellValue::Bool(false)]
    );

    let proscons = article.proscons.as_ref().expect("proscons expected");
    assert_eq!(proscons.title, "メリット");
    assert_eq!(proscons.pros.len(), 3);
    assert_eq!(proscons.cons[1], "最新情報には弱いことがある");

    let stats = article.stats.as_ref().expect("stats expected");
    let values: Vec<&str> = stats.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(values, vec!["2025年", "1,200件", "40時間", "85%"]);

    let changes = article.before_after.as_ref().expect("before/after expected");
    assert_eq!(
        changes[1],
        BeforeAfter {
            label: "確認作業".into(),
            before: "30+個".into(),
            after: "5個".into(),
        }
    );
    assert_eq!(changes.len(), 3);

    assert_eq!(
        article.suggested_templates.thumbnail_ids(),
        vec!["comparison", "dark-mode", "gradient-center", "tech-grid"]
    );
    assert_eq!(
        article.suggested_templates.infographic_ids(),
        vec!["comparison-table", "pros-cons", "stats", "bar-chart"]
    );
}

#[test]
fn test_tutorial_article_without_structures() {
    let article = parse(&read_fixture("notion_tutorial.md"));

    assert_eq!(article.title, "Notionでタスク管理を始める方法");
    assert_eq!(
        article.subtitle,
        "Notionを使ったタスク管理の手順を、初心者向けに順番に解説します。"
    );
    assert_eq!(article.hashtags, vec!["Notion", "タスク管理", "生産性"]);
    assert!(article.is_tutorial);

    assert!(article.comparison_data.is_none());
    assert!(article.proscons.is_none());
    assert!(article.stats.is_none());
    assert!(article.before_after.is_none());

    assert_eq!(
        article.suggested_templates.thumbnail_ids(),
        vec!["tutorial", "step-display", "list-style", "tech-grid"]
    );
    assert!(article.suggested_templates.infographics.is_empty());
}

#[test]
fn test_fixture_json_round_trips() {
    let article = parse(&read_fixture("tools_comparison.md"));
    let json = serde_json::to_string(&article).expect("serializes");
    let back: article_insight::ParsedArticle = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, article);
}
