use std::fs;

use article_insight::overrides::InfographicOverride;
use article_insight::{Error, ImageData, OverrideStore};
use tempfile::TempDir;

#[test]
fn missing_sidecar_is_none() {
    let dir = TempDir::new().unwrap();
    let store = OverrideStore::new(dir.path());
    assert!(store.load("記事.md").unwrap().is_none());
}

#[test]
fn sidecar_is_loaded_by_article_stem() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("AIツール比較.json"),
        r#"{
            "thumbnail": { "title": "AIツール\n徹底比較", "subtitle": "2025年版" },
            "infographics": [
                { "type": "stats", "title": "実績",
                  "stats": [{ "value": "120件", "label": "導入" }, { "value": "85%", "label": "満足度" }] }
            ]
        }"#,
    )
    .unwrap();

    let store = OverrideStore::new(dir.path());
    let data = store.load("AIツール比較.md").unwrap().expect("override present");

    assert_eq!(data.thumbnail.title, "AIツール\n徹底比較");
    assert_eq!(data.thumbnail.subtitle.as_deref(), Some("2025年版"));
    assert!(data.thumbnail.character_image.is_none());
    match &data.infographics[0] {
        InfographicOverride::Stats { title, stats } => {
            assert_eq!(title, "実績");
            assert_eq!(stats.len(), 2);
            assert_eq!(stats[1].label, "満足度");
        }
        other => panic!("expected stats override, got {other:?}"),
    }
}

#[test]
fn infographics_default_to_empty() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), r#"{ "thumbnail": { "title": "A" } }"#).unwrap();

    let data = OverrideStore::new(dir.path()).load("a.md").unwrap().unwrap();
    assert!(data.infographics.is_empty());
}

#[test]
fn malformed_sidecar_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("broken.json"), "{ \"thumbnail\": ").unwrap();

    let err = OverrideStore::new(dir.path()).load("broken.md").unwrap_err();
    assert!(matches!(err, Error::Json { ref path, .. } if path.ends_with("broken.json")));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn unknown_infographic_type_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("x.json"),
        r#"{ "thumbnail": { "title": "X" }, "infographics": [{ "type": "radar" }] }"#,
    )
    .unwrap();

    let err = OverrideStore::new(dir.path()).load("x.md").unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn image_data_serializes_with_type_tags() {
    let data = ImageData {
        infographics: vec![InfographicOverride::BeforeAfter {
            title: "効果".to_string(),
            items: Vec::new(),
        }],
        ..ImageData::fallback("タイトル")
    };
    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["infographics"][0]["type"], "beforeAfter");
    assert_eq!(json["thumbnail"]["title"], "タイトル");
    assert!(json["thumbnail"].get("subtitle").is_none());
    assert!(json["thumbnail"].get("characterImage").is_none());
}
