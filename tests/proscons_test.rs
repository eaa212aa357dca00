use article_insight::parse;

const THREE_AND_THREE: &str = "\
# ツール紹介

## メリット

- 日本語の精度がとても高い
- 長い文章も一度に読み込める
- 無料プランでも十分に使える

## デメリット

- 混雑時は応答が遅くなる
- 画像生成には対応していない
- 最新情報の反映が遅れがち
";

#[test]
fn three_pros_and_three_cons_are_reported() {
    let article = parse(THREE_AND_THREE);
    let proscons = article.proscons.as_ref().expect("expected Some(proscons)");
    assert_eq!(proscons.title, "メリット");
    assert_eq!(proscons.pros.len(), 3);
    assert_eq!(proscons.cons.len(), 3);
    assert_eq!(proscons.pros[0], "日本語の精度がとても高い");
    assert_eq!(proscons.cons[2], "最新情報の反映が遅れがち");
    assert!(article.has_proscons());
}

#[test]
fn two_cons_are_not_enough() {
    let markdown = THREE_AND_THREE.replace("- 最新情報の反映が遅れがち\n", "");
    assert!(parse(&markdown).proscons.is_none());
}

#[test]
fn missing_cons_section_yields_nothing() {
    let markdown = "\
## 強み
- 一つ目の強みです
- 二つ目の強みです
- 三つ目の強みです
";
    assert!(parse(markdown).proscons.is_none());
}

#[test]
fn lists_are_truncated_to_five() {
    let markdown = "\
## 良い点
- 良い点その一です
- 良い点その二です
- 良い点その三です
- 良い点その四です
- 良い点その五です
- 良い点その六です
## 注意点
・注意点その一です
・注意点その二です
・注意点その三です
・注意点その四です
・注意点その五です
・注意点その六です
";
    let proscons = parse(markdown).proscons.expect("proscons expected");
    assert_eq!(proscons.title, "良い点");
    assert_eq!(proscons.pros.len(), 5);
    assert_eq!(proscons.cons.len(), 5);
    assert_eq!(proscons.pros[4], "良い点その五です");
}

#[test]
fn non_heading_pros_line_uses_default_title() {
    let markdown = "\
**メリットは以下の通り**
✓ 設定がとても簡単です
✓ 動作がとても軽快です
✓ 価格がとても手頃です
**弱みもあります**
▼ サポートが英語のみです
▼ 日本語資料が少ないです
▼ 連携先がまだ少ないです
";
    let proscons = parse(markdown).proscons.expect("proscons expected");
    assert_eq!(proscons.title, "メリット・デメリット");
    assert_eq!(proscons.cons[0], "サポートが英語のみです");
}

#[test]
fn combined_heading_counts_for_neither_side() {
    let markdown = "\
## メリット・デメリット
- 手軽に始められる点です
- 費用がかからない点です
- すぐ結果が出る点です
";
    assert!(parse(markdown).proscons.is_none());
}
