use article_insight::{parse, parse_bytes};

#[test]
fn utf8_bytes_match_string_parse() {
    let markdown = "# ChatGPT vs Claude 比較\n\n導入文です。\n\n#AI #比較\n";
    assert_eq!(parse_bytes(markdown.as_bytes()), parse(markdown));
}

#[test]
fn utf8_bom_does_not_hide_the_title() {
    let mut bytes = b"\xEF\xBB\xBF".to_vec();
    bytes.extend_from_slice("# 記事タイトル\n本文\n".as_bytes());
    let article = parse_bytes(&bytes);
    assert_eq!(article.title, "記事タイトル");
    assert_eq!(article.subtitle, "本文");
}

#[test]
fn utf16le_with_bom_is_decoded() {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "# 比較\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let article = parse_bytes(&bytes);
    assert_eq!(article.title, "比較");
    assert!(article.is_comparison);
}

#[test]
fn shift_jis_article_is_decoded() {
    // "# 記事\n" in Shift_JIS
    let article = parse_bytes(b"# \x8B\x4C\x8E\x96\n");
    assert_eq!(article.title, "記事");
}

#[test]
fn undecodable_bytes_do_not_panic() {
    let article = parse_bytes(&[0xFF, 0x00, 0x80, 0xFE, 0x0A, 0x23]);
    assert!(!article.title.is_empty());
}
