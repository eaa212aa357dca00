//! Character encoding detection for article files.
//!
//! Articles are normally UTF-8, but files exported from older Japanese
//! editors may carry a BOM, be UTF-16, or be Shift_JIS. Everything is
//! decoded to a UTF-8 `String` before analysis.

use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};

/// Detect the encoding of article bytes.
///
/// Checks in order:
/// 1. A UTF-8 or UTF-16 byte order mark
/// 2. Valid UTF-8
/// 3. Falls back to Shift_JIS
#[must_use]
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    SHIFT_JIS
}

/// Decode article bytes to UTF-8, stripping any BOM.
///
/// Invalid sequences are replaced with � rather than causing errors.
///
/// # Examples
///
/// ```
/// use article_insight::encoding::decode_article;
///
/// let bytes = b"\xEF\xBB\xBF# Title";
/// assert_eq!(decode_article(bytes), "# Title");
/// ```
#[must_use]
pub fn decode_article(bytes: &[u8]) -> String {
    let encoding = detect_encoding(bytes);

    // `decode` sniffs and removes the BOM itself.
    let (decoded, _encoding_used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::debug!(encoding = encoding.name(), "article contained undecodable bytes");
    }
    decoded.into_owned()
}
