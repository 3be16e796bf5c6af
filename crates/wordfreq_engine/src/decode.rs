use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use wordfreq_logging::wf_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedHtml {
    pub html: String,
    pub encoding_label: String,
    /// Some byte sequences were invalid and became U+FFFD.
    pub had_replacements: bool,
}

/// Decodes a response body to UTF-8.
///
/// Precedence: byte order mark, then the `charset` parameter of the
/// Content-Type header, then chardetng's guess. Never fails: malformed
/// sequences are replaced with U+FFFD.
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> DecodedHtml {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| {
            content_type
                .and_then(charset_param)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or_else(|| {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        });

    // `decode` strips a matching BOM itself.
    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        wf_warn!("Page is not valid {}; invalid bytes replaced", used.name());
    }
    DecodedHtml {
        html: text.into_owned(),
        encoding_label: used.name().to_string(),
        had_replacements: had_errors,
    }
}

fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if name.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches(&['"', '\''][..]))
        } else {
            None
        }
    })
}
