//! Byte-to-text decoding for XML input
//!
//! The encoding is taken from a byte order mark when present, then from the
//! `encoding` pseudo-attribute of the XML declaration, and defaults to UTF-8.

use super::ParseError;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};
use tracing::debug;

/// Longest prefix searched for the XML declaration
const DECLARATION_WINDOW: usize = 1024;

/// Decode raw file contents into text
pub fn decode_document(bytes: &[u8]) -> Result<String, ParseError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        debug!(encoding = encoding.name(), "encoding from byte order mark");
        return decode_with(encoding, &bytes[bom_len..]);
    }

    // UTF-16 without a BOM still starts with "<?" in that encoding
    if bytes.starts_with(&[0x00, b'<', 0x00, b'?']) {
        return decode_with(UTF_16BE, bytes);
    }
    if bytes.starts_with(&[b'<', 0x00, b'?', 0x00]) {
        return decode_with(UTF_16LE, bytes);
    }

    let encoding = match declared_label(bytes) {
        Some(label) => {
            let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(|| {
                ParseError::Syntax(format!("Unsupported encoding: {}", label))
            })?;
            // The declaration was readable as ASCII, so a UTF-16 label is wrong
            if encoding == UTF_16LE || encoding == UTF_16BE {
                UTF_8
            } else {
                encoding
            }
        }
        None => UTF_8,
    };

    debug!(encoding = encoding.name(), "encoding from declaration");
    decode_with(encoding, bytes)
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> Result<String, ParseError> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or_else(|| {
            ParseError::Syntax(format!("Input is not valid {}", encoding.name()))
        })
}

/// Value of `encoding="..."` in a leading `<?xml ...?>` declaration
fn declared_label(bytes: &[u8]) -> Option<String> {
    if !bytes.starts_with(b"<?xml") {
        return None;
    }

    let window = &bytes[..bytes.len().min(DECLARATION_WINDOW)];
    let end = window.windows(2).position(|w| w == b"?>")?;
    let declaration = std::str::from_utf8(&window[..end]).ok()?;

    let rest = &declaration[declaration.find("encoding")? + "encoding".len()..];
    let rest = rest.trim_start().strip_prefix('=')?.trim_start();
    let quote = rest.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    let value = &rest[1..];
    let close = value.find(quote)?;

    Some(value[..close].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin1_document() -> Vec<u8> {
        let mut bytes = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?><a><b>caf".to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(b"</b></a>");
        bytes
    }

    fn utf16le(text: &str, bom: bool) -> Vec<u8> {
        let mut bytes = if bom { vec![0xFF, 0xFE] } else { Vec::new() };
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_plain_utf8() {
        assert_eq!(decode_document(b"<a/>").unwrap(), "<a/>");
    }

    #[test]
    fn test_utf8_bom_is_stripped() {
        let text = decode_document(b"\xEF\xBB\xBF<a/>").unwrap();
        assert_eq!(text, "<a/>");
    }

    #[test]
    fn test_latin1_declaration() {
        let text = decode_document(&latin1_document()).unwrap();
        assert!(text.ends_with("<a><b>caf\u{e9}</b></a>"));
    }

    #[test]
    fn test_single_quoted_declaration() {
        let bytes = b"<?xml version='1.0' encoding = 'latin1'?><a>\xE9</a>";
        let text = decode_document(bytes).unwrap();
        assert!(text.ends_with("<a>\u{e9}</a>"));
    }

    #[test]
    fn test_utf16_with_bom() {
        let text = decode_document(&utf16le("<a><b/></a>", true)).unwrap();
        assert_eq!(text, "<a><b/></a>");
    }

    #[test]
    fn test_utf16_without_bom() {
        let source = "<?xml version=\"1.0\" encoding=\"UTF-16\"?><a/>";
        let text = decode_document(&utf16le(source, false)).unwrap();
        assert_eq!(text, source);
    }

    #[test]
    fn test_invalid_utf8_is_syntax_error() {
        let result = decode_document(b"<a>\xFF</a>");
        assert!(matches!(result, Err(ParseError::Syntax(_))));
    }

    #[test]
    fn test_unknown_encoding_is_syntax_error() {
        let result = decode_document(b"<?xml version=\"1.0\" encoding=\"x-nope\"?><a/>");
        assert!(matches!(result, Err(ParseError::Syntax(_))));
    }

    #[test]
    fn test_declared_label() {
        assert_eq!(
            declared_label(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>"),
            Some("UTF-8".to_string())
        );
        assert_eq!(declared_label(b"<?xml version=\"1.0\"?><a/>"), None);
        assert_eq!(declared_label(b"<a/>"), None);
    }
}
