use super::IngestError;
use encoding_rs::{Encoding, UTF_8};

/// UTF-8 byte order mark, stripped before the first decode attempt.
const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Windows code page number for Shift-JIS.
const SHIFT_JIS_CODE_PAGE: u16 = 932;

/// Decodes upload bytes by trying UTF-8 with BOM, cp932, then plain UTF-8.
/// The first strict decode wins.
pub(super) fn decode(bytes: &[u8]) -> Result<String, IngestError> {
    decode_utf8_sig(bytes)
        .or_else(|| decode_strict(shift_jis(), bytes))
        .or_else(|| decode_strict(UTF_8, bytes))
        .ok_or(IngestError::Encoding)
}

/// UTF-8 with an optional leading byte order mark.
fn decode_utf8_sig(bytes: &[u8]) -> Option<String> {
    let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    decode_strict(UTF_8, body)
}

fn shift_jis() -> &'static Encoding {
    codepage::to_encoding(SHIFT_JIS_CODE_PAGE).expect("Hardcode code page")
}

/// Strict single-encoding decode. Returns None on any malformed byte
/// sequence; a replacement-character decode never counts as success.
fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        assert_eq!(decode(b"value-Y,value-X").unwrap(), "value-Y,value-X");
    }

    #[test]
    fn test_utf8_with_bom() {
        assert_eq!(decode(b"\xef\xbb\xbf1.5,0.2").unwrap(), "1.5,0.2");
    }

    #[test]
    fn test_shift_jis() {
        let text = "データY,データX";
        let bytes = encoding_rs::SHIFT_JIS.encode(text).0;
        assert_eq!(decode(&bytes).unwrap(), text);
    }

    #[test]
    fn test_undecodable() {
        assert_eq!(decode(b"\xff\xff").unwrap_err(), IngestError::Encoding);
    }

    #[test]
    fn test_lossy_decode_is_not_success() {
        // Truncated Shift-JIS lead byte: cp932 would only decode this by
        // replacement, which must fail the attempt.
        let bytes = b"1.5,0.2\x81";
        assert_eq!(decode(bytes).unwrap_err(), IngestError::Encoding);
    }
}
