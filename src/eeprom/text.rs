//! Fixed-size text fields.
//!
//! Text is stored NUL-padded in a fixed buffer. Oversized values are clamped
//! silently, never rejected.

/// Character encoding of a family's text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// One byte per character; anything outside ASCII is stored as `?`.
    Ascii,
    /// UTF-8, clamped on a character boundary.
    Utf8,
}

/// Clamp `value` to what a `max_len` byte field can hold.
///
/// The result is exactly what [`decode_text`] returns after [`encode_text`]
/// into a buffer of that size, as long as `value` contains no NUL.
pub fn truncate_text(value: &str, max_len: usize, encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Ascii => value
            .chars()
            .map(|c| if c.is_ascii() { c } else { '?' })
            .take(max_len)
            .collect(),
        TextEncoding::Utf8 => {
            let mut end = value.len().min(max_len);
            while !value.is_char_boundary(end) {
                end -= 1;
            }
            value[..end].to_owned()
        }
    }
}

/// Write `value` into `buf`, truncating to the buffer length and zero-filling
/// the rest.
pub fn encode_text(value: &str, buf: &mut [u8], encoding: TextEncoding) {
    let text = truncate_text(value, buf.len(), encoding);
    let bytes = text.as_bytes();
    buf[..bytes.len()].copy_from_slice(bytes);
    buf[bytes.len()..].fill(0);
}

/// Read the text stored in `buf`, up to the first NUL or the whole buffer.
pub fn decode_text(buf: &[u8], encoding: TextEncoding) -> String {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    let raw = &buf[..end];
    match encoding {
        TextEncoding::Ascii => raw
            .iter()
            .map(|&b| if b.is_ascii() { b as char } else { '?' })
            .collect(),
        TextEncoding::Utf8 => String::from_utf8_lossy(raw).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_truncates_and_pads() {
        let mut buf = [0xAAu8; 8];
        encode_text("FT232R USB UART", &mut buf, TextEncoding::Ascii);
        assert_eq!(&buf, b"FT232R U");
        assert_eq!(decode_text(&buf, TextEncoding::Ascii), "FT232R U");

        encode_text("FT", &mut buf, TextEncoding::Ascii);
        assert_eq!(&buf, b"FT\0\0\0\0\0\0");
        assert_eq!(decode_text(&buf, TextEncoding::Ascii), "FT");
    }

    #[test]
    fn ascii_replaces_non_ascii() {
        let mut buf = [0u8; 16];
        encode_text("Grüße", &mut buf, TextEncoding::Ascii);
        assert_eq!(decode_text(&buf, TextEncoding::Ascii), "Gr??e");
        assert_eq!(decode_text(&[b'A', 0xC3, 0], TextEncoding::Ascii), "A?");
    }

    #[test]
    fn utf8_truncates_on_char_boundary() {
        let mut buf = [0u8; 4];
        // 'é' is two bytes, so only one fits after "ab".
        encode_text("abéé", &mut buf, TextEncoding::Utf8);
        assert_eq!(&buf, "abé".as_bytes());
        assert_eq!(decode_text(&buf, TextEncoding::Utf8), "abé");

        encode_text("aéé", &mut buf, TextEncoding::Utf8);
        assert_eq!(&buf, b"a\xC3\xA9\0");
        assert_eq!(truncate_text("aéé", 4, TextEncoding::Utf8), "aé");
    }

    #[test]
    fn decode_stops_at_first_nul() {
        assert_eq!(decode_text(b"FTDI\0junk", TextEncoding::Ascii), "FTDI");
        assert_eq!(decode_text(b"\0FTDI", TextEncoding::Utf8), "");
        assert_eq!(decode_text(b"FTDI", TextEncoding::Utf8), "FTDI");
    }
}
