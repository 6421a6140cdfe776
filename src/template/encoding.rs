// Percent-encoding of expanded values

use std::borrow::Cow;

/// RFC 6570 reserved delimiters (gen-delims and sub-delims of RFC 3986)
pub const RESERVED_DELIMITERS: &str = ":/?#[]@!$&'()*+,;=";

/// Percent-encode everything except RFC 3986 unreserved characters
pub fn encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Encode a value, keeping reserved delimiters literal when `allow_reserved` is set
pub fn encode_value(value: &str, allow_reserved: bool) -> String {
    let encoded = encode(value);
    if allow_reserved {
        decode_reserved(&encoded)
    } else {
        encoded.into_owned()
    }
}

/// Undo percent-encoding of reserved delimiters only. Other triplets,
/// including `%25`, are left untouched.
pub fn decode_reserved(encoded: &str) -> String {
    let bytes = encoded.as_bytes();
    let mut out = String::with_capacity(encoded.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let Some(ch) = reserved_from_hex(bytes[i + 1], bytes[i + 2]) {
                out.push(ch);
                i += 3;
                continue;
            }
        }
        // Find the end of this char so multibyte text is copied intact
        let ch_len = encoded[i..].chars().next().map_or(1, char::len_utf8);
        out.push_str(&encoded[i..i + ch_len]);
        i += ch_len;
    }

    out
}

fn reserved_from_hex(hi: u8, lo: u8) -> Option<char> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    let ch = char::from_u32(hi * 16 + lo)?;
    RESERVED_DELIMITERS.contains(ch).then_some(ch)
}
