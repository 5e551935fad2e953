//! Data URI Handling
//!
//! Staged uploads are held in memory as data URIs so the same value can be
//! dropped straight into an `img` element and later turned back into bytes
//! for the multipart upload.

/// Build a data URI from raw bytes and their declared media type
pub fn encode(mime: &str, data: &[u8]) -> String {
    format!("data:{};base64,{}", mime, base64_encode(data))
}

/// Split a data URI back into its media type and raw bytes
pub fn decode(uri: &str) -> Result<(String, Vec<u8>), String> {
    let rest = uri
        .strip_prefix("data:")
        .ok_or_else(|| "not a data URI".to_string())?;

    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| "data URI has no base64 payload".to_string())?;

    let bytes = base64_decode(payload)?;
    Ok((mime.to_string(), bytes))
}

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Simple base64 encoding for binary data
fn base64_encode(data: &[u8]) -> String {
    let mut result = String::new();
    let mut i = 0;

    while i < data.len() {
        let b0 = data[i] as usize;
        let b1 = if i + 1 < data.len() { data[i + 1] as usize } else { 0 };
        let b2 = if i + 2 < data.len() { data[i + 2] as usize } else { 0 };

        result.push(ALPHABET[b0 >> 2] as char);
        result.push(ALPHABET[((b0 & 0x03) << 4) | (b1 >> 4)] as char);

        if i + 1 < data.len() {
            result.push(ALPHABET[((b1 & 0x0f) << 2) | (b2 >> 6)] as char);
        } else {
            result.push('=');
        }

        if i + 2 < data.len() {
            result.push(ALPHABET[b2 & 0x3f] as char);
        } else {
            result.push('=');
        }

        i += 3;
    }

    result
}

/// Base64 decoding, the inverse of `base64_encode`
fn base64_decode(payload: &str) -> Result<Vec<u8>, String> {
    fn value(c: u8) -> Result<u32, String> {
        match c {
            b'A'..=b'Z' => Ok((c - b'A') as u32),
            b'a'..=b'z' => Ok((c - b'a') as u32 + 26),
            b'0'..=b'9' => Ok((c - b'0') as u32 + 52),
            b'+' => Ok(62),
            b'/' => Ok(63),
            _ => Err(format!("invalid base64 character: {:?}", c as char)),
        }
    }

    let trimmed = payload.trim_end_matches('=');
    let mut result = Vec::with_capacity(trimmed.len() * 3 / 4);
    let mut buffer = 0u32;
    let mut bits = 0u32;

    for &c in trimmed.as_bytes() {
        buffer = (buffer << 6) | value(c)?;
        bits += 6;

        if bits >= 8 {
            bits -= 8;
            result.push((buffer >> bits) as u8);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_known_vectors() {
        // RFC 4648 examples
        assert_eq!(base64_encode(b"M"), "TQ==");
        assert_eq!(base64_encode(b"Ma"), "TWE=");
        assert_eq!(base64_encode(b"Man"), "TWFu");
        assert_eq!(
            encode("image/png", b"Man"),
            "data:image/png;base64,TWFu"
        );
    }

    #[test]
    fn decodes_known_vectors() {
        assert_eq!(base64_decode("TQ==").unwrap(), b"M");
        assert_eq!(base64_decode("TWE=").unwrap(), b"Ma");
        assert_eq!(base64_decode("TWFu").unwrap(), b"Man");
    }

    #[test]
    fn decode_recovers_mime_and_bytes() {
        let (mime, bytes) = decode("data:image/jpeg;base64,TWFu").unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, b"Man");
    }

    #[test]
    fn decode_rejects_plain_urls() {
        assert!(decode("http://localhost:5000/predict").is_err());
    }

    #[test]
    fn decode_rejects_unencoded_payloads() {
        // Percent-encoded data URIs are legal in browsers but never produced
        // by the intake path, so they are rejected here.
        assert!(decode("data:text/plain,hello").is_err());
    }

    #[test]
    fn decode_rejects_invalid_base64() {
        assert!(base64_decode("TW$u").is_err());
    }

    #[test]
    fn empty_payload_is_empty_bytes() {
        let (_, bytes) = decode("data:image/png;base64,").unwrap();
        assert!(bytes.is_empty());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn round_trip_in_browser() {
        let bytes: Vec<u8> = (0u8..=255).collect();
        let uri = encode("image/png", &bytes);
        let (mime, decoded) = decode(&uri).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(decoded, bytes);
    }
}
