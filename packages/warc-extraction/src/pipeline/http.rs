//! HTTP response payload handling.
//!
//! A WARC response record's payload is the captured HTTP message: status
//! line, header fields, then the entity body. The head is parsed with
//! `httparse`; a payload whose head cannot be parsed yields `None` and the
//! record degrades to "nothing extractable" rather than failing the pass.

use encoding_rs::Encoding;

const MAX_HEADERS: usize = 64;

/// The decoded head and raw body of one captured HTTP response.
#[derive(Debug)]
pub struct HttpPayload<'a> {
    /// Header fields in wire order
    headers: Vec<(String, String)>,

    /// Entity body bytes
    pub body: &'a [u8],
}

impl HttpPayload<'_> {
    /// Case-insensitive header lookup; first match wins.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(field, _)| field.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The declared `Content-Type`, if any.
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }
}

/// Split a response payload into head and body.
///
/// Returns `None` for truncated or malformed heads.
pub fn parse_response(payload: &[u8]) -> Option<HttpPayload<'_>> {
    let mut header_buf = [httparse::EMPTY_HEADER; MAX_HEADERS];
    let mut response = httparse::Response::new(&mut header_buf);
    match response.parse(payload) {
        Ok(httparse::Status::Complete(offset)) => {
            let headers = response
                .headers
                .iter()
                .map(|h| {
                    (
                        h.name.to_string(),
                        String::from_utf8_lossy(h.value).into_owned(),
                    )
                })
                .collect();
            Some(HttpPayload {
                headers,
                body: &payload[offset..],
            })
        }
        Ok(httparse::Status::Partial) | Err(_) => None,
    }
}

/// Decode body bytes to text, honoring the content type's `charset`
/// parameter when one is declared and recognized. Falls back to lossy UTF-8.
pub fn decode_body(body: &[u8], content_type: &str) -> String {
    let encoding = charset_label(content_type)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(encoding_rs::UTF_8);
    let (text, _, _) = encoding.decode(body);
    text.into_owned()
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        if key.trim().eq_ignore_ascii_case("charset") {
            Some(value.trim().trim_matches('"'))
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &[u8] =
        b"HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\nServer: nginx\r\n\r\n<html></html>";

    #[test]
    fn splits_head_and_body() {
        let payload = parse_response(RESPONSE).unwrap();
        assert_eq!(payload.body, b"<html></html>");
        assert_eq!(payload.header("Server"), Some("nginx"));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let payload = parse_response(RESPONSE).unwrap();
        assert_eq!(
            payload.header("content-type"),
            Some("text/html; charset=utf-8")
        );
        assert_eq!(
            payload.content_type(),
            Some("text/html; charset=utf-8")
        );
    }

    #[test]
    fn missing_header_is_none() {
        let payload = parse_response(RESPONSE).unwrap();
        assert_eq!(payload.header("Content-Encoding"), None);
    }

    #[test]
    fn garbage_payload_is_none() {
        assert!(parse_response(b"not an http message at all").is_none());
        assert!(parse_response(b"").is_none());
    }

    #[test]
    fn truncated_head_is_none() {
        assert!(parse_response(b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n").is_none());
    }

    #[test]
    fn decodes_declared_charset() {
        // "caf\xe9" is latin-1 for "café"
        let text = decode_body(b"caf\xe9", "text/html; charset=iso-8859-1");
        assert_eq!(text, "café");
    }

    #[test]
    fn unknown_charset_falls_back_to_utf8() {
        let text = decode_body("café".as_bytes(), "text/html; charset=klingon");
        assert_eq!(text, "café");
    }

    #[test]
    fn charset_label_parsing() {
        assert_eq!(
            charset_label("text/html; charset=utf-8"),
            Some("utf-8")
        );
        assert_eq!(
            charset_label("text/html; CHARSET=\"ISO-8859-1\""),
            Some("ISO-8859-1")
        );
        assert_eq!(charset_label("text/html"), None);
    }
}
