//! iwashi_core::header — 生のヘッダテキストに重ねる“後付け”の構造化ビュー
//!
//! `http::read_response` はヘッダを分解せず、受信した行をそのまま連結した文字列で返します。
//! 名前で値を引きたいときだけ、このモジュールで `name: value` の組に分けます。
//! 折り返し（obs-fold）や重複ヘッダの結合は行いません。

/// 単一HTTPヘッダを表す(name, value)ペア。
/// - 例: `("Content-Length", "42")`
#[derive(Debug, Clone, PartialEq)]
pub struct Header {
    /// ヘッダ名（受信したままの大文字小文字）
    name: String,
    /// ヘッダ値（前後の空白はトリムして格納）
    value: String,
}

impl Header {
    pub fn new(name: String, value: String) -> Self {
        Self { name, value }
    }

    pub fn name(&self) -> String {
        self.name.clone()
    }

    pub fn value(&self) -> String {
        self.value.clone()
    }
}

/// CRLF（または LF）区切りの生ヘッダを `Header` の並びにします。
/// `:` を含まない行は読み飛ばします。
pub fn parse_headers(raw: &str) -> Vec<Header> {
    raw.lines()
        .filter_map(|line| {
            let (name, value) = line.split_once(':')?;
            Some(Header::new(
                String::from(name.trim()),
                String::from(value.trim()),
            ))
        })
        .collect()
}

/// 名前で最初に一致したヘッダの値。名前の比較は大文字小文字を区別しません。
pub fn find_header_value(raw: &str, name: &str) -> Option<String> {
    parse_headers(raw)
        .into_iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(parse_headers("").is_empty());
    }

    #[test]
    fn test_one_header() {
        let headers = parse_headers("Date:xx xx xx\r\n");
        assert_eq!(
            headers,
            vec![Header::new("Date".to_string(), "xx xx xx".to_string())]
        );
    }

    #[test]
    fn test_two_headers_with_white_space() {
        let raw = "Date: xx xx xx\r\nContent-Length: 42\r\n";
        let headers = parse_headers(raw);
        assert_eq!(headers.len(), 2);
        assert_eq!(headers[1].name(), "Content-Length");
        assert_eq!(headers[1].value(), "42");
    }

    #[test]
    fn test_value_with_colon() {
        let headers = parse_headers("Location: http://example.com:8080/\r\n");
        assert_eq!(headers[0].value(), "http://example.com:8080/");
    }

    #[test]
    fn test_line_without_colon_is_skipped() {
        let headers = parse_headers("garbage\r\nServer: iwashi\r\n");
        assert_eq!(
            headers,
            vec![Header::new("Server".to_string(), "iwashi".to_string())]
        );
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let raw = "Content-Type: text/html\r\nX-Count: 1\r\nx-count: 2\r\n";
        assert_eq!(
            find_header_value(raw, "content-type"),
            Some("text/html".to_string())
        );
        assert_eq!(find_header_value(raw, "X-COUNT"), Some("1".to_string()));
        assert_eq!(find_header_value(raw, "Date"), None);
    }
}
