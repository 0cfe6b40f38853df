//! iwashi_core::error — GET 1 回ぶんの処理で起こりうる失敗の分類
//!
//! 目的（概要）
//! - URL の解釈・送信・受信のどこで失敗したかを、1つの列挙体（enum）で表します。
//! - 失敗はその場で回復せず、`Result<T, Error>` の `Err(...)` として呼び出し元へ返します。
//!   エラーをどう表示するかは呼び出し側（CLI など）が決めます。
//!
//! 用語の橋渡し（TS / Python）
//! - Rustの `enum` は TS のタグ付きユニオンに近く、各バリアントがデータを運べます。
//! - `#[derive(thiserror::Error)]` は `Display` と `std::error::Error` の実装を自動生成します。
//!   `#[source]` を付けたフィールドは「原因」として `source()` から辿れます（Python の `raise ... from e`）。
//!
//! 使い方（例）
//! ```ignore
//! use iwashi_core::error::Error;
//!
//! fn check(scheme: &str) -> Result<(), Error> {
//!     if scheme != "http" {
//!         return Err(Error::UnsupportedScheme(scheme.to_string()));
//!     }
//!     Ok(())
//! }
//! ```

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `://` がない、ホストが空、ポートが数値でない など URL として読めない
    #[error("Malformed URL: {0}")]
    MalformedUrl(String),

    /// スキームはあるが `http` ではない（`https` など）
    #[error("Unsupported protocol: {0}")]
    UnsupportedScheme(String),

    /// TCP 接続、またはリクエストの書き込みに失敗
    #[error("Connection error: {0}")]
    Connection(#[source] io::Error),

    /// レスポンスを最後まで読み切る前に読み込みが失敗した（切断を含む）
    #[error("Malformed response: {0}")]
    MalformedResponse(#[source] io::Error),

    /// ステータス行が既知の成功行と一致しない。診断用に生の行を持ちます。
    #[error("Unknown status: {0:?}")]
    UnknownStatus(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_messages() {
        let err = Error::MalformedUrl("example.com".to_string());
        assert_eq!(err.to_string(), "Malformed URL: example.com");

        let err = Error::UnsupportedScheme("https".to_string());
        assert_eq!(err.to_string(), "Unsupported protocol: https");

        let err = Error::UnknownStatus("HTTP/1.1 404 Not Found\r\n".to_string());
        assert_eq!(
            err.to_string(),
            "Unknown status: \"HTTP/1.1 404 Not Found\\r\\n\""
        );
    }

    #[test]
    fn test_io_source_is_kept() {
        let err = Error::MalformedResponse(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(err.source().is_some());

        let err = Error::Connection(io::Error::from(io::ErrorKind::ConnectionRefused));
        assert!(err.to_string().starts_with("Connection error: "));
        assert!(err.source().is_some());
    }
}
