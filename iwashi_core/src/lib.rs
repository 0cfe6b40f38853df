//! iwashi_core — HTTP GET の“中身”だけを集めたライブラリ
//!
//! 目的（なにを入れる？）
//! - URL の分解、GET リクエストの組み立て、HTTP/1.x レスポンスの読み取り。
//! - ソケットは持ちません。`std::io::Write` / `std::io::BufRead` を受け取って読み書きするだけなので、
//!   TCP 以外（メモリ上のバッファなど）でもそのまま動きます。接続は `net_tcp` が担当します。
//!
//! 使い方（超ミニ例）
//! ```ignore
//! use iwashi_core::{http, url::Url};
//!
//! let url = Url::new("http://example.com/index.html".to_string()).parse()?;
//! http::write_request(&mut stream, &url)?;
//! let response = http::read_response(std::io::BufReader::new(&mut stream))?;
//! ```
//!
//! モジュール構成
//! - `error`: 共有の `Error` 型。
//! - `url`: URL のパース。
//! - `http`: リクエストの書き出し・レスポンスの読み取り。
//! - `header`: 生ヘッダを `name: value` に分ける後付けのビュー。
//!
//! メモ（設計指針）
//! - 失敗は `panic!` ではなく `Result` を返して上位に伝えます。

pub mod error;
pub mod header;
pub mod http;
pub mod url;
