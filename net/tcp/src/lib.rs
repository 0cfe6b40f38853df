//! net_tcp — 標準ライブラリの TCP ソケットで HTTP GET を行うネットワーク層
//!
//! 役割
//! - `std::net::TcpStream` で `host:port` に接続し、`iwashi_core` のリクエスト書き出しと
//!   レスポンス読み取りをつなぐ“薄いラッパー”を提供します。
//!
//! モジュール
//! - `http`: GET 1 回ぶんの「URL 解釈 → TCP 接続 → 書き込み → 読み込み」を行うクライアント。
//!   - 文字列の組み立て・分解は `iwashi_core::http` に委ね、ここでは接続の確立に専念します。
//!
//! 使い方（例）
//! ```ignore
//! let res = net_tcp::get("http://example.com/index.html")?;
//! println!("{}", res.status_code());
//! ```

pub mod http; // HTTP クライアント（GET の I/O を担当）

pub use http::{get, HttpClient};
