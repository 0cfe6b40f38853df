//! net_tcp::http — TCP 越しに HTTP/1.0 の GET を 1 回だけ投げるクライアント
//!
//! 流れ
//! 1. `Url::parse` で URL を分解（`http` 以外や不正な URL はここで失敗し、接続は作りません）
//! 2. `host:port` に TCP 接続（DNS 解決も `TcpStream::connect` に任せます）
//! 3. `iwashi_core::http::write_request` でリクエストを送信
//! 4. `iwashi_core::http::read_response` で、相手が切断するまで受信・解析
//!
//! 接続はこの呼び出しの中だけで使い、戻るときに閉じます。ボディはメモリ上に読み込み済みなので、
//! 返した `HttpResponse` は接続に依存しません。
//!
//! 注意
//! - TLS、リダイレクト、chunked、keep-alive、タイムアウトは未対応です。

use std::io::BufReader;
use std::net::TcpStream;

use iwashi_core::error::Error;
use iwashi_core::http::{read_response, write_request, HttpResponse};
use iwashi_core::url::Url;
use log::debug;

/// 最小限のHTTPクライアント。状態は持たないので空構造体です。
/// スレッドごとに別々の `get` を呼んでも、共有するものはありません。
#[derive(Debug, Default)]
pub struct HttpClient {}

impl HttpClient {
    /// クライアントを生成します。コネクションはこの時点では作りません。
    pub fn new() -> Self {
        Self {}
    }

    /// `url` に GET を送り、レスポンスを最後まで読み込んで返します。
    ///
    /// 戻り値
    /// - 成功: `Ok(HttpResponse)`
    /// - 失敗: URL 不正は `MalformedUrl` / `UnsupportedScheme`、接続・送信失敗は `Connection`、
    ///   受信失敗は `MalformedResponse`、200 以外は `UnknownStatus`
    pub fn get(&self, url: &str) -> Result<HttpResponse, Error> {
        let url = Url::new(url.to_string()).parse()?;

        let address = url.socket_address();
        let mut stream = TcpStream::connect(&address).map_err(Error::Connection)?;
        debug!("connected to {}", address);

        write_request(&mut stream, &url)?;
        read_response(BufReader::new(&mut stream))
    }
}

/// `HttpClient::new().get(url)` の短縮形。
pub fn get(url: &str) -> Result<HttpResponse, Error> {
    HttpClient::new().get(url)
}
