//! iwashi_core::http — GET リクエストの書き出しと HTTP/1.x レスポンスの読み取り
//!
//! 目的（概要）
//! - `write_request`: `GET <path> HTTP/1.0` と `Host` ヘッダを CRLF 区切りで書き出します。
//! - `read_response`: ストリームを1行ずつ読み、ステータス行 → ヘッダ（空行まで）→ ボディ
//!   の順に `HttpResponse` へ詰めます。
//! - どちらもソケットを直接知りません。`Write` / `BufRead` を実装したものなら何でも渡せるので、
//!   テストではメモリ上のバッファ（`Cursor`）を使います。接続そのものは `net_tcp` の担当です。
//!
//! 用語の橋渡し（TS / Python）
//! - trait ≈ TSのinterface / Pythonのprotocol。`BufRead` は「行単位で読める」、`Write` は「書ける」。
//! - `map_err(Error::MalformedResponse)` は、下位の `io::Error` を自分の分類に包み直す書き方です。
//!
//! 入出力（このモジュール）
//! - 入力: `write_request(stream, &url)` / `read_response(stream)`
//! - 出力: `Result<(), Error>` / `Result<HttpResponse, Error>`
//!
//! 使い方（例）
//! ```ignore
//! use std::io::Cursor;
//! use iwashi_core::http::read_response;
//!
//! let raw = b"HTTP/1.1 200 OK\r\nContent-Type: text/html\r\n\r\n<p>hi</p>";
//! let res = read_response(Cursor::new(&raw[..]))?;
//! assert_eq!(res.status_code(), 200);
//! ```
//!
//! 注意（意図的に狭い実装）
//! - ステータス行は `"HTTP/1.0 200 OK\r\n"` と `"HTTP/1.1 200 OK\r\n"` の完全一致だけを認識します。
//!   `404` やその他の行は、文法的に正しくても `Error::UnknownStatus` です。
//! - `Content-Length` や chunked は解釈せず、相手が接続を閉じるまでをボディとして読みます。

use std::fmt;
use std::io;
use std::io::BufRead;
use std::io::Cursor;
use std::io::Read;
use std::io::Write;

use log::{debug, trace, warn};

use crate::error::Error;
use crate::header::{self, Header};
use crate::url::Url;

/// ボディを読み終えるまでの `content_length`。
pub const UNKNOWN_CONTENT_LENGTH: i64 = -1;

/// ヘッダとボディの境目になる空行。
const MANDATORY_EMPTY_LINE: &[u8] = b"\r\n";

/// 認識するステータス行と、そのステータスコード。
const KNOWN_STATUS_LINES: [(&[u8], u32); 2] = [
    (b"HTTP/1.0 200 OK\r\n", 200),
    (b"HTTP/1.1 200 OK\r\n", 200),
];

/// メモリ上に読み込み済みのレスポンス本文。
///
/// 接続とは独立しているので、`close()` は何もしません（drop しても同じです）。
#[derive(Debug, Default)]
pub struct Body {
    inner: Cursor<Vec<u8>>,
}

impl Body {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            inner: Cursor::new(bytes),
        }
    }

    /// 本文全体のバイト数（読み進めても変わりません）。
    pub fn len(&self) -> usize {
        self.inner.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn close(self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Body {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

/// GET 1 回ぶんの結果。
/// - `status_code`: 例 `200`
/// - `raw_headers`: 例 `"Content-Type: text/html\r\n"`（受信したままの行を連結。空行は含まない）
/// - `content_length`: ボディのバイト数（読み込み前は `UNKNOWN_CONTENT_LENGTH`）
/// - `body`: 本文
#[derive(Debug)]
pub struct HttpResponse {
    status_code: u32,
    raw_headers: String,
    content_length: i64,
    body: Body,
}

impl HttpResponse {
    fn new() -> Self {
        Self {
            status_code: 0,
            raw_headers: String::new(),
            content_length: UNKNOWN_CONTENT_LENGTH,
            body: Body::default(),
        }
    }

    pub fn status_code(&self) -> u32 {
        self.status_code
    }

    pub fn raw_headers(&self) -> &str {
        &self.raw_headers
    }

    pub fn content_length(&self) -> i64 {
        self.content_length
    }

    /// 生ヘッダを `Header` の並びに分けたもの（`header::parse_headers` に委譲）。
    pub fn headers(&self) -> Vec<Header> {
        header::parse_headers(&self.raw_headers)
    }

    /// 指定したヘッダ名の値。大文字小文字は区別しません。
    pub fn header_value(&self, name: &str) -> Option<String> {
        header::find_header_value(&self.raw_headers, name)
    }

    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    pub fn into_body(self) -> Body {
        self.body
    }
}

impl fmt::Display for HttpResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HTTP {} ({} header bytes, content length {})",
            self.status_code,
            self.raw_headers.len(),
            self.content_length
        )
    }
}

/// `GET <target> HTTP/1.0\r\nHost: <host>\r\n\r\n` をストリームに書き出します。
///
/// `<host>` にポートは含めません。最後の空行で「ヘッダ終わり・ボディなし」を伝えます。
/// 書き込みの失敗はすべて `Error::Connection` になります。
pub fn write_request<W: Write>(mut stream: W, url: &Url) -> Result<(), Error> {
    let target = url.request_target();

    let mut request = String::from("GET ");
    request.push_str(&target);
    request.push_str(" HTTP/1.0\r\n");

    request.push_str("Host: ");
    request.push_str(&url.host());
    request.push_str("\r\n");
    request.push_str("\r\n");

    debug!("GET {} (host {})", target, url.host());

    stream
        .write_all(request.as_bytes())
        .map_err(Error::Connection)?;
    stream.flush().map_err(Error::Connection)
}

/// ストリームを最後まで読み、`HttpResponse` を組み立てます。
///
/// 1. ステータス行を1行読み、既知の成功行と完全一致するか調べる
/// 2. `"\r\n"` だけの行が来るまでヘッダ行をそのまま連結する
/// 3. 残りを接続が閉じるまで読み、ボディにする
///
/// 行の途中で切断された場合や読み込みエラーは `Error::MalformedResponse` です。
pub fn read_response<R: BufRead>(mut stream: R) -> Result<HttpResponse, Error> {
    let mut response = HttpResponse::new();

    let status = read_line(&mut stream).map_err(Error::MalformedResponse)?;
    response.status_code = match status_code(&status) {
        Some(code) => code,
        None => {
            let line = String::from_utf8_lossy(&status).into_owned();
            warn!("unrecognized status line: {:?}", line);
            return Err(Error::UnknownStatus(line));
        }
    };
    debug!("status {}", response.status_code);

    loop {
        let line = read_line(&mut stream).map_err(Error::MalformedResponse)?;
        if line == MANDATORY_EMPTY_LINE {
            break;
        }

        // 分解はしない。受信した行をそのまま連結する
        let line = String::from_utf8(line).map_err(|e| {
            Error::MalformedResponse(io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        trace!("header line: {:?}", line);
        response.raw_headers.push_str(&line);
    }

    let mut body = Vec::new();
    stream
        .read_to_end(&mut body)
        .map_err(Error::MalformedResponse)?;
    trace!("read {} body bytes", body.len());

    response.content_length = body.len() as i64;
    response.body = Body::new(body);

    Ok(response)
}

fn status_code(line: &[u8]) -> Option<u32> {
    KNOWN_STATUS_LINES
        .iter()
        .find(|(known, _)| *known == line)
        .map(|(_, code)| *code)
}

// `\n` まで読みます。`\n` が来る前に接続が閉じたら UnexpectedEof として扱います。
fn read_line<R: BufRead>(stream: &mut R) -> io::Result<Vec<u8>> {
    let mut line = Vec::new();
    stream.read_until(b'\n', &mut line)?;

    if !line.ends_with(b"\n") {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "connection closed before end of line",
        ));
    }
    Ok(line)
}
