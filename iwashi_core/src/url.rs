//! iwashi_core::url — HTTP 用のとてもシンプルな URL パーサ
//!
//! なにをする？
//! - `http://host[:port][/path][?query]` 形式の文字列から、`scheme` / `host` / `port` / `path` /
//!   `searchpart`（クエリ文字列）を取り出して `Url` 構造体に入れます。
//! - ネットワーク I/O は行いません。純粋に“文字列の分解”だけです。
//!
//! 決まりごと
//! - `://` がなければ `Error::MalformedUrl`、スキームが `http` 以外なら `Error::UnsupportedScheme`。
//! - ポート省略時は `"80"`、パス省略時は `"/"`。パスは常に `/` から始まります。
//! - ホストが空、ポートが 0〜65535 の10進数でない場合も `Error::MalformedUrl` です。
//! - 空白や制御文字（CR / LF など）を含む URL も `Error::MalformedUrl` です。
//!   そのままリクエスト行に書くと、ヘッダを差し込めてしまうためです。
//! - `#fragment` はサーバへ送るものではないので、最初の `#` 以降を捨てます。
//!
//! 言語ブリッジ（TS / Python）
//! - `split_once(sep)` は「最初の区切りで1回だけ分割」し、見つからなければ `None`。
//!   TS: `str.split(sep, 2)`、Python: `str.partition(sep)` に近い動きです。
//!
//! 注意
//! - `https` とパーセントエンコードは扱いません。
//! - IPv6 リテラル（`http://[::1]:8080/`）とユーザ情報（`http://user:pw@host/`）は未対応で、
//!   どちらも `Error::MalformedUrl` になります。

use crate::error::Error;

/// スキーム省略不可。`http` のみ受け付けます。
pub const HTTP_SCHEME: &str = "http";

/// ポートが書かれていないときの既定値。
pub const DEFAULT_PORT: &str = "80";

#[derive(Debug, Clone, PartialEq)]
pub struct Url {
    url: String,        // 元のURL文字列（例: "http://example.com:8888/index.html?a=1"）
    scheme: String,     // 例: "http"
    host: String,       // 例: "example.com"
    port: String,       // 例: "80" / "8888"
    path: String,       // 例: "/index.html"（先頭のスラッシュを含む）
    searchpart: String, // 例: "a=1&b=2"（? の後ろ全体）
}

impl Url {
    // まだ分解はせず、空のフィールドで作ります。`parse()` で中身が埋まります。
    pub fn new(url: String) -> Self {
        Self {
            url,
            scheme: "".to_string(),
            host: "".to_string(),
            port: "".to_string(),
            path: "".to_string(),
            searchpart: "".to_string(),
        }
    }

    pub fn scheme(&self) -> String {
        self.scheme.clone()
    }

    pub fn host(&self) -> String {
        self.host.clone()
    }

    pub fn port(&self) -> String {
        self.port.clone()
    }

    pub fn path(&self) -> String {
        self.path.clone()
    }

    pub fn searchpart(&self) -> String {
        self.searchpart.clone()
    }

    /// リクエスト行に載せる対象。クエリがあれば `path?searchpart`、なければ `path` そのもの。
    pub fn request_target(&self) -> String {
        if self.searchpart.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.searchpart)
        }
    }

    /// TCP で接続する宛先（`host:port`）。
    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// スキームを確認し、各フィールドを抽出して `Ok(self.clone())` を返します。
    ///
    /// 失敗パターン
    /// - `://` がない → `Error::MalformedUrl`
    /// - スキームが `http` 以外 → `Error::UnsupportedScheme`
    /// - ホストが空、ポートが不正、空白・制御文字を含む → `Error::MalformedUrl`
    pub fn parse(&mut self) -> Result<Self, Error> {
        if self
            .url
            .bytes()
            .any(|b| b.is_ascii_control() || b == b' ')
        {
            return Err(Error::MalformedUrl(self.url.clone()));
        }

        let (scheme, rest) = match self.url.split_once("://") {
            Some(parts) => parts,
            None => return Err(Error::MalformedUrl(self.url.clone())),
        };

        if scheme != HTTP_SCHEME {
            return Err(Error::UnsupportedScheme(scheme.to_string()));
        }

        let rest = strip_fragment(rest);
        let (authority, path_and_searchpart) = split_authority(rest);
        let (host, port) = extract_host_and_port(authority)
            .ok_or_else(|| Error::MalformedUrl(self.url.clone()))?;
        let (path, searchpart) = extract_path_and_searchpart(path_and_searchpart);

        self.scheme = scheme.to_string();
        self.host = host;
        self.port = port;
        self.path = path;
        self.searchpart = searchpart;

        Ok(self.clone())
    }
}

fn strip_fragment(rest: &str) -> &str {
    match rest.split_once('#') {
        Some((before, _)) => before,
        None => rest,
    }
}

// `host[:port]` と、それ以降（`/path?query` または `?query`）に分けます。
fn split_authority(rest: &str) -> (&str, &str) {
    match rest.find(|c: char| c == '/' || c == '?') {
        Some(index) => (&rest[..index], &rest[index..]),
        None => (rest, ""),
    }
}

// ホストが空、またはポートが u16 として読めなければ None。
// `[` (IPv6 リテラル) と `@` (ユーザ情報) を含むものも None。
fn extract_host_and_port(authority: &str) -> Option<(String, String)> {
    if authority.contains(|c: char| c == '[' || c == ']' || c == '@') {
        return None;
    }

    let (host, port) = match authority.split_once(':') {
        Some((host, port)) => {
            if port.is_empty() || !port.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            port.parse::<u16>().ok()?;
            (host, port)
        }
        None => (authority, DEFAULT_PORT),
    };

    if host.is_empty() {
        return None;
    }
    Some((host.to_string(), port.to_string()))
}

fn extract_path_and_searchpart(rest: &str) -> (String, String) {
    let (path, searchpart) = rest.split_once('?').unwrap_or((rest, ""));

    let path = if path.is_empty() { "/" } else { path };
    (path.to_string(), searchpart.to_string())
}
