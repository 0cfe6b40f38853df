//! iwashi/bin — URL を 1 つ受け取り、GET した結果を表示する最小のメイン
//!
//! - 第1引数の URL に GET を送り、ステータス・生ヘッダ・本文を標準出力に書きます。
//!   引数がなければデモ用の URL を使います。
//! - ログは `RUST_LOG=debug` などで `env_logger` に出力させられます。
//! - 失敗時は `anyhow` 経由でエラー内容を表示し、終了コード 1 で終わります。

use std::io::{self, Read, Write};

use anyhow::Context;
use log::info;

// 引数なしで起動したときの取得先。
const DEMO_URL: &str = "http://magpie.surge.sh/index.html";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let url = std::env::args().nth(1).unwrap_or_else(|| DEMO_URL.to_string());
    info!("fetching {}", url);

    let mut response = net_tcp::get(&url).with_context(|| format!("GET {} failed", url))?;
    println!("{}", response);
    print!("{}", response.raw_headers());
    println!();

    let mut body = Vec::new();
    response
        .body_mut()
        .read_to_end(&mut body)
        .context("failed to read response body")?;
    io::stdout().write_all(&body)?;

    response.into_body().close()?;
    Ok(())
}
