//! Tiny conversion harness: feed it pinyin, get ranked candidates.
//!
//!     convtest nihaoma
//!     convtest hao 你

use std::env;

use anyhow::{Context as _, Result};
use simplepinyin::Context;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let pinyin = args.next().context("usage: convtest PINYIN [PREFIX]")?;
    let prefix = args.next().unwrap_or_default();

    let ctx = Context::shared().context("failed to initialize libpinyin")?;
    let mut inst = ctx.instance()?;
    let candidates = inst.convert(&pinyin, &prefix)?;

    println!("{} candidate(s) for {pinyin:?}:", candidates.len());
    for (i, c) in candidates.iter().enumerate() {
        println!("{i:4}  [{:>2} bytes]  {}", c.match_len, c.text);
    }
    Ok(())
}
