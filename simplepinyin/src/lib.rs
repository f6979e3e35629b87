//! Pinyin-to-Chinese conversion over the system libpinyin.
//!
//! A [`Context`] owns the engine's loaded language model; an
//! [`Instance`] performs conversions against it. Typical use goes
//! through the process-wide shared context:
//!
//! ```no_run
//! let ctx = simplepinyin::Context::shared()?;
//! let mut inst = ctx.instance()?;
//! for c in inst.convert("nihao", "")? {
//!     println!("{} (matches {} bytes)", c.text, c.match_len);
//! }
//! # Ok::<(), simplepinyin::Error>(())
//! ```

pub mod candidate;
mod context;
mod instance;

use thiserror::Error;

pub use crate::{
    candidate::{Candidate, CandidateKind},
    context::{Context, DEFAULT_OPTIONS},
    instance::Instance,
};

#[derive(Debug, Error)]
pub enum Error {
    /// `pinyin_init` returned no context. Usually a missing or
    /// incompatible data directory.
    #[error("failed to initialize libpinyin (data dir: {0})")]
    Init(String),

    /// The engine rejected the requested option set.
    #[error("libpinyin rejected options {0:#x}")]
    Options(u32),

    /// An engine call that must yield a value didn't.
    #[error("libpinyin call failed: {0}")]
    Engine(&'static str),

    /// Input strings cross the FFI boundary as C strings, so they
    /// cannot contain interior NUL bytes.
    #[error("input contains an interior NUL byte")]
    Nul(#[from] std::ffi::NulError),
}
