use std::{ffi::CString, sync::Arc};

use libpinyin_sys as sys;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::{Error, Instance};

/// The option set the original wrapper always ran with: every
/// pinyin auto-correction plus the divided/resplit tables.
pub const DEFAULT_OPTIONS: sys::pinyin_option_t =
    sys::PINYIN_CORRECT_ALL | sys::USE_DIVIDED_TABLE | sys::USE_RESPLIT_TABLE;

static SHARED: OnceCell<Arc<Context>> = OnceCell::new();

/// An initialized libpinyin engine. Holds the loaded language model
/// and dictionaries; instances borrow it for conversions.
pub struct Context {
    raw: *mut sys::pinyin_context_t,
    /// Serializes every engine call made through this context — a
    /// libpinyin context is not thread-safe.
    pub(crate) lock: Mutex<()>,
}

// The raw pointer is only dereferenced while `lock` is held.
unsafe impl Send for Context {}
unsafe impl Sync for Context {}

impl Context {
    /// Initialize an engine over `data_dir` (system model data) and
    /// `user_dir` (writable per-user state), with [`DEFAULT_OPTIONS`].
    pub fn new(data_dir: &str, user_dir: &str) -> Result<Self, Error> {
        let c_data = CString::new(data_dir)?;
        let c_user = CString::new(user_dir)?;

        let raw = unsafe { sys::pinyin_init(c_data.as_ptr(), c_user.as_ptr()) };
        if raw.is_null() {
            return Err(Error::Init(data_dir.to_string()));
        }

        if unsafe { sys::pinyin_set_options(raw, DEFAULT_OPTIONS) } == 0 {
            unsafe { sys::pinyin_fini(raw) };
            return Err(Error::Options(DEFAULT_OPTIONS));
        }

        log::info!("libpinyin context initialized (data dir: {data_dir})");
        Ok(Self {
            raw,
            lock: Mutex::new(()),
        })
    }

    /// The process-wide context over the data directory discovered
    /// at build time, with `/tmp` as the user directory. Initialized
    /// on first use, then reused for the life of the process.
    pub fn shared() -> Result<Arc<Context>, Error> {
        SHARED
            .get_or_try_init(|| Context::new(sys::DATA_DIR, "/tmp").map(Arc::new))
            .cloned()
    }

    /// Allocate a conversion instance against this context.
    pub fn instance(self: &Arc<Self>) -> Result<Instance, Error> {
        let _guard = self.lock.lock();
        let raw = unsafe { sys::pinyin_alloc_instance(self.raw) };
        if raw.is_null() {
            return Err(Error::Engine("pinyin_alloc_instance"));
        }
        drop(_guard);
        Ok(Instance::from_raw(Arc::clone(self), raw))
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        unsafe { sys::pinyin_fini(self.raw) };
    }
}
