use std::{
    ffi::{CStr, CString, c_char, c_uint},
    ptr,
    sync::Arc,
};

use libpinyin_sys as sys;

use crate::{
    Context, Error,
    candidate::{Candidate, CandidateKind, match_length},
};

/// One conversion workspace. Cheap to allocate; not shareable
/// between threads while a conversion is in flight.
pub struct Instance {
    ctx: Arc<Context>,
    raw: *mut sys::pinyin_instance_t,
}

// Owned raw state, only touched through &mut self under the
// context lock.
unsafe impl Send for Instance {}

impl Instance {
    pub(crate) fn from_raw(ctx: Arc<Context>, raw: *mut sys::pinyin_instance_t) -> Self {
        Self { ctx, raw }
    }

    /// Convert a full-pinyin string into ranked candidates.
    ///
    /// `prefix` is the already-committed sentence part, used to bias
    /// the language model; pass `""` when starting fresh. Each
    /// returned candidate records how many leading bytes of `pinyin`
    /// it accounts for, so a caller can commit a candidate and feed
    /// the remainder back in.
    ///
    /// The instance is reset before returning, so repeated calls on
    /// one instance are independent.
    pub fn convert(&mut self, pinyin: &str, prefix: &str) -> Result<Vec<Candidate>, Error> {
        let c_pinyin = CString::new(pinyin)?;
        let c_prefix = CString::new(prefix)?;

        let _guard = self.ctx.lock.lock();
        unsafe {
            sys::pinyin_parse_more_full_pinyins(self.raw, c_pinyin.as_ptr());
            sys::pinyin_guess_sentence_with_prefix(self.raw, c_prefix.as_ptr());
            sys::pinyin_guess_full_pinyin_candidates(self.raw, 0);

            let key_ends = self.key_end_offsets();
            let candidates = self.collect_candidates(&key_ends, pinyin.len());

            sys::pinyin_reset(self.raw);
            candidates
        }
    }

    /// Cumulative end offset (in input bytes) of each parsed pinyin
    /// key, including the separators the parser skipped.
    unsafe fn key_end_offsets(&mut self) -> Vec<u16> {
        let mut num: c_uint = 0;
        unsafe { sys::pinyin_get_n_pinyin(self.raw, &mut num) };

        let mut ends: Vec<u16> = Vec::with_capacity(num as usize);
        for i in 0..num {
            let mut key_rest: *mut sys::ChewingKeyRest = ptr::null_mut();
            unsafe { sys::pinyin_get_pinyin_key_rest(self.raw, i, &mut key_rest) };
            let mut len: u16 = 0;
            unsafe { sys::pinyin_get_pinyin_key_rest_length(self.raw, key_rest, &mut len) };
            let end = ends.last().copied().unwrap_or(0).saturating_add(len);
            ends.push(end);
        }
        ends
    }

    unsafe fn collect_candidates(
        &mut self,
        key_ends: &[u16],
        input_len: usize,
    ) -> Result<Vec<Candidate>, Error> {
        let mut num: c_uint = 0;
        unsafe { sys::pinyin_get_n_candidate(self.raw, &mut num) };

        let mut out = Vec::with_capacity(num as usize);
        for i in 0..num {
            let mut candidate: *mut sys::lookup_candidate_t = ptr::null_mut();
            unsafe { sys::pinyin_get_candidate(self.raw, i, &mut candidate) };
            if candidate.is_null() {
                return Err(Error::Engine("pinyin_get_candidate"));
            }

            let mut utf8: *const c_char = ptr::null();
            unsafe { sys::pinyin_get_candidate_string(self.raw, candidate, &mut utf8) };
            if utf8.is_null() {
                return Err(Error::Engine("pinyin_get_candidate_string"));
            }
            let text = unsafe { CStr::from_ptr(utf8) }.to_string_lossy().into_owned();

            let mut raw_kind: sys::lookup_candidate_type_t = 0;
            unsafe { sys::pinyin_get_candidate_type(self.raw, candidate, &mut raw_kind) };
            let kind = CandidateKind::from_raw(raw_kind);

            // Choosing moves the engine cursor past the consumed
            // keys; that cursor is what locates the match end.
            let cursor = unsafe { sys::pinyin_choose_candidate(self.raw, 0, candidate) };
            let match_len = match_length(kind, cursor as i64, key_ends, input_len);
            log::trace!("candidate {i}: {text:?} kind={kind:?} match_len={match_len}");

            out.push(Candidate {
                text,
                kind,
                match_len,
            });
            unsafe { sys::pinyin_clear_constraint(self.raw, 0) };
        }
        Ok(out)
    }
}

impl Drop for Instance {
    fn drop(&mut self) {
        let _guard = self.ctx.lock.lock();
        unsafe { sys::pinyin_free_instance(self.raw) };
    }
}
