//! Raw FFI declarations for the system libpinyin.
//!
//! Covers only the subset of the C API the `simplepinyin` wrapper
//! uses: context/instance lifecycle, full-pinyin parsing, sentence
//! guessing, and candidate enumeration. Everything here is unsafe
//! and unchecked; use the wrapper crate instead of calling these
//! directly.

#![allow(non_camel_case_types)]

use libc::{c_char, c_int, c_uint, size_t};

/// Where the installed libpinyin keeps its model data, as reported
/// by pkg-config at build time.
pub const DATA_DIR: &str = env!("LIBPINYIN_DATA");

/// glib truth value: zero is false, anything else true.
pub type gboolean = c_int;

pub type pinyin_option_t = u32;

// Option bits, from pinyin_custom2.h.
pub const PINYIN_INCOMPLETE: pinyin_option_t = 1 << 0;
pub const ZHUYIN_INCOMPLETE: pinyin_option_t = 1 << 1;
pub const USE_TONE: pinyin_option_t = 1 << 2;
pub const FORCE_TONE: pinyin_option_t = 1 << 3;
pub const PINYIN_CORRECT_GN_NG: pinyin_option_t = 1 << 4;
pub const PINYIN_CORRECT_MG_NG: pinyin_option_t = 1 << 5;
pub const PINYIN_CORRECT_IOU_IU: pinyin_option_t = 1 << 6;
pub const PINYIN_CORRECT_UEI_UI: pinyin_option_t = 1 << 7;
pub const PINYIN_CORRECT_UEN_UN: pinyin_option_t = 1 << 8;
pub const PINYIN_CORRECT_UE_VE: pinyin_option_t = 1 << 9;
pub const PINYIN_CORRECT_V_U: pinyin_option_t = 1 << 10;
pub const PINYIN_CORRECT_ON_ONG: pinyin_option_t = 1 << 11;
pub const PINYIN_CORRECT_ALL: pinyin_option_t = 0xFF0;
pub const USE_DIVIDED_TABLE: pinyin_option_t = 1 << 15;
pub const USE_RESPLIT_TABLE: pinyin_option_t = 1 << 16;
pub const DYNAMIC_ADJUST: pinyin_option_t = 1 << 17;

pub type lookup_candidate_type_t = c_int;

// Candidate kinds, from pinyin.h.
pub const BEST_MATCH_CANDIDATE: lookup_candidate_type_t = 1;
pub const NORMAL_CANDIDATE: lookup_candidate_type_t = 2;
pub const DIVIDED_CANDIDATE: lookup_candidate_type_t = 3;
pub const RESPLIT_CANDIDATE: lookup_candidate_type_t = 4;
pub const ZOMBIE_CANDIDATE: lookup_candidate_type_t = 5;

#[repr(C)]
pub struct pinyin_context_t {
    _private: [u8; 0],
}

#[repr(C)]
pub struct pinyin_instance_t {
    _private: [u8; 0],
}

#[repr(C)]
pub struct ChewingKeyRest {
    _private: [u8; 0],
}

#[repr(C)]
pub struct lookup_candidate_t {
    _private: [u8; 0],
}

unsafe extern "C" {
    pub fn pinyin_init(systemdir: *const c_char, userdir: *const c_char)
    -> *mut pinyin_context_t;
    pub fn pinyin_fini(context: *mut pinyin_context_t);
    pub fn pinyin_set_options(context: *mut pinyin_context_t, options: pinyin_option_t)
    -> gboolean;

    pub fn pinyin_alloc_instance(context: *mut pinyin_context_t) -> *mut pinyin_instance_t;
    pub fn pinyin_free_instance(instance: *mut pinyin_instance_t);

    pub fn pinyin_parse_more_full_pinyins(
        instance: *mut pinyin_instance_t,
        pinyins: *const c_char,
    ) -> size_t;
    pub fn pinyin_guess_sentence_with_prefix(
        instance: *mut pinyin_instance_t,
        prefix: *const c_char,
    ) -> gboolean;
    pub fn pinyin_guess_full_pinyin_candidates(
        instance: *mut pinyin_instance_t,
        offset: size_t,
    ) -> gboolean;

    pub fn pinyin_get_n_pinyin(instance: *mut pinyin_instance_t, num: *mut c_uint) -> gboolean;
    pub fn pinyin_get_pinyin_key_rest(
        instance: *mut pinyin_instance_t,
        index: c_uint,
        key_rest: *mut *mut ChewingKeyRest,
    ) -> gboolean;
    pub fn pinyin_get_pinyin_key_rest_length(
        instance: *mut pinyin_instance_t,
        key_rest: *mut ChewingKeyRest,
        length: *mut u16,
    ) -> gboolean;

    pub fn pinyin_get_n_candidate(instance: *mut pinyin_instance_t, num: *mut c_uint)
    -> gboolean;
    pub fn pinyin_get_candidate(
        instance: *mut pinyin_instance_t,
        index: c_uint,
        candidate: *mut *mut lookup_candidate_t,
    ) -> gboolean;
    pub fn pinyin_get_candidate_string(
        instance: *mut pinyin_instance_t,
        candidate: *mut lookup_candidate_t,
        utf8_str: *mut *const c_char,
    ) -> gboolean;
    pub fn pinyin_get_candidate_type(
        instance: *mut pinyin_instance_t,
        candidate: *mut lookup_candidate_t,
        r#type: *mut lookup_candidate_type_t,
    ) -> gboolean;

    pub fn pinyin_choose_candidate(
        instance: *mut pinyin_instance_t,
        offset: size_t,
        candidate: *mut lookup_candidate_t,
    ) -> c_int;
    pub fn pinyin_clear_constraint(instance: *mut pinyin_instance_t, offset: size_t) -> gboolean;
    pub fn pinyin_reset(instance: *mut pinyin_instance_t) -> gboolean;
}
