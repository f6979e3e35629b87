//! Conversion candidates and matched-length bookkeeping.

use libpinyin_sys as sys;

/// How the engine produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// The engine's best guess for the whole input.
    BestMatch,
    /// An ordinary per-phrase candidate.
    Normal,
    /// Produced by dividing one ambiguous key in two.
    Divided,
    /// Produced by resplitting the key sequence.
    Resplit,
    /// Stale candidate the engine keeps for constraint tracking.
    Zombie,
}

impl CandidateKind {
    pub(crate) fn from_raw(raw: sys::lookup_candidate_type_t) -> Self {
        match raw {
            sys::BEST_MATCH_CANDIDATE => CandidateKind::BestMatch,
            sys::NORMAL_CANDIDATE => CandidateKind::Normal,
            sys::DIVIDED_CANDIDATE => CandidateKind::Divided,
            sys::RESPLIT_CANDIDATE => CandidateKind::Resplit,
            _ => CandidateKind::Zombie,
        }
    }
}

/// One conversion result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The Chinese text.
    pub text: String,
    pub kind: CandidateKind,
    /// How many leading bytes of the raw pinyin input this
    /// candidate accounts for.
    pub match_len: usize,
}

/// Matched-input length for one candidate.
///
/// `cursor` is the engine cursor after choosing the candidate and
/// `key_ends` the cumulative end offsets of the parsed keys. A best
/// match always covers the whole input. Divided candidates report a
/// cursor two keys ahead of the match end, and the engine sometimes
/// reports one past the parsed keys (one key divided into two), so
/// the index is clamped to the last key. Other kinds sit one key
/// ahead. Anything out of range counts as no match.
pub(crate) fn match_length(
    kind: CandidateKind,
    cursor: i64,
    key_ends: &[u16],
    input_len: usize,
) -> usize {
    match kind {
        CandidateKind::BestMatch => input_len,
        CandidateKind::Divided => {
            let mut index = cursor - 2;
            if index >= key_ends.len() as i64 {
                index = key_ends.len() as i64 - 1;
            }
            end_at(key_ends, index)
        }
        CandidateKind::Resplit | CandidateKind::Normal => end_at(key_ends, cursor - 1),
        CandidateKind::Zombie => 0,
    }
}

fn end_at(key_ends: &[u16], index: i64) -> usize {
    if index < 0 {
        return 0;
    }
    key_ends
        .get(index as usize)
        .copied()
        .map(usize::from)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    // "ni hao ma" → keys end at bytes 2, 5, 8.
    const KEY_ENDS: &[u16] = &[2, 5, 8];

    #[test]
    fn best_match_covers_whole_input() {
        assert_eq!(match_length(CandidateKind::BestMatch, 3, KEY_ENDS, 8), 8);
        // Cursor is irrelevant for a best match.
        assert_eq!(match_length(CandidateKind::BestMatch, 0, KEY_ENDS, 8), 8);
    }

    #[test]
    fn normal_candidate_uses_previous_key_end() {
        assert_eq!(match_length(CandidateKind::Normal, 1, KEY_ENDS, 8), 2);
        assert_eq!(match_length(CandidateKind::Normal, 2, KEY_ENDS, 8), 5);
        assert_eq!(match_length(CandidateKind::Normal, 3, KEY_ENDS, 8), 8);
    }

    #[test]
    fn resplit_behaves_like_normal() {
        assert_eq!(match_length(CandidateKind::Resplit, 2, KEY_ENDS, 8), 5);
    }

    #[test]
    fn divided_candidate_sits_two_keys_back() {
        assert_eq!(match_length(CandidateKind::Divided, 2, KEY_ENDS, 8), 2);
        assert_eq!(match_length(CandidateKind::Divided, 3, KEY_ENDS, 8), 5);
    }

    #[test]
    fn divided_cursor_past_keys_clamps_to_last() {
        assert_eq!(match_length(CandidateKind::Divided, 6, KEY_ENDS, 8), 8);
        assert_eq!(match_length(CandidateKind::Divided, 100, KEY_ENDS, 8), 8);
    }

    #[test]
    fn out_of_range_cursors_match_nothing() {
        assert_eq!(match_length(CandidateKind::Normal, 0, KEY_ENDS, 8), 0);
        assert_eq!(match_length(CandidateKind::Normal, -1, KEY_ENDS, 8), 0);
        assert_eq!(match_length(CandidateKind::Normal, 4, KEY_ENDS, 8), 0);
        assert_eq!(match_length(CandidateKind::Divided, 1, KEY_ENDS, 8), 0);
    }

    #[test]
    fn zombie_matches_nothing() {
        assert_eq!(match_length(CandidateKind::Zombie, 2, KEY_ENDS, 8), 0);
    }

    #[test]
    fn empty_key_list() {
        assert_eq!(match_length(CandidateKind::Normal, 1, &[], 0), 0);
        // Divided clamp lands on index -1, which matches nothing.
        assert_eq!(match_length(CandidateKind::Divided, 5, &[], 0), 0);
    }
}
