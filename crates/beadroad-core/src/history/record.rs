//! Pattern records: one row per classified zone.
//!
//! A zone's 3-code is stored split as `pair` (first two tags) plus
//! `pair_result` (third tag); its 4-code as `triple` plus `triple_result`.
//! Each record is linked to the record appended just before it, so the log
//! tracks how the leading pair moves from one board to the next.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time::truncate_to_minute;
use crate::types::CompositeCode;

/// Tag composition of a stored code prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodeProfile {
    pub a_count: u32,
    pub b_count: u32,
    /// Adjacent positions whose tags differ.
    pub switches: u32,
}

impl CodeProfile {
    pub fn of(code: &str) -> Self {
        let bytes = code.as_bytes();
        Self {
            a_count: bytes.iter().filter(|&&c| c == b'a').count() as u32,
            b_count: bytes.iter().filter(|&&c| c == b'b').count() as u32,
            switches: bytes.windows(2).filter(|w| w[0] != w[1]).count() as u32,
        }
    }
}

/// A classified zone waiting to be appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDraft {
    pub recorded_at: DateTime<Utc>,
    /// One-based inclusive column span, e.g. `"1-3"`.
    pub group_range: String,
    pub triple_code: Option<CompositeCode>,
    pub quad_code: Option<CompositeCode>,
}

/// Linkage to the previously appended record, computed inside the store's
/// append so it sees the log exactly as it stands at insert time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordLink {
    pub prev_pair: Option<String>,
    pub prev_triple: Option<String>,
    /// `"{prev_pair}->{pair}"`.
    pub transition: Option<String>,
    pub transition_count: u32,
}

impl RecordDraft {
    pub fn new(
        recorded_at: DateTime<Utc>,
        group_range: impl Into<String>,
        triple_code: Option<CompositeCode>,
        quad_code: Option<CompositeCode>,
    ) -> Self {
        Self {
            recorded_at: truncate_to_minute(recorded_at),
            group_range: group_range.into(),
            triple_code,
            quad_code,
        }
    }

    pub fn pair(&self) -> String {
        split_head(self.triple_code.as_ref(), 2)
    }

    pub fn pair_result(&self) -> String {
        split_tail(self.triple_code.as_ref(), 2)
    }

    pub fn triple(&self) -> String {
        split_head(self.quad_code.as_ref(), 3)
    }

    pub fn triple_result(&self) -> String {
        split_tail(self.quad_code.as_ref(), 3)
    }

    /// Transition key against the previous record, if both pairs exist.
    pub fn transition_key(&self, previous: Option<&PatternRecord>) -> Option<String> {
        let prev_pair = previous.map(|p| p.pair.as_str()).unwrap_or_default();
        let pair = self.pair();
        if prev_pair.is_empty() || pair.is_empty() {
            return None;
        }
        Some(format!("{prev_pair}->{pair}"))
    }

    /// Link this draft to the log.
    ///
    /// `prior_transition_count` is the count stored on the latest record with
    /// the same transition key, looked up by the caller.
    pub fn link(
        &self,
        previous: Option<&PatternRecord>,
        prior_transition_count: Option<u32>,
    ) -> RecordLink {
        let transition = self.transition_key(previous);
        let transition_count = match (&transition, prior_transition_count) {
            (Some(_), Some(prior)) => prior + 1,
            _ => 1,
        };
        RecordLink {
            prev_pair: previous.map(|p| p.pair.clone()),
            prev_triple: previous.map(|p| p.triple.clone()),
            transition,
            transition_count,
        }
    }
}

/// A persisted pattern record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    pub round: i64,
    pub recorded_at: DateTime<Utc>,
    pub group_range: String,
    pub pair: String,
    pub pair_result: String,
    pub triple: String,
    pub triple_result: String,
    pub link: RecordLink,
    pub pair_profile: CodeProfile,
    pub triple_profile: CodeProfile,
}

impl PatternRecord {
    /// Assemble a stored record from its draft, linkage and assigned round.
    pub fn from_parts(round: i64, draft: &RecordDraft, link: RecordLink) -> Self {
        let pair = draft.pair();
        let triple = draft.triple();
        Self {
            round,
            recorded_at: draft.recorded_at,
            group_range: draft.group_range.clone(),
            pair_profile: CodeProfile::of(&pair),
            triple_profile: CodeProfile::of(&triple),
            pair_result: draft.pair_result(),
            triple_result: draft.triple_result(),
            pair,
            triple,
            link,
        }
    }

    /// The full 3-code (`pair` + `pair_result`), when the result is present.
    pub fn pair_code(&self) -> Option<String> {
        join_code(&self.pair, &self.pair_result)
    }

    /// The full 4-code (`triple` + `triple_result`), when the result is present.
    pub fn triple_code(&self) -> Option<String> {
        join_code(&self.triple, &self.triple_result)
    }
}

fn split_head(code: Option<&CompositeCode>, n: usize) -> String {
    code.map(|c| c.prefix(n)).unwrap_or_default()
}

fn split_tail(code: Option<&CompositeCode>, index: usize) -> String {
    code.and_then(|c| c.tag_at(index))
        .map(|t| t.as_char().to_string())
        .unwrap_or_default()
}

fn join_code(head: &str, result: &str) -> Option<String> {
    if result.is_empty() {
        None
    } else {
        Some(format!("{head}{result}"))
    }
}
