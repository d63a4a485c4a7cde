//! Pattern taxonomy: exact six-symbol sequences mapped to a group tag.
//!
//! Documents hold two groups, `groupA` and `groupB`, each a list of entries:
//!
//! ```json
//! {"patterns": {"groupA": [{"sequence": ["B","P","B","B","P","B"], "group": "a"}]}}
//! ```
//!
//! The same shape is accepted as TOML (`[[patterns.groupA]]`). A sequence may
//! also be written compactly as one string (`"BPBBPB"`). An entry without a
//! `group` takes the tag of the group it is listed under.
//!
//! Only a document that cannot be parsed is an error. A malformed entry is
//! logged and skipped; the remaining entries still load.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use beadroad_core::constants::PATTERN_CELLS;
use beadroad_core::errors::TaxonomyError;
use beadroad_core::types::{GroupTag, Outcome};

/// One normalised taxonomy key.
pub type Sequence = [Outcome; PATTERN_CELLS];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SequenceDef {
    Symbols(Vec<String>),
    Compact(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxonomyEntryDef {
    pub sequence: SequenceDef,
    #[serde(default)]
    pub group: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PatternGroupsDef {
    #[serde(rename = "groupA", default)]
    pub group_a: Vec<TaxonomyEntryDef>,
    #[serde(rename = "groupB", default)]
    pub group_b: Vec<TaxonomyEntryDef>,
}

/// Top-level taxonomy document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxonomyDocument {
    #[serde(default)]
    pub patterns: PatternGroupsDef,
}

/// Read-only sequence lookup, loaded once per run.
#[derive(Debug, Clone, Default)]
pub struct Taxonomy {
    entries: FxHashMap<Sequence, GroupTag>,
}

impl Taxonomy {
    /// A taxonomy that classifies nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from already-normalised entries. The first occurrence of a
    /// sequence wins.
    pub fn from_entries(entries: impl IntoIterator<Item = (Sequence, GroupTag)>) -> Self {
        let mut map = FxHashMap::default();
        for (sequence, tag) in entries {
            map.entry(sequence).or_insert(tag);
        }
        Self { entries: map }
    }

    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        let doc: TaxonomyDocument =
            serde_json::from_str(json).map_err(|e| TaxonomyError::Parse {
                source_name: "<json>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_document(doc)
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, TaxonomyError> {
        let doc: TaxonomyDocument = toml::from_str(toml_str).map_err(|e| TaxonomyError::Parse {
            source_name: "<toml>".to_string(),
            message: e.to_string(),
        })?;
        Self::from_document(doc)
    }

    /// Load from a file; `.toml` is read as TOML, anything else as JSON.
    pub fn load_from_file(path: &Path) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path).map_err(|e| TaxonomyError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let parsed = if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        };

        // Re-label parse errors with the real source.
        let taxonomy = parsed.map_err(|e| match e {
            TaxonomyError::Parse { message, .. } => TaxonomyError::Parse {
                source_name: path.display().to_string(),
                message,
            },
            other => other,
        })?;

        tracing::debug!(path = %path.display(), entries = taxonomy.len(), "loaded taxonomy");
        Ok(taxonomy)
    }

    /// Load from a file, degrading to an empty taxonomy on any failure.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(taxonomy) => taxonomy,
            Err(e) => {
                tracing::warn!(error = %e, "taxonomy unavailable, classification disabled");
                Self::empty()
            }
        }
    }

    /// Exact lookup. Anything other than six banker/player values is
    /// unclassifiable.
    pub fn lookup(&self, sequence: &[Outcome]) -> Option<GroupTag> {
        let key: &Sequence = sequence.try_into().ok()?;
        if !key.iter().all(|o| o.is_decided()) {
            return None;
        }
        self.entries.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn from_document(doc: TaxonomyDocument) -> Result<Self, TaxonomyError> {
        let groups = [
            ("groupA", GroupTag::A, doc.patterns.group_a),
            ("groupB", GroupTag::B, doc.patterns.group_b),
        ];

        let mut entries = Vec::new();
        for (group, default_tag, defs) in groups {
            for (index, def) in defs.into_iter().enumerate() {
                match compile_entry(group, index, default_tag, def) {
                    Ok(entry) => entries.push(entry),
                    Err(e) => tracing::warn!(group, index, error = %e, "skipping invalid taxonomy entry"),
                }
            }
        }
        Ok(Self::from_entries(entries))
    }
}

fn compile_entry(
    group: &str,
    index: usize,
    default_tag: GroupTag,
    def: TaxonomyEntryDef,
) -> Result<(Sequence, GroupTag), TaxonomyError> {
    let invalid = |message: String| TaxonomyError::InvalidEntry {
        group: group.to_string(),
        index,
        message,
    };

    let symbols: Vec<String> = match def.sequence {
        SequenceDef::Symbols(symbols) => symbols,
        SequenceDef::Compact(s) => s.chars().map(String::from).collect(),
    };
    if symbols.len() != PATTERN_CELLS {
        return Err(invalid(format!(
            "expected {PATTERN_CELLS} symbols, found {}",
            symbols.len()
        )));
    }

    let mut sequence = [Outcome::Empty; PATTERN_CELLS];
    for (slot, symbol) in sequence.iter_mut().zip(&symbols) {
        let outcome = single_char(symbol)
            .and_then(Outcome::from_symbol)
            .filter(|o| o.is_decided())
            .ok_or_else(|| invalid(format!("'{symbol}' is not B or P")))?;
        *slot = outcome;
    }

    let tag = match def.group.as_deref() {
        None => default_tag,
        Some(g) => single_char(g)
            .and_then(GroupTag::from_char)
            .ok_or_else(|| invalid(format!("unknown group tag '{g}'")))?,
    };

    Ok((sequence, tag))
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
