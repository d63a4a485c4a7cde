//! Zone classification against a taxonomy.

use serde::Serialize;

use beadroad_core::constants::ZONE_TEMPLATE_COUNT;
use beadroad_core::types::{CompositeCode, GroupTag};

use super::positions::{pattern_positions, PatternPosition};
use super::taxonomy::{Sequence, Taxonomy};
use crate::board::Zone;

/// Classification of one template inside a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateOutcome {
    pub number: usize,
    pub sequence: Sequence,
    pub tag: Option<GroupTag>,
}

/// Result of classifying one zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneClassification {
    pub group_range: String,
    /// The first four templates of the zone, in board order.
    pub templates: Vec<TemplateOutcome>,
    /// Tags of templates 1-3, present only when all three classify.
    pub triple_code: Option<CompositeCode>,
    /// Tags of templates 1-4, present only when all four classify.
    pub quad_code: Option<CompositeCode>,
}

impl ZoneClassification {
    /// First two symbols of the 3-code.
    pub fn pair_shorthand(&self) -> Option<String> {
        self.triple_code.as_ref().map(|code| code.prefix(2))
    }

    pub fn has_composite(&self) -> bool {
        self.triple_code.is_some() || self.quad_code.is_some()
    }
}

/// Classifies zones using a taxonomy and the board-wide template set.
#[derive(Debug, Clone)]
pub struct PatternClassifier {
    taxonomy: Taxonomy,
    positions: Vec<PatternPosition>,
}

impl PatternClassifier {
    pub fn new(taxonomy: Taxonomy) -> Self {
        Self {
            taxonomy,
            positions: pattern_positions(),
        }
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn positions(&self) -> &[PatternPosition] {
        &self.positions
    }

    /// Templates whose two columns both fall inside `zone`, in board order.
    pub fn positions_in<'a>(
        &'a self,
        zone: &'a Zone,
    ) -> impl Iterator<Item = &'a PatternPosition> + 'a {
        self.positions
            .iter()
            .filter(move |p| zone.spans(p.columns.0, p.columns.1))
    }

    /// Read a template's six cells from the zone. Gaps stay in place.
    pub fn sample(&self, zone: &Zone, position: &PatternPosition) -> Sequence {
        position
            .coordinates
            .map(|(col, row)| zone.get(col, row).unwrap_or_default())
    }

    pub fn classify_sequence(&self, sequence: &Sequence) -> Option<GroupTag> {
        self.taxonomy.lookup(sequence)
    }

    pub fn classify_zone(&self, zone: &Zone) -> ZoneClassification {
        let templates: Vec<TemplateOutcome> = self
            .positions_in(zone)
            .take(ZONE_TEMPLATE_COUNT)
            .map(|position| {
                let sequence = self.sample(zone, position);
                TemplateOutcome {
                    number: position.number,
                    tag: self.classify_sequence(&sequence),
                    sequence,
                }
            })
            .collect();

        let classification = ZoneClassification {
            group_range: zone.range_label(),
            triple_code: compose(&templates, 3),
            quad_code: compose(&templates, 4),
            templates,
        };

        tracing::debug!(
            zone = %classification.group_range,
            triple = ?classification.triple_code.as_ref().map(ToString::to_string),
            quad = ?classification.quad_code.as_ref().map(ToString::to_string),
            "classified zone"
        );
        classification
    }

    /// Group-pair shorthand of one zone.
    pub fn pair_shorthand(&self, zone: &Zone) -> Option<String> {
        self.classify_zone(zone).pair_shorthand()
    }

    /// Shorthands of all zones concatenated left to right.
    pub fn board_summary(&self, zones: &[Zone]) -> String {
        zones
            .iter()
            .filter_map(|zone| self.pair_shorthand(zone))
            .collect()
    }
}

/// Composite of the first `n` tags. A zone with fewer than the full template
/// count never composes.
fn compose(templates: &[TemplateOutcome], n: usize) -> Option<CompositeCode> {
    if templates.len() < ZONE_TEMPLATE_COUNT {
        return None;
    }
    templates[..n]
        .iter()
        .map(|t| t.tag)
        .collect::<Option<Vec<_>>>()
        .map(CompositeCode::from_tags)
}
