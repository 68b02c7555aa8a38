//! Flavor feature catalog
//!
//! The single source of truth for the six flavor features: the mapping
//! between the human-facing labels shown to users and the `f1`..`f6` axis
//! identifiers carried by Sakenowa flavor charts, plus the short description
//! shown next to each feature.
//!
//! Declaration order of [`FEATURES`] is the canonical catalog order. It
//! drives both the deterministic tie-break when ranking dominant axes and
//! the fixed layout of the radar dataset, so it must not be reordered.

use sakenavi_common::models::FlavorAxis;
use serde::Serialize;

/// One catalog entry for a flavor feature
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FlavorFeature {
    /// Display label users select by (Japanese, exact match only)
    pub label: &'static str,
    /// English name used in the natural-language summary
    pub english: &'static str,
    /// Flavor chart axis this feature reads
    pub axis: FlavorAxis,
    /// Short description of the feature
    pub description: &'static str,
}

/// The six flavor features in canonical catalog order
pub static FEATURES: [FlavorFeature; 6] = [
    FlavorFeature {
        label: "華やか",
        english: "Floral",
        axis: FlavorAxis::F1,
        description: "果実や花のような香りがある",
    },
    FlavorFeature {
        label: "芳醇",
        english: "Rich",
        axis: FlavorAxis::F2,
        description: "濃厚でリッチな味わい",
    },
    FlavorFeature {
        label: "重厚",
        english: "Heavy",
        axis: FlavorAxis::F3,
        description: "酸味や苦味、コクのある味わい",
    },
    FlavorFeature {
        label: "穏やか",
        english: "Mellow",
        axis: FlavorAxis::F4,
        description: "静かで穏やかな香りと味わい",
    },
    FlavorFeature {
        label: "ドライ",
        english: "Dry",
        axis: FlavorAxis::F5,
        description: "すっきりとして甘さが少ない",
    },
    FlavorFeature {
        label: "軽快",
        english: "Light",
        axis: FlavorAxis::F6,
        description: "口当たりが軽く、飲みやすい",
    },
];

/// Resolve a feature by its display label
///
/// Exact match only; no trimming or fuzzy matching. Returns `None` for any
/// label outside the fixed set.
pub fn feature_for_label(label: &str) -> Option<&'static FlavorFeature> {
    FEATURES.iter().find(|feature| feature.label == label)
}

/// Resolve the feature that reads a given axis
///
/// Total: every axis has exactly one catalog entry.
pub fn feature_for_axis(axis: FlavorAxis) -> &'static FlavorFeature {
    &FEATURES[axis as usize]
}
