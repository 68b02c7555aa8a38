//! Sakenowa record models
//!
//! Record shapes for the four reference datasets served by the Sakenowa data
//! API. All records are immutable snapshots: they are deserialized once per
//! session and never mutated or persisted.
//!
//! Upstream JSON uses camelCase field names (`areaId`, `breweryId`,
//! `brandId`). A record `name` can be missing or empty for malformed
//! upstream rows; such rows deserialize with an empty name and are excluded
//! from selectable option sets downstream.

use serde::{Deserialize, Serialize};

/// Prefecture-level region a brewery belongs to
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Area {
    /// Area id assigned by Sakenowa
    pub id: u32,
    /// Display name; empty for malformed upstream rows
    #[serde(default)]
    pub name: String,
}

/// Sake producer, belongs to exactly one area
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brewery {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Owning area id
    pub area_id: u32,
}

/// Sake brand, belongs to exactly one brewery
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    /// Owning brewery id
    pub brewery_id: u32,
}

/// One of the six fixed flavor axes
///
/// Declaration order here is the canonical catalog order used for
/// deterministic tie-breaking and radar layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorAxis {
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
}

impl FlavorAxis {
    /// All axes in canonical catalog order
    pub const ALL: [FlavorAxis; 6] = [
        FlavorAxis::F1,
        FlavorAxis::F2,
        FlavorAxis::F3,
        FlavorAxis::F4,
        FlavorAxis::F5,
        FlavorAxis::F6,
    ];

    /// Wire identifier of the axis ("f1".."f6")
    pub fn as_str(&self) -> &'static str {
        match self {
            FlavorAxis::F1 => "f1",
            FlavorAxis::F2 => "f2",
            FlavorAxis::F3 => "f3",
            FlavorAxis::F4 => "f4",
            FlavorAxis::F5 => "f5",
            FlavorAxis::F6 => "f6",
        }
    }
}

/// Six-axis flavor vector for one brand
///
/// All six axes are struct fields, so a chart that exists always carries the
/// complete vector; a record missing an axis fails deserialization instead
/// of producing a partial vector. Axis values are expected in [0.0, 1.0] and
/// are validated at snapshot ingestion.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlavorChart {
    pub brand_id: u32,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub f4: f64,
    pub f5: f64,
    pub f6: f64,
}

impl FlavorChart {
    /// Value of a single named axis
    pub fn axis_value(&self, axis: FlavorAxis) -> f64 {
        match axis {
            FlavorAxis::F1 => self.f1,
            FlavorAxis::F2 => self.f2,
            FlavorAxis::F3 => self.f3,
            FlavorAxis::F4 => self.f4,
            FlavorAxis::F5 => self.f5,
            FlavorAxis::F6 => self.f6,
        }
    }

    /// Whether every axis value lies within [0.0, 1.0]
    pub fn values_in_range(&self) -> bool {
        FlavorAxis::ALL
            .iter()
            .all(|axis| (0.0..=1.0).contains(&self.axis_value(*axis)))
    }
}

/// Common view over records that expose a numeric id and a display name
///
/// Implemented by the three cascade levels so option sets can be built by a
/// single generic routine.
pub trait NamedRecord {
    fn id(&self) -> u32;
    fn name(&self) -> &str;
}

impl NamedRecord for Area {
    fn id(&self) -> u32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedRecord for Brewery {
    fn id(&self) -> u32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedRecord for Brand {
    fn id(&self) -> u32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_deserializes_camelcase() {
        let area: Area = serde_json::from_str(r#"{"id": 13, "name": "東京都"}"#).unwrap();
        assert_eq!(area.id, 13);
        assert_eq!(area.name, "東京都");
    }

    #[test]
    fn test_missing_name_becomes_empty() {
        let brewery: Brewery = serde_json::from_str(r#"{"id": 10, "areaId": 1}"#).unwrap();
        assert_eq!(brewery.name, "");
        assert_eq!(brewery.area_id, 1);
    }

    #[test]
    fn test_brand_deserializes_brewery_id() {
        let brand: Brand =
            serde_json::from_str(r#"{"id": 88, "name": "獺祭", "breweryId": 10}"#).unwrap();
        assert_eq!(brand.brewery_id, 10);
    }

    #[test]
    fn test_flavor_chart_requires_all_axes() {
        let missing_axis = r#"{"brandId": 1, "f1": 0.5, "f2": 0.5, "f3": 0.5, "f4": 0.5, "f5": 0.5}"#;
        assert!(serde_json::from_str::<FlavorChart>(missing_axis).is_err());
    }

    #[test]
    fn test_flavor_chart_axis_value() {
        let chart: FlavorChart = serde_json::from_str(
            r#"{"brandId": 1, "f1": 0.1, "f2": 0.2, "f3": 0.3, "f4": 0.4, "f5": 0.5, "f6": 0.6}"#,
        )
        .unwrap();
        assert_eq!(chart.axis_value(FlavorAxis::F1), 0.1);
        assert_eq!(chart.axis_value(FlavorAxis::F6), 0.6);
    }

    #[test]
    fn test_axis_order_and_wire_names() {
        let names: Vec<&str> = FlavorAxis::ALL.iter().map(|a| a.as_str()).collect();
        assert_eq!(names, vec!["f1", "f2", "f3", "f4", "f5", "f6"]);
    }

    #[test]
    fn test_values_in_range() {
        let mut chart = FlavorChart {
            brand_id: 1,
            f1: 0.0,
            f2: 0.5,
            f3: 1.0,
            f4: 0.2,
            f5: 0.3,
            f6: 0.4,
        };
        assert!(chart.values_in_range());
        chart.f3 = 1.2;
        assert!(!chart.values_in_range());
    }
}
