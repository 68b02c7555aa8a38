//! Selectable option sets for the cascade levels
//!
//! Builds the name to id mappings a client presents as dropdown choices.
//! Records with an empty display name are never selectable and are dropped
//! here. When upstream data carries duplicate names the later record wins,
//! keeping the position of the first occurrence; collisions are logged but
//! never fatal.

use sakenavi_common::models::NamedRecord;
use serde::Serialize;
use tracing::debug;

/// One selectable option
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OptionEntry {
    pub name: String,
    pub id: u32,
}

/// Insertion-ordered name to id mapping for one cascade level
///
/// Serializes as an ordered array of `{name, id}` objects so clients can
/// render choices in upstream order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct OptionSet {
    entries: Vec<OptionEntry>,
}

impl OptionSet {
    /// Insert an option; a duplicate name overwrites the stored id while
    /// keeping the original position.
    pub fn insert(&mut self, name: &str, id: u32) {
        if let Some(existing) = self.entries.iter_mut().find(|e| e.name == name) {
            debug!(name, old_id = existing.id, new_id = id, "Duplicate option name, last wins");
            existing.id = id;
        } else {
            self.entries.push(OptionEntry {
                name: name.to_string(),
                id,
            });
        }
    }

    /// Id stored for a display name
    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries.iter().find(|e| e.name == name).map(|e| e.id)
    }

    /// Whether any stored option carries this id
    pub fn contains_id(&self, id: u32) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[OptionEntry] {
        &self.entries
    }
}

/// Build an option set from records, in input order
///
/// Applies the filter predicate first, then excludes records whose name is
/// the empty string (the explicit emptiness rule; numeric ids of zero are
/// still valid).
pub fn options_from<R, F>(records: &[R], filter: F) -> OptionSet
where
    R: NamedRecord,
    F: Fn(&R) -> bool,
{
    let mut options = OptionSet::default();
    for record in records.iter().filter(|r| filter(r)) {
        if record.name().is_empty() {
            continue;
        }
        options.insert(record.name(), record.id());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use sakenavi_common::models::{Area, Brewery};

    fn brewery(id: u32, name: &str, area_id: u32) -> Brewery {
        Brewery {
            id,
            name: name.to_string(),
            area_id,
        }
    }

    #[test]
    fn test_empty_names_excluded() {
        let areas = vec![
            Area {
                id: 1,
                name: "北海道".to_string(),
            },
            Area {
                id: 2,
                name: String::new(),
            },
        ];
        let options = options_from(&areas, |_| true);
        assert_eq!(options.len(), 1);
        assert_eq!(options.get("北海道"), Some(1));
    }

    #[test]
    fn test_area_filter_scenario() {
        // Area "Tokyo" (id=1): the unnamed brewery in the same area is dropped
        let breweries = vec![brewery(10, "Edo Brewery", 1), brewery(11, "", 1)];
        let options = options_from(&breweries, |b| b.area_id == 1);
        assert_eq!(options.len(), 1);
        assert_eq!(options.get("Edo Brewery"), Some(10));
    }

    #[test]
    fn test_filter_excludes_other_areas() {
        let breweries = vec![
            brewery(10, "Edo Brewery", 1),
            brewery(20, "Naniwa Brewery", 27),
        ];
        let options = options_from(&breweries, |b| b.area_id == 1);
        assert!(options.contains_id(10));
        assert!(!options.contains_id(20));
    }

    #[test]
    fn test_duplicate_name_last_wins_keeps_position() {
        let breweries = vec![
            brewery(1, "First", 1),
            brewery(2, "Twin", 1),
            brewery(3, "Twin", 1),
        ];
        let options = options_from(&breweries, |_| true);
        assert_eq!(options.len(), 2);
        assert_eq!(options.get("Twin"), Some(3));
        // Overwrite keeps the original insertion position
        assert_eq!(options.entries()[1].name, "Twin");
        assert_eq!(options.entries()[1].id, 3);
    }

    #[test]
    fn test_zero_id_is_valid() {
        let areas = vec![Area {
            id: 0,
            name: "その他".to_string(),
        }];
        let options = options_from(&areas, |_| true);
        assert_eq!(options.get("その他"), Some(0));
    }

    #[test]
    fn test_serializes_in_insertion_order() {
        let areas = vec![
            Area {
                id: 2,
                name: "青森県".to_string(),
            },
            Area {
                id: 1,
                name: "北海道".to_string(),
            },
        ];
        let options = options_from(&areas, |_| true);
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r#"[{"name":"青森県","id":2},{"name":"北海道","id":1}]"#
        );
    }
}
