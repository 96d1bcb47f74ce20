use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{collate::locale_cmp, records::FlatRecord, text::to_proper_case};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "cantones")]
    pub cantons: Vec<Canton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canton {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "parroquias")]
    pub parishes: Vec<String>,
}

impl Province {
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Canton {
    fn new(raw_name: &str) -> Self {
        Self {
            name: to_proper_case(raw_name),
            parishes: Vec::new(),
        }
    }

    fn add_parish(&mut self, raw_name: &str) {
        let parish = to_proper_case(raw_name);
        if !self.parishes.contains(&parish) {
            self.parishes.push(parish);
        }
    }
}

// Cantons keyed by raw name in first-seen order; display names are fixed when the group is created.
struct ProvinceGroup {
    name: String,
    cantons: IndexMap<String, Canton>,
}

/// Folds flat records into the sorted province -> canton -> parish tree.
///
/// Provinces and cantons are grouped by their *raw* name, so the same place
/// spelled with different casing across rows ends up as two groups. Parishes
/// are deduplicated on their normalized name instead. Groups whose display
/// names tie keep the order in which their raw names first appeared.
pub fn aggregate(records: &[FlatRecord]) -> Vec<Province> {
    let mut groups: IndexMap<&str, ProvinceGroup> = IndexMap::new();

    for record in records {
        let province_name = record.province_name.as_str();
        let canton_name = record.canton_name.as_str();
        let parish_name = record.parish_name.as_str();

        if province_name.is_empty() || canton_name.is_empty() || parish_name.is_empty() {
            log::debug!(
                "Skipping record with empty name: province={:?} canton={:?} parish={:?}",
                province_name,
                canton_name,
                parish_name
            );
            continue;
        }

        groups
            .entry(province_name)
            .or_insert_with(|| ProvinceGroup {
                name: to_proper_case(province_name),
                cantons: IndexMap::new(),
            })
            .cantons
            .entry(canton_name.to_string())
            .or_insert_with(|| Canton::new(canton_name))
            .add_parish(parish_name);
    }

    let mut provinces: Vec<Province> = groups
        .into_values()
        .map(|group| {
            let mut cantons: Vec<Canton> = group
                .cantons
                .into_values()
                .map(|mut canton| {
                    canton.parishes.sort();
                    canton
                })
                .collect();
            cantons.sort_by(|a, b| locale_cmp(&a.name, &b.name));

            Province {
                name: group.name,
                cantons,
            }
        })
        .collect();

    provinces.sort_by(|a, b| locale_cmp(&a.name, &b.name));
    provinces
}

/// Counts of each level in a built tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HierarchyStats {
    pub provinces: usize,
    pub cantons: usize,
    pub parishes: usize,
}

impl HierarchyStats {
    pub fn from_provinces(provinces: &[Province]) -> Self {
        provinces.iter().fold(Self::default(), |mut stats, province| {
            stats.provinces += 1;
            stats.cantons += province.cantons.len();
            stats.parishes += province
                .cantons
                .iter()
                .map(|canton| canton.parishes.len())
                .sum::<usize>();
            stats
        })
    }
}

impl fmt::Display for HierarchyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   - {} provinces", self.provinces)?;
        writeln!(f, "   - {} cantons", self.cantons)?;
        write!(f, "   - {} parishes", self.parishes)
    }
}
