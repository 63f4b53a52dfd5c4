//! Sub-databases and the three-section database that contains them.

use std::collections::BTreeMap;

use mechdb_chem::ModelData;
use mechdb_chem::{KineticsData, Reaction, Structure, ThermoData};
use mechdb_common::{MechdbError, Result};

use crate::entry::Entry;
use crate::section::Section;

/// One collection of indexed entries, e.g. a single thermo library.
#[derive(Debug, Clone)]
pub struct SubDatabase<I, D> {
    /// Descriptive name shown in page headings.
    pub name: String,
    /// Short label used in URLs.
    pub label: String,
    entries: BTreeMap<i64, Entry<I, D>>,
}

impl<I, D> SubDatabase<I, D> {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Insert an entry, rejecting duplicate indices.
    pub fn insert(&mut self, entry: Entry<I, D>) -> Result<()> {
        let index = entry.index;
        if self.entries.insert(index, entry).is_some() {
            return Err(MechdbError::Load(format!(
                "duplicate entry index {} in sub-database '{}'",
                index, self.label
            )));
        }
        Ok(())
    }

    pub fn get(&self, index: i64) -> Option<&Entry<I, D>> {
        self.entries.get(&index)
    }

    /// Entries in ascending index order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry<I, D>> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<I, D: ModelData> SubDatabase<I, D> {
    /// Check that every link-type entry points at an existing index.
    pub fn validate_links(&self) -> Result<()> {
        for entry in self.entries.values() {
            if let Some(target) = entry.data.link_target() {
                if !self.entries.contains_key(&target) {
                    return Err(MechdbError::Load(format!(
                        "entry {} in sub-database '{}' links to missing index {}",
                        entry.index, self.label, target
                    )));
                }
            }
        }
        Ok(())
    }
}

/// A reference database: three sections of labelled sub-databases.
#[derive(Debug, Clone)]
pub struct Database<I, D> {
    pub depository: BTreeMap<String, SubDatabase<I, D>>,
    pub libraries: BTreeMap<String, SubDatabase<I, D>>,
    pub groups: BTreeMap<String, SubDatabase<I, D>>,
}

pub type ThermoDatabase = Database<Structure, ThermoData>;
pub type KineticsDatabase = Database<Reaction, KineticsData>;

impl<I, D> Default for Database<I, D> {
    fn default() -> Self {
        Self {
            depository: BTreeMap::new(),
            libraries: BTreeMap::new(),
            groups: BTreeMap::new(),
        }
    }
}

impl<I, D> Database<I, D> {
    pub fn section(&self, section: Section) -> &BTreeMap<String, SubDatabase<I, D>> {
        match section {
            Section::Depository => &self.depository,
            Section::Libraries => &self.libraries,
            Section::Groups => &self.groups,
        }
    }

    pub fn section_mut(
        &mut self,
        section: Section,
    ) -> &mut BTreeMap<String, SubDatabase<I, D>> {
        match section {
            Section::Depository => &mut self.depository,
            Section::Libraries => &mut self.libraries,
            Section::Groups => &mut self.groups,
        }
    }

    /// Look up a sub-database by section and subsection label.
    pub fn subsection(&self, section: Section, label: &str) -> Option<&SubDatabase<I, D>> {
        self.section(section).get(label)
    }

    /// Total number of entries across all sections.
    pub fn entry_count(&self) -> usize {
        Section::ALL
            .iter()
            .map(|s| self.section(*s).values().map(SubDatabase::len).sum::<usize>())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: i64, data: ThermoData) -> Entry<Structure, ThermoData> {
        Entry {
            index,
            label: format!("species{index}"),
            item: Structure::Molecule {
                adjacency_list: "1 C 0".to_string(),
            },
            data,
            reference: String::new(),
        }
    }

    fn ga() -> ThermoData {
        ThermoData::GroupAdditivity {
            h298: 0.0,
            s298: 0.0,
            tdata: vec![],
            cpdata: vec![],
            tmin: 300.0,
            tmax: 1500.0,
        }
    }

    #[test]
    fn test_duplicate_index_rejected() {
        let mut sub = SubDatabase::new("Test", "test");
        sub.insert(entry(1, ga())).unwrap();
        let err = sub.insert(entry(1, ga())).unwrap_err();
        assert!(err.to_string().contains("duplicate entry index 1"));
    }

    #[test]
    fn test_entries_iterate_in_index_order() {
        let mut sub = SubDatabase::new("Test", "test");
        for index in [5, 1, 3] {
            sub.insert(entry(index, ga())).unwrap();
        }
        let indices: Vec<i64> = sub.entries().map(|e| e.index).collect();
        assert_eq!(indices, vec![1, 3, 5]);
    }

    #[test]
    fn test_dangling_link_detected() {
        let mut sub = SubDatabase::new("Test", "test");
        sub.insert(entry(1, ga())).unwrap();
        sub.insert(entry(2, ThermoData::Link { target: 99 })).unwrap();
        assert!(sub.validate_links().is_err());
    }

    #[test]
    fn test_resolvable_link_accepted() {
        let mut sub = SubDatabase::new("Test", "test");
        sub.insert(entry(1, ga())).unwrap();
        sub.insert(entry(2, ThermoData::Link { target: 1 })).unwrap();
        sub.validate_links().unwrap();
    }

    #[test]
    fn test_subsection_lookup_by_label() {
        let mut db = ThermoDatabase::default();
        let mut sub = SubDatabase::new("Primary Library", "primary");
        sub.insert(entry(1, ga())).unwrap();
        db.section_mut(Section::Libraries).insert("primary".to_string(), sub);

        assert!(db.subsection(Section::Libraries, "primary").is_some());
        assert!(db.subsection(Section::Libraries, "missing").is_none());
        assert!(db.subsection(Section::Depository, "primary").is_none());
        assert_eq!(db.entry_count(), 1);
    }
}
