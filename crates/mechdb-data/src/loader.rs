//! Filesystem loader for reference databases.

use std::fs;
use std::path::Path;

use mechdb_chem::ModelData;
use mechdb_common::{MechdbError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info};

use crate::database::{Database, KineticsDatabase, SubDatabase, ThermoDatabase};
use crate::entry::Entry;
use crate::section::Section;

/// On-disk shape of one sub-database file.
#[derive(Deserialize)]
struct SubDatabaseFile<I, D> {
    name: String,
    /// URL label; defaults to the file stem when omitted.
    label: Option<String>,
    entries: Vec<Entry<I, D>>,
}

/// Load one database root.
///
/// The root contains up to three section directories (`depository/`,
/// `libraries/`, `groups/`); a missing directory is an empty section.
/// Every `*.json` file inside a section directory becomes one sub-database.
pub fn load<I, D>(path: &Path) -> Result<Database<I, D>>
where
    I: DeserializeOwned,
    D: DeserializeOwned + ModelData,
{
    let mut db = Database::default();

    for section in Section::ALL {
        let dir = path.join(section.as_str());
        if !dir.is_dir() {
            debug!(section = section.as_str(), "section directory absent, skipping");
            continue;
        }

        let mut files: Vec<_> = fs::read_dir(&dir)?
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let mut entry_count = 0usize;
        for file in &files {
            let sub = load_sub_database(file)?;
            entry_count += sub.len();
            let label = sub.label.clone();
            if db.section_mut(section).insert(label.clone(), sub).is_some() {
                return Err(MechdbError::Load(format!(
                    "duplicate sub-database label '{}' in {}",
                    label,
                    dir.display()
                )));
            }
        }

        info!(
            section = section.as_str(),
            sub_databases = files.len(),
            entries = entry_count,
            "loaded section"
        );
    }

    Ok(db)
}

fn load_sub_database<I, D>(file: &Path) -> Result<SubDatabase<I, D>>
where
    I: DeserializeOwned,
    D: DeserializeOwned + ModelData,
{
    let content = fs::read_to_string(file)?;
    let parsed: SubDatabaseFile<I, D> = serde_json::from_str(&content).map_err(|e| {
        MechdbError::Load(format!("{}: {}", file.display(), e))
    })?;

    let label = parsed.label.unwrap_or_else(|| {
        file.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    let mut sub = SubDatabase::new(parsed.name, label);
    for entry in parsed.entries {
        sub.insert(entry)?;
    }
    sub.validate_links()?;
    Ok(sub)
}

/// Both reference databases, loaded explicitly at startup and shared
/// read-only with the request handlers.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub thermo: ThermoDatabase,
    pub kinetics: KineticsDatabase,
}

impl ReferenceData {
    /// Load `<root>/thermo` and `<root>/kinetics`.
    pub fn load(root: &Path) -> Result<Self> {
        info!(root = %root.display(), "loading thermodynamics database");
        let thermo = load(&root.join("thermo"))?;
        info!(root = %root.display(), "loading kinetics database");
        let kinetics = load(&root.join("kinetics"))?;
        info!(
            thermo_entries = thermo.entry_count(),
            kinetics_entries = kinetics.entry_count(),
            "reference data ready"
        );
        Ok(Self { thermo, kinetics })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mechdb_chem::{Structure, ThermoData};
    use std::io::Write;

    fn write_file(dir: &Path, name: &str, content: &str) {
        let mut f = fs::File::create(dir.join(name)).unwrap();
        f.write_all(content.as_bytes()).unwrap();
    }

    const PRIMARY: &str = r#"{
        "name": "Primary Thermo Library",
        "label": "primary",
        "entries": [
            {
                "index": 2,
                "label": "ethane",
                "item": {"type": "molecule", "adjacency_list": "1 C 0 {2,S}\n2 C 0 {1,S}"},
                "data": {"format": "group_additivity", "h298": -84680.0, "s298": 229.6,
                         "tdata": [300.0, 400.0], "cpdata": [52.5, 65.5],
                         "tmin": 300.0, "tmax": 1500.0},
                "reference": "S. Smith, J. Phys. Chem. 1994."
            },
            {
                "index": 1,
                "label": "methane",
                "item": {"type": "molecule", "adjacency_list": "1 C 0"},
                "data": {"format": "link", "target": 2}
            }
        ]
    }"#;

    #[test]
    fn test_load_thermo_root() {
        let tmp = tempfile::tempdir().unwrap();
        let libraries = tmp.path().join("libraries");
        fs::create_dir_all(&libraries).unwrap();
        write_file(&libraries, "primary.json", PRIMARY);

        let db: Database<Structure, ThermoData> = load(tmp.path()).unwrap();
        let sub = db.subsection(Section::Libraries, "primary").unwrap();
        assert_eq!(sub.name, "Primary Thermo Library");
        assert_eq!(sub.len(), 2);
        // Missing depository/ and groups/ directories are empty sections.
        assert!(db.depository.is_empty());
        assert!(db.groups.is_empty());
    }

    #[test]
    fn test_label_falls_back_to_file_stem() {
        let tmp = tempfile::tempdir().unwrap();
        let groups = tmp.path().join("groups");
        fs::create_dir_all(&groups).unwrap();
        write_file(
            &groups,
            "radical.json",
            r#"{"name": "Radical Groups", "entries": []}"#,
        );

        let db: Database<Structure, ThermoData> = load(tmp.path()).unwrap();
        assert!(db.subsection(Section::Groups, "radical").is_some());
    }

    #[test]
    fn test_dangling_link_fails_load() {
        let tmp = tempfile::tempdir().unwrap();
        let depository = tmp.path().join("depository");
        fs::create_dir_all(&depository).unwrap();
        write_file(
            &depository,
            "bad.json",
            r#"{
                "name": "Bad",
                "entries": [{
                    "index": 1,
                    "label": "orphan",
                    "item": {"type": "molecule", "adjacency_list": "1 C 0"},
                    "data": {"format": "link", "target": 5}
                }]
            }"#,
        );

        let err = load::<Structure, ThermoData>(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("links to missing index 5"));
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let libraries = tmp.path().join("libraries");
        fs::create_dir_all(&libraries).unwrap();
        write_file(&libraries, "broken.json", "{ not json");

        let err = load::<Structure, ThermoData>(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_reference_data_loads_both_roots() {
        let tmp = tempfile::tempdir().unwrap();
        let thermo_lib = tmp.path().join("thermo/libraries");
        fs::create_dir_all(&thermo_lib).unwrap();
        write_file(&thermo_lib, "primary.json", PRIMARY);
        fs::create_dir_all(tmp.path().join("kinetics")).unwrap();

        let data = ReferenceData::load(tmp.path()).unwrap();
        assert_eq!(data.thermo.entry_count(), 2);
        assert_eq!(data.kinetics.entry_count(), 0);
    }
}
