//! Molecular structures as stored in database entries.

use serde::{Deserialize, Serialize};

/// A structural item attached to an entry.
///
/// Adjacency lists are opaque text owned by the data files; the web layer
/// only URL-encodes them for the external drawing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Structure {
    /// A concrete species.
    Molecule { adjacency_list: String },
    /// A substructure pattern with wildcard atoms, used by group trees.
    Pattern { adjacency_list: String },
}

impl Structure {
    pub fn adjacency_list(&self) -> &str {
        match self {
            Structure::Molecule { adjacency_list } => adjacency_list,
            Structure::Pattern { adjacency_list } => adjacency_list,
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Structure::Pattern { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_tags_round_trip_from_json() {
        let mol: Structure = serde_json::from_str(
            r#"{"type": "molecule", "adjacency_list": "1 C 0 {2,S}\n2 O 0 {1,S}"}"#,
        )
        .unwrap();
        assert!(!mol.is_pattern());
        assert!(mol.adjacency_list().starts_with("1 C 0"));

        let pat: Structure = serde_json::from_str(
            r#"{"type": "pattern", "adjacency_list": "1 * R!H 0"}"#,
        )
        .unwrap();
        assert!(pat.is_pattern());
    }
}
