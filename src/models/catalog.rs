//! Catalog loading and document structure
//!
//! A catalog file is either a bare JSON array of programs or an object
//! with a `programs` list plus optional page metadata.

use std::io;
use std::path::Path;

use crate::models::Program;

/// Embedded sample catalog, used when no data file can be found.
pub const EMBEDDED_SAMPLE: &str = include_str!("../../data.json");

/// Loaded program catalog plus page metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub org_name: String,
    pub page_title: String,
    pub cta_estimate_url: String,
    pub cta_inquiry_url: String,
    pub programs: Vec<Program>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            org_name: "Puget Sound Estuarium".to_string(),
            page_title: "K–12 Program Finder".to_string(),
            cta_estimate_url: "#estimate".to_string(),
            cta_inquiry_url: "#inquire".to_string(),
            programs: Vec::new(),
        }
    }
}

// Accepts both catalog shapes: a bare array of program objects, or an
// object with a "programs" list and optional metadata keys.
impl<'de> serde::Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{MapAccess, SeqAccess, Visitor};

        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a list of programs or an object with a programs field")
            }

            fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut catalog = Catalog::default();
                while let Some(program) = seq.next_element::<Program>()? {
                    catalog.programs.push(program);
                }
                Ok(catalog)
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut catalog = Catalog::default();
                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "programs" => {
                            catalog.programs = map.next_value()?;
                        }
                        "orgName" => {
                            catalog.org_name = map.next_value()?;
                        }
                        "pageTitle" => {
                            catalog.page_title = map.next_value()?;
                        }
                        "ctaEstimateUrl" => {
                            catalog.cta_estimate_url = map.next_value()?;
                        }
                        "ctaInquiryUrl" => {
                            catalog.cta_inquiry_url = map.next_value()?;
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }
                Ok(catalog)
            }
        }

        deserializer.deserialize_any(CatalogVisitor)
    }
}

impl Catalog {
    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Parse the embedded sample catalog.
    pub fn embedded() -> io::Result<Self> {
        serde_json::from_str(EMBEDDED_SAMPLE)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn create_temp_catalog_file(content: &str) -> (tempfile::NamedTempFile, PathBuf) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        let path = file.path().to_path_buf();
        (file, path)
    }

    #[test]
    fn test_catalog_from_object() {
        let json = r#"{
            "orgName": "Tidal Center",
            "pageTitle": "Find a Program",
            "ctaEstimateUrl": "https://example.org/estimate",
            "ctaInquiryUrl": "https://example.org/inquire",
            "programs": [
                {"name": "Plankton Lab", "category": "School", "grades": "2–5"}
            ]
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.org_name, "Tidal Center");
        assert_eq!(catalog.page_title, "Find a Program");
        assert_eq!(catalog.programs.len(), 1);
        assert_eq!(catalog.programs[0].name, "Plankton Lab");
    }

    #[test]
    fn test_catalog_from_bare_list() {
        let json = r#"[{"name": "Plankton Lab"}, {"name": "Shore Walk"}]"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.programs.len(), 2);
        // Metadata falls back to defaults
        assert_eq!(catalog.org_name, "Puget Sound Estuarium");
        assert_eq!(catalog.cta_estimate_url, "#estimate");
    }

    #[test]
    fn test_catalog_survives_record_with_duplicate_aliases() {
        // One record carrying two aliases of the same field must not fail
        // the whole catalog load
        let json = r#"{"programs": [
            {"name": "Tides", "title": "Tides Alt", "category": "School"},
            {"name": "Shore Walk", "category": "Community"}
        ]}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.programs.len(), 2);
        assert_eq!(catalog.programs[0].name, "Tides");
    }

    #[test]
    fn test_catalog_unknown_keys_ignored() {
        let json = r#"{"programs": [], "version": 3, "updated": "2025-01-01"}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert!(catalog.programs.is_empty());
    }

    #[test]
    fn test_catalog_load_success() {
        let json = r#"{"programs": [{"name": "Plankton Lab"}]}"#;
        let (_file, path) = create_temp_catalog_file(json);

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.programs.len(), 1);
    }

    #[test]
    fn test_catalog_load_file_not_found() {
        let path = PathBuf::from("/nonexistent/path/data.json");
        let result = Catalog::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_catalog_load_invalid_json() {
        let (_file, path) = create_temp_catalog_file("{ invalid json }");

        let result = Catalog::load(&path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_embedded_sample_parses() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.programs.is_empty());
    }
}
