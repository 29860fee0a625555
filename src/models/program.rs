//! Program record data structures
//!
//! Catalog files come from several hand-maintained sources, so field names
//! and shapes vary: grades may be free text or a list of band labels,
//! formats a flag map or a list of labels. Fields are read permissively
//! with the first present key winning; unknown keys are ignored.

use std::collections::{BTreeMap, HashSet};

/// Grade description as raw text. Kept as text (not parsed intervals) so
/// the source formatting stays the single source of truth; intervals are
/// derived from it on every filter pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradesField(pub String);

// Accepts a plain string ("K–1, 6–8") or a list of band labels
// (["K–1", "6–8"]), which is joined into the equivalent comma list.
impl<'de> serde::Deserialize<'de> for GradesField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, SeqAccess, Visitor};

        struct GradesFieldVisitor;

        impl<'de> Visitor<'de> for GradesFieldVisitor {
            type Value = GradesField;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a grade string or a list of band labels")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(GradesField(value.to_string()))
            }

            fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut labels: Vec<String> = Vec::new();
                while let Some(label) = seq.next_element::<String>()? {
                    labels.push(label);
                }
                Ok(GradesField(labels.join(", ")))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(GradesField::default())
            }
        }

        deserializer.deserialize_any(GradesFieldVisitor)
    }
}

/// Set of enabled delivery-format ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatsField(pub HashSet<String>);

// Accepts a flag map ({"10-week": true, "4-week": false}) or a list of
// labels (["10-week"]). Only true flags count as enabled.
impl<'de> serde::Deserialize<'de> for FormatsField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, SeqAccess, Visitor};

        struct FormatsFieldVisitor;

        impl<'de> Visitor<'de> for FormatsFieldVisitor {
            type Value = FormatsField;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a map of format flags or a list of format labels")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut enabled = HashSet::new();
                while let Some((key, value)) = map.next_entry::<String, bool>()? {
                    if value {
                        enabled.insert(key);
                    }
                }
                Ok(FormatsField(enabled))
            }

            fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
            where
                S: SeqAccess<'de>,
            {
                let mut enabled = HashSet::new();
                while let Some(label) = seq.next_element::<String>()? {
                    enabled.insert(label);
                }
                Ok(FormatsField(enabled))
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(FormatsField::default())
            }
        }

        deserializer.deserialize_any(FormatsFieldVisitor)
    }
}

/// A single program record. Immutable once loaded; the whole catalog is
/// replaced wholesale on reload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub name: String,
    /// Category, type, or pillar depending on the source; one field.
    pub category: String,
    pub grades: GradesField,
    pub formats: FormatsField,
    pub tags: Vec<String>,
    pub blurb: String,
    /// Non-preset format descriptions keyed by source-specific names
    /// (e.g. {"cadence": "Monthly"}).
    pub notes: BTreeMap<String, String>,
    pub estimate_url: Option<String>,
    pub inquiry_url: Option<String>,
}

// Each field accepts several alternate key names; the first present key
// wins and any later alias of an already-set field is ignored rather than
// rejected, so a record carrying both "name" and "title" still loads.
impl<'de> serde::Deserialize<'de> for Program {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{IgnoredAny, MapAccess, Visitor};

        struct ProgramVisitor;

        // Take the value for the first occurrence of a field, skip the rest
        fn first<'de, M, T>(slot: &mut Option<T>, map: &mut M) -> Result<(), M::Error>
        where
            M: MapAccess<'de>,
            T: serde::Deserialize<'de>,
        {
            if slot.is_none() {
                *slot = Some(map.next_value()?);
            } else {
                let _: IgnoredAny = map.next_value()?;
            }
            Ok(())
        }

        impl<'de> Visitor<'de> for ProgramVisitor {
            type Value = Program;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a program object")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut category: Option<String> = None;
                let mut grades: Option<GradesField> = None;
                let mut formats: Option<FormatsField> = None;
                let mut tags: Option<Vec<String>> = None;
                let mut blurb: Option<String> = None;
                let mut notes: Option<BTreeMap<String, String>> = None;
                let mut estimate_url: Option<Option<String>> = None;
                let mut inquiry_url: Option<Option<String>> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" | "title" | "program" => first(&mut name, &mut map)?,
                        "category" | "pillar" | "type" => first(&mut category, &mut map)?,
                        "grades" | "gradeBands" | "ages" => first(&mut grades, &mut map)?,
                        "formats" => first(&mut formats, &mut map)?,
                        "tags" | "labels" => first(&mut tags, &mut map)?,
                        "blurb" | "description" | "summary" => first(&mut blurb, &mut map)?,
                        "notes" => first(&mut notes, &mut map)?,
                        "estimateUrl" | "ctaEstimateUrl" => first(&mut estimate_url, &mut map)?,
                        "inquiryUrl" | "ctaInquiryUrl" => first(&mut inquiry_url, &mut map)?,
                        _ => {
                            let _: IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(Program {
                    name: name.unwrap_or_default(),
                    category: category.unwrap_or_default(),
                    grades: grades.unwrap_or_default(),
                    formats: formats.unwrap_or_default(),
                    tags: tags.unwrap_or_default(),
                    blurb: blurb.unwrap_or_default(),
                    notes: notes.unwrap_or_default(),
                    estimate_url: estimate_url.unwrap_or_default(),
                    inquiry_url: inquiry_url.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_map(ProgramVisitor)
    }
}

impl Program {
    /// Raw grade text as it appeared in the source.
    pub fn grades_text(&self) -> &str {
        &self.grades.0
    }

    pub fn has_format(&self, id: &str) -> bool {
        self.formats.0.contains(id)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn is_school(&self) -> bool {
        self.category == "School"
    }

    /// Non-empty note values, in key order, for the card tag row when no
    /// preset format applies.
    pub fn note_values(&self) -> Vec<&str> {
        self.notes
            .values()
            .map(String::as_str)
            .filter(|v| !v.is_empty())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grades_from_string() {
        let p: Program = serde_json::from_str(r#"{"name": "Tides", "grades": "K–1, 6–8"}"#).unwrap();
        assert_eq!(p.grades_text(), "K–1, 6–8");
    }

    #[test]
    fn test_grades_from_label_list() {
        let p: Program = serde_json::from_str(r#"{"name": "Tides", "grades": ["K–1", "6–8"]}"#).unwrap();
        assert_eq!(p.grades_text(), "K–1, 6–8");
    }

    #[test]
    fn test_formats_from_flag_map() {
        let json = r#"{"name": "Tides", "formats": {"10-week": true, "4-week": false}}"#;
        let p: Program = serde_json::from_str(json).unwrap();
        assert!(p.has_format("10-week"));
        assert!(!p.has_format("4-week"));
    }

    #[test]
    fn test_formats_from_label_list() {
        let json = r#"{"name": "Tides", "formats": ["5-day camp"]}"#;
        let p: Program = serde_json::from_str(json).unwrap();
        assert!(p.has_format("5-day camp"));
        assert!(!p.has_format("10-week"));
    }

    #[test]
    fn test_field_aliases_first_present_wins() {
        let json = r#"{
            "title": "Estuary Explorers",
            "pillar": "Community",
            "ages": "All Ages",
            "labels": ["outdoor"],
            "summary": "Beach walks."
        }"#;
        let p: Program = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Estuary Explorers");
        assert_eq!(p.category, "Community");
        assert_eq!(p.grades_text(), "All Ages");
        assert!(p.has_tag("outdoor"));
        assert_eq!(p.blurb, "Beach walks.");
    }

    #[test]
    fn test_duplicate_alias_keys_first_wins() {
        // A record may carry two names for the same field; the first key
        // wins and the later alias is ignored, not rejected
        let json = r#"{
            "name": "Tides",
            "title": "Tides Alt",
            "category": "School",
            "pillar": "Community",
            "blurb": "First.",
            "summary": "Second."
        }"#;
        let p: Program = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Tides");
        assert_eq!(p.category, "School");
        assert_eq!(p.blurb, "First.");
    }

    #[test]
    fn test_missing_fields_default() {
        let p: Program = serde_json::from_str(r#"{"name": "Bare"}"#).unwrap();
        assert_eq!(p.grades_text(), "");
        assert!(p.tags.is_empty());
        assert!(p.estimate_url.is_none());
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let json = r#"{"name": "Tides", "color": "teal", "slots": 12}"#;
        let p: Program = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "Tides");
    }

    #[test]
    fn test_note_values_skip_empty() {
        let json = r#"{"name": "Club", "notes": {"cadence": "Monthly", "extra": ""}}"#;
        let p: Program = serde_json::from_str(json).unwrap();
        assert_eq!(p.note_values(), vec!["Monthly"]);
    }
}
