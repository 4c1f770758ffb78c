//! Project Catalog
//!
//! Immutable id -> record mapping loaded from the bundled content file.

use std::collections::BTreeMap;

use crate::models::ProjectRecord;

/// Content shipped with the site
const BUNDLED_PROJECTS: &str = include_str!("../content/projects.json");

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    projects: BTreeMap<u32, ProjectRecord>,
}

impl Catalog {
    pub fn new(records: Vec<ProjectRecord>) -> Self {
        let mut projects = BTreeMap::new();
        for record in records {
            if let Some(previous) = projects.insert(record.id, record) {
                log::warn!("duplicate project id {}, keeping the later record", previous.id);
            }
        }
        Self { projects }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Ok(Self::new(records))
    }

    /// Catalog from `content/projects.json`; empty if the file is malformed.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_PROJECTS).unwrap_or_else(|err| {
            log::warn!("project content unreadable: {}", err);
            Self::default()
        })
    }

    pub fn get(&self, id: u32) -> Option<&ProjectRecord> {
        self.projects.get(&id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.projects.contains_key(&id)
    }

    /// Records in id order
    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.values()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn make_record(id: u32, title: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            title: title.to_string(),
            summary: String::new(),
            image_url: format!("images/project-{}.png", id),
            full_description: format!("{} in detail", title),
            technologies: vec!["Rust".to_string(), "WebAssembly".to_string()],
            features: vec!["Fast".to_string()],
            challenges: "Keeping it small".to_string(),
            live_url: "https://example.com".to_string(),
            github_url: "https://github.com/example/repo".to_string(),
        }
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::bundled();
        assert!(!catalog.is_empty());
        let ids: Vec<u32> = catalog.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }

    #[test]
    fn test_from_json_defaults_optional_fields() {
        let catalog = Catalog::from_json(
            r#"[{
                "id": 7,
                "title": "Seven",
                "imageUrl": "seven.png",
                "fullDescription": "Lucky",
                "liveUrl": "https://seven.dev",
                "githubUrl": "https://github.com/seven"
            }]"#,
        )
        .unwrap();
        let record = catalog.get(7).unwrap();
        assert!(record.technologies.is_empty());
        assert!(record.features.is_empty());
        assert_eq!(record.challenges, "");
        assert!(catalog.get(8).is_none());
    }

    #[test]
    fn test_duplicate_id_keeps_later() {
        let catalog = Catalog::new(vec![make_record(1, "First"), make_record(1, "Second")]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().title, "Second");
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(Catalog::from_json("{ not json").is_err());
    }
}
