//! Frontend Models
//!
//! Data structures supplied by the content source.

use serde::{Deserialize, Serialize};

/// One portfolio project (matches `content/projects.json`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub image_url: String,
    pub full_description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: String,
    pub live_url: String,
    pub github_url: String,
}

/// Contact form payload handed to the submission collaborator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}
