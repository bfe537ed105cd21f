use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::portfolio::domain::records::{Record, RecordList};

//
// ──────────────────────────────────────────────────────────
// Identifiers
// ──────────────────────────────────────────────────────────
//

/// Identifier of a record inside one of the portfolio collections.
/// Generated once at creation time and never rewritten.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ──────────────────────────────────────────────────────────
// Singletons
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "lenient")]
    pub name: String,
    #[serde(deserialize_with = "lenient")]
    pub title: String,
    #[serde(deserialize_with = "lenient")]
    pub phone: String,
    #[serde(deserialize_with = "lenient")]
    pub email: String,
    #[serde(deserialize_with = "lenient")]
    pub location: String,
    #[serde(deserialize_with = "lenient")]
    pub linkedin: String,
    #[serde(deserialize_with = "lenient")]
    pub photo: String,
    #[serde(deserialize_with = "lenient")]
    pub summary: String,
}

/// Shallow merge: `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub photo: Option<String>,
    pub summary: Option<String>,
}

impl Profile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        merge(&mut self.name, patch.name);
        merge(&mut self.title, patch.title);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.email, patch.email);
        merge(&mut self.location, patch.location);
        merge(&mut self.linkedin, patch.linkedin);
        merge(&mut self.photo, patch.photo);
        merge(&mut self.summary, patch.summary);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Resume {
    /// Blob/data URL or plain path. Empty when no resume is attached.
    #[serde(deserialize_with = "lenient")]
    pub url: String,
    /// Set whenever a resume is assigned; nothing is actually parsed.
    #[serde(deserialize_with = "lenient")]
    pub parsed: bool,
}

impl Resume {
    pub fn assigned(url: String) -> Self {
        Self { url, parsed: true }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//
// ──────────────────────────────────────────────────────────
// Collection records
// ──────────────────────────────────────────────────────────
//

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub link: String,
    #[serde(default, deserialize_with = "lenient")]
    pub image: String,
    #[serde(default, deserialize_with = "lenient")]
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: String,
    pub tech: Vec<String>,
}

/// `tech` replaces the whole list when set (no element-wise merge).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    pub image: Option<String>,
    pub tech: Option<Vec<String>>,
}

impl Record for Project {
    type Draft = ProjectDraft;
    type Patch = ProjectPatch;

    fn from_draft(id: RecordId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            link: draft.link,
            image: draft.image,
            tech: draft.tech,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, patch: ProjectPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.description, patch.description);
        merge(&mut self.link, patch.link);
        merge(&mut self.image, patch.image);
        merge(&mut self.tech, patch.tech);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Experience {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub role: String,
    #[serde(default, deserialize_with = "lenient")]
    pub company: String,
    #[serde(default, deserialize_with = "lenient")]
    pub period: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
    pub role: Option<String>,
    pub company: Option<String>,
    pub period: Option<String>,
    pub description: Option<Vec<String>>,
}

impl Record for Experience {
    type Draft = ExperienceDraft;
    type Patch = ExperiencePatch;

    fn from_draft(id: RecordId, draft: ExperienceDraft) -> Self {
        Self {
            id,
            role: draft.role,
            company: draft.company,
            period: draft.period,
            description: draft.description,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, patch: ExperiencePatch) {
        merge(&mut self.role, patch.role);
        merge(&mut self.company, patch.company);
        merge(&mut self.period, patch.period);
        merge(&mut self.description, patch.description);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub degree: String,
    #[serde(default, deserialize_with = "lenient")]
    pub institution: String,
    #[serde(default, deserialize_with = "lenient")]
    pub grade: String,
    #[serde(default, deserialize_with = "lenient")]
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub grade: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationPatch {
    pub degree: Option<String>,
    pub institution: Option<String>,
    pub grade: Option<String>,
    pub year: Option<String>,
}

impl Record for Education {
    type Draft = EducationDraft;
    type Patch = EducationPatch;

    fn from_draft(id: RecordId, draft: EducationDraft) -> Self {
        Self {
            id,
            degree: draft.degree,
            institution: draft.institution,
            grade: draft.grade,
            year: draft.year,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, patch: EducationPatch) {
        merge(&mut self.degree, patch.degree);
        merge(&mut self.institution, patch.institution);
        merge(&mut self.grade, patch.grade);
        merge(&mut self.year, patch.year);
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Certification {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub issuer: String,
    #[serde(default, deserialize_with = "lenient")]
    pub date: String,
    /// Blob URL of the certificate scan, empty when none was attached.
    #[serde(default, deserialize_with = "lenient")]
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationDraft {
    pub title: String,
    pub issuer: String,
    pub date: String,
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationPatch {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub file: Option<String>,
}

impl Record for Certification {
    type Draft = CertificationDraft;
    type Patch = CertificationPatch;

    fn from_draft(id: RecordId, draft: CertificationDraft) -> Self {
        Self {
            id,
            title: draft.title,
            issuer: draft.issuer,
            date: draft.date,
            file: draft.file,
        }
    }

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn apply(&mut self, patch: CertificationPatch) {
        merge(&mut self.title, patch.title);
        merge(&mut self.issuer, patch.issuer);
        merge(&mut self.date, patch.date);
        merge(&mut self.file, patch.file);
    }
}

//
// ──────────────────────────────────────────────────────────
// Aggregates
// ──────────────────────────────────────────────────────────
//

/// Durable subset of the portfolio state. This is exactly what gets written
/// under the content key; admin mode and theme never appear here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct PortfolioSnapshot {
    pub profile: Profile,
    pub resume: Resume,
    pub skills: Vec<String>,
    pub projects: RecordList<Project>,
    pub experience: RecordList<Experience>,
    pub education: RecordList<Education>,
    pub certifications: RecordList<Certification>,
}

/// Everything the presentation layer reads.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioView {
    #[serde(flatten)]
    pub content: PortfolioSnapshot,
    pub admin_mode: bool,
    pub theme: Theme,
}

/// Persisted values are user data: a `null` or mis-typed field falls back to
/// the field default instead of failing the whole record.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    if raw.is_null() {
        return Ok(T::default());
    }
    match T::deserialize(raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!(error = %e, "Replacing malformed persisted value with its default");
            Ok(T::default())
        }
    }
}

fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: RecordId::from("p1"),
            title: "A".to_string(),
            description: "Desc".to_string(),
            link: "https://example.com".to_string(),
            image: String::new(),
            tech: vec!["Go".to_string()],
        }
    }

    #[test]
    fn test_project_patch_only_touches_set_fields() {
        let mut p = project();
        p.apply(ProjectPatch {
            title: Some("B".to_string()),
            ..Default::default()
        });

        assert_eq!(p.id.as_str(), "p1");
        assert_eq!(p.title, "B");
        assert_eq!(p.tech, vec!["Go".to_string()]);
        assert_eq!(p.description, "Desc");
    }

    #[test]
    fn test_project_patch_replaces_tech_wholesale() {
        let mut p = project();
        p.apply(ProjectPatch {
            tech: Some(vec!["Rust".to_string(), "Axum".to_string()]),
            ..Default::default()
        });

        assert_eq!(p.tech, vec!["Rust".to_string(), "Axum".to_string()]);
    }

    #[test]
    fn test_profile_patch_is_shallow_merge() {
        let mut profile = Profile {
            name: "Old".to_string(),
            email: "old@example.com".to_string(),
            ..Default::default()
        };

        profile.apply(ProfilePatch {
            name: Some("New".to_string()),
            ..Default::default()
        });

        assert_eq!(profile.name, "New");
        assert_eq!(profile.email, "old@example.com");
    }

    #[test]
    fn test_theme_round_trips_through_its_string_form() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }

    #[test]
    fn test_view_serializes_admin_mode_next_to_content() {
        let view = PortfolioView {
            content: PortfolioSnapshot::default(),
            admin_mode: true,
            theme: Theme::Dark,
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["adminMode"], serde_json::json!(true));
        assert_eq!(json["theme"], serde_json::json!("dark"));
        assert!(json.get("skills").is_some());
    }

    #[test]
    fn test_snapshot_has_no_ui_state_fields() {
        let json = serde_json::to_value(PortfolioSnapshot::default()).unwrap();
        let obj = json.as_object().unwrap();

        assert!(!obj.contains_key("adminMode"));
        assert!(!obj.contains_key("theme"));
        assert_eq!(obj.len(), 7);
    }

    #[test]
    fn test_record_with_null_or_mistyped_fields_still_loads() {
        let raw = serde_json::json!({
            "id": "p1",
            "title": "Mine",
            "image": null,
            "tech": "Go",
            "link": 42
        });

        let loaded: Project = serde_json::from_value(raw).unwrap();

        assert_eq!(loaded.id.as_str(), "p1");
        assert_eq!(loaded.title, "Mine");
        assert_eq!(loaded.image, "");
        assert!(loaded.tech.is_empty());
        assert_eq!(loaded.link, "");
        assert_eq!(loaded.description, "");
    }

    #[test]
    fn test_profile_null_field_keeps_the_rest() {
        let raw = serde_json::json!({ "name": "Sam", "photo": null });

        let profile: Profile = serde_json::from_value(raw).unwrap();

        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.photo, "");
    }
}
