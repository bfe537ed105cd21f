use crate::portfolio::application::ports::incoming::forms::form_errors::{
    is_valid_url, normalize_list, FormErrors,
};
use crate::portfolio::domain::entities::{Project, ProjectDraft, ProjectPatch};

/// Raw values as held by the project editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub link: String,
    pub image: String,
    pub tech: Vec<String>,
}

impl ProjectInput {
    /// Adds a technology tag unless it is blank or already listed.
    pub fn add_tech(&mut self, tech: &str) -> bool {
        let tech = tech.trim();
        if tech.is_empty() || self.tech.iter().any(|t| t == tech) {
            return false;
        }
        self.tech.push(tech.to_string());
        true
    }

    pub fn remove_tech(&mut self, tech: &str) {
        self.tech.retain(|t| t != tech);
    }
}

/// Prefill for editing an existing project.
impl From<&Project> for ProjectInput {
    fn from(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            link: project.link.clone(),
            image: project.image.clone(),
            tech: project.tech.clone(),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Project Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectCommand {
    title: String,
    description: String,
    link: String,
    image: String,
    tech: Vec<String>,
}

impl ProjectCommand {
    pub fn new(input: ProjectInput) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let tech = normalize_list(&input.tech);
        let link = input.link.trim();

        errors.require("title", &input.title, "Title is required");
        errors.require("description", &input.description, "Description is required");
        if link.is_empty() {
            errors.add("link", "Project link is required");
        } else if !is_valid_url(&input.link) {
            errors.add("link", "Please enter a valid URL");
        }
        if tech.is_empty() {
            errors.add("tech", "Add at least one technology");
        }

        errors.finish(|| Self {
            title: input.title.trim().to_string(),
            description: input.description.trim().to_string(),
            link: link.to_string(),
            image: input.image.trim().to_string(),
            tech,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn tech(&self) -> &[String] {
        &self.tech
    }

    pub fn into_draft(self) -> ProjectDraft {
        ProjectDraft {
            title: self.title,
            description: self.description,
            link: self.link,
            image: self.image,
            tech: self.tech,
        }
    }

    /// Editing submits the whole form, so every field is set.
    pub fn into_patch(self) -> ProjectPatch {
        ProjectPatch {
            title: Some(self.title),
            description: Some(self.description),
            link: Some(self.link),
            image: Some(self.image),
            tech: Some(self.tech),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> ProjectInput {
        ProjectInput {
            title: "  Portfolio  ".to_string(),
            description: "Personal site".to_string(),
            link: "https://example.com/project".to_string(),
            image: String::new(),
            tech: vec!["Rust".to_string()],
        }
    }

    #[test]
    fn test_valid_input_builds_trimmed_draft() {
        let draft = ProjectCommand::new(valid_input()).unwrap().into_draft();

        assert_eq!(draft.title, "Portfolio");
        assert_eq!(draft.tech, vec!["Rust".to_string()]);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ProjectCommand::new(ProjectInput::default()).unwrap_err();

        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec!["title", "description", "link", "tech"]
        );
        assert_eq!(errors.get("link"), Some("Project link is required"));
        assert_eq!(errors.get("tech"), Some("Add at least one technology"));
    }

    #[test]
    fn test_link_must_be_http_url() {
        let input = ProjectInput {
            link: "example.com".to_string(),
            ..valid_input()
        };

        let errors = ProjectCommand::new(input).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("link"), Some("Please enter a valid URL"));
    }

    #[test]
    fn test_link_with_leading_whitespace_is_rejected() {
        let errors = ProjectCommand::new(ProjectInput {
            link: " https://example.com/project".to_string(),
            ..valid_input()
        })
        .unwrap_err();

        assert_eq!(errors.get("link"), Some("Please enter a valid URL"));
    }

    #[test]
    fn test_blank_tech_entries_do_not_count() {
        let input = ProjectInput {
            tech: vec!["  ".to_string()],
            ..valid_input()
        };

        assert!(ProjectCommand::new(input).is_err());
    }

    #[test]
    fn test_add_tech_trims_and_skips_duplicates() {
        let mut input = ProjectInput::default();

        assert!(input.add_tech(" React "));
        assert!(!input.add_tech("React"));
        assert!(!input.add_tech("   "));
        input.remove_tech("React");

        assert!(input.tech.is_empty());
    }

    #[test]
    fn test_patch_sets_every_field() {
        let patch = ProjectCommand::new(valid_input()).unwrap().into_patch();

        assert_eq!(patch.title.as_deref(), Some("Portfolio"));
        assert_eq!(patch.image.as_deref(), Some(""));
        assert!(patch.tech.is_some());
    }
}
