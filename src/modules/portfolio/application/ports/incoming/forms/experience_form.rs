use crate::portfolio::application::ports::incoming::forms::form_errors::FormErrors;
use crate::portfolio::domain::entities::{Experience, ExperienceDraft, ExperiencePatch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperienceInput {
    pub role: String,
    pub company: String,
    pub period: String,
    /// One responsibility per line; blank lines are allowed while editing.
    pub description: Vec<String>,
}

impl From<&Experience> for ExperienceInput {
    fn from(experience: &Experience) -> Self {
        Self {
            role: experience.role.clone(),
            company: experience.company.clone(),
            period: experience.period.clone(),
            description: experience.description.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceCommand {
    role: String,
    company: String,
    period: String,
    description: Vec<String>,
}

impl ExperienceCommand {
    pub fn new(input: ExperienceInput) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let description: Vec<String> = input
            .description
            .iter()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        errors.require("role", &input.role, "Role is required");
        errors.require("company", &input.company, "Company name is required");
        errors.require("period", &input.period, "Period is required");
        if description.is_empty() {
            errors.add("description", "Add at least one responsibility");
        }

        errors.finish(|| Self {
            role: input.role.trim().to_string(),
            company: input.company.trim().to_string(),
            period: input.period.trim().to_string(),
            description,
        })
    }

    pub fn description(&self) -> &[String] {
        &self.description
    }

    pub fn into_draft(self) -> ExperienceDraft {
        ExperienceDraft {
            role: self.role,
            company: self.company,
            period: self.period,
            description: self.description,
        }
    }

    pub fn into_patch(self) -> ExperiencePatch {
        ExperiencePatch {
            role: Some(self.role),
            company: Some(self.company),
            period: Some(self.period),
            description: Some(self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_dropped() {
        let cmd = ExperienceCommand::new(ExperienceInput {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            period: "2022 - Present".to_string(),
            description: vec![
                "Shipped things".to_string(),
                "   ".to_string(),
                "Fixed things".to_string(),
            ],
        })
        .unwrap();

        assert_eq!(
            cmd.description(),
            &["Shipped things".to_string(), "Fixed things".to_string()]
        );
    }

    #[test]
    fn test_only_blank_lines_is_an_error() {
        let errors = ExperienceCommand::new(ExperienceInput {
            role: "Engineer".to_string(),
            company: "Acme".to_string(),
            period: "2022".to_string(),
            description: vec!["".to_string(), " ".to_string()],
        })
        .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get("description"),
            Some("Add at least one responsibility")
        );
    }

    #[test]
    fn test_missing_fields_use_form_messages() {
        let errors = ExperienceCommand::new(ExperienceInput::default()).unwrap_err();

        assert_eq!(errors.get("role"), Some("Role is required"));
        assert_eq!(errors.get("company"), Some("Company name is required"));
        assert_eq!(errors.get("period"), Some("Period is required"));
    }
}
