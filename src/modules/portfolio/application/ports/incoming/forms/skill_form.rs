use crate::portfolio::application::ports::incoming::forms::form_errors::FormErrors;

/// Skill name as typed into the "add skill" field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCommand {
    name: String,
}

impl SkillCommand {
    pub fn new(raw: &str) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("skill", raw, "Skill name is required");

        errors.finish(|| Self {
            name: raw.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
