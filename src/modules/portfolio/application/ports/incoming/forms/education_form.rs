use crate::portfolio::application::ports::incoming::forms::form_errors::FormErrors;
use crate::portfolio::domain::entities::{Education, EducationDraft, EducationPatch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationInput {
    pub degree: String,
    pub institution: String,
    pub grade: String,
    pub year: String,
}

impl From<&Education> for EducationInput {
    fn from(education: &Education) -> Self {
        Self {
            degree: education.degree.clone(),
            institution: education.institution.clone(),
            grade: education.grade.clone(),
            year: education.year.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationCommand {
    degree: String,
    institution: String,
    grade: String,
    year: String,
}

impl EducationCommand {
    /// Grade is optional.
    pub fn new(input: EducationInput) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();

        errors.require("degree", &input.degree, "Degree is required");
        errors.require("institution", &input.institution, "Institution is required");
        errors.require("year", &input.year, "Year is required");

        errors.finish(|| Self {
            degree: input.degree.trim().to_string(),
            institution: input.institution.trim().to_string(),
            grade: input.grade.trim().to_string(),
            year: input.year.trim().to_string(),
        })
    }

    pub fn into_draft(self) -> EducationDraft {
        EducationDraft {
            degree: self.degree,
            institution: self.institution,
            grade: self.grade,
            year: self.year,
        }
    }

    pub fn into_patch(self) -> EducationPatch {
        EducationPatch {
            degree: Some(self.degree),
            institution: Some(self.institution),
            grade: Some(self.grade),
            year: Some(self.year),
        }
    }
}
