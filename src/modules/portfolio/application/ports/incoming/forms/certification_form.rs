use crate::portfolio::application::ports::incoming::forms::form_errors::FormErrors;
use crate::portfolio::domain::entities::{Certification, CertificationDraft, CertificationPatch};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificationInput {
    pub title: String,
    pub issuer: String,
    pub date: String,
    /// Blob URL produced after `UploadPolicy::certificate()` accepted the file.
    pub file: String,
}

impl From<&Certification> for CertificationInput {
    fn from(certification: &Certification) -> Self {
        Self {
            title: certification.title.clone(),
            issuer: certification.issuer.clone(),
            date: certification.date.clone(),
            file: certification.file.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationCommand {
    title: String,
    issuer: String,
    date: String,
    file: String,
}

impl CertificationCommand {
    pub fn new(input: CertificationInput) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();

        errors.require("title", &input.title, "Certificate title is required");
        errors.require("issuer", &input.issuer, "Issuer is required");
        errors.require("date", &input.date, "Date is required");

        errors.finish(|| Self {
            title: input.title.trim().to_string(),
            issuer: input.issuer.trim().to_string(),
            date: input.date.trim().to_string(),
            file: input.file,
        })
    }

    pub fn into_draft(self) -> CertificationDraft {
        CertificationDraft {
            title: self.title,
            issuer: self.issuer,
            date: self.date,
            file: self.file,
        }
    }

    pub fn into_patch(self) -> CertificationPatch {
        CertificationPatch {
            title: Some(self.title),
            issuer: Some(self.issuer),
            date: Some(self.date),
            file: Some(self.file),
        }
    }
}
