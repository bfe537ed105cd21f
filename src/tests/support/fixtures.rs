use crate::portfolio::domain::entities::{
    CertificationDraft, EducationDraft, ExperienceDraft, ProjectDraft,
};

pub fn project_draft(title: &str) -> ProjectDraft {
    ProjectDraft {
        title: title.to_string(),
        description: format!("{title} description"),
        link: "https://example.com".to_string(),
        image: String::new(),
        tech: vec!["Rust".to_string()],
    }
}

pub fn experience_draft(role: &str) -> ExperienceDraft {
    ExperienceDraft {
        role: role.to_string(),
        company: "Acme".to_string(),
        period: "2021 - 2023".to_string(),
        description: vec!["Shipped things".to_string()],
    }
}

pub fn education_draft(degree: &str) -> EducationDraft {
    EducationDraft {
        degree: degree.to_string(),
        institution: "State University".to_string(),
        grade: "3.8 GPA".to_string(),
        year: "2019".to_string(),
    }
}

pub fn certification_draft(title: &str) -> CertificationDraft {
    CertificationDraft {
        title: title.to_string(),
        issuer: "Cloud Vendor".to_string(),
        date: "2024-05".to_string(),
        file: String::new(),
    }
}
