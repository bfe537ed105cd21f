pub mod admin_login_form;
pub mod certification_form;
pub mod contact_form;
pub mod education_form;
pub mod experience_form;
pub mod form_errors;
pub mod project_form;
pub mod skill_form;

pub use admin_login_form::AdminLoginCommand;
pub use certification_form::{CertificationCommand, CertificationInput};
pub use contact_form::{ContactInput, ContactMessage};
pub use education_form::{EducationCommand, EducationInput};
pub use experience_form::{ExperienceCommand, ExperienceInput};
pub use form_errors::FormErrors;
pub use project_form::{ProjectCommand, ProjectInput};
pub use skill_form::SkillCommand;
