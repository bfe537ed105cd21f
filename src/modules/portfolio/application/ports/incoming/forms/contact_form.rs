use crate::portfolio::application::ports::incoming::forms::form_errors::{
    is_valid_email, FormErrors,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInput {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A validated contact-form submission.
///
/// Nothing is delivered anywhere; there is no mail backend. The host decides
/// what to do with an accepted message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    name: String,
    email: String,
    subject: Option<String>,
    message: String,
}

impl ContactMessage {
    pub fn new(input: ContactInput) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::new();
        let email = input.email.trim();

        errors.require("name", &input.name, "Name is required");
        if email.is_empty() {
            errors.add("email", "Email is required");
        } else if !is_valid_email(email) {
            errors.add("email", "Please enter a valid email");
        }
        errors.require("message", &input.message, "Message is required");

        let subject = input.subject.trim();
        errors.finish(|| Self {
            name: input.name.trim().to_string(),
            email: email.to_string(),
            subject: (!subject.is_empty()).then(|| subject.to_string()),
            message: input.message.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
