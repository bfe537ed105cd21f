/// MIME acceptance rules for the files a portfolio owner can attach.
///
/// Only the declared content type is checked here. Files are never uploaded
/// or stored; the view layer turns an accepted file into a local blob URL and
/// hands that string to the store.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub allowed_mime_types: &'static [&'static str],
    /// Accept any `image/*` in addition to `allowed_mime_types`.
    pub allow_any_image: bool,
    pub rejection_message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadPolicyError {
    #[error("{message}")]
    UnsupportedType {
        mime_type: String,
        message: &'static str,
    },
}

impl UploadPolicy {
    pub const RESUME_MIME_TYPES: &'static [&'static str] = &["application/pdf"];
    pub const CERTIFICATE_MIME_TYPES: &'static [&'static str] =
        &["application/pdf", "image/jpeg", "image/png", "image/webp"];

    pub fn profile_photo() -> Self {
        Self {
            allowed_mime_types: &[],
            allow_any_image: true,
            rejection_message: "Please upload an image file",
        }
    }

    pub fn resume() -> Self {
        Self {
            allowed_mime_types: Self::RESUME_MIME_TYPES,
            allow_any_image: false,
            rejection_message: "Please upload a PDF file",
        }
    }

    pub fn certificate() -> Self {
        Self {
            allowed_mime_types: Self::CERTIFICATE_MIME_TYPES,
            allow_any_image: false,
            rejection_message: "Please upload a PDF or image file",
        }
    }

    pub fn check(&self, mime_type: &str) -> Result<(), UploadPolicyError> {
        let accepted = (self.allow_any_image && mime_type.starts_with("image/"))
            || self.allowed_mime_types.contains(&mime_type);

        if accepted {
            Ok(())
        } else {
            Err(UploadPolicyError::UnsupportedType {
                mime_type: mime_type.to_string(),
                message: self.rejection_message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_photo_accepts_any_image() {
        let policy = UploadPolicy::profile_photo();

        assert!(policy.check("image/png").is_ok());
        assert!(policy.check("image/gif").is_ok());
        assert!(policy.check("image/svg+xml").is_ok());
    }

    #[test]
    fn test_profile_photo_rejects_pdf_with_alert_text() {
        let err = UploadPolicy::profile_photo()
            .check("application/pdf")
            .unwrap_err();

        assert_eq!(err.to_string(), "Please upload an image file");
    }

    #[test]
    fn test_resume_only_accepts_pdf() {
        let policy = UploadPolicy::resume();

        assert!(policy.check("application/pdf").is_ok());
        assert!(policy.check("image/png").is_err());
        assert!(policy.check("application/msword").is_err());
    }

    #[test]
    fn test_certificate_accepts_pdf_and_common_images() {
        let policy = UploadPolicy::certificate();

        for mime in UploadPolicy::CERTIFICATE_MIME_TYPES {
            assert!(policy.check(mime).is_ok(), "{mime} should be accepted");
        }

        match policy.check("image/gif") {
            Err(UploadPolicyError::UnsupportedType { mime_type, message }) => {
                assert_eq!(mime_type, "image/gif");
                assert_eq!(message, "Please upload a PDF or image file");
            }
            other => panic!("Expected UnsupportedType, got {:?}", other),
        }
    }
}
