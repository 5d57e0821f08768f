//! External collaborator seams.
//!
//! The engine consumes already-resolved image references and hands finished
//! templates to a persistence collaborator; transport, decoding, and
//! storage technology all live behind these traits so the core stays a
//! pure data model.

use crate::error::SelloError;
use crate::template::CertificateTemplate;

/// Outcome of an image upload performed by an external collaborator.
///
/// The engine only ever consumes `file_url`/`file_id` as opaque strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    Success {
        file_url: String,
        file_id: Option<String>,
    },
    Error {
        message: String,
    },
}

impl UploadOutcome {
    /// The uploaded file's URL, or an [`SelloError::Upload`] carrying the
    /// collaborator's message.
    pub fn file_url(self) -> Result<String, SelloError> {
        match self {
            UploadOutcome::Success { file_url, .. } => Ok(file_url),
            UploadOutcome::Error { message } => Err(SelloError::Upload(message)),
        }
    }
}

/// Accepts a raw encoded image payload (already cropped and resized by the
/// caller) and a filename.
pub trait ImageIngest {
    fn upload(&mut self, filename: &str, payload: &[u8]) -> UploadOutcome;
}

/// Whole-object template upsert keyed by context.
///
/// A failure means "do not close the editing surface, surface the message
/// to the operator" — see [`crate::template::TemplateStore::save_with`].
pub trait TemplatePersistence {
    fn persist(
        &mut self,
        context_key: &str,
        template: &CertificateTemplate,
    ) -> Result<(), SelloError>;
}
