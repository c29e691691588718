//! Supplementary information submitted by the public about an occurrence.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::feed::parse_timestamp;

/// A published info entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoEntry {
    #[serde(rename = "ocoId")]
    pub occurrence_id: u64,
    #[serde(rename = "informacao")]
    pub text: String,
    #[serde(rename = "data")]
    pub date: String,
    pub id: u64,
    #[serde(rename = "anexos", default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

/// A file uploaded alongside a submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// An info entry not yet accepted by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInfo {
    pub occurrence_id: u64,
    pub text: String,
    pub date: String,
    pub attachments: Vec<Attachment>,
}

impl NewInfo {
    /// Checks the submission before it leaves the process.
    ///
    /// # Errors
    ///
    /// [`CoreError::Validation`] when the occurrence id is zero, the text is
    /// blank, the date is unparseable, or an attachment has no name.
    pub fn validate(&self) -> CoreResult<()> {
        if self.occurrence_id == 0 {
            return Err(CoreError::Validation(
                "ocorrência inválida".to_string(),
            ));
        }
        if self.text.trim().is_empty() {
            return Err(CoreError::Validation(
                "informação obrigatória".to_string(),
            ));
        }
        if parse_timestamp(&self.date).is_none() {
            return Err(CoreError::Validation(format!(
                "data inválida: {}",
                self.date
            )));
        }
        if self.attachments.iter().any(|a| a.file_name.trim().is_empty()) {
            return Err(CoreError::Validation(
                "anexo sem nome de arquivo".to_string(),
            ));
        }
        Ok(())
    }
}
