use crate::shared::core::application_error::ApplicationError;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AutoFillOutcome {
    Debounced,
    NoEveningRecord,
    NotSleep { content: String },
    Processed { updated: bool, created: bool },
}

impl AutoFillOutcome {
    pub fn message(&self) -> String {
        match self {
            AutoFillOutcome::Debounced => "auto-fill ran recently; skipped".to_string(),
            AutoFillOutcome::NoEveningRecord => "no record last evening; nothing to fill".to_string(),
            AutoFillOutcome::NotSleep { content } => {
                format!("last evening record \"{content}\" is not sleep; nothing to fill")
            }
            AutoFillOutcome::Processed {
                updated: false,
                created: false,
            } => "timeline already contiguous".to_string(),
            AutoFillOutcome::Processed { updated, created } => {
                format!("sleep auto-fill applied (updated: {updated}, created: {created})")
            }
        }
    }
}

/// Summary handed back to schedulers and clients for logging or a toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoFillReport {
    pub success: bool,
    pub updated: bool,
    pub created: bool,
    pub message: String,
}

impl AutoFillReport {
    pub fn from_result(result: &Result<AutoFillOutcome, ApplicationError>) -> Self {
        match result {
            Ok(outcome) => {
                let (updated, created) = match outcome {
                    AutoFillOutcome::Processed { updated, created } => (*updated, *created),
                    _ => (false, false),
                };
                Self {
                    success: true,
                    updated,
                    created,
                    message: outcome.message(),
                }
            }
            Err(error) => Self {
                success: false,
                updated: false,
                created: false,
                message: error.to_string(),
            },
        }
    }
}
