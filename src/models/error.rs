use serde::{Deserialize, Serialize};

/// Wire shape of every error response: `{field?, message}`.
///
/// `field` names the offending request field or parameter and is omitted
/// for errors that are not tied to one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl ServiceErrorBody {
    pub fn new(field: Option<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
