use serde::{Deserialize, Serialize};

/// Body of every non-2xx JSON response from the server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JsonError {
    pub error_message: String,
}
