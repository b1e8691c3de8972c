use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionErrorResponse {
    pub error: String,
    /// RFC 3339 UTC time the error was produced at.
    pub timestamp: String,
}
