//! Output format value object

use serde::{Deserialize, Serialize};

/// How a resolved answer is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The response text only (default)
    #[default]
    Text,
    /// `{"response": "..."}`
    Json,
    /// Response plus the path that produced it
    Full,
}
