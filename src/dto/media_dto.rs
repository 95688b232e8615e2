use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Describes a generated file the caller can download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaOutput {
    pub path: PathBuf,
    pub media_type: String,
    pub file_name: String,
}
