// Copyright 2025 Obosolr Contributors (https://github.com/obosolr)
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Pipeline error types
//!
//! All errors here are fatal to the batch: an unreadable input file or
//! a malformed configuration aborts the run before any output is
//! written. Per-node issues (unresolvable identifiers, missing
//! optional fields) are handled locally and never surface as errors.

use thiserror::Error;

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, ObosolrError>;

/// Errors that can occur while loading inputs or writing output
#[derive(Debug, Error)]
pub enum ObosolrError {
    /// Graph document could not be parsed
    #[error("Graph document error: {0}")]
    GraphDocument(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ObosolrError {
    fn from(e: serde_json::Error) -> Self {
        ObosolrError::Serialization(e.to_string())
    }
}

impl From<serde_yaml::Error> for ObosolrError {
    fn from(e: serde_yaml::Error) -> Self {
        ObosolrError::Config(e.to_string())
    }
}
