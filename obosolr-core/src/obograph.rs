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

//! Obographs input model
//!
//! Read-only view of an obographs JSON export, reduced to the node
//! attributes the transformation consumes. Unknown keys (edges,
//! logical axioms, subset declarations) are ignored on load. Optional
//! node data is modeled as `Option`/defaulted fields rather than
//! key-presence checks.

use crate::error::{ObosolrError, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level obographs export: an ordered sequence of graphs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub graphs: Vec<Graph>,
}

impl GraphDocument {
    /// Load a graph document from an obographs JSON file.
    ///
    /// Any read or parse failure is fatal; the batch never starts on a
    /// partial input.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| ObosolrError::GraphDocument(e.to_string()))
    }
}

/// One named graph and its nodes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

/// One ontology entity.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Global identifier, typically an IRI.
    pub id: String,
    /// Primary label.
    #[serde(default)]
    pub lbl: Option<String>,
    /// Entity category (CLASS, INDIVIDUAL, PROPERTY).
    #[serde(rename = "type", default)]
    pub node_type: Option<String>,
    /// Annotation block.
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Node metadata: property-value annotations, synonyms, definition.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    #[serde(default)]
    pub basic_property_values: Vec<PropertyValue>,
    #[serde(default)]
    pub synonyms: Vec<Synonym>,
    #[serde(default)]
    pub definition: Option<Definition>,
    #[serde(default)]
    pub deprecated: bool,
}

/// A predicate/value annotation pair.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyValue {
    pub pred: String,
    pub val: String,
}

/// An alternate name with its kind predicate and cross-references.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synonym {
    /// Synonym kind, e.g. `hasExactSynonym`.
    pub pred: String,
    pub val: String,
    #[serde(default)]
    pub xrefs: Vec<String>,
    #[serde(default)]
    pub synonym_type: Option<String>,
}

/// Textual definition with optional cross-references.
#[derive(Debug, Clone, Deserialize)]
pub struct Definition {
    pub val: String,
    #[serde(default)]
    pub xrefs: Vec<String>,
}
