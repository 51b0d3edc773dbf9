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

//! Pipeline configuration
//!
//! Loads the subset of the pipeline YAML the transformation consumes:
//! the `curie_map` prefix table and the optional `filters.solr`
//! blocks. The file carries many other sections for neighboring tools;
//! those are ignored here. Loaded once per run, immutable thereafter.

use crate::error::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration consumed by the transformation.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// Prefix to namespace mapping, e.g. `FBbt` ->
    /// `http://purl.obolibrary.org/obo/FBbt_`.
    pub curie_map: BTreeMap<String, String>,
    #[serde(default)]
    pub filters: Option<Filters>,
}

impl PipelineConfig {
    /// Load configuration from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_str(&raw)
    }

    /// Parse configuration from a YAML string.
    pub fn from_str(raw: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(raw)?)
    }
}

/// Per-target filter blocks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Filters {
    #[serde(default)]
    pub solr: Option<SolrFilters>,
}

/// Solr filter rules.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SolrFilters {
    #[serde(default)]
    pub exclusion: Option<FilterRules>,
    /// Accepted for forward compatibility; not applied by the
    /// transformation.
    #[serde(default)]
    pub inclusion: Option<FilterRules>,
}

/// One rule set of a filter block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FilterRules {
    /// Substrings matched anywhere in a document IRI.
    #[serde(default)]
    pub iri_prefix: Vec<String>,
    /// Category labels matched against `facets_annotation`.
    #[serde(default)]
    pub neo4j_node_label: Vec<String>,
}

/// Annotation predicate IRIs routed into dedicated document fields.
///
/// Passed into the transformer explicitly so deployments with a
/// different property namespace can override them.
#[derive(Debug, Clone)]
pub struct AnnotationPredicates {
    /// Predicate whose values become `facets_annotation` entries.
    pub node_label: String,
    /// Predicate whose values become `filename` entries.
    pub filename: String,
    /// Predicate whose values become `thumbnail` entries.
    pub thumbnail: String,
}

impl Default for AnnotationPredicates {
    fn default() -> Self {
        Self {
            node_label: "http://n2o.neo/property/nodeLabel".to_string(),
            filename: "http://n2o.neo/property/filename".to_string(),
            thumbnail: "http://n2o.neo/property/thumbnail".to_string(),
        }
    }
}
