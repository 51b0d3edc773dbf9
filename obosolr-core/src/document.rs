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

//! Solr output document
//!
//! One flat document per retained node. List-valued fields are
//! `BTreeSet`s: insertion deduplicates, iteration order is
//! deterministic for reproducible output, and no consumer may rely on
//! a particular element order. Fixed fields always serialize, even
//! when empty; `definition` and the per-synonym-kind fields appear
//! only when the source node provides them.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Flat document produced from one ontology node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolrDocument {
    /// Raw node identifier.
    pub id: String,
    /// Identical to `id`.
    pub iri: String,
    /// Token-safe prefixed identifier, e.g. `FBbt_00007239`.
    pub short_form: String,
    /// CURIE form, e.g. `FBbt:00007239`.
    pub obo_id: String,
    /// Primary label; empty string when the node has none.
    pub label: String,
    pub obo_id_autosuggest: BTreeSet<String>,
    pub shortform_autosuggest: BTreeSet<String>,
    pub label_autosuggest: BTreeSet<String>,
    pub synonym: BTreeSet<String>,
    pub synonym_autosuggest: BTreeSet<String>,
    /// Category tags for faceted filtering.
    pub facets_annotation: BTreeSet<String>,
    pub filename: BTreeSet<String>,
    pub thumbnail: BTreeSet<String>,
    /// Definition text, truncated for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    /// Per-synonym-kind fields keyed by full field name, e.g.
    /// `synonym_hasExactSynonym` and `synonym_hasExactSynonym_autosuggest`.
    #[serde(flatten)]
    pub synonym_kinds: BTreeMap<String, BTreeSet<String>>,
}
