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

//! Obosolr Core
//!
//! Transformation of obographs ontology exports into flat Solr
//! documents: CURIE resolution, autosuggest tokenization, per-node
//! document assembly, and configurable exclusion filtering.

pub mod config;
pub mod curie;
pub mod document;
pub mod error;
pub mod filter;
pub mod obograph;
pub mod pipeline;
pub mod tokenize;
pub mod transform;

pub use config::{AnnotationPredicates, FilterRules, Filters, PipelineConfig, SolrFilters};
pub use curie::{CurieResolver, IdVariants, OBO_NAMESPACE};
pub use document::SolrDocument;
pub use error::{ObosolrError, Result};
pub use filter::ExclusionFilter;
pub use obograph::{Definition, Graph, GraphDocument, Meta, Node, PropertyValue, Synonym};
pub use pipeline::{transform_graphs, write_documents};
pub use transform::NodeTransformer;
