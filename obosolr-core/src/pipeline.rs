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

//! Batch driver
//!
//! Walks every node of every graph through the transformer and the
//! exclusion filter, then writes the surviving documents with sorted
//! field names and fixed indentation so successive runs diff cleanly.

use crate::config::{AnnotationPredicates, PipelineConfig};
use crate::curie::CurieResolver;
use crate::document::SolrDocument;
use crate::error::Result;
use crate::filter::ExclusionFilter;
use crate::obograph::GraphDocument;
use crate::transform::NodeTransformer;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Transform all graphs into the retained document collection.
pub fn transform_graphs(
    graphs: &GraphDocument,
    config: &PipelineConfig,
    predicates: &AnnotationPredicates,
) -> Vec<SolrDocument> {
    let resolver = CurieResolver::new(&config.curie_map);
    let transformer = NodeTransformer::new(&resolver, predicates);
    let filter = ExclusionFilter::from_config(config);

    let mut documents = Vec::new();
    let mut seen = 0usize;
    for graph in &graphs.graphs {
        for node in &graph.nodes {
            seen += 1;
            let document = transformer.transform(node);
            if filter.excludes(&document) {
                debug!("excluded {}", document.iri);
                continue;
            }
            documents.push(document);
        }
    }
    info!("transformed {seen} nodes into {} documents", documents.len());
    documents
}

/// Write the collection as JSON with sorted keys and 4-space indent.
pub fn write_documents(documents: &[SolrDocument], path: &Path) -> Result<()> {
    // Route through Value: its object map is ordered by key, which
    // sorts every document's fields regardless of struct declaration
    // order.
    let value = serde_json::to_value(documents)?;
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    std::fs::write(path, buffer)?;
    Ok(())
}
