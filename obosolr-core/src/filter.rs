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

//! Document exclusion
//!
//! Evaluates the configured `filters.solr.exclusion` rules against an
//! assembled document. Inclusion rules are accepted in configuration
//! but not enforced here.

use crate::config::PipelineConfig;
use crate::document::SolrDocument;

/// Compiled exclusion rules.
#[derive(Debug, Clone, Default)]
pub struct ExclusionFilter {
    iri_prefixes: Vec<String>,
    node_labels: Vec<String>,
}

impl ExclusionFilter {
    /// Pull the exclusion rules out of a pipeline configuration.
    /// Missing rule sets compile to a filter that excludes nothing.
    pub fn from_config(config: &PipelineConfig) -> Self {
        let rules = config
            .filters
            .as_ref()
            .and_then(|filters| filters.solr.as_ref())
            .and_then(|solr| solr.exclusion.as_ref());
        match rules {
            Some(rules) => Self {
                iri_prefixes: rules.iri_prefix.clone(),
                node_labels: rules.neo4j_node_label.clone(),
            },
            None => Self::default(),
        }
    }

    /// True when the document must be dropped: any configured IRI
    /// substring occurs in its `iri`, or any configured category is
    /// present in its `facets_annotation`.
    pub fn excludes(&self, document: &SolrDocument) -> bool {
        self.iri_prefixes
            .iter()
            .any(|prefix| document.iri.contains(prefix.as_str()))
            || self
                .node_labels
                .iter()
                .any(|label| document.facets_annotation.contains(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FilterRules, Filters, SolrFilters};
    use std::collections::BTreeMap;

    fn create_config(exclusion: Option<FilterRules>) -> PipelineConfig {
        PipelineConfig {
            curie_map: BTreeMap::new(),
            filters: Some(Filters {
                solr: Some(SolrFilters {
                    exclusion,
                    inclusion: None,
                }),
            }),
        }
    }

    fn create_document(iri: &str, facets: &[&str]) -> SolrDocument {
        SolrDocument {
            iri: iri.to_string(),
            facets_annotation: facets.iter().map(|facet| facet.to_string()).collect(),
            ..SolrDocument::default()
        }
    }

    #[test]
    fn test_iri_prefix_substring_excludes() {
        let filter = ExclusionFilter::from_config(&create_config(Some(FilterRules {
            iri_prefix: vec!["n2o.neo".to_string()],
            neo4j_node_label: vec![],
        })));
        assert!(filter.excludes(&create_document("http://n2o.neo/property/nodeLabel", &[])));
        assert!(!filter.excludes(&create_document("http://purl.obolibrary.org/obo/FBbt_1", &[])));
    }

    #[test]
    fn test_node_label_excludes() {
        let filter = ExclusionFilter::from_config(&create_config(Some(FilterRules {
            iri_prefix: vec![],
            neo4j_node_label: vec!["Deprecated".to_string()],
        })));
        assert!(filter.excludes(&create_document("http://x", &["Entity", "Deprecated"])));
        assert!(!filter.excludes(&create_document("http://x", &["Entity"])));
    }

    #[test]
    fn test_missing_rules_exclude_nothing() {
        let config = PipelineConfig {
            curie_map: BTreeMap::new(),
            filters: None,
        };
        let filter = ExclusionFilter::from_config(&config);
        assert!(!filter.excludes(&create_document("http://n2o.neo/anything", &["Deprecated"])));
    }

    #[test]
    fn test_decision_is_stable() {
        let filter = ExclusionFilter::from_config(&create_config(Some(FilterRules {
            iri_prefix: vec!["example.org".to_string()],
            neo4j_node_label: vec![],
        })));
        let document = create_document("http://example.org/X1", &[]);
        assert_eq!(filter.excludes(&document), filter.excludes(&document));
    }
}
