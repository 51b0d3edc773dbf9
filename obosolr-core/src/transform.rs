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

//! Node-to-document transformation
//!
//! Builds one [`SolrDocument`] from one obographs node: identifier
//! variants from the resolver, label and synonyms with their
//! autosuggest expansions, annotation routing by predicate, and
//! definition truncation. Each node is processed independently; the
//! transformer holds only immutable references.

use crate::config::AnnotationPredicates;
use crate::curie::{CurieResolver, IdVariants};
use crate::document::SolrDocument;
use crate::obograph::Node;
use crate::tokenize;
use std::collections::BTreeSet;

/// Definitions longer than this many characters are truncated.
const DEFINITION_LIMIT: usize = 100;

/// Characters kept before the `..` marker when truncating.
const DEFINITION_KEEP: usize = 98;

/// Stateless per-node transformer.
pub struct NodeTransformer<'a> {
    resolver: &'a CurieResolver,
    predicates: &'a AnnotationPredicates,
}

impl<'a> NodeTransformer<'a> {
    pub fn new(resolver: &'a CurieResolver, predicates: &'a AnnotationPredicates) -> Self {
        Self {
            resolver,
            predicates,
        }
    }

    /// Produce the (pre-filter) document for a node.
    pub fn transform(&self, node: &Node) -> SolrDocument {
        let IdVariants { obo_id, short_form } = self.resolver.resolve(&node.id);

        let mut document = SolrDocument {
            id: node.id.clone(),
            iri: node.id.clone(),
            short_form: short_form.clone(),
            obo_id: obo_id.clone(),
            ..SolrDocument::default()
        };

        document.obo_id_autosuggest.insert(obo_id);
        document.obo_id_autosuggest.insert(short_form);
        document.shortform_autosuggest = document.obo_id_autosuggest.clone();

        if let Some(raw_label) = &node.lbl {
            if raw_label.contains("\\'") {
                // Keep the escaped spelling searchable alongside the
                // unescaped one.
                let unescaped = raw_label.replace("\\'", "'");
                document.label_autosuggest.insert(unescaped.clone());
                document.label_autosuggest.insert(raw_label.clone());
                document.synonym.insert(raw_label.clone());
                document.label = unescaped;
            } else {
                document.label = raw_label.clone();
                document.label_autosuggest.insert(raw_label.clone());
            }
        }

        document.synonym.insert(document.label.clone());
        document.synonym_autosuggest = document.label_autosuggest.clone();

        if let Some(node_type) = &node.node_type {
            document.facets_annotation.insert(capitalize(node_type));
        }

        if let Some(meta) = &node.meta {
            for annotation in &meta.basic_property_values {
                if annotation.pred == self.predicates.node_label {
                    document.facets_annotation.insert(annotation.val.clone());
                } else if annotation.pred == self.predicates.filename {
                    document.filename.insert(annotation.val.clone());
                } else if annotation.pred == self.predicates.thumbnail {
                    document.thumbnail.insert(annotation.val.clone());
                }
            }

            for synonym in &meta.synonyms {
                document.synonym.insert(synonym.val.clone());
                document.synonym_autosuggest.insert(synonym.val.clone());

                let field = format!("synonym_{}", synonym.pred);
                document
                    .synonym_kinds
                    .entry(format!("{field}_autosuggest"))
                    .or_default()
                    .insert(synonym.val.clone());
                document
                    .synonym_kinds
                    .entry(field)
                    .or_default()
                    .insert(synonym.val.clone());
            }

            if let Some(definition) = &meta.definition {
                document.definition = Some(truncate_definition(&definition.val));
            }
        }

        expand_autosuggest(&mut document);
        document
    }
}

/// Append the tokenizer variants of every current value to each
/// autosuggest field.
fn expand_autosuggest(document: &mut SolrDocument) {
    expand_set(&mut document.obo_id_autosuggest);
    expand_set(&mut document.shortform_autosuggest);
    expand_set(&mut document.label_autosuggest);
    expand_set(&mut document.synonym_autosuggest);
    for (field, values) in document.synonym_kinds.iter_mut() {
        if field.contains("autosuggest") {
            expand_set(values);
        }
    }
}

fn expand_set(values: &mut BTreeSet<String>) {
    let seeds: Vec<String> = values.iter().cloned().collect();
    for seed in seeds {
        for variant in tokenize::variants(&seed) {
            values.insert(variant);
        }
    }
}

/// Uppercase the first character, lowercase the rest.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

fn truncate_definition(text: &str) -> String {
    if text.chars().count() > DEFINITION_LIMIT {
        let head: String = text.chars().take(DEFINITION_KEEP).collect();
        format!("{head}..")
    } else {
        text.to_string()
    }
}
