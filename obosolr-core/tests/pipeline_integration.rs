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

//! End-to-end pipeline tests: obographs JSON in, filtered Solr
//! document collection out.

use obosolr_core::{
    transform_graphs, write_documents, AnnotationPredicates, GraphDocument, PipelineConfig,
};

const GRAPHS: &str = r#"{
    "graphs": [{
        "id": "http://virtualflybrain.org/data/VFB/OWL/all.owl",
        "nodes": [
            {
                "id": "http://purl.obolibrary.org/obo/FBbt_00007239",
                "lbl": "adult brain",
                "type": "CLASS",
                "meta": {
                    "synonyms": [
                        {"pred": "hasExactSynonym", "val": "cerebrum", "xrefs": []}
                    ],
                    "basicPropertyValues": [
                        {"pred": "http://n2o.neo/property/nodeLabel", "val": "Entity"}
                    ]
                }
            },
            {
                "id": "http://purl.obolibrary.org/obo/FBbt_00000002",
                "lbl": "obsolete tagma",
                "type": "CLASS",
                "meta": {
                    "basicPropertyValues": [
                        {"pred": "http://n2o.neo/property/nodeLabel", "val": "Deprecated"}
                    ]
                }
            },
            {
                "id": "http://www.geneontology.org/formats/oboInOwl#hasExactSynonym"
            }
        ]
    }]
}"#;

const CONFIG: &str = r#"
curie_map:
  FBbt: "http://purl.obolibrary.org/obo/FBbt_"
filters:
  solr:
    exclusion:
      iri_prefix:
        - "oboInOwl"
      neo4j_node_label:
        - "Deprecated"
"#;

fn run_pipeline() -> Vec<obosolr_core::SolrDocument> {
    let graphs: GraphDocument = serde_json::from_str(GRAPHS).unwrap();
    let config = PipelineConfig::from_str(CONFIG).unwrap();
    transform_graphs(&graphs, &config, &AnnotationPredicates::default())
}

#[test]
fn test_retained_document_contents() {
    let documents = run_pipeline();
    assert_eq!(documents.len(), 1);

    let document = &documents[0];
    assert_eq!(document.obo_id, "FBbt:00007239");
    assert_eq!(document.short_form, "FBbt_00007239");
    assert_eq!(document.label, "adult brain");
    assert!(document.synonym.contains("cerebrum"));
    assert!(document.facets_annotation.contains("Entity"));
}

#[test]
fn test_filters_drop_flagged_nodes() {
    let documents = run_pipeline();
    assert!(documents
        .iter()
        .all(|document| !document.iri.contains("oboInOwl")));
    assert!(documents
        .iter()
        .all(|document| !document.facets_annotation.contains("Deprecated")));
}

#[test]
fn test_no_list_field_holds_duplicates() {
    // BTreeSet fields cannot hold duplicates by construction; check
    // the serialized form agrees.
    let documents = run_pipeline();
    let value = serde_json::to_value(&documents).unwrap();
    for document in value.as_array().unwrap() {
        for (_, field) in document.as_object().unwrap() {
            if let Some(items) = field.as_array() {
                let mut unique: Vec<&serde_json::Value> = items.iter().collect();
                unique.dedup();
                assert_eq!(unique.len(), items.len());
            }
        }
    }
}

#[test]
fn test_written_output_is_sorted_and_indented() {
    let documents = run_pipeline();
    let file = tempfile::NamedTempFile::new().unwrap();
    write_documents(&documents, file.path()).unwrap();

    let written = std::fs::read_to_string(file.path()).unwrap();
    assert!(written.contains("    \"obo_id\""));

    // Keys appear in sorted order within each document.
    let facets_at = written.find("\"facets_annotation\"").unwrap();
    let id_at = written.find("\"id\"").unwrap();
    let thumbnail_at = written.find("\"thumbnail\"").unwrap();
    assert!(facets_at < id_at && id_at < thumbnail_at);

    // Round-trips to the same collection.
    let reread: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(reread, serde_json::to_value(&documents).unwrap());
}

#[test]
fn test_rerun_is_deterministic() {
    let first = serde_json::to_value(run_pipeline()).unwrap();
    let second = serde_json::to_value(run_pipeline()).unwrap();
    assert_eq!(first, second);
}
