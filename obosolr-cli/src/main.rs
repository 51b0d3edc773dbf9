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

//! Obosolr CLI
//!
//! Command-line entry point: load the obographs export and the
//! pipeline configuration, transform, write the Solr collection.

use anyhow::{Context, Result};
use clap::Parser;
use obosolr_core::{
    transform_graphs, write_documents, AnnotationPredicates, GraphDocument, PipelineConfig,
};
use std::path::PathBuf;
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "obosolr")]
#[command(about = "Convert an obographs JSON export into Solr documents", long_about = None)]
struct Cli {
    /// Path to the obographs JSON input
    input: PathBuf,

    /// Path to the pipeline configuration YAML
    config: PathBuf,

    /// Path to write the Solr document collection
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; the output file is the only artifact.
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let graphs = GraphDocument::from_path(&cli.input)
        .with_context(|| format!("Failed to load graph document {}", cli.input.display()))?;
    let config = PipelineConfig::from_path(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;

    info!(
        "loaded {} graphs and {} curie prefixes",
        graphs.graphs.len(),
        config.curie_map.len()
    );

    let documents = transform_graphs(&graphs, &config, &AnnotationPredicates::default());
    write_documents(&documents, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!(
        "✓ Wrote {} documents to {}",
        documents.len(),
        cli.output.display()
    );
    Ok(())
}
