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

//! Identifier resolution
//!
//! Maps an IRI to its prefixed short forms using the configured CURIE
//! table. Namespaces are ranked longest-first so that a
//! project-specific namespace (`.../obo/FBbt_`) wins over a generic
//! one (`.../obo/`) that is a literal prefix of it. Resolution never
//! fails: identifiers outside every configured namespace fall back to
//! the generic OBO namespace, then to the sanitized raw IRI with a
//! logged warning.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// The generic OBO namespace used as a last-resort prefix match.
pub const OBO_NAMESPACE: &str = "http://purl.obolibrary.org/obo/";

/// Prefixed identifier variants derived from an IRI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdVariants {
    /// Colon-separated form, e.g. `FBbt:00007239`.
    pub obo_id: String,
    /// Underscore-separated token-safe form, e.g. `FBbt_00007239`.
    pub short_form: String,
}

/// Resolver over a ranked CURIE table.
#[derive(Debug, Clone)]
pub struct CurieResolver {
    /// `(namespace, prefix)` pairs, longest namespace first.
    ranked: Vec<(String, String)>,
}

impl CurieResolver {
    /// Build a resolver from a prefix-to-namespace map.
    ///
    /// Ranking is by descending namespace length, then descending
    /// lexicographic order as a stable tie-break.
    pub fn new(curie_map: &BTreeMap<String, String>) -> Self {
        let mut ranked: Vec<(String, String)> = curie_map
            .iter()
            .map(|(prefix, namespace)| (namespace.clone(), prefix.clone()))
            .collect();
        ranked.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| b.0.cmp(&a.0)));
        Self { ranked }
    }

    /// Resolve an identifier to its `obo_id` and `short_form`.
    pub fn resolve(&self, id: &str) -> IdVariants {
        for (namespace, prefix) in &self.ranked {
            if let Some(rest) = id.strip_prefix(namespace.as_str()) {
                let suffix = sanitize_token(rest);
                let numeric_start = suffix
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_digit());
                // Numeric local parts need the prefix to stay unambiguous.
                let short_form = if namespace.ends_with(&format!("{prefix}_")) || numeric_start {
                    format!("{prefix}_{suffix}")
                } else {
                    suffix.clone()
                };
                return IdVariants {
                    obo_id: format!("{prefix}:{suffix}"),
                    short_form,
                };
            }
        }

        if let Some(rest) = id.strip_prefix(OBO_NAMESPACE) {
            let obo_id = match rest.rsplit_once('_') {
                Some((head, tail)) => format!("{head}:{tail}"),
                None => rest.to_string(),
            };
            return IdVariants {
                obo_id,
                short_form: rest.to_string(),
            };
        }

        warn!("ID {id} does not have a prefixable IRI");
        let fallback = sanitize_token(id);
        IdVariants {
            obo_id: fallback.clone(),
            short_form: fallback,
        }
    }
}

/// Replace every run of non-alphanumeric, non-underscore characters
/// with a single underscore, yielding a token-safe identifier part.
pub fn sanitize_token(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_run = false;
    for ch in raw.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            out.push(ch);
            in_run = false;
        } else if !in_run {
            out.push('_');
            in_run = true;
        }
    }
    out
}
