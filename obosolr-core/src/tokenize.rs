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

//! Autosuggest tokenization
//!
//! Derives progressively split variants of a text value for
//! search-as-you-type indexing: punctuation stripped, then
//! digit boundaries split, then camel-case boundaries split.
//! Duplicates among the variants are the caller's problem.

/// Return the three autosuggest variants of `text`, in derivation
/// order: alpha, alpha-numeric split, alpha-numeric camel split.
pub fn variants(text: &str) -> [String; 3] {
    let alpha = alpha(text);
    let numeric_split = split_numeric(&alpha);
    let camel_split = split_camel(&numeric_split);
    [alpha, numeric_split, camel_split]
}

/// Non-alphanumeric, non-space characters become spaces; whitespace
/// runs collapse to a single space.
fn alpha(text: &str) -> String {
    let replaced: String = text
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect();
    collapse(&replaced)
}

/// Insert a space at every boundary between a digit and a non-digit.
fn split_numeric(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(p) = prev {
            if p != ' ' && ch != ' ' && p.is_numeric() != ch.is_numeric() {
                out.push(' ');
            }
        }
        out.push(ch);
        prev = Some(ch);
    }
    collapse(&out)
}

/// Insert a space wherever a lowercase letter is immediately followed
/// by an uppercase letter.
fn split_camel(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 4);
    let mut prev: Option<char> = None;
    for ch in text.chars() {
        if let Some(p) = prev {
            if p.is_lowercase() && ch.is_uppercase() {
                out.push(' ');
            }
        }
        out.push(ch);
        prev = Some(ch);
    }
    collapse(&out)
}

fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_with_digits() {
        let [alpha, numeric, camel] = variants("CamelCase123");
        assert_eq!(alpha, "CamelCase123");
        assert_eq!(numeric, "CamelCase 123");
        assert_eq!(camel, "Camel Case 123");
    }

    #[test]
    fn test_punctuation_becomes_spaces() {
        let [alpha, _, _] = variants("medulla (adult)");
        assert_eq!(alpha, "medulla adult");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let [alpha, numeric, camel] = variants("a  -  b");
        assert_eq!(alpha, "a b");
        assert_eq!(numeric, "a b");
        assert_eq!(camel, "a b");
    }

    #[test]
    fn test_digit_boundary_both_directions() {
        let [_, numeric, _] = variants("T4a12b");
        assert_eq!(numeric, "T 4 a 12 b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(variants(""), ["", "", ""]);
    }

    #[test]
    fn test_idempotent_on_normalized_text() {
        for variant in variants("JRC2018U_FBbt00003624 (neuron)") {
            let again = variants(&variant);
            assert_eq!(again[0], variant);
        }
        // A fully split variant survives all three stages unchanged.
        let [alpha, numeric, camel] = variants("Camel Case 123");
        assert_eq!(alpha, "Camel Case 123");
        assert_eq!(numeric, "Camel Case 123");
        assert_eq!(camel, "Camel Case 123");
    }
}
