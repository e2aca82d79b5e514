// ABOUTME: Text helpers for display casing and free-text tag matching
// ABOUTME: Title casing for meal names and case-insensitive substring disjunction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Title case a string for display
///
/// A letter is uppercased when the previous character is not a letter and
/// lowercased otherwise, so `"grilled chicken's"` becomes `"Grilled Chicken'S"` and
/// `"3d-printed"` becomes `"3D-Printed"`.
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_cased = false;

    for c in text.chars() {
        let cased = c.is_lowercase() || c.is_uppercase();
        if cased && !previous_cased {
            result.extend(c.to_uppercase());
        } else if cased {
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
        previous_cased = cased;
    }

    result
}

/// Whether `text` contains at least one of `terms`, ignoring case
///
/// Terms are plain substrings, not tokens: `"nut"` matches `"nutmeg"`.
#[must_use]
pub fn contains_any(text: &str, terms: &[String]) -> bool {
    let haystack = text.to_lowercase();
    terms
        .iter()
        .any(|term| haystack.contains(term.to_lowercase().as_str()))
}
