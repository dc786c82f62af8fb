use std::collections::{HashMap, HashSet};

/// Display names whose catalog key cannot be derived mechanically.
///
/// Seed data, not logic: this list tracks the upstream catalog and grows
/// with content updates. A hit here is final; no further rules apply.
const SPECIAL_CASES: &[(&str, &str)] = &[
    ("semi-shotgun cannonade", "shotgun_cannonade"),
    // The catalog keeps the typographic apostrophe, percent-encoded, in
    // this one key.
    ("summoner's wrath", "summoner%E2%80%99s_wrath"),
    ("summoner’s wrath", "summoner%E2%80%99s_wrath"),
];

/// Component keys the catalog lists as the assembled part, exempt from the
/// `_blueprint` suffix rule. Seed data, same caveat as above.
const SUFFIX_EXCEPTIONS: &[&str] = &[
    "odonata_prime_systems",
    "odonata_prime_harness",
    "odonata_prime_wings",
];

/// Component-part endings where the catalog entry is the blueprint, not the
/// assembled part.
const PART_SUFFIXES: &[&str] = &["_systems", "_chassis", "_harness", "_wings"];

/// Turns a human-written item reference into the canonical catalog key.
///
/// Pure and total: every input yields some key, the same input always
/// yields the same key.
#[derive(Debug)]
pub struct Normalizer {
    special_cases: HashMap<&'static str, &'static str>,
    suffix_exceptions: HashSet<&'static str>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self {
            special_cases: SPECIAL_CASES.iter().copied().collect(),
            suffix_exceptions: SUFFIX_EXCEPTIONS.iter().copied().collect(),
        }
    }
}

impl Normalizer {
    /// Derive the canonical key for a raw display name.
    pub fn normalize(&self, raw_name: &str) -> String {
        let name = raw_name.trim().to_lowercase();

        // Hand-authored mappings win outright
        if let Some(key) = self.special_cases.get(name.as_str()) {
            return (*key).to_string();
        }

        let mut key = name
            .replace('&', "and")
            .replace('.', "")
            .replace('-', "_")
            .replace(' ', "_")
            .replace('\'', "")
            .replace('’', "")
            // The catalog renamed this item prefix wholesale
            .replace("orokin", "corrupted");

        let is_part = PART_SUFFIXES.iter().any(|suffix| key.ends_with(suffix));
        if is_part && !self.suffix_exceptions.contains(key.as_str()) {
            key.push_str("_blueprint");
        }

        key
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
