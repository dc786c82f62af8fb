use std::collections::HashMap;

/// Fully-socketed (amber, cyan) star counts per Ayatan sculpture key.
///
/// Seed data tracking the upstream catalog; new sculptures get a row here.
const AYATAN_STARS: &[(&str, (u32, u32))] = &[
    ("ayatan_anasa_sculpture", (2, 2)),
    ("ayatan_orta_sculpture", (1, 2)),
    ("ayatan_sah_sculpture", (2, 1)),
    ("ayatan_vaya_sculpture", (1, 2)),
    ("ayatan_valana_sculpture", (1, 2)),
    ("ayatan_piv_sculpture", (1, 2)),
    ("ayatan_ayr_sculpture", (1, 2)),
    ("ayatan_zambuka_sculpture", (1, 2)),
    ("ayatan_kitha_sculpture", (1, 2)),
    ("ayatan_hemakara_sculpture", (2, 2)),
];

/// Which variant of an item a price observation must describe to count.
///
/// The two axes (mod rank, embedded stars) are mutually exclusive per item.
/// Whether an observation actually carries an axis is decided from the shape
/// of the returned data, so `Rank` and `Stars` only constrain observations
/// that expose the matching fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantSelector {
    /// No constraint.
    Any,
    /// Match observations at this mod rank.
    Rank(u32),
    /// Match observations at this star configuration.
    Stars { amber: u32, cyan: u32 },
}

/// Lookup of known sculpture keys to their maxed star configuration.
#[derive(Debug)]
pub struct StarTable {
    entries: HashMap<&'static str, (u32, u32)>,
}

impl Default for StarTable {
    fn default() -> Self {
        Self {
            entries: AYATAN_STARS.iter().copied().collect(),
        }
    }
}

impl StarTable {
    /// The fully-socketed (amber, cyan) pair for a sculpture key, if known.
    pub fn maxed(&self, canonical_key: &str) -> Option<(u32, u32)> {
        self.entries.get(canonical_key).copied()
    }

    /// Build the variant selector for an item.
    ///
    /// Known sculptures are priced at their maxed star configuration and the
    /// requested rank is ignored; everything else carries the requested rank.
    pub fn selector_for(&self, canonical_key: &str, requested_rank: u32) -> VariantSelector {
        match self.maxed(canonical_key) {
            Some((amber, cyan)) => VariantSelector::Stars { amber, cyan },
            None => VariantSelector::Rank(requested_rank),
        }
    }
}

#[cfg(test)]
#[path = "variant_tests.rs"]
mod tests;
