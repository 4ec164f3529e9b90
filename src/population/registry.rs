//! Country population registry.

use std::collections::HashMap;

/// Lookup seam for population figures.
///
/// A miss is an expected outcome, not an error: unknown codes simply
/// yield no population and the per-capita value stays missing.
pub trait PopulationLookup {
    /// Population for an ISO alpha-2 country code, if known.
    fn population(&self, alpha2: &str) -> Option<u64>;
}

/// Registry of population figures keyed by ISO alpha-2 code.
#[derive(Debug)]
pub struct PopulationRegistry {
    populations: HashMap<String, u64>,
}

impl PopulationRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            populations: HashMap::new(),
        }
    }

    pub fn register(&mut self, alpha2: &str, population: u64) {
        self.populations.insert(alpha2.to_string(), population);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.populations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.populations.is_empty()
    }
}

impl PopulationLookup for PopulationRegistry {
    fn population(&self, alpha2: &str) -> Option<u64> {
        self.populations.get(alpha2).copied()
    }
}

impl Default for PopulationRegistry {
    /// Populations of the EEA reporting countries (2022 figures).
    fn default() -> Self {
        let mut registry = Self::new();

        for (code, population) in [
            ("AT", 8_939_617),
            ("BE", 11_617_623),
            ("BG", 6_838_937),
            ("HR", 3_862_305),
            ("CY", 904_700),
            ("CZ", 10_516_707),
            ("DK", 5_873_420),
            ("EE", 1_331_796),
            ("FI", 5_541_241),
            ("FR", 67_842_582),
            ("DE", 83_237_124),
            ("GR", 10_459_782),
            ("HU", 9_689_010),
            ("IE", 5_060_004),
            ("IT", 58_983_122),
            ("LV", 1_875_757),
            ("LT", 2_805_998),
            ("LU", 643_941),
            ("MT", 520_971),
            ("NL", 17_590_672),
            ("PL", 37_654_247),
            ("PT", 10_352_042),
            ("RO", 19_042_455),
            ("SK", 5_434_712),
            ("SI", 2_107_180),
            ("ES", 47_432_805),
            ("SE", 10_452_326),
            ("IS", 376_248),
            ("LI", 39_327),
            ("NO", 5_425_270),
            ("CH", 8_738_791),
            ("TR", 84_979_913),
        ] {
            registry.register(code, population);
        }

        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
