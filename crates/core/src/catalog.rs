//! Milestone catalog
//!
//! The catalog decides which contracts appear on a career's milestone
//! timeline; the stored events only say when they were completed. Keys are
//! matched ignoring ASCII case, so `first_karmanuncrewed` in a record matches
//! the `first_KarmanUncrewed` entry.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Built-in milestones in display order
const MILESTONES: &[(&str, &str)] = &[
    ("first_KarmanUncrewed", "Karman Line"),
    ("SuborbitalReturn", "Reach a Suborbital Trajectory & Return (uncrewed)"),
    ("BreakSoundBarrier", "Break the Sound Barrier (Crewed)"),
    ("first_Downrange", "Downrange Milestone (3000km)"),
    ("first_OrbitUncrewed", "First Artificial Satellite"),
    ("first_OrbitScience", "First Scientific Satellite"),
    ("first_MoonFlybyUncrewed", "Lunar Flyby (Uncrewed)"),
    ("first_MoonImpact", "Lunar Impactor (Uncrewed)"),
    ("first_MoonOrbitUncrewed", "Lunar Orbiter (Uncrewed)"),
    ("landingMoon", "Lunar Landing (Uncrewed)"),
    ("MoonLandingReturn", "Lunar Landing & Sample Return (Uncrewed)"),
    ("MoonRover", "Lunar Rover (Uncrewed)"),
    ("first_OrbitRecover", "Reach Orbital Speed & Return Safely to Earth"),
    ("first_KarmanCrewed", "Pass the Karman Line (Crewed)"),
    ("first_OrbitCrewed", "First Orbital Flight (Crewed)"),
    ("Rendezvous", "First Rendezvous"),
    ("first_EVA", "First EVA"),
    ("first_Docking", "First Docking"),
    ("first_MoonFlybyCrewed", "Crewed Lunar Flyby"),
    ("FirstCrewedLunarOrbit", "First Crewed Lunar Orbit"),
    ("first_MoonLandingCrewed", "First Human Moon Landing"),
    ("flybyMercury", "Mercury Flyby"),
    ("flybyVenus", "Venus Flyby"),
    ("flybyMars", "Mars Flyby"),
    ("flybyJupiter", "Jupiter Flyby"),
    ("orbitMercury", "Mercury Orbit"),
    ("orbitVenus", "Venus Orbit"),
    ("orbitMars", "Mars Orbit"),
    ("orbitJupiter", "Jupiter Orbit"),
    ("landingMercury", "Mercury Landing"),
    ("landingVenus", "Venus Landing"),
    ("landingMars", "Mars Landing"),
];

static BUILTIN: Lazy<MilestoneCatalog> =
    Lazy::new(|| MilestoneCatalog::from_pairs(MILESTONES.iter().copied()));

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    /// Contract internal name as spelled in the catalog
    pub key: String,
    /// Human-readable name
    pub display_name: String,
}

/// Ordered, case-insensitive mapping from contract key to display name
#[derive(Debug, Clone, Default)]
pub struct MilestoneCatalog {
    entries: Vec<Milestone>,
    /// Lowercased key -> position in `entries`
    index: HashMap<String, usize>,
}

impl MilestoneCatalog {
    /// The built-in catalog, constructed on first use
    pub fn builtin() -> &'static MilestoneCatalog {
        &BUILTIN
    }

    /// Build a catalog from `(key, display name)` pairs
    ///
    /// A key that repeats an earlier one (ignoring case) is dropped, so every
    /// catalog key is unique.
    pub fn from_pairs<K, D>(pairs: impl IntoIterator<Item = (K, D)>) -> Self
    where
        K: Into<String>,
        D: Into<String>,
    {
        let mut catalog = MilestoneCatalog::default();
        for (key, display_name) in pairs {
            let key = key.into();
            let folded = key.to_ascii_lowercase();
            if catalog.index.contains_key(&folded) {
                continue;
            }
            catalog.index.insert(folded, catalog.entries.len());
            catalog.entries.push(Milestone {
                key,
                display_name: display_name.into(),
            });
        }
        catalog
    }

    /// Entries in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Milestone> {
        self.entries.iter()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a milestone by key, ignoring case
    pub fn get(&self, key: &str) -> Option<&Milestone> {
        self.index
            .get(&key.to_ascii_lowercase())
            .map(|&i| &self.entries[i])
    }

    /// Whether `key` names a catalog milestone, ignoring case
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
