//! The subject catalog: built-in profiles, the generic fallback, and the
//! lookup policy.
//!
//! Matching policy: a profile is selected when the user's subject text
//! contains the catalog key, ignoring case ("AP Physics" matches "Physics").
//! When several keys match, the first match in catalog insertion order wins;
//! local-bank entries are inserted ahead of the built-ins, and the built-ins
//! keep their declaration order below. Lookup never fails: unmatched
//! subjects get the fallback profile.

use crate::domain::{CatalogSource, SubjectProfile, VivaPair};

fn qa(question: &str, answer: &str) -> VivaPair {
  VivaPair { question: question.into(), answer: answer.into() }
}

fn strings(items: &[&str]) -> Vec<String> {
  items.iter().map(|s| s.to_string()).collect()
}

/// One keyed profile plus its provenance.
#[derive(Clone, Debug)]
pub struct CatalogEntry {
  pub key: String,
  pub source: CatalogSource,
  pub profile: SubjectProfile,
}

/// Insertion-ordered catalog. Constant for the process lifetime.
#[derive(Clone, Debug)]
pub struct SubjectCatalog {
  entries: Vec<CatalogEntry>,
  fallback: SubjectProfile,
}

impl SubjectCatalog {
  /// Catalog with only the compiled-in profiles.
  pub fn builtin() -> Self {
    Self::with_bank(Vec::new())
  }

  /// Catalog with a local bank merged ahead of the built-ins. Bank entries
  /// shadow a built-in with the same key; built-ins never overwrite them.
  pub fn with_bank(bank: Vec<(String, SubjectProfile)>) -> Self {
    let mut entries: Vec<CatalogEntry> = bank
      .into_iter()
      .map(|(key, profile)| CatalogEntry { key, source: CatalogSource::LocalBank, profile })
      .collect();
    for (key, profile) in builtin_profiles() {
      if entries.iter().any(|e| e.key.eq_ignore_ascii_case(&key)) {
        continue;
      }
      entries.push(CatalogEntry { key, source: CatalogSource::BuiltIn, profile });
    }
    Self { entries, fallback: fallback_profile() }
  }

  /// First entry (insertion order) whose key is a case-insensitive substring
  /// of `subject`, or None when nothing matches.
  pub fn resolve(&self, subject: &str) -> Option<&CatalogEntry> {
    let needle = subject.to_lowercase();
    self.entries.iter().find(|e| needle.contains(&e.key.to_lowercase()))
  }

  /// Profile for `subject`, falling back to the generic profile. Total.
  pub fn lookup(&self, subject: &str) -> &SubjectProfile {
    self.resolve(subject).map(|e| &e.profile).unwrap_or(&self.fallback)
  }

  pub fn fallback(&self) -> &SubjectProfile {
    &self.fallback
  }

  /// Known subject keys, insertion order. Served to the front-end datalist.
  pub fn keys(&self) -> Vec<String> {
    self.entries.iter().map(|e| e.key.clone()).collect()
  }

  /// (local_bank, built_in) entry counts, for the startup inventory log.
  pub fn counts_by_source(&self) -> (usize, usize) {
    let bank = self.entries.iter().filter(|e| e.source == CatalogSource::LocalBank).count();
    (bank, self.entries.len() - bank)
  }
}

/// Compiled-in subject profiles, declaration order = lookup precedence.
fn builtin_profiles() -> Vec<(String, SubjectProfile)> {
  vec![
    ("Physics".into(), SubjectProfile {
      topics: strings(&[
        "Dimensional Analysis", "Vector Addition", "Kinematic Equations",
        "Newton's Second Law", "Conservation of Momentum", "Free Body Diagrams",
      ]),
      notes: strings(&[
        "Focus on derivation of equations",
        "Numerical practice is key",
        "Always draw a clear diagram first",
      ]),
      mistakes: strings(&[
        "Mixing up sine and cosine in vector components",
        "Forgetting to convert units to SI (e.g., cm to m)",
        "Ignoring the sign conventions in 1D motion",
      ]),
      viva: vec![
        qa("What is the physical significance of the area under a velocity-time graph?",
           "The area represents the total displacement of the object."),
        qa("State the law of inertia.",
           "Every object persists in its state of rest or uniform motion unless acted upon by a net external force."),
        qa("Why do we need a reference frame in mechanics?",
           "To describe motion relative to an observer; without it, speed and position have no absolute meaning."),
      ],
    }),
    ("Chemistry".into(), SubjectProfile {
      topics: strings(&[
        "Mole Concept", "Stoichiometry", "Electronic Configuration",
        "Periodic Trends", "Chemical Bonding", "Valence Electrons",
      ]),
      notes: strings(&[
        "Learn the first 20 elements",
        "Practice balanced equations",
        "Understand the periodic table logic",
      ]),
      mistakes: strings(&[
        "Incorrect balancing of chemical equations",
        "Confusing isotopes with isobars",
        "Wrong orbital filling sequence (Aufbau Principle)",
      ]),
      viva: vec![
        qa("Define one mole.",
           "The amount of substance containing exactly 6.022 x 10^23 elementary entities."),
        qa("What is Electronegativity?",
           "The tendency of an atom to attract a shared pair of electrons in a covalent bond."),
        qa("Why are Noble gases stable?",
           "They have a complete octet in their outermost shell."),
      ],
    }),
    ("Biology".into(), SubjectProfile {
      topics: strings(&[
        "Cell Structure", "Enzymatic Reactions", "Mitosis vs Meiosis",
        "Photosynthetic Pathways", "Genetic Inheritance", "DNA Replication",
      ]),
      notes: strings(&[
        "Diagrams must be neatly labeled",
        "Focus on terminology",
        "Flowcharts help in understanding processes",
      ]),
      mistakes: strings(&[
        "Drawing non-proportional diagrams",
        "Confusion between xylem and phloem functions",
        "Incorrect spelling of biological terms",
      ]),
      viva: vec![
        qa("Why is the mitochondria called the powerhouse of the cell?",
           "It is the site of ATP production through aerobic respiration."),
        qa("What is the function of Ribosomes?",
           "They are responsible for protein synthesis."),
        qa("Define Osmosis.",
           "The movement of water from a region of higher concentration to lower concentration through a semi-permeable membrane."),
      ],
    }),
    ("Math".into(), SubjectProfile {
      topics: strings(&[
        "Algebraic Identities", "Quadratic Formulas", "Trigonometric Ratios",
        "Probability Theory", "Set Theory", "Calculus Fundamentals",
      ]),
      notes: strings(&[
        "Step-by-step calculation is vital",
        "Memorize standard formulas",
        "Verify answers by back-substitution",
      ]),
      mistakes: strings(&[
        "Sign errors (+/-) during transposition",
        "Incorrect application of BODMAS/PEMDAS",
        "Forgetting the constant \"C\" in integration",
      ]),
      viva: vec![
        qa("What is a null set?", "A set that contains no elements."),
        qa("Define the Pythagoras theorem.",
           "In a right-angled triangle, the square of the hypotenuse is equal to the sum of the squares of the other two sides."),
        qa("What is the probability of a certain event?", "The probability is exactly 1."),
      ],
    }),
  ]
}

/// Generic profile served when no catalog key matches the subject.
fn fallback_profile() -> SubjectProfile {
  SubjectProfile {
    topics: strings(&[
      "Conceptual Overview", "Key Terminology", "Process Analysis",
      "Practical Applications", "Summary & Revision",
    ]),
    notes: strings(&[
      "Summarize each section",
      "Highlight keywords",
      "Connect theories to examples",
    ]),
    mistakes: strings(&[
      "Skipping core definitions",
      "Lack of practical examples",
      "Not revising previous year questions",
    ]),
    viva: vec![
      qa("Explain the core objective of this chapter.",
         "To understand the fundamental principles and their applications in the real world."),
      qa("How does this topic relate to previous chapters?",
         "It builds on foundational concepts to explain more complex system behaviors."),
    ],
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exact_key_matches() {
    let cat = SubjectCatalog::builtin();
    assert_eq!(cat.lookup("Physics").topics[0], "Dimensional Analysis");
  }

  #[test]
  fn substring_match_is_case_insensitive() {
    let cat = SubjectCatalog::builtin();
    let p = cat.lookup("Advanced Physics Lab");
    assert_eq!(p.topics[0], "Dimensional Analysis");
    let c = cat.lookup("organic CHEMISTRY II");
    assert_eq!(c.topics[0], "Mole Concept");
  }

  #[test]
  fn unknown_subject_gets_fallback() {
    let cat = SubjectCatalog::builtin();
    assert!(cat.resolve("History").is_none());
    assert_eq!(cat.lookup("History"), cat.fallback());
    assert_eq!(cat.fallback().topics.len(), 5);
  }

  #[test]
  fn tie_break_is_insertion_order() {
    let cat = SubjectCatalog::builtin();
    // Both "Math" and "Physics" are substrings; Physics is declared first.
    let e = cat.resolve("math physics combined").unwrap();
    assert_eq!(e.key, "Physics");
  }

  #[test]
  fn bank_entries_take_precedence() {
    let profile = SubjectProfile {
      topics: strings(&["Kingdoms", "Timelines"]),
      notes: vec![],
      mistakes: vec![],
      viva: vec![],
    };
    let cat = SubjectCatalog::with_bank(vec![("History".into(), profile)]);
    assert_eq!(cat.lookup("World History").topics[0], "Kingdoms");
    let (bank, builtin) = cat.counts_by_source();
    assert_eq!(bank, 1);
    assert_eq!(builtin, 4);
  }

  #[test]
  fn bank_shadows_builtin_key() {
    let profile = SubjectProfile {
      topics: strings(&["Custom Mechanics"]),
      notes: vec![],
      mistakes: vec![],
      viva: vec![],
    };
    let cat = SubjectCatalog::with_bank(vec![("physics".into(), profile)]);
    assert_eq!(cat.lookup("Physics").topics[0], "Custom Mechanics");
    assert_eq!(cat.keys().iter().filter(|k| k.eq_ignore_ascii_case("physics")).count(), 1);
  }
}
