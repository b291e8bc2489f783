//! Domain models used by the backend: subject profiles, user inputs, and the
//! generated study plan.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Class level the student belongs to. Serialized as the bare number string
/// ("10", "11", "12") so the browser form values map directly.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum StudentClass {
  #[serde(rename = "10")] Ten,
  #[serde(rename = "11")] Eleven,
  #[serde(rename = "12")] Twelve,
}
impl Default for StudentClass {
  fn default() -> Self { StudentClass::Ten }
}
impl std::fmt::Display for StudentClass {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      StudentClass::Ten => "10",
      StudentClass::Eleven => "11",
      StudentClass::Twelve => "12",
    };
    f.write_str(s)
  }
}

/// Where did a catalog profile come from?
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
  LocalBank,  // from user-provided TOML bank
  BuiltIn,    // compiled-in seed profiles (incl. the fallback)
}

/// Oral-exam-style question/answer pair used for review practice.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct VivaPair {
  pub question: String,
  pub answer: String,
}

/// Static bundle of study material associated with one subject key (or the
/// fallback). Built once at process start, never mutated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectProfile {
  pub topics: Vec<String>,
  pub notes: Vec<String>,
  pub mistakes: Vec<String>,
  pub viva: Vec<VivaPair>,
}

/// Validated form inputs handed to the plan generator. Immutable once built;
/// the exam date is already parsed so the generator stays total.
#[derive(Clone, Debug)]
pub struct UserInputs {
  pub student_class: StudentClass,
  pub subject: String,
  pub chapter_name: String,
  pub exam_date: NaiveDate,
}

/// One row of the daily schedule. `day` is 1-based; `date` is preformatted
/// for display ("Jan 5").
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct DailyPlanEntry {
  pub day: u32,
  pub date: String,
  pub task: String,
}

/// Full result of one generation call. Fresh per call, owned by the caller.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct StudyPlanOutput {
  pub micro_topics: Vec<String>,
  pub daily_plan: Vec<DailyPlanEntry>,
  pub revision_notes: Vec<String>,
  pub viva_questions: Vec<VivaPair>,
  pub common_mistakes: Vec<String>,
}
