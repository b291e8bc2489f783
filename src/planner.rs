//! The plan generator: a single-shot pure computation from user inputs and
//! the subject catalog to a structured study plan.
//!
//! `today` is an explicit parameter (never read from the clock in here) so
//! generation is deterministic and testable. The function is total over
//! well-formed inputs: every lookup has a fallback and every slice tolerates
//! short sequences. Date parsing of the raw form string lives in
//! [`parse_exam_date`] and is the only fallible step, owned by the caller.

use chrono::{Duration, NaiveDate};
use tracing::{debug, instrument};

use crate::catalog::SubjectCatalog;
use crate::domain::{DailyPlanEntry, StudyPlanOutput, UserInputs, VivaPair};
use crate::error::PlanError;
use crate::util::fill_template;

/// Fixed task for the last scheduled day before the exam.
pub const FINAL_DAY_TASK: &str = "Final Mock Test & Chill";

/// Two-week display cap on the daily schedule.
pub const DAILY_PLAN_CAP: usize = 14;
/// Compact topic summary shows at most this many entries.
pub const MICRO_TOPIC_CAP: usize = 6;
/// Upper bound on viva Q&A pairs, including synthesized ones.
pub const VIVA_CAP: usize = 5;

/// Parse the raw `examDate` form value (`YYYY-MM-DD`, as produced by
/// `<input type="date">`).
pub fn parse_exam_date(raw: &str) -> Result<NaiveDate, PlanError> {
  NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
    .map_err(|_| PlanError::InvalidDate(raw.to_string()))
}

/// Derive a day-by-day study plan for the given inputs.
#[instrument(level = "info", skip(inputs, catalog), fields(subject = %inputs.subject, exam_date = %inputs.exam_date, %today))]
pub fn generate(inputs: &UserInputs, catalog: &SubjectCatalog, today: NaiveDate) -> StudyPlanOutput {
  let profile = catalog.lookup(&inputs.subject);
  let topics = &profile.topics;

  // Whole days between today and the exam; a past or same-day exam yields a
  // short (possibly empty) plan rather than an error.
  let diff_days = (inputs.exam_date - today).num_days().unsigned_abs() as usize;

  // Spread all topics evenly across the available days: every topic is
  // touched when there are enough days, several per day otherwise.
  let denom = diff_days.max(1);
  let topics_per_day = ((topics.len() + denom - 1) / denom).max(1);
  debug!(target: "planner", diff_days, topics_per_day, topic_count = topics.len(), "Plan shape computed");

  // Only the first DAILY_PLAN_CAP entries survive the display cap, so only
  // those are built; the final-day override can't land past the cap anyway.
  let emit_days = diff_days.min(DAILY_PLAN_CAP);
  let mut daily_plan = Vec::with_capacity(emit_days);
  for i in 0..emit_days {
    let date = (today + Duration::days(i as i64)).format("%b %-d").to_string();
    let task = if i == diff_days - 1 {
      FINAL_DAY_TASK.to_string()
    } else {
      let idx = (i * topics_per_day).min(topics.len().saturating_sub(1));
      topics.get(idx).cloned().unwrap_or_else(|| "Comprehensive Revision".to_string())
    };
    daily_plan.push(DailyPlanEntry { day: (i + 1) as u32, date, task });
  }

  let micro_topics: Vec<String> = topics.iter().take(MICRO_TOPIC_CAP).cloned().collect();

  // Personalized viva pairs: pad thin profiles with two questions that quote
  // the submitted chapter and subject verbatim, then cap.
  let mut viva_questions = profile.viva.clone();
  if viva_questions.len() < VIVA_CAP {
    viva_questions.push(VivaPair {
      question: fill_template(
        "What is the most challenging part of {chapter}?",
        &[("chapter", &inputs.chapter_name)],
      ),
      answer: "Depends on the learner, but usually application-based questions.".into(),
    });
    viva_questions.push(VivaPair {
      question: fill_template(
        "How can we apply {subject} in everyday life?",
        &[("subject", &inputs.subject)],
      ),
      answer: "By observing patterns and using scientific/logical reasoning.".into(),
    });
  }
  viva_questions.truncate(VIVA_CAP);

  StudyPlanOutput {
    micro_topics,
    daily_plan,
    revision_notes: profile.notes.clone(),
    viva_questions,
    common_mistakes: profile.mistakes.clone(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::StudentClass;

  fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
  }

  fn inputs(subject: &str, chapter: &str, exam: NaiveDate) -> UserInputs {
    UserInputs {
      student_class: StudentClass::Ten,
      subject: subject.into(),
      chapter_name: chapter.into(),
      exam_date: exam,
    }
  }

  #[test]
  fn five_day_physics_plan() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(5);
    let out = generate(&inputs("Physics", "Kinematics", exam), &cat, today());

    assert_eq!(out.daily_plan.len(), 5);
    assert_eq!(out.daily_plan[0].day, 1);
    assert_eq!(out.daily_plan[0].date, "Jan 1");
    assert_eq!(out.daily_plan[4].date, "Jan 5");
    assert_eq!(out.daily_plan[4].task, FINAL_DAY_TASK);
    assert_eq!(out.micro_topics[0], "Dimensional Analysis");
    // 6 topics over 5 days -> 2 per day -> day 2 jumps to the third topic.
    assert_eq!(out.daily_plan[1].task, "Kinematic Equations");
  }

  #[test]
  fn substring_subject_resolves_to_physics() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(3);
    let out = generate(&inputs("Advanced Physics Lab", "Optics", exam), &cat, today());
    assert_eq!(out.micro_topics[0], "Dimensional Analysis");
  }

  #[test]
  fn unknown_subject_uses_fallback_topics() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(7);
    let out = generate(&inputs("History", "French Revolution", exam), &cat, today());
    assert_eq!(out.micro_topics.len(), 5);
    assert_eq!(out.micro_topics[0], "Conceptual Overview");
  }

  #[test]
  fn exam_today_yields_empty_plan() {
    let cat = SubjectCatalog::builtin();
    let out = generate(&inputs("Math", "Sets", today()), &cat, today());
    assert!(out.daily_plan.is_empty());
    // The rest of the plan is still populated for the caller to render.
    assert_eq!(out.micro_topics[0], "Algebraic Identities");
  }

  #[test]
  fn past_exam_date_still_produces_a_plan() {
    let cat = SubjectCatalog::builtin();
    let exam = today() - Duration::days(3);
    let out = generate(&inputs("Biology", "Cells", exam), &cat, today());
    assert_eq!(out.daily_plan.len(), 3);
    assert_eq!(out.daily_plan[2].task, FINAL_DAY_TASK);
  }

  #[test]
  fn daily_plan_is_capped_at_two_weeks() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(30);
    let out = generate(&inputs("Chemistry", "Bonding", exam), &cat, today());
    assert_eq!(out.daily_plan.len(), DAILY_PLAN_CAP);
    assert_eq!(out.daily_plan[13].day, 14);
    // The final-day override falls outside the display window here; the
    // capped schedule keeps cycling topics, matching the source behavior.
    assert_eq!(out.daily_plan[13].task, "Valence Electrons");
  }

  #[test]
  fn far_future_exam_builds_only_the_capped_window() {
    let cat = SubjectCatalog::builtin();
    // Decades out: output is identical to any other over-cap horizon and the
    // generator must not build the full day range to get there.
    let exam = today() + Duration::days(10_000);
    let out = generate(&inputs("Physics", "Kinematics", exam), &cat, today());
    assert_eq!(out.daily_plan.len(), DAILY_PLAN_CAP);
    assert_eq!(out.daily_plan[0].date, "Jan 1");
    assert_eq!(out.daily_plan[13].date, "Jan 14");
    assert_eq!(out.daily_plan[13].task, "Free Body Diagrams");
  }

  #[test]
  fn truncation_is_idempotent() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(30);
    let out = generate(&inputs("Math", "Calculus", exam), &cat, today());
    let mut again = out.daily_plan.clone();
    again.truncate(DAILY_PLAN_CAP);
    assert_eq!(again, out.daily_plan);
  }

  #[test]
  fn generation_is_deterministic() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(9);
    let ins = inputs("Physics", "Waves", exam);
    assert_eq!(generate(&ins, &cat, today()), generate(&ins, &cat, today()));
  }

  #[test]
  fn micro_topics_are_a_capped_prefix() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(4);
    let out = generate(&inputs("Biology", "Genetics", exam), &cat, today());
    let profile = cat.lookup("Biology");
    assert!(out.micro_topics.len() <= MICRO_TOPIC_CAP);
    assert_eq!(out.micro_topics[..], profile.topics[..out.micro_topics.len()]);
  }

  #[test]
  fn thin_viva_profile_gets_two_synthesized_pairs() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(6);
    // Fallback profile ships 2 viva pairs -> 2 originals + 2 synthesized.
    let out = generate(&inputs("History", "French Revolution", exam), &cat, today());
    assert_eq!(out.viva_questions.len(), 4);
    assert!(out.viva_questions[2].question.contains("French Revolution"));
    assert!(out.viva_questions[3].question.contains("History"));
  }

  #[test]
  fn viva_is_capped_at_five() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(6);
    // Physics ships 3 pairs; both synthesized pairs are appended, then capped.
    let out = generate(&inputs("Physics", "Kinematics", exam), &cat, today());
    assert_eq!(out.viva_questions.len(), VIVA_CAP);
    assert!(out.viva_questions[3].question.contains("Kinematics"));
  }

  #[test]
  fn notes_and_mistakes_pass_through_untruncated() {
    let cat = SubjectCatalog::builtin();
    let exam = today() + Duration::days(2);
    let out = generate(&inputs("Chemistry", "Moles", exam), &cat, today());
    let profile = cat.lookup("Chemistry");
    assert_eq!(out.revision_notes, profile.notes);
    assert_eq!(out.common_mistakes, profile.mistakes);
  }

  #[test]
  fn month_boundary_dates_format_correctly() {
    let cat = SubjectCatalog::builtin();
    let today = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
    let exam = today + Duration::days(4);
    let out = generate(&inputs("Math", "Probability", exam), &cat, today);
    let dates: Vec<&str> = out.daily_plan.iter().map(|e| e.date.as_str()).collect();
    assert_eq!(dates, vec!["Jan 30", "Jan 31", "Feb 1", "Feb 2"]);
  }

  #[test]
  fn exam_date_parsing() {
    assert_eq!(parse_exam_date("2024-03-05").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert_eq!(parse_exam_date(" 2024-03-05 ").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    assert!(matches!(parse_exam_date("05/03/2024"), Err(PlanError::InvalidDate(_))));
    assert!(matches!(parse_exam_date("not-a-date"), Err(PlanError::InvalidDate(_))));
    assert!(matches!(parse_exam_date("2024-02-30"), Err(PlanError::InvalidDate(_))));
  }
}
