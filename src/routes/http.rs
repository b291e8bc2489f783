//! HTTP endpoint handlers. Thin wrappers that validate the raw form data and
//! forward to the pure planner; each handler is instrumented and logs basic
//! result info.

use std::sync::Arc;
use axum::{extract::State, Json, response::IntoResponse};
use chrono::Local;
use tracing::{info, instrument};

use crate::domain::UserInputs;
use crate::error::PlanError;
use crate::planner::{self, parse_exam_date};
use crate::protocol::*;
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_get_subjects(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  Json(SubjectsOut { subjects: state.catalog.keys() })
}

/// Validate the submission, parse the exam date, and generate the plan.
/// Field values reach the generator verbatim; only emptiness is checked here.
#[instrument(level = "info", skip(state, body), fields(class = %body.student_class, subject_len = body.subject.len()))]
pub async fn http_post_plan(
  State(state): State<Arc<AppState>>,
  Json(body): Json<PlanIn>,
) -> Result<Json<PlanOut>, PlanError> {
  if body.subject.trim().is_empty() {
    return Err(PlanError::EmptyField("subject"));
  }
  if body.chapter_name.trim().is_empty() {
    return Err(PlanError::EmptyField("chapterName"));
  }
  if body.exam_date.trim().is_empty() {
    return Err(PlanError::EmptyField("examDate"));
  }
  let exam_date = parse_exam_date(&body.exam_date)?;

  // Optional "thinking" delay; purely presentational, the core stays
  // synchronous and instantaneous.
  if !state.plan_delay.is_zero() {
    tokio::time::sleep(state.plan_delay).await;
  }

  let inputs = UserInputs {
    student_class: body.student_class,
    subject: body.subject,
    chapter_name: body.chapter_name,
    exam_date,
  };
  let matched = state
    .catalog
    .resolve(&inputs.subject)
    .map(|e| e.key.clone())
    .unwrap_or_else(|| "fallback".into());

  let today = Local::now().date_naive();
  let plan = planner::generate(&inputs, &state.catalog, today);
  info!(
    target: "planner",
    subject = %trunc_for_log(&inputs.subject, 64),
    %matched,
    days = plan.daily_plan.len(),
    "HTTP plan generated"
  );
  Ok(Json(to_out(plan)))
}
