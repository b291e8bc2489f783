//! Request-level error taxonomy for the plan endpoint.
//!
//! The generator itself is total; everything here happens at the HTTP
//! boundary (missing fields, unparsable dates). Clients only ever see a
//! generic message; the precise cause goes to the logs.

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use thiserror::Error;

use crate::protocol::ErrorOut;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
  /// A required form field was empty. Named for diagnostics only.
  #[error("required field '{0}' is empty")]
  EmptyField(&'static str),
  /// The raw examDate string could not be parsed as a calendar date.
  #[error("examDate '{0}' is not a valid calendar date")]
  InvalidDate(String),
}

impl PlanError {
  /// Generic, user-facing message. Internals never leak to the client.
  pub fn user_message(&self) -> &'static str {
    match self {
      PlanError::EmptyField(_) => "Please fill in all required fields.",
      PlanError::InvalidDate(_) => "Please pick a valid exam date.",
    }
  }
}

impl IntoResponse for PlanError {
  fn into_response(self) -> Response {
    tracing::error!(target: "planner", error = %self, "Rejecting plan request");
    let body = Json(ErrorOut { message: self.user_message().to_string() });
    (StatusCode::UNPROCESSABLE_ENTITY, body).into_response()
  }
}
