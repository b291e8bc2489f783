//! Public protocol structs for the HTTP endpoints (serde ready).
//! Field names are camelCase to match the browser client; keep this small
//! and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{StudentClass, StudyPlanOutput, VivaPair};

/// Raw form submission. The exam date arrives as the `<input type="date">`
/// string and is parsed (and validated) at the route boundary.
#[derive(Debug, Deserialize)]
pub struct PlanIn {
    #[serde(rename = "studentClass", default)]
    pub student_class: StudentClass,
    pub subject: String,
    #[serde(rename = "chapterName")]
    pub chapter_name: String,
    #[serde(rename = "examDate")]
    pub exam_date: String,
}

#[derive(Debug, Serialize)]
pub struct DailyPlanEntryOut {
    pub day: u32,
    pub date: String,
    pub task: String,
}

/// DTO for a generated plan.
#[derive(Debug, Serialize)]
pub struct PlanOut {
    #[serde(rename = "microTopics")]
    pub micro_topics: Vec<String>,
    #[serde(rename = "dailyPlan")]
    pub daily_plan: Vec<DailyPlanEntryOut>,
    #[serde(rename = "revisionNotes")]
    pub revision_notes: Vec<String>,
    #[serde(rename = "vivaQuestions")]
    pub viva_questions: Vec<VivaPair>,
    #[serde(rename = "commonMistakes")]
    pub common_mistakes: Vec<String>,
}

/// Convert the internal plan to the public DTO.
pub fn to_out(plan: StudyPlanOutput) -> PlanOut {
    PlanOut {
        micro_topics: plan.micro_topics,
        daily_plan: plan
            .daily_plan
            .into_iter()
            .map(|e| DailyPlanEntryOut { day: e.day, date: e.date, task: e.task })
            .collect(),
        revision_notes: plan.revision_notes,
        viva_questions: plan.viva_questions,
        common_mistakes: plan.common_mistakes,
    }
}

#[derive(Serialize)]
pub struct SubjectsOut {
    pub subjects: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
