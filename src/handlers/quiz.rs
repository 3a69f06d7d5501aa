// src/handlers/quiz.rs

use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};

use axum::{Json, extract::State, response::IntoResponse};
use validator::Validate;

use crate::{
    bank::QuestionBank,
    error::AppError,
    models::{
        question::{AnswerRequest, QuestionView, likert_choices},
        report::{ChartPoint, ChartSeries, ResultsResponse, ValueAxis},
        session::{Phase, QuizSession, SessionView},
    },
    scoring,
    state::SharedSession,
};

fn read_session(session: &SharedSession) -> Result<RwLockReadGuard<'_, QuizSession>, AppError> {
    session
        .read()
        .map_err(|_| AppError::InternalServerError("session lock poisoned".to_string()))
}

fn write_session(session: &SharedSession) -> Result<RwLockWriteGuard<'_, QuizSession>, AppError> {
    session
        .write()
        .map_err(|_| AppError::InternalServerError("session lock poisoned".to_string()))
}

/// Builds the client-facing snapshot of the session. While in
/// progress this carries the current question with the fixed Likert
/// choices and any previously chosen value; once completed, only the
/// phase (the client fetches results separately).
fn session_view(bank: &QuestionBank, session: &QuizSession) -> SessionView {
    let question = match session.phase() {
        Phase::Completed => None,
        Phase::InProgress => {
            let index = session.current_index();
            let question = &bank.questions()[index];
            Some(QuestionView {
                id: question.id,
                text: question.text.clone(),
                position: index + 1,
                total: bank.len(),
                progress_percent: ((index + 1) as f64 / bank.len() as f64) * 100.0,
                selected: session.answer_at(index),
                choices: likert_choices(),
            })
        }
    };

    SessionView {
        phase: session.phase(),
        question,
    }
}

/// Returns the current phase and question.
#[utoipa::path(
    get,
    path = "/api/quiz",
    responses((status = 200, description = "Current phase and question", body = SessionView))
)]
pub async fn get_session(
    State(bank): State<Arc<QuestionBank>>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let session = read_session(&session)?;
    Ok(Json(session_view(&bank, &session)))
}

/// Records an answer for the current question (last-write-wins).
///
/// * Values outside 1..5 are rejected with 400 before the session is
///   touched.
/// * After completion the event is ignored; the returned view shows
///   the completed phase.
#[utoipa::path(
    post,
    path = "/api/quiz/answer",
    request_body = AnswerRequest,
    responses(
        (status = 200, description = "Session after recording the answer", body = SessionView),
        (status = 400, description = "Value outside the 1..5 Likert scale")
    )
)]
pub async fn submit_answer(
    State(bank): State<Arc<QuestionBank>>,
    State(session): State<SharedSession>,
    Json(payload): Json<AnswerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::BadRequest(validation_errors.to_string()));
    }

    let mut session = write_session(&session)?;
    if !session.record_answer(payload.value) {
        tracing::debug!("ignored answer event outside the in-progress phase");
    }
    Ok(Json(session_view(&bank, &session)))
}

/// Moves to the next question, or completes the quiz on the last one.
/// Without an answer at the current question this is a no-op, matching
/// a disabled "Next" button.
#[utoipa::path(
    post,
    path = "/api/quiz/next",
    responses((status = 200, description = "Session after advancing", body = SessionView))
)]
pub async fn next_question(
    State(bank): State<Arc<QuestionBank>>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = write_session(&session)?;
    if !session.advance() {
        tracing::debug!(
            index = session.current_index(),
            "ignored next event without an answer at the cursor"
        );
    } else if session.phase() == Phase::Completed {
        tracing::info!("quiz completed after {} answers", session.answers().len());
    }
    Ok(Json(session_view(&bank, &session)))
}

/// Moves back one question, saturating at the first.
#[utoipa::path(
    post,
    path = "/api/quiz/previous",
    responses((status = 200, description = "Session after going back", body = SessionView))
)]
pub async fn previous_question(
    State(bank): State<Arc<QuestionBank>>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = write_session(&session)?;
    session.retreat();
    Ok(Json(session_view(&bank, &session)))
}

/// Clears all answers and returns to the first question.
#[utoipa::path(
    post,
    path = "/api/quiz/restart",
    responses((status = 200, description = "Fresh session", body = SessionView))
)]
pub async fn restart_quiz(
    State(bank): State<Arc<QuestionBank>>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let mut session = write_session(&session)?;
    session.reset();
    tracing::info!("quiz session reset");
    Ok(Json(session_view(&bank, &session)))
}

/// Returns the scored personality profile plus the bar-chart series.
/// Only available once the session is completed.
#[utoipa::path(
    get,
    path = "/api/quiz/results",
    responses(
        (status = 200, description = "Per-trait averages and chart data", body = ResultsResponse),
        (status = 409, description = "Quiz still in progress")
    )
)]
pub async fn get_results(
    State(bank): State<Arc<QuestionBank>>,
    State(session): State<SharedSession>,
) -> Result<impl IntoResponse, AppError> {
    let session = read_session(&session)?;
    if session.phase() != Phase::Completed {
        return Err(AppError::Conflict("Quiz is still in progress".to_string()));
    }

    let results = scoring::score(bank.questions(), session.answers());
    let chart = ChartSeries {
        points: results
            .iter()
            .map(|r| ChartPoint {
                label: r.label.clone(),
                value: r.score,
            })
            .collect(),
        value_axis: ValueAxis { min: 0.0, max: 5.0 },
    };

    Ok(Json(ResultsResponse { results, chart }))
}
