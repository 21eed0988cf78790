use axum::{extract::rejection::JsonRejection, extract::State, Json};
use metrics::counter;
use service_core::error::AppError;

use crate::models::{ChatRequest, ChatResponse};
use crate::services::chat::EMPTY_QUESTION_REPLY;
use crate::startup::AppState;

/// `POST /chatbot`: answer one question.
///
/// Always 200 once the body parses as a JSON object; provider failures are
/// reported inside `response`.
#[tracing::instrument(skip(state, payload))]
pub async fn chatbot(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) =
        payload.map_err(|e| AppError::BadRequest(anyhow::anyhow!(e.body_text())))?;

    let Some(question) = request.question() else {
        counter!("chatbot_questions_total", "outcome" => "empty").increment(1);
        return Ok(Json(ChatResponse::new(EMPTY_QUESTION_REPLY)));
    };

    let answer = state.chat.answer(question).await;
    counter!("chatbot_questions_total", "outcome" => answer.outcome()).increment(1);

    tracing::info!(outcome = answer.outcome(), "Question handled");

    Ok(Json(ChatResponse::new(answer.into_text())))
}
