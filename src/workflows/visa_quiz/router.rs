use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, RawQuery, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use url::form_urlencoded;

use super::domain::QuizAnswers;
use super::questions::questions;
use super::service::VisaQuizService;
use super::QuizError;

/// Router builder exposing the quiz, recommendations, and country lookups.
pub fn visa_quiz_router(service: Arc<VisaQuizService>) -> Router {
    Router::new()
        .route("/api/v1/visa-quiz/questions", get(questions_handler))
        .route(
            "/api/v1/visa-quiz/recommendations",
            get(shared_recommendation_handler).post(recommendation_handler),
        )
        .route("/api/v1/visa-quiz/countries", get(suggest_handler))
        .route("/api/v1/visa-quiz/countries/:slug", get(country_handler))
        .with_state(service)
}

pub(crate) async fn questions_handler() -> Response {
    (StatusCode::OK, Json(questions())).into_response()
}

pub(crate) async fn recommendation_handler(
    State(service): State<Arc<VisaQuizService>>,
    payload: Result<Json<QuizAnswers>, JsonRejection>,
) -> Response {
    let answers = match payload {
        Ok(Json(answers)) => answers,
        Err(rejection) => {
            return error_response(QuizError::MalformedAnswers(rejection.body_text()))
        }
    };
    if answers.nationality.trim().is_empty() {
        return error_response(QuizError::NationalityRequired);
    }

    let report = service.advise(&answers);
    (StatusCode::OK, Json(report)).into_response()
}

pub(crate) async fn shared_recommendation_handler(
    State(service): State<Arc<VisaQuizService>>,
    RawQuery(query): RawQuery,
) -> Response {
    match service.advise_shared(query.as_deref().unwrap_or_default()) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn suggest_handler(
    State(service): State<Arc<VisaQuizService>>,
    RawQuery(query): RawQuery,
) -> Response {
    let input = query
        .as_deref()
        .and_then(|raw| {
            form_urlencoded::parse(raw.as_bytes())
                .find(|(name, _)| name == "q")
                .map(|(_, value)| value.into_owned())
        })
        .unwrap_or_default();

    let suggestions = service.suggest(&input);
    (StatusCode::OK, Json(suggestions)).into_response()
}

pub(crate) async fn country_handler(
    State(service): State<Arc<VisaQuizService>>,
    Path(slug): Path<String>,
) -> Response {
    let lookup = service.country(&slug);
    match lookup {
        Ok(country) => (StatusCode::OK, Json(country)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_response(error: QuizError) -> Response {
    let status = match error {
        QuizError::UnknownCountry(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, Json(payload)).into_response()
}
