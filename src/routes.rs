// src/routes.rs

use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{handlers::quiz, state::AppState};

#[derive(OpenApi)]
#[openapi(
    paths(
        quiz::get_session,
        quiz::submit_answer,
        quiz::next_question,
        quiz::previous_question,
        quiz::restart_quiz,
        quiz::get_results,
    ),
    components(schemas(
        crate::models::question::TraitDomain,
        crate::models::question::LikertChoice,
        crate::models::question::AnswerRequest,
        crate::models::question::QuestionView,
        crate::models::session::Phase,
        crate::models::session::SessionView,
        crate::models::report::TraitResult,
        crate::models::report::ChartPoint,
        crate::models::report::ValueAxis,
        crate::models::report::ChartSeries,
        crate::models::report::ResultsResponse,
    ))
)]
struct ApiDoc;

/// Assembles the main application router.
///
/// * Mounts the quiz routes and the swagger-ui.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (question bank + shared session).
pub fn create_router(state: AppState) -> Router {
    let origins = [
        "http://localhost:3000".parse().unwrap(),
        "http://127.0.0.1:3000".parse().unwrap(),
    ];

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/", get(quiz::get_session))
        .route("/answer", post(quiz::submit_answer))
        .route("/next", post(quiz::next_question))
        .route("/previous", post(quiz::previous_question))
        .route("/restart", post(quiz::restart_quiz))
        .route("/results", get(quiz::get_results));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/quiz", quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
