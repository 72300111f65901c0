// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{assessments, control, pages, scores, students},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Nests the assessment, control, student, page and score sub-routers.
/// * Adds `POST /reset` only when the configuration enables it.
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let assessment_routes = Router::new()
        .route("/save", post(assessments::save_assessment))
        .route("/list", get(assessments::list_assessments))
        .route("/get/{id}", get(assessments::get_assessment))
        // State-changing, so never a GET
        .route(
            "/delete/{id}",
            post(assessments::delete_assessment).delete(assessments::delete_assessment),
        )
        .route("/distribute", post(assessments::distribute_assessment))
        .route("/ongoing", get(assessments::list_ongoing));

    let control_routes = Router::new()
        .route("/stop-assessment", post(control::stop_assessment))
        .route("/unrestrict/{id}", post(control::unrestrict_student));

    let student_routes = Router::new()
        .route("/register", post(students::register))
        .route("/login", post(students::login))
        .route("/submit", post(students::submit))
        .route("/eligibility", post(students::check_eligibility))
        .route("/detected", post(students::activity_detected))
        .route("/delete", post(students::delete_student))
        .route("/edit", post(students::edit_student));

    let page_routes = Router::new()
        .route("/manage-assessments", get(pages::manage_assessments))
        .route("/dashboard", get(pages::dashboard))
        .route("/manage-students", get(pages::manage_students))
        .route("/assessment-results", get(pages::assessment_results));

    let score_routes = Router::new()
        .route("/average-over-time", get(scores::average_over_time))
        .route("/distribution", get(scores::distribution));

    let mut app = Router::new()
        .nest("/assessments", assessment_routes)
        .nest("/control", control_routes)
        .nest("/students", student_routes)
        .nest("/page", page_routes)
        .nest("/api/scores", score_routes);

    if state.config.enable_reset {
        app = app.route("/reset", post(assessments::reset));
    }

    // Global Middleware (applied from outside in)
    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    )
    .with_state(state)
}
