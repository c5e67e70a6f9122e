pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::roles::handlers::handle_generate_job_role;
use crate::screening::handlers::handle_process_application;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/process-application",
            post(handle_process_application).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/generate-job-role", post(handle_generate_job_role))
        .with_state(state)
}
