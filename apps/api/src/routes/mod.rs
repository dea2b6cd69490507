pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::mailer::handlers as mailer_handlers;
use crate::scrape::handlers as scrape_handlers;
use crate::search::handlers as search_handlers;
use crate::state::AppState;

/// Uploaded resume PDFs arrive as multipart bodies; allow up to 20 MiB.
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resumes", post(analysis_handlers::handle_upload))
        .route(
            "/api/v1/resumes/:id",
            get(analysis_handlers::handle_get_resume),
        )
        .route(
            "/api/v1/resumes/:id/analysis",
            post(analysis_handlers::handle_analysis),
        )
        .route(
            "/api/v1/resumes/:id/ats-score",
            post(analysis_handlers::handle_ats_score),
        )
        .route(
            "/api/v1/resumes/:id/keyword",
            post(analysis_handlers::handle_keyword),
        )
        // Jobs API
        .route("/api/v1/jobs/scrape", post(scrape_handlers::handle_scrape))
        .route("/api/v1/jobs/search", post(search_handlers::handle_search))
        // Applications API
        .route(
            "/api/v1/applications/email",
            post(mailer_handlers::handle_send_applications),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}
