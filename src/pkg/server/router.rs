use axum::middleware::from_fn_with_state;
use axum::routing::{delete, patch, post, put};
use axum::{Router, routing::get};

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::middlewares::authn;
use super::state::AppState;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    let app = Router::new()
        .route("/profile", get(handlers::profiles::me))
        .route("/profile", put(handlers::profiles::update))
        .route("/jobs", post(handlers::jobs::create))
        .route("/jobs", get(handlers::jobs::list))
        .route("/jobs/recommended", get(handlers::jobs::recommended))
        .route("/jobs/shortlisted", get(handlers::jobs::shortlisted))
        .route("/jobs/connections/sent", get(handlers::jobs::connections_sent))
        .route("/projects/my-projects", get(handlers::jobs::my_projects))
        .route("/jobs/{job_id}", patch(handlers::jobs::update))
        .route("/jobs/{job_id}/apply", post(handlers::applications::apply))
        .route("/jobs/{job_id}/shortlist", get(handlers::shortlist::status))
        .route("/jobs/{job_id}/shortlist", post(handlers::shortlist::add))
        .route("/jobs/{job_id}/shortlist", delete(handlers::shortlist::remove))
        .layer(from_fn_with_state(state.clone(), authn::authenticate))
        // decision endpoints resolve their own auth: an emailed token works
        // without a session, so they sit outside the authn layer
        .route(
            "/applications/{application_id}/accept",
            post(handlers::applications::accept),
        )
        .route(
            "/applications/{application_id}/reject",
            post(handlers::applications::reject),
        )
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .with_state(state);

    Ok(app)
}
