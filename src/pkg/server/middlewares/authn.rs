use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};

use crate::{
    pkg::{internal::auth, server::state::AppState},
    prelude::Result,
};

pub async fn authenticate(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response> {
    let user = auth::resolve_session(&state, &headers).await?;
    request.extensions_mut().insert(Arc::new(user));
    Ok(next.run(request).await)
}
