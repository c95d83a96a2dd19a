use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::handler::quote_handler::{
    create_quote_handler, delete_quote_handler, export_quotes_handler, list_quotes_handler,
};
use crate::middlewares::admin_middleware::{admin_auth, AdminAuthState};
use crate::service::quote_service::QuoteServiceImpl;

pub fn quote_router(service: Arc<QuoteServiceImpl>, admin_auth_state: Arc<AdminAuthState>) -> Router {
    // Public route
    let public = Router::new().route("/quotes", post(create_quote_handler));

    // Admin-protected routes
    let admin = Router::new()
        .route("/quotes", get(list_quotes_handler))
        .route("/quotes/export", get(export_quotes_handler))
        .route("/quotes/{id}", delete(delete_quote_handler))
        .route_layer(middleware::from_fn_with_state(
            admin_auth_state.clone(),
            admin_auth,
        ));

    public.merge(admin).with_state(service)
}
