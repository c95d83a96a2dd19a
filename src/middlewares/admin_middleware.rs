use axum::http::StatusCode;
use axum::{body::Body, extract::State, http::Request, middleware::Next, response::Response};
use std::sync::Arc;

use crate::util::authz::{authorize, AuthzError, Role};
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};

/// Roles allowed through the admin gate.
const ADMIN_ROLES: [Role; 2] = [Role::Admin, Role::Superadmin];

pub struct AdminAuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

pub async fn admin_auth(
    State(state): State<Arc<AdminAuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    // Extract the Authorization header
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());
    let Some(auth_header) = auth_header else {
        return Err(StatusCode::UNAUTHORIZED);
    };

    // Extract and validate the token
    let token = match state.jwt_utils.extract_token_from_header(auth_header) {
        Ok(t) => t,
        Err(_) => return Err(StatusCode::UNAUTHORIZED),
    };
    let claims = match state.jwt_utils.validate_access_token(&token) {
        Ok(c) => c,
        Err(_) => return Err(StatusCode::UNAUTHORIZED),
    };

    // A token carrying a role outside the closed set never passes the gate.
    let role = match claims.role.parse::<Role>() {
        Ok(r) => r,
        Err(()) => return Err(StatusCode::FORBIDDEN),
    };
    match authorize(Some(role), &ADMIN_ROLES) {
        Ok(()) => {}
        Err(AuthzError::Unauthenticated) => return Err(StatusCode::UNAUTHORIZED),
        Err(AuthzError::Forbidden) => return Err(StatusCode::FORBIDDEN),
    }

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
