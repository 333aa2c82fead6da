use crate::domain::response::session::Session;
use axum::{
    Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};
use shared::errors::ErrorResponse;
use tracing::warn;

pub const STAFF_ROLES: &[&str] = &["cashier", "admin"];
pub const ADMIN_ROLES: &[&str] = &["admin"];

async fn require_any_role(
    req: Request<Body>,
    next: Next,
    wanted: &[&str],
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let session = match req.extensions().get::<Session>() {
        Some(session) => session,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: "Missing session in request context".to_string(),
                }),
            ));
        }
    };

    if !session.has_any_role(wanted) {
        warn!(
            "🚫 User {} with roles {:?} denied, needs one of {:?}",
            session.user_id, session.roles, wanted
        );
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: format!("This action requires one of the roles: {}", wanted.join(", ")),
            }),
        ));
    }

    Ok(next.run(req).await)
}

/// Point-of-sale surface: cashiers ring up sales, admins can step in.
pub async fn require_staff(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    require_any_role(req, next, STAFF_ROLES).await
}

/// Back-office surface.
pub async fn require_admin(
    req: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    require_any_role(req, next, ADMIN_ROLES).await
}
