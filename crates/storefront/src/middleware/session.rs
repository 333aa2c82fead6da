use crate::{
    abstract_trait::{session::DynSessionMiddleware, user_role::DynUserRoleQueryRepository},
    domain::response::session::Session,
};
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use chrono::Duration;
use shared::errors::ErrorResponse;

/// Resolves the caller's roles (Redis session first, database on a miss) and
/// attaches the Session to the request. Runs after `auth_middleware` put the
/// verified user id into the extensions.
pub async fn session_middleware(
    Extension(user_roles): Extension<DynUserRoleQueryRepository>,
    Extension(session_service): Extension<DynSessionMiddleware>,
    mut req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let user_id = match req.extensions().get::<i32>() {
        Some(id) => *id,
        None => {
            return Err((
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse {
                    status: "fail".to_string(),
                    message: "Missing user_id in request context".to_string(),
                }),
            ));
        }
    };

    let key = format!("session:{user_id}");

    let session = match session_service.get_session(&key).await {
        Some(session) => session,
        None => {
            let roles = match user_roles.find_role_names(user_id).await {
                Ok(roles) => roles,
                Err(_) => {
                    return Err((
                        StatusCode::INTERNAL_SERVER_ERROR,
                        Json(ErrorResponse {
                            status: "fail".to_string(),
                            message: "Failed to fetch roles".to_string(),
                        }),
                    ));
                }
            };

            let session = Session { user_id, roles };

            session_service
                .create_session(&key, &session, Duration::minutes(30))
                .await;

            session
        }
    };

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}
