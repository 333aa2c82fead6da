use crate::{
    abstract_trait::notification::{DynNotificationCommandService, DynNotificationQueryService},
    domain::{
        requests::notification::FindAllNotifications,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            notification::NotificationResponse,
        },
    },
    middleware::{
        jwt::auth_middleware, rate_limit::rate_limit_middleware, role::require_staff,
        session::session_middleware,
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/notifications",
    tag = "Notification",
    security(("bearer_auth" = [])),
    params(FindAllNotifications),
    responses(
        (status = 200, description = "Recent notifications", body = ApiResponsePagination<Vec<NotificationResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_notifications(
    Extension(service): Extension<DynNotificationQueryService>,
    Query(params): Query<FindAllNotifications>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{id}/read",
    tag = "Notification",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Notification ID")),
    responses(
        (status = 200, description = "Notification marked as read", body = ApiResponse<NotificationResponse>),
        (status = 404, description = "Notification not found"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn mark_notification_read(
    Extension(service): Extension<DynNotificationCommandService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.mark_read(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn notification_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/notifications", get(get_notifications))
        .route("/api/notifications/{id}/read", put(mark_notification_read))
        .route_layer(middleware::from_fn(require_staff))
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(auth_middleware))
        .route_layer(middleware::from_fn(rate_limit_middleware))
        .layer(Extension(app_state.di_container.notification_query.clone()))
        .layer(Extension(app_state.di_container.notification_command.clone()))
        .layer(Extension(app_state.di_container.user_roles.clone()))
        .layer(Extension(app_state.rate_limit.clone()))
        .layer(Extension(app_state.session.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
