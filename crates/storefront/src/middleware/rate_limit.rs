use crate::abstract_trait::rate_limit::DynRateLimitMiddleware;
use axum::{
    Extension, Json,
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::IntoResponse,
};
use shared::errors::ErrorResponse;
use tracing::warn;

const MAX_REQUESTS: u32 = 60;
const WINDOW_SECONDS: u32 = 60;

pub async fn rate_limit_middleware(
    Extension(limiter): Extension<DynRateLimitMiddleware>,
    req: Request<Body>,
    next: Next,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let client = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .map(|v| v.split(',').next().unwrap_or(v).trim().to_string())
        .unwrap_or_else(|| "anonymous".to_string());

    let key = format!("rate:{}:{client}", req.uri().path());

    let (allowed, current) = limiter.check_rate_limit(&key, MAX_REQUESTS, WINDOW_SECONDS);

    if !allowed {
        warn!("🚦 Rate limit hit for {key} ({current} requests)");
        return Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(ErrorResponse {
                status: "fail".to_string(),
                message: "Too many requests, slow down".to_string(),
            }),
        ));
    }

    Ok(next.run(req).await)
}
