use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::Response,
};

// API key authentication, enabled only when SKIMATCH_API_KEY is set
pub async fn require_api_key(
    request: Request<Body>,
    next: Next,
) -> Result<Response, (StatusCode, &'static str)> {
    let expected = std::env::var("SKIMATCH_API_KEY")
        .ok()
        .filter(|key| !key.is_empty());

    let Some(expected) = expected else {
        return Ok(next.run(request).await);
    };

    let provided = request
        .headers()
        .get("X-API-Key")
        .and_then(|v| v.to_str().ok());

    match provided {
        Some(key) if key == expected => Ok(next.run(request).await),
        Some(_) => Err((StatusCode::UNAUTHORIZED, "Invalid API key")),
        None => Err((StatusCode::UNAUTHORIZED, "Missing X-API-Key header")),
    }
}
