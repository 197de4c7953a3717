use poem::middleware::Cors;
use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://localhost:8080";

/// CORS middleware for browser clients of the API.
///
/// Environment variables:
/// - CORS_ALLOWED_ORIGINS: Comma-separated list of allowed origins
///   (default: "http://localhost:5173,http://localhost:8080")
pub fn init_cors() -> Cors {
    let configured = env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default();

    Cors::new()
        .allow_origins(allowed_origins(&configured))
        .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allow_headers(vec!["content-type", "authorization", "accept-language"])
        .allow_credentials(true)
}

fn allowed_origins(configured: &str) -> Vec<String> {
    let origins: Vec<String> = configured
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        return allowed_origins(DEFAULT_ORIGINS);
    }
    origins
}
