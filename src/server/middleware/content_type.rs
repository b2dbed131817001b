use axum::{
    extract::Request,
    http::{header::CONTENT_TYPE, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::server::error::{media_type::MediaTypeError, AppError};

/// Rejects requests whose body is not declared as JSON.
///
/// Accepts `application/json` and any `application/*+json` media type, with or without
/// parameters such as `charset`. Runs before the body is read.
///
/// # Returns
/// - `Ok(Response)` - Response of the wrapped handler
/// - `Err(AppError::MediaTypeErr)` - Content type is missing or not JSON (415)
pub async fn require_json(request: Request, next: Next) -> Result<Response, AppError> {
    check_json_content_type(request.headers())?;

    Ok(next.run(request).await)
}

fn check_json_content_type(headers: &HeaderMap) -> Result<(), MediaTypeError> {
    let Some(value) = headers.get(CONTENT_TYPE) else {
        return Err(MediaTypeError::Missing);
    };

    let value = value
        .to_str()
        .map_err(|_| MediaTypeError::Unsupported(String::from_utf8_lossy(value.as_bytes()).into_owned()))?;

    let essence = value
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let is_json = match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    };

    if is_json {
        Ok(())
    } else {
        Err(MediaTypeError::Unsupported(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn accepts_json_media_types() {
        for content_type in [
            "application/json",
            "application/json; charset=utf-8",
            "Application/JSON",
            "application/merge-patch+json",
        ] {
            assert!(
                check_json_content_type(&headers(content_type)).is_ok(),
                "{} should be accepted",
                content_type
            );
        }
    }

    #[test]
    fn rejects_other_media_types() {
        for content_type in ["text/plain", "application/x-www-form-urlencoded", "text/json", "application/jsonp"] {
            assert_eq!(
                check_json_content_type(&headers(content_type)),
                Err(MediaTypeError::Unsupported(content_type.to_string()))
            );
        }
    }

    #[test]
    fn rejects_missing_content_type() {
        assert_eq!(
            check_json_content_type(&HeaderMap::new()),
            Err(MediaTypeError::Missing)
        );
    }
}
