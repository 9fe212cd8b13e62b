//! Error handling - RFC 7807 problem details rendered as an HTML page.

use std::fmt;

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use blogly_core::DomainError;
use blogly_shared::{ErrorResponse, FormError};

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl AppError {
    fn problem(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(detail) => ErrorResponse::not_found(detail),
            AppError::BadRequest(detail) => ErrorResponse::bad_request(detail),
            AppError::Conflict(detail) => ErrorResponse::conflict(detail),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::html())
            .body(render_problem(&self.problem()))
    }
}

/// Standalone page so that errors render even when templates fail.
fn render_problem(problem: &ErrorResponse) -> String {
    let detail = problem
        .detail
        .as_deref()
        .map(|d| format!("<p>{}</p>", tera::escape_html(d)))
        .unwrap_or_default();

    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{status} {title}</title></head>\n\
         <body>\n<h1>{status} {title}</h1>\n{detail}\n<p><a href=\"/users\">Back to users</a></p>\n</body>\n</html>\n",
        status = problem.status,
        title = tera::escape_html(&problem.title),
        detail = detail,
    )
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity_type, id } => {
                AppError::NotFound(format!("{} with id {} not found", entity_type, id))
            }
            DomainError::ConstraintViolation(msg) => AppError::Conflict(msg),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<FormError> for AppError {
    fn from(err: FormError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

impl From<tera::Error> for AppError {
    fn from(err: tera::Error) -> Self {
        AppError::Internal(format!("template rendering failed: {err:?}"))
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let not_found: AppError = DomainError::not_found("User", 4).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let conflict: AppError = DomainError::ConstraintViolation("taken".into()).into();
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let bad: AppError = FormError::Missing("title").into();
        assert_eq!(bad.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn problem_page_escapes_detail() {
        let page = render_problem(&ErrorResponse::bad_request("<script>x</script>"));
        assert!(page.contains("400 Bad Request"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(!page.contains("<script>"));
    }
}
