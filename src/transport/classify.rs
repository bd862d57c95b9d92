use serde::Deserialize;

use crate::domain::ApiStatus;

/// Error body the API sends with non-success statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// One HTTP exchange, reduced to what the caller needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Classified {
    /// HTTP 200; the body goes on to the result decoder.
    Success { body: String },
    /// Anything else, already mapped to the caller-facing taxonomy.
    Failure {
        status: ApiStatus,
        description: String,
    },
}

/// Classify a completed HTTP response.
pub(crate) fn classify_response(status: u16, body: String) -> Classified {
    match status {
        200 => Classified::Success { body },
        404 => Classified::Failure {
            status: ApiStatus::Error,
            description: "Invalid route: 404".to_owned(),
        },
        _ => {
            let description = match serde_json::from_str::<ErrorBody>(&body) {
                Ok(parsed) => parsed.error,
                Err(_) => format!("Unable to submit: {body}"),
            };
            Classified::Failure {
                status: status_for_response(status),
                description,
            }
        }
    }
}

fn status_for_response(status: u16) -> ApiStatus {
    match status {
        401 => ApiStatus::AuthFailed,
        429 => ApiStatus::RateLimited,
        _ => ApiStatus::Error,
    }
}

/// Classify a transport-level failure (DNS, connect, timeout, read).
///
/// `status` is whatever partial status code was observed, 0 when none.
/// Unrecognized codes land in [`ApiStatus::ApiError`]; `AuthFailed` is
/// produced only for 401.
pub(crate) fn classify_transport_failure(status: u16, message: String) -> Classified {
    let status = match status {
        502 => ApiStatus::Error,
        429 => ApiStatus::RateLimited,
        401 => ApiStatus::AuthFailed,
        400 => ApiStatus::Error,
        _ => ApiStatus::ApiError,
    };
    Classified::Failure {
        status,
        description: message,
    }
}
