//! HTTP rendering of resolver outcomes.
//!
//! The mapping is fixed and total:
//!
//! | Outcome | Status | Body |
//! |---|---|---|
//! | `Created(r)` | 201 | record |
//! | `Ok(r)` | 200 | record |
//! | `OkList(rs)` | 200 | array of records |
//! | `NoContent` | 204 | empty |
//! | `ValidationFailed(m)` | 400 | `{"errorMessage": m}` |
//! | `NotFound(m)` | 404 | `{"message": m}` |
//! | `StorageFailed(m)` | 500 | `{"errorMessage": m}` |

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Outcome;

/// Error body for validation and storage failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorMessageBody {
    /// Human-readable failure description.
    #[schema(example = "Please provide name and bio for the user.")]
    pub error_message: String,
}

/// Error body for requests addressing a missing user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    /// Human-readable failure description.
    #[schema(example = "The user with the specified ID does not exist.")]
    pub message: String,
}

/// Status code for an outcome.
#[must_use]
pub fn status_for(outcome: &Outcome) -> StatusCode {
    match outcome {
        Outcome::Created(_) => StatusCode::CREATED,
        Outcome::Ok(_) | Outcome::OkList(_) => StatusCode::OK,
        Outcome::NoContent => StatusCode::NO_CONTENT,
        Outcome::ValidationFailed(_) => StatusCode::BAD_REQUEST,
        Outcome::NotFound(_) => StatusCode::NOT_FOUND,
        Outcome::StorageFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Render an outcome as a complete response.
#[must_use]
pub fn into_response(outcome: Outcome) -> HttpResponse {
    let mut builder = HttpResponse::build(status_for(&outcome));
    match outcome {
        Outcome::Created(user) | Outcome::Ok(user) => builder.json(user),
        Outcome::OkList(users) => builder.json(users),
        Outcome::NoContent => builder.finish(),
        Outcome::ValidationFailed(error_message) | Outcome::StorageFailed(error_message) => {
            builder.json(ErrorMessageBody { error_message })
        }
        Outcome::NotFound(message) => builder.json(MessageBody { message }),
    }
}

impl Responder for Outcome {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse<Self::Body> {
        into_response(self)
    }
}
