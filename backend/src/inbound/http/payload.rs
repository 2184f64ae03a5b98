//! Lenient body extraction for user payloads.
//!
//! A request body is never rejected on its own. Only string `name` and `bio`
//! members of a JSON object survive lowering; anything else reads as absent,
//! and the resolver then applies its usual existence and validation order.

use actix_web::web;
use serde_json::{Map, Value};
use tracing::debug;

use crate::domain::UserPayload;

/// Default request body limit in bytes.
pub const DEFAULT_JSON_LIMIT: usize = 16 * 1024;

/// Raw body extractor for user routes.
///
/// Extraction failures (wrong content type, invalid JSON, oversized body)
/// are kept as values so the handler still runs.
pub type UserBody = Result<web::Json<Value>, actix_web::Error>;

/// Extractor configuration for user payloads.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::payload::{DEFAULT_JSON_LIMIT, json_config};
///
/// let app = App::new().app_data(json_config(DEFAULT_JSON_LIMIT));
/// ```
#[must_use]
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit)
}

/// Lower an extracted body into a [`UserPayload`].
pub fn lower(body: UserBody) -> UserPayload {
    match body {
        Ok(json) => from_value(json.into_inner()),
        Err(err) => {
            debug!(error = %err, "unreadable request body treated as empty");
            UserPayload::default()
        }
    }
}

fn from_value(value: Value) -> UserPayload {
    let Value::Object(mut fields) = value else {
        return UserPayload::default();
    };
    UserPayload {
        name: take_string(&mut fields, "name"),
        bio: take_string(&mut fields, "bio"),
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(value)) => Some(value),
        _ => None,
    }
}
