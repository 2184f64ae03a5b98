//! OpenAPI documentation for the users resource and health probes.
//!
//! Served through Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::outcome::{ErrorMessageBody, MessageBody};
use crate::inbound::http::schemas::{UserPayloadSchema, UserSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users API",
        description = "Create, list, fetch, replace and remove user records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(UserSchema, UserPayloadSchema, ErrorMessageBody, MessageBody)),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
