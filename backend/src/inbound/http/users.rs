//! Users API handlers.
//!
//! ```text
//! POST   /users       {"name":"Ada","bio":"mathematician"}
//! GET    /users
//! GET    /users/{id}
//! PUT    /users/{id}  {"name":"Ada","bio":"mathematician"}
//! DELETE /users/{id}
//! ```
//!
//! Handlers forward to [`crate::domain::ports::UsersResource`] and render the
//! returned [`Outcome`] unchanged. Bodies are lowered leniently (see
//! [`crate::inbound::http::payload`]), so a missing record is reported as not
//! found whatever was sent.

use actix_web::{delete, get, post, put, web};

use crate::domain::Outcome;
use crate::inbound::http::outcome::{ErrorMessageBody, MessageBody};
use crate::inbound::http::payload::{UserBody, lower};
use crate::inbound::http::schemas::{UserPayloadSchema, UserSchema};
use crate::inbound::http::state::HttpState;

/// Register the users routes on an app or scope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use users_api::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserPayloadSchema,
    responses(
        (status = 201, description = "User created", body = UserSchema),
        (status = 400, description = "Missing name or bio", body = ErrorMessageBody),
        (status = 500, description = "User could not be saved", body = ErrorMessageBody)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(state: web::Data<HttpState>, body: UserBody) -> Outcome {
    state.users.create(lower(body)).await
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users, possibly none", body = [UserSchema]),
        (status = 500, description = "Users could not be retrieved", body = ErrorMessageBody)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> Outcome {
    state.users.list().await
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User", body = UserSchema),
        (status = 404, description = "No such user", body = MessageBody),
        (status = 500, description = "User could not be retrieved", body = ErrorMessageBody)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(state: web::Data<HttpState>, path: web::Path<String>) -> Outcome {
    state.users.get(&path.into_inner()).await
}

/// Replace a user's name and bio.
#[utoipa::path(
    put,
    path = "/users/{id}",
    request_body = UserPayloadSchema,
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "Updated user", body = UserSchema),
        (status = 400, description = "Missing name or bio", body = ErrorMessageBody),
        (status = 404, description = "No such user", body = MessageBody),
        (status = 500, description = "User could not be modified", body = ErrorMessageBody)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: UserBody,
) -> Outcome {
    state.users.update(&path.into_inner(), lower(body)).await
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 204, description = "User removed"),
        (status = 404, description = "No such user", body = MessageBody),
        (status = 500, description = "User could not be removed", body = ErrorMessageBody)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(state: web::Data<HttpState>, path: web::Path<String>) -> Outcome {
    state.users.delete(&path.into_inner()).await
}
