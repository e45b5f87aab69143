use crate::{
    auth::{LoginForm, RegisterRequest, RegisterResponse, TokenResponse},
    error::AppError,
    state::AppState,
};
use actix_web::{post, web, HttpResponse, Responder};
use log::info;
use validator::Validate;

/// Register a new user
///
/// Stores the username with a bcrypt hash of the password and returns an
/// access token for the new account under the `"access token"` key.
///
/// ## Responses:
/// - `200 OK`: `{"access token": <jwt>, "token_type": "bearer"}`.
/// - `400 Bad Request`: If the JSON body is malformed or missing fields.
/// - `422 Unprocessable Entity`: If the username or password fail validation.
/// - `500 Internal Server Error`: If the username is already taken, or on storage errors.
#[post("/register/")]
pub async fn register(
    state: web::Data<AppState>,
    register_data: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    register_data.validate()?;

    let user = state
        .credentials
        .create(&register_data.username, &register_data.password)
        .await?;
    info!("Registered user '{}' (id {})", user.username, user.id);

    let access_token = state.tokens.issue(&user.username)?;

    Ok(HttpResponse::Ok().json(RegisterResponse::bearer(access_token)))
}

/// Login user
///
/// Checks the form-encoded `username` and `password` and returns an access
/// token whose subject is the username.
///
/// ## Responses:
/// - `200 OK`: `{"access_token": <jwt>, "token_type": "bearer"}`.
/// - `400 Bad Request`: Unknown username or wrong password (same message for both).
#[post("/token/")]
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<impl Responder, AppError> {
    let user = state
        .credentials
        .authenticate(&form.username, &form.password)
        .await?;

    let access_token = state.tokens.issue(&user.username)?;

    Ok(HttpResponse::Ok().json(TokenResponse::bearer(access_token)))
}
