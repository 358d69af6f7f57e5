//! Login handler.
//!
//! ```text
//! POST /api/v1/login {"email":"admin@example.com","password":"password"}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::{Error, LoginCredentials, LoginValidationError, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Login request body for `POST /api/v1/login`.
///
/// Missing fields deserialize as empty strings so they report the same
/// "required" messages as blank input.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    /// Email address identifying the account.
    #[serde(default)]
    pub email: String,
    /// Plain-text password; only held until validation.
    #[serde(default)]
    pub password: String,
}

impl TryFrom<LoginRequest> for LoginCredentials {
    type Error = LoginValidationError;

    fn try_from(value: LoginRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(&value.email, &value.password)
    }
}

/// Successful login payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Identifier of the authenticated user.
    pub user_id: UserId,
}

/// Validate credentials and authenticate them against the login service.
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let credentials =
        LoginCredentials::try_from(payload.into_inner()).map_err(map_login_validation_error)?;
    let user_id = state.login.authenticate(&credentials).await?;
    Ok(HttpResponse::Ok().json(LoginResponse { user_id }))
}

fn map_login_validation_error(err: LoginValidationError) -> Error {
    let errors: Vec<_> = err
        .violations()
        .iter()
        .map(|rule| {
            json!({
                "field": rule.field().as_str(),
                "code": rule.code(),
                "message": rule.message(),
            })
        })
        .collect();
    Error::invalid_request(err.to_string()).with_details(json!({ "errors": errors }))
}
