use std::sync::Arc;

use crate::api::dto::account::{AccountDTO, SignupDTO, SignupOutputDTO};
use crate::api::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::services::account::AccountService;

use actix_web::{
    HttpResponse, get, post,
    web::{Data as State, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup).service(get_account);
}

#[utoipa::path(
    responses(
        (status = 200, body = SignupOutputDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = SignupDTO,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(
    payload: Json<SignupDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let signup_dto = payload.into_inner();

    let output = account_service.signup(signup_dto.into()).await?;

    Ok(HttpResponse::Ok().json(SignupOutputDTO::from(output)))
}

#[utoipa::path(
    params(("account_id" = String, Path, description = "Account identifier")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, body = AppError, example = json!(AppError::example_404())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts/{account_id}")]
pub async fn get_account(
    account_id: Path<String>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let account = account_service.get_account(&account_id).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}
