use actix_web::HttpResponse;
use utoipa_actix_web::{scope, service_config::ServiceConfig};

use crate::domain::error::AppResult;

mod controllers;
mod dto;
mod middlewares;

pub type ApiResult = AppResult<HttpResponse>;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/api/v1").configure(controllers::account::routes));
}
