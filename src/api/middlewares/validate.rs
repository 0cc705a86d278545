use std::ops::Deref;

use crate::domain::error::AppError;
use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::{JsonBody, Payload};
use futures::future::{FutureExt, LocalBoxFuture};
use serde::de::DeserializeOwned;
use validator::Validate;

// Signup payloads are a handful of short strings.
const PAYLOAD_LIMIT: usize = 16 * 1024;

#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> AsRef<T> for Json<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> FromRequest for Json<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    #[inline]
    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        JsonBody::new(
            req,
            payload,
            Some(&|mime| mime == mime::APPLICATION_JSON),
            true,
        )
        .limit(PAYLOAD_LIMIT)
        .map(|res: Result<T, _>| match res {
            Ok(payload) => payload
                .validate()
                .map(|_| Json(payload))
                .map_err(AppError::from),
            Err(err) => Err(AppError::from(err)),
        })
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::{StatusCode, header::ContentType},
        test::{self, TestRequest},
        web,
    };
    use serde::Deserialize;
    use serde_json::json;

    use crate::api::dto::account::SignupDTO;

    use super::*;

    #[derive(Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    async fn index(data: Json<SignupDTO>) -> impl Responder {
        HttpResponse::Ok().json(json!({
            "email": data.email,
            "isPassenger": data.is_passenger,
            "isDriver": data.is_driver,
        }))
    }

    async fn send_req<T: DeserializeOwned>(data: &str) -> (StatusCode, T) {
        let app = test::init_service(App::new().route("/index", web::post().to(index))).await;

        let res = TestRequest::post()
            .uri("/index")
            .set_payload(data.to_string())
            .insert_header(ContentType::json())
            .send_request(&app)
            .await;

        let status = res.status();
        let body: T = test::read_body_json(res).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_role_flags_default_to_false() {
        let payload = json!({
            "name": "John Doe",
            "email": "john.doe@gmail.com",
            "cpf": "13299111485",
            "password": "123456"
        });

        let (status, body) = send_req::<serde_json::Value>(&payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "email": "john.doe@gmail.com", "isPassenger": false, "isDriver": false })
        );
    }

    #[actix_web::test]
    async fn test_field_formats_are_left_to_the_service() {
        let payload = json!({
            "name": "John",
            "email": "not-an-email",
            "cpf": "123",
            "password": "123456",
            "carPlate": "plate",
            "isDriver": true
        });

        let (status, _) = send_req::<serde_json::Value>(&payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_unbounded_fields_pass_through() {
        let payload = json!({
            "name": "John Doe",
            "email": "john.doe@gmail.com",
            "cpf": "132991114850000",
            "password": "",
            "carPlate": "ABC1D234X"
        });

        let (status, _) = send_req::<serde_json::Value>(&payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
    }

    #[derive(Deserialize, Validate)]
    struct Vehicle {
        #[validate(length(equal = 7, message = "Plate must have 7 characters"))]
        plate: String,
        #[validate(range(min = 1, max = 9, message = "Seats must be between 1 and 9"))]
        seats: u8,
    }

    async fn register_vehicle(data: Json<Vehicle>) -> impl Responder {
        HttpResponse::Ok().json(json!({ "plate": data.plate }))
    }

    #[actix_web::test]
    async fn test_rules_violated() {
        let app = test::init_service(
            App::new().route("/vehicles", web::post().to(register_vehicle)),
        )
        .await;

        let res = TestRequest::post()
            .uri("/vehicles")
            .set_json(json!({ "plate": "ABC12", "seats": 0 }))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let err: Error = test::read_body_json(res).await;
        let message = serde_json::from_str::<serde_json::Value>(&err.message).unwrap();

        assert_eq!(err.code, 422);
        assert_eq!(
            message,
            json!({
                "plate": "Plate must have 7 characters",
                "seats": "Seats must be between 1 and 9"
            })
        );
    }

    #[actix_web::test]
    async fn test_invalid_field_type() {
        let (status, err) = send_req::<Error>("{ \"isDriver\": \"yes\" }").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(err.message.starts_with("Json deserialize error: invalid type"));
    }

    #[actix_web::test]
    async fn test_missing_field() {
        let (status, err) = send_req::<Error>("{ \"name\": \"John Doe\" }").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "Json deserialize error: missing field `email` at line 1 column 22"
        );
    }

    #[actix_web::test]
    async fn test_empty_data() {
        let (status, err) = send_req::<Error>("").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            err.message,
            "Json deserialize error: EOF while parsing a value at line 1 column 0"
        );
    }
}
