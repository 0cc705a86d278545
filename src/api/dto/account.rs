use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::models::account::{Account, SignupInput, SignupOutput};

/// Signup payload.
///
/// Carries no field rules: every field is checked by the account service so
/// that a duplicated email is reported before any format error. The extractor
/// payload limit bounds the request size.
#[derive(Debug, Validate, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupDTO {
    #[schema(examples("John Doe"))]
    pub name: String,

    #[schema(examples("john.doe@gmail.com"))]
    pub email: String,

    #[schema(examples("13299111485"))]
    pub cpf: String,

    #[schema(examples("123456"))]
    pub password: String,

    #[schema(examples("ABC1D23"))]
    pub car_plate: Option<String>,

    #[serde(default)]
    pub is_passenger: bool,

    #[serde(default)]
    pub is_driver: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupOutputDTO {
    #[schema(examples("0b9f6c36-5d0c-4b8e-9a4f-2f1e7f3f8c11"))]
    pub account_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccountDTO {
    id: String,
    name: String,
    email: String,
    cpf: String,
    is_passenger: bool,
    is_driver: bool,
    car_plate: Option<String>,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id().to_owned(),
            name: val.name().to_owned(),
            email: val.email().to_owned(),
            cpf: val.cpf().to_owned(),
            is_passenger: val.is_passenger(),
            is_driver: val.is_driver(),
            car_plate: val.car_plate().map(str::to_owned),
        }
    }
}

impl From<SignupDTO> for SignupInput {
    fn from(signup: SignupDTO) -> Self {
        SignupInput {
            name: signup.name,
            email: signup.email,
            cpf: signup.cpf,
            password: signup.password,
            car_plate: signup.car_plate,
            is_passenger: signup.is_passenger,
            is_driver: signup.is_driver,
        }
    }
}

impl From<SignupOutput> for SignupOutputDTO {
    fn from(output: SignupOutput) -> Self {
        SignupOutputDTO {
            account_id: output.account_id,
        }
    }
}
