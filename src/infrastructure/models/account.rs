use serde::{Deserialize, Serialize};

use crate::domain::models::account::{Account, SignupInput};

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    account_id: String,
    name: String,
    email: String,
    cpf: String,
    password: String,
    is_passenger: bool,
    is_driver: bool,
    car_plate: Option<String>,
}

#[derive(Serialize)]
pub struct SurrealAccountCreate {
    account_id: String,
    name: String,
    email: String,
    cpf: String,
    password: String,
    is_passenger: bool,
    is_driver: bool,
    car_plate: Option<String>,
}

impl From<Account> for SurrealAccountCreate {
    fn from(acc: Account) -> Self {
        SurrealAccountCreate {
            account_id: acc.id().to_owned(),
            name: acc.name().to_owned(),
            email: acc.email().to_owned(),
            cpf: acc.cpf().to_owned(),
            password: acc.password().to_owned(),
            is_passenger: acc.is_passenger(),
            is_driver: acc.is_driver(),
            car_plate: acc.car_plate().map(str::to_owned),
        }
    }
}

impl From<SurrealAccount> for Account {
    fn from(acc: SurrealAccount) -> Self {
        Account::with_id(
            acc.account_id,
            SignupInput {
                name: acc.name,
                email: acc.email,
                cpf: acc.cpf,
                password: acc.password,
                car_plate: acc.car_plate,
                is_passenger: acc.is_passenger,
                is_driver: acc.is_driver,
            },
        )
    }
}
