use crate::domain::models::account::{Account, SignupInput};
use ::surrealdb::{Surreal, engine::remote::ws::Client};

pub fn passenger_input() -> SignupInput {
    SignupInput {
        name: "Test Account".to_string(),
        email: "test_account@email.com".to_string(),
        cpf: "13299111485".to_string(),
        password: "123456".to_string(),
        is_passenger: true,
        ..Default::default()
    }
}

/// Inserts an account directly, bypassing the service.
pub async fn seed_account(conn: &Surreal<Client>) -> Account {
    let account = Account::create(passenger_input());

    conn.query(
        r#"
        CREATE account CONTENT {
            account_id: $account_id,
            name: $name,
            email: $email,
            cpf: $cpf,
            password: $password,
            is_passenger: true,
            is_driver: false
        };
        "#,
    )
    .bind(("account_id", account.id().to_owned()))
    .bind(("name", account.name().to_owned()))
    .bind(("email", account.email().to_owned()))
    .bind(("cpf", account.cpf().to_owned()))
    .bind(("password", account.password().to_owned()))
    .await
    .unwrap()
    .check()
    .unwrap();

    account
}
