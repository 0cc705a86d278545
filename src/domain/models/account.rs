use uuid::Uuid;

/// A registered passenger and/or driver.
///
/// Fields are fixed once the value is built. Construction does not validate
/// anything, callers are expected to have checked the input beforehand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: String,
    name: String,
    email: String,
    cpf: String,
    password: String,
    is_passenger: bool,
    is_driver: bool,
    car_plate: Option<String>,
}

impl Account {
    /// Builds a new account with a freshly generated identifier.
    pub fn create(input: SignupInput) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), input)
    }

    /// Rebuilds an account that already has an identifier, e.g. a stored record.
    pub fn with_id(id: String, input: SignupInput) -> Self {
        Account {
            id,
            name: input.name,
            email: input.email,
            cpf: input.cpf,
            password: input.password,
            is_passenger: input.is_passenger,
            is_driver: input.is_driver,
            car_plate: input.car_plate,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_passenger(&self) -> bool {
        self.is_passenger
    }

    pub fn is_driver(&self) -> bool {
        self.is_driver
    }

    pub fn car_plate(&self) -> Option<&str> {
        self.car_plate.as_deref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub password: String,
    pub car_plate: Option<String>,
    pub is_passenger: bool,
    pub is_driver: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutput {
    pub account_id: String,
}
