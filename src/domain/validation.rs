//! Field checks applied to a signup before anything is persisted.
//!
//! All checks are total: they answer `false` for malformed input instead of
//! failing.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+ [A-Za-z0-9_]+$").unwrap());

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@.+\..+$").unwrap());

// Legacy (LLLNNNN) and Mercosur (LLLNLNN) plates.
static CAR_PLATE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9](?:[0-9]{3}|[A-Z][0-9]{2})$").unwrap());

const CPF_LENGTH: usize = 11;

/// First and last name separated by a single space.
pub fn validate_name(name: &str) -> bool {
    NAME_REGEX.is_match(name.trim())
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

pub fn validate_car_plate(car_plate: &str) -> bool {
    CAR_PLATE_REGEX.is_match(car_plate)
}

/// Checks the two modulo-11 check digits of a CPF.
///
/// Only the bare 11-digit form is accepted; sequences of a single repeated
/// digit satisfy the arithmetic but are not valid documents.
pub fn validate_cpf(cpf: &str) -> bool {
    if cpf.len() != CPF_LENGTH || !cpf.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }

    let digits: Vec<u32> = cpf.bytes().map(|byte| u32::from(byte - b'0')).collect();

    if digits.iter().all(|digit| *digit == digits[0]) {
        return false;
    }

    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

fn check_digit(digits: &[u32]) -> u32 {
    let first_weight = digits.len() as u32 + 1;

    let sum: u32 = digits
        .iter()
        .zip((2..=first_weight).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        remainder => remainder,
    }
}
