use crate::domain::model::{Cnpj, IdentifierKind};
use crate::utils::error::{CnpjError, Result};
use std::str::FromStr;

/// Keeps only the ASCII digits of `raw`, in order.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Turns free-form input (`11.222.333/0001-81`, `11222333000181`, ...) into a [`Cnpj`].
///
/// Blank input is `EmptyInput`; anything that does not leave exactly 14 digits
/// is `InvalidCnpj`. Check digits are not verified.
pub fn parse_cnpj(raw: &str) -> Result<Cnpj> {
    if raw.trim().is_empty() {
        return Err(CnpjError::EmptyInput);
    }

    let digits = digits_only(raw);
    if digits.len() != IdentifierKind::Company.digits() {
        return Err(CnpjError::InvalidCnpj {
            digits: digits.len(),
        });
    }

    Ok(Cnpj(digits))
}

impl FromStr for Cnpj {
    type Err = CnpjError;

    fn from_str(s: &str) -> Result<Self> {
        parse_cnpj(s)
    }
}
