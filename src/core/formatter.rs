use crate::domain::model::IdentifierKind;

/// `XX.XXX.XXX/XXXX-XX`; anything that is not 14 characters long comes back as is.
pub fn format_cnpj(value: &str) -> String {
    if !fits(value, IdentifierKind::Company) {
        return value.to_string();
    }
    format!(
        "{}.{}.{}/{}-{}",
        &value[..2],
        &value[2..5],
        &value[5..8],
        &value[8..12],
        &value[12..]
    )
}

/// `XXX.XXX.XXX-XX`; also applied to the masked form the registry sends for
/// partners (`***123456**`).
pub fn format_cpf(value: &str) -> String {
    if !fits(value, IdentifierKind::Person) {
        return value.to_string();
    }
    format!(
        "{}.{}.{}-{}",
        &value[..3],
        &value[3..6],
        &value[6..9],
        &value[9..]
    )
}

/// `XXXXX-XXX`
pub fn format_cep(value: &str) -> String {
    if !fits(value, IdentifierKind::PostalCode) {
        return value.to_string();
    }
    format!("{}-{}", &value[..5], &value[5..])
}

// Slicing is positional, so only ASCII input of the exact length qualifies.
fn fits(value: &str, kind: IdentifierKind) -> bool {
    value.is_ascii() && value.len() == kind.digits()
}

/// `R$ 1,234,567.89`
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("R$ {}{}.{}", sign, grouped, fraction)
}
