// src/common/money.rs

//! Coerção de valores monetários.
//!
//! Os formulários do front mandam valores como número, como string
//! (`"150.50"`, `"150,50"`, `"1.234,50"`) ou simplesmente não mandam. Tudo passa por aqui
//! antes de virar `Decimal`; o que não for numérico vira `None`.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::common::error::{invalid_field, AppError};

// Colunas de dinheiro são NUMERIC(12, 2)
const AMOUNT_SCALE: u32 = 2;
const AMOUNT_LIMIT: i64 = 10_000_000_000;

pub fn coerce_amount(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // Formato brasileiro: "150,50" e "1.234,50"
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

/// Para usar com `#[serde(default, deserialize_with = "...")]` nos payloads.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(coerce_amount))
}

/// Arredonda para centavos e recusa o que a coluna não guarda: negativos e
/// valores a partir de 10 bilhões.
pub fn checked_amount(
    value: Option<Decimal>,
    field: &'static str,
) -> Result<Option<Decimal>, AppError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let rounded = value.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if rounded < Decimal::ZERO {
        return Err(invalid_field(field, "range", "O valor não pode ser negativo."));
    }
    if rounded >= Decimal::from(AMOUNT_LIMIT) {
        return Err(invalid_field(field, "range", "O valor deve ser menor que 10.000.000.000,00."));
    }
    Ok(Some(rounded))
}

/// Valor ausente conta como zero nas somas.
pub fn amount_or_zero(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "deserialize_amount")]
        valor: Option<Decimal>,
    }

    fn parse(body: Value) -> Option<Decimal> {
        serde_json::from_value::<Body>(body).unwrap().valor
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        assert_eq!(parse(json!({ "valor": "150.50" })), Some(Decimal::new(15050, 2)));
        assert_eq!(parse(json!({ "valor": 150.5 })), Some(Decimal::new(1505, 1)));
        assert_eq!(parse(json!({ "valor": 200 })), Some(Decimal::from(200)));
        assert_eq!(parse(json!({ "valor": "89,90" })), Some(Decimal::new(8990, 2)));
    }

    #[test]
    fn brazilian_thousands_separator_is_understood() {
        assert_eq!(parse(json!({ "valor": "1.234,50" })), Some(Decimal::new(123450, 2)));
        assert_eq!(parse(json!({ "valor": "1.234.567,89" })), Some(Decimal::new(123456789, 2)));
        // Sem vírgula, o ponto continua sendo o separador decimal
        assert_eq!(parse(json!({ "valor": "1234.50" })), Some(Decimal::new(123450, 2)));
    }

    #[test]
    fn amounts_must_fit_the_money_columns() {
        assert_eq!(checked_amount(None, "valor").unwrap(), None);
        assert_eq!(
            checked_amount(Some(Decimal::new(150505, 3)), "valor").unwrap(),
            Some(Decimal::new(15051, 2))
        );
        assert_eq!(
            checked_amount(Some(Decimal::new(999_999_999_999, 2)), "valor").unwrap(),
            Some(Decimal::new(999_999_999_999, 2))
        );

        let oversized = parse(json!({ "valor": "1e15" }));
        assert!(matches!(
            checked_amount(oversized, "valor"),
            Err(AppError::ValidationError(_))
        ));
        // Arredondar para centavos não pode estourar a coluna
        assert!(checked_amount(Some(Decimal::new(99_999_999_999_995, 4)), "valor").is_err());
        assert!(matches!(
            checked_amount(Some(Decimal::new(-1, 2)), "valor"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn missing_null_and_garbage_become_none() {
        assert_eq!(parse(json!({})), None);
        assert_eq!(parse(json!({ "valor": null })), None);
        assert_eq!(parse(json!({ "valor": "abc" })), None);
        assert_eq!(parse(json!({ "valor": "" })), None);
        assert_eq!(parse(json!({ "valor": true })), None);
    }

    #[test]
    fn none_counts_as_zero() {
        assert_eq!(amount_or_zero(None), Decimal::ZERO);
        assert_eq!(amount_or_zero(Some(Decimal::ONE)), Decimal::ONE);
    }
}
