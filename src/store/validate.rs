//! Input validation for portfolio and holding writes. Handlers run these
//! before the ownership guard and before any store access, so a bad payload
//! never touches the database.

use serde_json::Value;

use crate::error::ApiError;

/// Portfolio names are stored trimmed; a name that trims to empty is
/// rejected.
pub fn portfolio_name(name: Option<&str>) -> Result<String, ApiError> {
    let name = name.unwrap_or("").trim();
    if name.is_empty() {
        return Err(ApiError::validation("Portfolio name is required"));
    }
    Ok(name.to_string())
}

/// Symbols are stored trimmed and uppercased.
pub fn holding_symbol(symbol: &str) -> Result<String, ApiError> {
    let symbol = symbol.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(ApiError::validation("Symbol is required"));
    }
    Ok(symbol)
}

/// Parse a quantity/price field into a positive finite number. Clients send
/// these as either JSON numbers or numeric strings; anything else, or a
/// non-positive value, is a validation error.
pub fn positive_number(value: Option<&Value>, field: &str) -> Result<f64, ApiError> {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(n) if n.is_finite() && n > 0.0 => Ok(n),
        Some(_) => Err(ApiError::validation(format!(
            "{} must be a positive number",
            field
        ))),
        None => Err(ApiError::validation(format!(
            "{} must be a valid number",
            field
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_portfolio_name_is_rejected() {
        assert!(portfolio_name(Some("   ")).is_err());
        assert!(portfolio_name(None).is_err());
    }

    #[test]
    fn portfolio_name_is_stored_trimmed() {
        assert_eq!(portfolio_name(Some("  Tech  ")).unwrap(), "Tech");
    }

    #[test]
    fn symbol_is_uppercased_and_trimmed() {
        assert_eq!(holding_symbol(" infy ").unwrap(), "INFY");
        assert!(holding_symbol("   ").is_err());
    }

    #[test]
    fn zero_and_negative_quantities_are_rejected() {
        assert!(positive_number(Some(&json!(0)), "quantity").is_err());
        assert!(positive_number(Some(&json!(-5)), "quantity").is_err());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        assert!(positive_number(Some(&json!("abc")), "purchase_price").is_err());
        assert!(positive_number(None, "purchase_price").is_err());
        assert!(positive_number(Some(&json!(null)), "purchase_price").is_err());
    }

    #[test]
    fn numbers_and_numeric_strings_are_accepted() {
        assert_eq!(positive_number(Some(&json!(2.5)), "quantity").unwrap(), 2.5);
        assert_eq!(
            positive_number(Some(&json!("149.90")), "purchase_price").unwrap(),
            149.90
        );
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        assert!(positive_number(Some(&json!("NaN")), "quantity").is_err());
        assert!(positive_number(Some(&json!("inf")), "quantity").is_err());
    }
}
