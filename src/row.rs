//! Conversion of loosely-typed store cells into checked numbers and identifiers.
//!
//! Cells may hold JSON numbers or the text typed into a form. `null`, absent cells
//! and blank strings are all treated as missing.

use serde_json::Value;

use crate::error::{Field, InvalidInput};

pub fn required_number(field: Field, cell: Option<&Value>) -> Result<f64, InvalidInput> {
    optional_number(field, cell)?.ok_or(InvalidInput::Missing { field })
}

pub fn optional_number(field: Field, cell: Option<&Value>) -> Result<Option<f64>, InvalidInput> {
    let number = match cell {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) if text.trim().is_empty() => return Ok(None),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        Some(_) => None,
    };
    match number {
        Some(number) if number.is_finite() => Ok(Some(number)),
        _ => Err(InvalidInput::NotNumeric { field, value: cell.map_or_else(String::new, render) }),
    }
}

pub fn optional_text(cell: Option<&Value>) -> Option<String> {
    match cell {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) if text.trim().is_empty() => None,
        Some(Value::String(text)) => Some(text.trim().to_owned()),
        Some(other) => Some(other.to_string()),
    }
}

pub fn non_negative(field: Field, value: f64) -> Result<f64, InvalidInput> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(InvalidInput::Negative { field, value })
    }
}

pub fn at_most(field: Field, value: f64, max: f64) -> Result<f64, InvalidInput> {
    let value = non_negative(field, value)?;
    if value <= max { Ok(value) } else { Err(InvalidInput::OutOfRange { field, value, max }) }
}

pub fn whole(field: Field, value: f64) -> Result<u32, InvalidInput> {
    let value = non_negative(field, value)?;
    if value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(InvalidInput::NotInteger { field, value });
    }
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as u32)
}

fn render(cell: &Value) -> String {
    match cell {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_number_cell() {
        assert_eq!(required_number(Field::PowerWatts, Some(&json!(1200))), Ok(1200.0));
    }

    #[test]
    fn test_numeric_text_cell() {
        assert_eq!(required_number(Field::PowerWatts, Some(&json!(" 0.95 "))), Ok(0.95));
    }

    #[test]
    fn test_missing_cells() {
        for cell in [None, Some(json!(null)), Some(json!("  "))] {
            assert_eq!(
                required_number(Field::HoursPerDay, cell.as_ref()),
                Err(InvalidInput::Missing { field: Field::HoursPerDay }),
            );
        }
    }

    #[test]
    fn test_not_numeric_cells() {
        assert_eq!(
            required_number(Field::PowerWatts, Some(&json!("abc"))),
            Err(InvalidInput::NotNumeric { field: Field::PowerWatts, value: "abc".into() }),
        );
        assert!(matches!(
            required_number(Field::PowerWatts, Some(&json!(true))),
            Err(InvalidInput::NotNumeric { .. }),
        ));
        assert!(matches!(
            required_number(Field::PowerWatts, Some(&json!("NaN"))),
            Err(InvalidInput::NotNumeric { .. }),
        ));
    }

    #[test]
    fn test_at_most() {
        assert_eq!(at_most(Field::HoursPerDay, 24.0, 24.0), Ok(24.0));
        assert_eq!(
            at_most(Field::HoursPerDay, 25.0, 24.0),
            Err(InvalidInput::OutOfRange { field: Field::HoursPerDay, value: 25.0, max: 24.0 }),
        );
        assert!(matches!(at_most(Field::HoursPerDay, -1.0, 24.0), Err(InvalidInput::Negative { .. })));
    }

    #[test]
    fn test_whole() {
        assert_eq!(whole(Field::Quantity, 2.0), Ok(2));
        assert_eq!(
            whole(Field::Quantity, 1.5),
            Err(InvalidInput::NotInteger { field: Field::Quantity, value: 1.5 }),
        );
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text(Some(&json!(42))), Some("42".to_owned()));
        assert_eq!(optional_text(Some(&json!(" Sala "))), Some("Sala".to_owned()));
        assert_eq!(optional_text(Some(&json!(""))), None);
    }
}
