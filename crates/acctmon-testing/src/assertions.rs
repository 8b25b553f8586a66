//! Custom assertions for acctmon-specific validation.

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert that a JSON view model carries the expected label.
pub fn assert_label(json: &Value, field: &str, expected: &str) -> Result<()> {
    let actual = json[field]
        .as_str()
        .with_context(|| format!("Expected string field '{}' in JSON", field))?;

    if actual != expected {
        anyhow::bail!("Expected {} = '{}', got '{}'", field, expected, actual);
    }

    Ok(())
}

/// Assert that a JSON view model carries the expected flag.
pub fn assert_flag(json: &Value, field: &str, expected: bool) -> Result<()> {
    let actual = json[field]
        .as_bool()
        .with_context(|| format!("Expected boolean field '{}' in JSON", field))?;

    if actual != expected {
        anyhow::bail!("Expected {} = {}, got {}", field, expected, actual);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_assertion_matches() {
        let value = json!({"token_label": "No Token"});
        assert!(assert_label(&value, "token_label", "No Token").is_ok());
        assert!(assert_label(&value, "token_label", "Ok").is_err());
        assert!(assert_label(&value, "missing", "x").is_err());
    }

    #[test]
    fn flag_assertion_matches() {
        let value = json!({"sign_in_visible": true});
        assert!(assert_flag(&value, "sign_in_visible", true).is_ok());
        assert!(assert_flag(&value, "sign_in_visible", false).is_err());
    }
}
