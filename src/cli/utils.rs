use serde_json::Value;

use crate::cli::OutputFormat;

/// Print a JSON value as-is, or hand it to `text` for human output
pub fn output_value(output_format: OutputFormat, value: &Value, text: impl FnOnce(&Value)) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => text(value),
    }
    Ok(())
}

/// Field as display text, `-` when absent
pub fn field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => "-".to_string(),
        Some(other) => other.to_string(),
    }
}

/// Render a percentage with two decimals
pub fn percent(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_f64)
        .map(|p| format!("{:.2}%", p))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_formats_strings_numbers_and_missing() {
        let value = json!({"term": "Fall24", "count": 3, "note": null});
        assert_eq!(field(&value, "term"), "Fall24");
        assert_eq!(field(&value, "count"), "3");
        assert_eq!(field(&value, "note"), "-");
        assert_eq!(field(&value, "absent"), "-");
    }

    #[test]
    fn percent_rounds_to_two_places() {
        let value = json!({"admissionRate": 22.590837});
        assert_eq!(percent(&value, "admissionRate"), "22.59%");
        assert_eq!(percent(&value, "denialRate"), "-");
    }
}
