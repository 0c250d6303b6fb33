//! `commons phone|capitalize` commands.

use crate::context::ServiceContext;
use crate::text;

/// Execute the `phone` command; an explicit country code overrides the configured one.
///
/// # Errors
///
/// Returns an error string if the explicit country code is not all digits.
pub fn phone(ctx: &ServiceContext, number: &str, country_code: Option<&str>) -> Result<String, String> {
    let code = match country_code {
        Some(code) if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) => {
            return Err(format!("country code {code:?} must be one or more digits"));
        }
        Some(code) => code,
        None => ctx.config.phone_country_code.as_str(),
    };
    Ok(text::normalize_phone_number_with(number, code))
}

/// Execute the `capitalize` command.
#[must_use]
pub fn capitalize(words: &[String]) -> String {
    text::capitalize_name(&words.join(" "))
}
