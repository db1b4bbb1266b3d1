//! Required-field checks shared by the services.

use crate::error::AppError;
use crate::models::CustomerInput;

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// All three customer fields, present and non-empty.
pub fn customer_fields(input: &CustomerInput) -> Result<(&str, &str, &str), AppError> {
    match (
        non_empty(&input.first_name),
        non_empty(&input.last_name),
        non_empty(&input.phone_number),
    ) {
        (Some(first), Some(last), Some(phone)) => Ok((first, last, phone)),
        _ => Err(AppError::Validation(
            "First name, last name, and phone number are required".into(),
        )),
    }
}

/// All four address detail fields, present and non-empty. The message varies
/// between the single and batch endpoints, so the caller supplies it.
pub fn address_fields<'a>(
    address_details: &'a Option<String>,
    city: &'a Option<String>,
    state: &'a Option<String>,
    pin_code: &'a Option<String>,
    message: &str,
) -> Result<(&'a str, &'a str, &'a str, &'a str), AppError> {
    match (
        non_empty(address_details),
        non_empty(city),
        non_empty(state),
        non_empty(pin_code),
    ) {
        (Some(details), Some(city), Some(state), Some(pin)) => Ok((details, city, state, pin)),
        _ => Err(AppError::Validation(message.into())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_counts_as_missing() {
        let input = CustomerInput {
            first_name: Some("John".into()),
            last_name: Some(String::new()),
            phone_number: Some("9876543210".into()),
        };
        assert!(customer_fields(&input).is_err());
    }

    #[test]
    fn complete_customer_passes() {
        let input = CustomerInput {
            first_name: Some("John".into()),
            last_name: Some("Doe".into()),
            phone_number: Some("9876543210".into()),
        };
        assert_eq!(
            customer_fields(&input).unwrap(),
            ("John", "Doe", "9876543210")
        );
    }

    #[test]
    fn address_error_carries_caller_message() {
        let err = address_fields(
            &Some("123 Main St".into()),
            &None,
            &Some("Maharashtra".into()),
            &Some("400001".into()),
            "All fields required",
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "All fields required");
    }
}
