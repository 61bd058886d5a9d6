//! Shared validation helpers.

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

pub(crate) fn validate_url(errors: &mut Vec<String>, name: &str, value: &str) {
    if !(value.starts_with("http://") || value.starts_with("https://")) {
        errors.push(format!(
            "{name} = '{value}' must start with http:// or https://"
        ));
    }
}

pub(crate) fn validate_path(errors: &mut Vec<String>, name: &str, value: &str) {
    if !value.starts_with('/') {
        errors.push(format!("{name} = '{value}' must start with '/'"));
    }
}
