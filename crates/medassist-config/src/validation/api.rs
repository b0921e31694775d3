//! Backend endpoint validation (base URL shape, timeouts).

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::MedAssistConfig;

use super::helpers::validate_range;

static HTTP_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^\s/]+(/\S*)?$").unwrap());

/// Validate all api-related constraints.
pub(crate) fn validate_api(errors: &mut Vec<String>, config: &MedAssistConfig) {
    let url = &config.api.base_url;
    if !HTTP_URL_RE.is_match(url) {
        errors.push(format!(
            "api.base_url = {url:?} must be an http:// or https:// URL"
        ));
    }
    validate_range(
        errors,
        "api.connect_timeout_secs",
        config.api.connect_timeout_secs,
        1,
        600,
    );
    validate_range(
        errors,
        "api.dispatch_timeout_secs",
        config.api.dispatch_timeout_secs,
        1,
        600,
    );
}
