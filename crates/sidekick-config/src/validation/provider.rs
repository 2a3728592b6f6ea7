//! Provider section validation: endpoint URL, model and timeouts.

use crate::schema::SidekickConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_provider(errors: &mut Vec<String>, config: &SidekickConfig) {
    let provider = &config.provider;

    if !provider.base_url.starts_with("http://") && !provider.base_url.starts_with("https://") {
        errors.push(format!(
            "provider.base_url = '{}' must start with http:// or https://",
            provider.base_url
        ));
    }
    validate_not_blank(errors, "provider.model", &provider.model);
    validate_not_blank(errors, "provider.api_key_env", &provider.api_key_env);
    validate_range(errors, "provider.timeout_secs", provider.timeout_secs, 1, 600);
    validate_range(
        errors,
        "provider.connect_timeout_secs",
        provider.connect_timeout_secs,
        1,
        120,
    );
}
