//! Agent section validation.

use crate::schema::SidekickConfig;

use super::helpers::{validate_not_blank, validate_range_f64};

pub(crate) fn validate_agent(errors: &mut Vec<String>, config: &SidekickConfig) {
    validate_not_blank(errors, "agent.name", &config.agent.name);
    validate_range_f64(
        errors,
        "agent.creativity",
        config.agent.creativity,
        0.0,
        1.0,
    );
}
