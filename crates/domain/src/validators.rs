use crate::errors::WhitelistError;
use fancy_regex::Regex;
use std::sync::LazyLock;

static ID_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^wl:(-?[0-9]+,)*-?[0-9]+$").expect("whitelist id pattern is a valid regex")
});

/// Checks a `wl:` fragment: a comma separated list of optionally negated ids.
pub fn validate_id_spec(id_spec: &str) -> Result<(), WhitelistError> {
    match ID_SPEC.is_match(id_spec) {
        Ok(true) => Ok(()),
        _ => Err(WhitelistError::IllegalId),
    }
}

/// Match-zones are opaque at this layer; their grammar is checked where the
/// zones are compiled.
pub fn validate_match_zone(_match_zone: &str) -> Result<(), WhitelistError> {
    Ok(())
}

pub fn validate_link_template(template: &str) -> Result<(), String> {
    if template.is_empty() {
        return Err("Link template cannot be empty".to_string());
    }
    if !template.contains("{sid}") {
        return Err("Link template must contain the {sid} placeholder".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_single_and_listed_ids() {
        for spec in ["wl:0", "wl:1000", "wl:-12", "wl:1,2,-3", "wl:-1,-2"] {
            assert!(validate_id_spec(spec).is_ok(), "{spec} should be accepted");
        }
    }

    #[test]
    fn rejects_malformed_ids() {
        for spec in ["wl:", "wl:1,", "wl:,1", "wl:a", "wl:1;2", "wl:--1", "wl:1 ", "1000", ""] {
            assert_eq!(
                validate_id_spec(spec),
                Err(WhitelistError::IllegalId),
                "{spec} should be rejected"
            );
        }
    }

    #[test]
    fn link_template_needs_placeholder() {
        assert!(validate_link_template("/rules/view/{sid}").is_ok());
        assert!(validate_link_template("/rules/view/").is_err());
        assert!(validate_link_template("").is_err());
    }
}
