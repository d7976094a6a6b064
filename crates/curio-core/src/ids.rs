//! ID prefix constants and the random ID generator.
//!
//! Every Curio entity ID has the shape `{prefix}-{8 hex chars}`, e.g.
//! `snp-a3f8b2c1`. IDs are only unique within one workspace; nothing relies
//! on global uniqueness.

pub const PREFIX_IDEA: &str = "ida";
pub const PREFIX_SHOT: &str = "sht";
pub const PREFIX_PERFORMANCE: &str = "prf";
pub const PREFIX_INSIGHT: &str = "ins";
pub const PREFIX_SNAPSHOT: &str = "snp";

/// Generate a fresh `{prefix}-xxxxxxxx` identifier.
///
/// Falls back to the low bits of the current timestamp if the OS random
/// source is unavailable.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let mut bytes = [0u8; 4];
    if getrandom::fill(&mut bytes).is_err() {
        let nanos = chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default();
        bytes.copy_from_slice(&nanos.to_le_bytes()[..4]);
    }
    let suffix: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
    format!("{prefix}-{suffix}")
}

/// Check whether `id` looks like an ID produced by [`generate_id`] for `prefix`.
#[must_use]
pub fn has_prefix(id: &str, prefix: &str) -> bool {
    id.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|suffix| suffix.len() == 8 && suffix.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_carry_prefix() {
        let id = generate_id(PREFIX_SNAPSHOT);
        assert!(id.starts_with("snp-"));
        assert_eq!(id.len(), 12);
        assert!(has_prefix(&id, PREFIX_SNAPSHOT));
    }

    #[test]
    fn generated_ids_differ() {
        let a = generate_id(PREFIX_IDEA);
        let b = generate_id(PREFIX_IDEA);
        assert_ne!(a, b);
    }

    #[test]
    fn has_prefix_rejects_foreign_ids() {
        assert!(!has_prefix("ida-a3f8b2c1", PREFIX_SNAPSHOT));
        assert!(!has_prefix("snp-xyz", PREFIX_SNAPSHOT));
        assert!(!has_prefix("snpa3f8b2c1", PREFIX_SNAPSHOT));
    }
}
