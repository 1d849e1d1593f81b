//! Gate configuration.
//!
//! The dev-bypass flag is resolved once at process start and injected into
//! the gates at construction time; nothing reads the environment per-request.

/// Environment variable controlling the dev-mode bypass.
pub const DEV_BYPASS_ENV: &str = "DEV_BYPASS_AUTH";

/// Configuration for the identity gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GateConfig {
    /// When set, requests without an identity get the fixed dev identity
    /// attached instead of being rejected.
    pub dev_bypass: bool,
}

impl GateConfig {
    pub fn new(dev_bypass: bool) -> Self {
        Self { dev_bypass }
    }

    /// Resolve the config from the process environment.
    ///
    /// Only the literal value `"1"` enables the bypass; unset or any other
    /// value means normal mode. Malformed values are not an error.
    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(DEV_BYPASS_ENV).ok().as_deref())
    }

    /// Deterministic core of [`GateConfig::from_env`], split out so the
    /// parsing rule is testable without touching the environment.
    pub fn from_flag(value: Option<&str>) -> Self {
        Self {
            dev_bypass: value == Some("1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_flag_means_normal_mode() {
        assert!(!GateConfig::from_flag(None).dev_bypass);
    }

    #[test]
    fn literal_one_enables_bypass() {
        assert!(GateConfig::from_flag(Some("1")).dev_bypass);
    }

    #[test]
    fn any_other_value_means_normal_mode() {
        for value in ["0", "true", "yes", "", " 1", "1 ", "11"] {
            assert!(
                !GateConfig::from_flag(Some(value)).dev_bypass,
                "value {value:?} must not enable bypass"
            );
        }
    }
}
