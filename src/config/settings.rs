//! Engine settings, loadable from JSON.

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default number of fired transitions kept in a machine's history.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Prefixes used to derive target member names.
///
/// Default handlers for state `Idle` resolve `on_entry_Idle`,
/// `in_state_Idle` and `on_exit_Idle`. A guard configured by name `ready`
/// resolves `check_ready`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerPrefixes {
    pub on_entry: String,
    pub in_state: String,
    pub on_exit: String,
    pub guard: String,
}

impl Default for HandlerPrefixes {
    fn default() -> Self {
        Self {
            on_entry: "on_entry_".to_string(),
            in_state: "in_state_".to_string(),
            on_exit: "on_exit_".to_string(),
            guard: "check_".to_string(),
        }
    }
}

/// What `process` does with a named guard the target cannot resolve.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedGuardPolicy {
    /// Fail the cycle with `MachineError::UnresolvedGuard`
    #[default]
    Fault,

    /// Treat the guard as false and keep evaluating later transitions
    NeverFires,
}

/// Settings shared by every machine built with them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    pub prefixes: HandlerPrefixes,

    pub unresolved_guard: UnresolvedGuardPolicy,

    /// Reject configurations whose named guards do not resolve on the
    /// current target, at construction and on every extend.
    pub validate_guards: bool,

    /// Maximum fired transitions kept in history; zero disables it.
    pub history_limit: usize,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            prefixes: HandlerPrefixes::default(),
            unresolved_guard: UnresolvedGuardPolicy::default(),
            validate_guards: false,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl MachineSettings {
    /// Parse settings from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidSettings(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::InvalidSettings(e.to_string()))
    }

    pub fn with_prefixes(mut self, prefixes: HandlerPrefixes) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn with_unresolved_guard(mut self, policy: UnresolvedGuardPolicy) -> Self {
        self.unresolved_guard = policy;
        self
    }

    pub fn with_guard_validation(mut self, enabled: bool) -> Self {
        self.validate_guards = enabled;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_naming_conventions() {
        let settings = MachineSettings::default();

        assert_eq!(settings.prefixes.on_entry, "on_entry_");
        assert_eq!(settings.prefixes.in_state, "in_state_");
        assert_eq!(settings.prefixes.on_exit, "on_exit_");
        assert_eq!(settings.prefixes.guard, "check_");
        assert_eq!(settings.unresolved_guard, UnresolvedGuardPolicy::Fault);
        assert!(!settings.validate_guards);
        assert_eq!(settings.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings = MachineSettings::from_json(
            r#"{
                "unresolved_guard": "never_fires",
                "prefixes": { "guard": "" }
            }"#,
        )
        .unwrap();

        assert_eq!(settings.unresolved_guard, UnresolvedGuardPolicy::NeverFires);
        assert_eq!(settings.prefixes.guard, "");
        assert_eq!(settings.prefixes.on_entry, "on_entry_");
        assert_eq!(settings.history_limit, DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn invalid_json_is_rejected() {
        let result = MachineSettings::from_json(r#"{ "unresolved_guard": "sometimes" }"#);

        assert!(matches!(result, Err(ConfigError::InvalidSettings(_))));
    }

    #[test]
    fn settings_survive_json() {
        let settings = MachineSettings::default()
            .with_guard_validation(true)
            .with_history_limit(3);

        let json = settings.to_json().unwrap();
        assert_eq!(MachineSettings::from_json(&json).unwrap(), settings);
    }
}
