//! Shell environment snapshot exposed to the frontend.

use serde::{Deserialize, Serialize};

/// Environment variable that marks GPU acceleration as unavailable.
pub const GPU_DISABLED_ENV: &str = "SYLOS_GPU_DISABLED";

/// Host facts the frontend uses to tune its presentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellEnvironment {
    /// Whether animations should be disabled because GPU acceleration is unavailable.
    pub gpu_disabled: bool,
}

impl ShellEnvironment {
    /// Builds the snapshot from a variable lookup.
    ///
    /// Windows never reports the GPU as disabled; WebGL is always allowed to try there.
    pub fn from_lookup<F>(is_windows: bool, lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        let gpu_disabled = !is_windows && lookup(GPU_DISABLED_ENV).as_deref() == Some("1");
        Self { gpu_disabled }
    }

    /// Builds the snapshot from the current process environment.
    pub fn from_process_env() -> Self {
        Self::from_lookup(cfg!(windows), |key| std::env::var(key).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::{ShellEnvironment, GPU_DISABLED_ENV};
    use pretty_assertions::assert_eq;

    fn lookup(value: Option<&'static str>) -> impl FnOnce(&str) -> Option<String> {
        move |key: &str| {
            assert_eq!(key, GPU_DISABLED_ENV);
            value.map(str::to_string)
        }
    }

    #[test]
    fn gpu_disabled_only_for_exact_flag_off_windows() {
        assert!(ShellEnvironment::from_lookup(false, lookup(Some("1"))).gpu_disabled);
        assert!(!ShellEnvironment::from_lookup(false, lookup(Some("true"))).gpu_disabled);
        assert!(!ShellEnvironment::from_lookup(false, lookup(None)).gpu_disabled);
    }

    #[test]
    fn windows_never_reports_gpu_disabled() {
        assert!(!ShellEnvironment::from_lookup(true, |_| Some("1".to_string())).gpu_disabled);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let env = ShellEnvironment { gpu_disabled: true };
        let json = serde_json::to_string(&env).expect("serialize env");
        assert_eq!(json, r#"{"gpuDisabled":true}"#);
    }
}
