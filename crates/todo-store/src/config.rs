//! Store and view configuration.

/// Key under which the label list is persisted
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// How long a pending removal waits for the transition-end notification
/// before the view finalizes it anyway
pub const DEFAULT_REMOVAL_FALLBACK_MS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoConfig {
    pub storage_key: String,
    pub removal_fallback_ms: u32,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            removal_fallback_ms: DEFAULT_REMOVAL_FALLBACK_MS,
        }
    }
}
