//! Alarm stack configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What `add` does when the stack is at capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OverflowPolicy {
    /// Discard the incoming alarm and keep every stored record.
    ///
    /// Constant time. The clock is not read for a dropped alarm.
    #[default]
    DropNewest,
    /// Discard the bottom (oldest) record so the incoming alarm is kept.
    ///
    /// Shifts every stored record, so an overflowing `add` is O(N).
    EvictOldest,
}

impl OverflowPolicy {
    /// Get the policy as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DropNewest => "drop-newest",
            Self::EvictOldest => "evict-oldest",
        }
    }
}

/// Behaviour of an [`AlarmStack`](crate::AlarmStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlarmStackConfig {
    /// Overflow handling.
    ///
    /// Default: [`OverflowPolicy::DropNewest`].
    pub overflow_policy: OverflowPolicy,

    /// Emit a `warn` event for every dropped or evicted alarm.
    ///
    /// Default: `true`.
    pub log_overflow: bool,
}

impl AlarmStackConfig {
    /// Default configuration, usable in `const` and `static` items.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overflow_policy: OverflowPolicy::DropNewest,
            log_overflow: true,
        }
    }

    /// Create a configuration builder.
    #[must_use]
    pub fn builder() -> AlarmStackConfigBuilder {
        AlarmStackConfigBuilder::default()
    }
}

impl Default for AlarmStackConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for [`AlarmStackConfig`].
#[derive(Debug)]
pub struct AlarmStackConfigBuilder {
    config: AlarmStackConfig,
}

impl Default for AlarmStackConfigBuilder {
    fn default() -> Self {
        Self {
            config: AlarmStackConfig::new(),
        }
    }
}

impl AlarmStackConfigBuilder {
    /// Set the overflow policy.
    #[must_use]
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.config.overflow_policy = policy;
        self
    }

    /// Enable or disable overflow logging.
    #[must_use]
    pub fn log_overflow(mut self, enabled: bool) -> Self {
        self.config.log_overflow = enabled;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AlarmStackConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AlarmStackConfig::new();
        assert_eq!(config.overflow_policy, OverflowPolicy::DropNewest);
        assert!(config.log_overflow);
        assert_eq!(AlarmStackConfig::builder().build(), config);
        assert_eq!(AlarmStackConfig::default(), config);
    }

    #[test]
    fn test_config_builder() {
        let config = AlarmStackConfig::builder()
            .overflow_policy(OverflowPolicy::EvictOldest)
            .log_overflow(false)
            .build();
        assert_eq!(config.overflow_policy, OverflowPolicy::EvictOldest);
        assert!(!config.log_overflow);
    }
}
