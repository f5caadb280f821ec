/// Switches that alter how Bulk is totalled.
///
/// Passed explicitly into every computation; there is no process-wide default
/// beyond [`BulkConfig::default`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BulkConfig {
    /// Coins never contribute Bulk (and never overflow) when set.
    pub ignore_coin_bulk: bool,

    /// Partial stacks inside a container do not combine with stacks outside it.
    pub ignore_container_overflow: bool,
}

impl BulkConfig {
    pub const fn new() -> Self {
        Self {
            ignore_coin_bulk: false,
            ignore_container_overflow: false,
        }
    }

    #[must_use]
    pub const fn with_ignore_coin_bulk(mut self, ignore: bool) -> Self {
        self.ignore_coin_bulk = ignore;
        self
    }

    #[must_use]
    pub const fn with_ignore_container_overflow(mut self, ignore: bool) -> Self {
        self.ignore_container_overflow = ignore;
        self
    }
}
