//! Engine configuration

/// Default settings key holding the persisted grid state.
pub const DEFAULT_STORAGE_KEY: &str = "deals-table-state";

/// Configuration for a [`GridEngine`](crate::GridEngine).
///
/// # Example
///
/// ```
/// use gridstate_lib::GridConfig;
///
/// let config = GridConfig::default()
///     .with_storage_key("contacts-table-state")
///     .with_min_column_width(60);
/// assert_eq!(config.default_column_width, 150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Settings key holding the persisted grid state.
    ///
    /// Default: `"deals-table-state"`
    pub storage_key: String,

    /// Smallest width a column can be resized to, in pixels.
    ///
    /// Default: 80
    pub min_column_width: u32,

    /// Largest width a column can be resized to, in pixels.
    ///
    /// Default: 2000
    pub max_column_width: u32,

    /// Width used for columns with no stored width, in pixels.
    ///
    /// Default: 150
    pub default_column_width: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            min_column_width: 80,
            max_column_width: 2000,
            default_column_width: 150,
        }
    }
}

impl GridConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Sets the minimum column width.
    pub fn with_min_column_width(mut self, width: u32) -> Self {
        self.min_column_width = width;
        self
    }

    /// Sets the maximum column width.
    pub fn with_max_column_width(mut self, width: u32) -> Self {
        self.max_column_width = width;
        self
    }

    /// Sets the default column width.
    pub fn with_default_column_width(mut self, width: u32) -> Self {
        self.default_column_width = width;
        self
    }
}
