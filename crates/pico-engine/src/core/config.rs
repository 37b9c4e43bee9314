use std::num::NonZeroUsize;

use crate::coords::Dim;
use crate::state::FontSpec;

/// Settings applied by `init(true)`.
#[derive(Debug, Clone)]
pub struct PicoConfig {
    pub title: String,
    /// Window size in pixels.
    pub physical: Dim,
    /// Drawing resolution; must divide `physical` on both axes.
    pub logical: Dim,
    /// Font opened at init; `None` leaves text output disabled.
    pub font: Option<FontSpec>,
    /// Bucket count of the asset cache; fixed for the cache's lifetime.
    pub cache_buckets: NonZeroUsize,
    pub expert: bool,
    pub grid: bool,
    /// Show the window right away.
    pub visible: bool,
}

impl Default for PicoConfig {
    fn default() -> Self {
        Self {
            title: "pico".to_string(),
            physical: Dim::new(500, 500),
            logical: Dim::new(100, 100),
            font: Some(FontSpec::default()),
            cache_buckets: NonZeroUsize::new(128).unwrap_or(NonZeroUsize::MIN),
            expert: false,
            grid: true,
            visible: true,
        }
    }
}
