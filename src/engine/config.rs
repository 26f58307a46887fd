//! Configuration for assembly detection.

/// Main configuration for the [`detect`](super::detect) pipeline.
///
/// # Examples
///
/// ```
/// use quat_forge::EngineConfig;
///
/// // Default settings
/// let default = EngineConfig::default();
/// assert_eq!(default.min_interface_area, 35.0);
///
/// // Keep even hairline contacts and allow lattice-propagating clusters
/// let custom = EngineConfig {
///     min_interface_area: 0.0,
///     forbid_infinite: false,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum buried area (Å²) for an interface to enter the contact
    /// graph. Crystal structures bury plenty of spurious hairline
    /// contacts; 35 Å² is the customary reporting cutoff.
    pub min_interface_area: f64,

    /// Maximum number of interface clusters enumerated exhaustively. The
    /// engaged-set search is a power set, so this bounds the whole run;
    /// structures with more clusters keep the largest ones by buried area
    /// and a warning is logged.
    pub max_clusters: usize,

    /// Reject candidates that engage an infinite (lattice-propagating)
    /// interface cluster. Disabling this is only useful for diagnostics;
    /// such candidates never describe a finite assembly.
    pub forbid_infinite: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_interface_area: 35.0,
            max_clusters: 12,
            forbid_infinite: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = EngineConfig::default();
        assert_eq!(config.min_interface_area, 35.0);
        assert_eq!(config.max_clusters, 12);
        assert!(config.forbid_infinite);
    }
}
