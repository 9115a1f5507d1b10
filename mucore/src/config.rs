//! Scan configuration.
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::utils::error::{MuError, MuResult};

/// Default oversubscription multiplier applied to the parallelism base.
///
/// A scan spends most of its time inside oracle calls and behind the two
/// shared locks rather than on the CPU, so the pool is sized well past
/// the hardware thread count.
pub const DEFAULT_OVERSUBSCRIPTION: usize = 30;

/// Everything a scan run needs to know beyond the module and the oracle.
///
/// Loadable from a TOML manifest; only `output` is mandatory there.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScanConfig {
    /// Where match records are written. Created or truncated at run
    /// start; an unwritable path is fatal before any worker spawns.
    pub output: PathBuf,

    /// Base worker-pool size. Defaults to the hardware parallelism probe.
    #[serde(default)]
    pub parallelism_hint: Option<usize>,

    /// Multiplier applied on top of the base pool size.
    #[serde(default = "default_oversubscription")]
    pub oversubscription: usize,

    /// Flush the sink after every record batch instead of only at close.
    #[serde(default)]
    pub eager_flush: bool,
}

fn default_oversubscription() -> usize {
    DEFAULT_OVERSUBSCRIPTION
}

impl ScanConfig {
    /// Configuration with default tuning, writing records to `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        ScanConfig {
            output: output.into(),
            parallelism_hint: None,
            oversubscription: DEFAULT_OVERSUBSCRIPTION,
            eager_flush: false,
        }
    }

    /// Load a TOML manifest describing a scan.
    pub fn from_manifest(path: &Path) -> MuResult<Self> {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|source| MuError::ManifestParse {
            source,
            file: path.display().to_string(),
        })
    }

    /// Resolve the worker-pool size: base parallelism times the
    /// oversubscription multiplier, clamped to at least one.
    ///
    /// A zero hint or multiplier is a configuration error, reported
    /// before any worker spawns.
    pub fn worker_count(&self) -> MuResult<usize> {
        if self.oversubscription == 0 {
            return Err(MuError::InvalidWorkerCount {
                reason: "oversubscription multiplier must be at least 1".to_string(),
            });
        }

        let base = match self.parallelism_hint {
            Some(0) => {
                return Err(MuError::InvalidWorkerCount {
                    reason: "parallelism hint must be at least 1".to_string(),
                });
            }
            Some(hint) => hint,
            None => std::thread::available_parallelism()
                .map(|parallelism| parallelism.get())
                .unwrap_or(1),
        };

        Ok(base.saturating_mul(self.oversubscription).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worker_count_multiplies_hint_by_oversubscription() {
        let mut config = ScanConfig::new("out.txt");
        config.parallelism_hint = Some(4);
        config.oversubscription = 8;
        assert_eq!(config.worker_count().unwrap(), 32);
    }

    #[test]
    fn zero_multiplier_is_rejected() {
        let mut config = ScanConfig::new("out.txt");
        config.oversubscription = 0;
        assert!(matches!(
            config.worker_count(),
            Err(MuError::InvalidWorkerCount { .. })
        ));
    }

    #[test]
    fn zero_hint_is_rejected() {
        let mut config = ScanConfig::new("out.txt");
        config.parallelism_hint = Some(0);
        assert!(matches!(
            config.worker_count(),
            Err(MuError::InvalidWorkerCount { .. })
        ));
    }

    #[test]
    fn manifest_defaults_tuning_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.toml");
        std::fs::write(&path, "output = \"locations.txt\"\n").unwrap();

        let config = ScanConfig::from_manifest(&path).unwrap();
        assert_eq!(config.output, PathBuf::from("locations.txt"));
        assert_eq!(config.parallelism_hint, None);
        assert_eq!(config.oversubscription, DEFAULT_OVERSUBSCRIPTION);
        assert!(!config.eager_flush);
    }

    #[test]
    fn manifest_overrides_tuning_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.toml");
        std::fs::write(
            &path,
            "output = \"locations.txt\"\nparallelism_hint = 2\noversubscription = 5\neager_flush = true\n",
        )
        .unwrap();

        let config = ScanConfig::from_manifest(&path).unwrap();
        assert_eq!(config.parallelism_hint, Some(2));
        assert_eq!(config.oversubscription, 5);
        assert!(config.eager_flush);
        assert_eq!(config.worker_count().unwrap(), 10);
    }

    #[test]
    fn unknown_manifest_keys_are_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.toml");
        std::fs::write(&path, "output = \"x\"\nthreads = 3\n").unwrap();

        assert!(matches!(
            ScanConfig::from_manifest(&path),
            Err(MuError::ManifestParse { .. })
        ));
    }
}
