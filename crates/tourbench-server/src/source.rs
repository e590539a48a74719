//! Matrix sources built from configuration.

use tourbench_benchmark::{ExampleMatrixSource, MatrixSource, RandomMatrixSource};
use tourbench_config::{BenchmarkSection, MatrixSourceKind};
use tourbench_core::{DistanceMatrix, Result};

/// The matrix source selected by `benchmark.source`.
#[derive(Debug, Clone)]
pub enum ConfiguredSource {
    Random(RandomMatrixSource),
    Example(ExampleMatrixSource),
}

impl ConfiguredSource {
    /// Builds the source `kind` with the section's seed and distance range.
    pub fn new(kind: MatrixSourceKind, section: &BenchmarkSection) -> Self {
        match kind {
            MatrixSourceKind::Random => {
                let source = match section.seed {
                    Some(seed) => RandomMatrixSource::seeded(seed),
                    None => RandomMatrixSource::new(),
                };
                ConfiguredSource::Random(
                    source.with_distance_range(section.min_distance, section.max_distance),
                )
            }
            MatrixSourceKind::Example => ConfiguredSource::Example(ExampleMatrixSource::new()),
        }
    }

    pub fn from_section(section: &BenchmarkSection) -> Self {
        Self::new(section.source, section)
    }
}

impl MatrixSource for ConfiguredSource {
    fn matrix(&mut self, n: usize) -> Result<DistanceMatrix> {
        match self {
            ConfiguredSource::Random(source) => source.matrix(n),
            ConfiguredSource::Example(source) => source.matrix(n),
        }
    }

    fn name(&self) -> &str {
        match self {
            ConfiguredSource::Random(source) => source.name(),
            ConfiguredSource::Example(source) => source.name(),
        }
    }
}
