use serde::{Deserialize, Serialize};

/// Identifies one of the three market-index series carried by every
/// portfolio record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Benchmark {
    IndexA,
    IndexB,
    IndexC,
}

impl Benchmark {
    /// The fixed order in which every report lists the benchmarks.
    pub const ALL: [Benchmark; 3] = [Benchmark::IndexA, Benchmark::IndexB, Benchmark::IndexC];

    /// Returns the default display label for this index.
    pub fn label(&self) -> &'static str {
        match self {
            Benchmark::IndexA => "Index A",
            Benchmark::IndexB => "Index B",
            Benchmark::IndexC => "Index C",
        }
    }
}
