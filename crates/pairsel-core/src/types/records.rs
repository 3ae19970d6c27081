//! Raw pair records as produced by the upstream similarity computation.

/// One row of the input schema: a candidate pair of methods from two
/// projects with its base and token similarity.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRecord {
    pub project1: String,
    pub file1: String,
    pub method1: String,
    pub project2: String,
    pub file2: String,
    pub method2: String,
    /// Semantic similarity in [0, 1].
    pub sim: f64,
    /// Token-level similarity in [0, 1].
    pub sim_tok: f64,
}

impl PairRecord {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project1: impl Into<String>,
        file1: impl Into<String>,
        method1: impl Into<String>,
        project2: impl Into<String>,
        file2: impl Into<String>,
        method2: impl Into<String>,
        sim: f64,
        sim_tok: f64,
    ) -> Self {
        Self {
            project1: project1.into(),
            file1: file1.into(),
            method1: method1.into(),
            project2: project2.into(),
            file2: file2.into(),
            method2: method2.into(),
            sim,
            sim_tok,
        }
    }
}
