//! Source of raw pair records.

use crate::errors::StorageError;
use crate::types::PairRecord;

/// Anything that can stream the candidate pair records.
pub trait PairSource {
    /// Number of records with `sim > threshold`, used to size buffers.
    fn count_pairs(&self, threshold: f64) -> Result<usize, StorageError>;

    /// Feed every record with `sim > threshold` to `visit`, ordered by
    /// descending `sim`. Returns the number of records visited.
    fn visit_pairs(
        &self,
        threshold: f64,
        visit: &mut dyn FnMut(PairRecord),
    ) -> Result<usize, StorageError>;
}

/// In-memory source; keeps slice order and applies the threshold.
impl PairSource for [PairRecord] {
    fn count_pairs(&self, threshold: f64) -> Result<usize, StorageError> {
        Ok(self.iter().filter(|r| r.sim > threshold).count())
    }

    fn visit_pairs(
        &self,
        threshold: f64,
        visit: &mut dyn FnMut(PairRecord),
    ) -> Result<usize, StorageError> {
        let mut visited = 0;
        for record in self.iter().filter(|r| r.sim > threshold) {
            visit(record.clone());
            visited += 1;
        }
        Ok(visited)
    }
}
