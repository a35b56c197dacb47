use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Per-item stack values, base stack (index 0) first.
///
/// Stack counts are small in practice, so values live inline until the
/// table grows past the smallvec threshold.
pub type ItemValues = SmallVec<[f64; 4]>;

/// One summarized item: its stack values and their sum.
///
/// Summaries are derived fresh for every layout pass and never stored
/// between passes, so repeated passes over the same table cannot observe
/// leftover state.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSummary {
    pub total: f64,
    pub values: ItemValues,
}

impl ItemSummary {
    /// Builds a summary from raw stack values.
    ///
    /// All values must be finite. Negative values are not rejected here;
    /// the layout model assumes non-negative stacked magnitudes and leaves
    /// negative input undefined.
    pub fn from_values(values: ItemValues) -> ChartResult<Self> {
        for value in &values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "stack values must be finite".to_owned(),
                ));
            }
        }

        let total = values.iter().sum();
        Ok(Self { total, values })
    }

    #[must_use]
    pub fn stack_count(&self) -> usize {
        self.values.len()
    }
}

/// Summarizes a raw table of rows, enforcing a uniform row shape.
pub fn summarize_table(rows: &[Vec<f64>], stack_count: usize) -> ChartResult<Vec<ItemSummary>> {
    let mut summaries = Vec::with_capacity(rows.len());
    for (item_index, row) in rows.iter().enumerate() {
        if row.len() != stack_count {
            return Err(ChartError::InvalidConfiguration(format!(
                "row {item_index} has {} values, expected {stack_count}",
                row.len()
            )));
        }
        summaries.push(ItemSummary::from_values(ItemValues::from_slice(row))?);
    }
    Ok(summaries)
}
