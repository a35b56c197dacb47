use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Provider contract consumed by the frame builder.
///
/// Required methods describe the table shape and cell values. The
/// cosmetic methods are optional: a source that does not customize
/// labels, colors or the y-axis keeps the documented defaults (empty
/// label, neutral series color, no y-axis labels).
pub trait ChartDataSource {
    fn item_count(&self) -> usize;

    fn stack_count(&self) -> usize;

    /// Value for `(item, stack)`; only queried with indices inside the
    /// reported counts.
    fn value_at(&self, item: usize, stack: usize) -> f64;

    fn label_for(&self, _item: usize) -> Option<String> {
        None
    }

    fn color_for(&self, _stack: usize) -> Option<Color> {
        None
    }

    fn y_axis_label_count(&self) -> Option<usize> {
        None
    }
}

/// In-memory table-backed data source.
///
/// Useful for tests, benches and hosts that already hold their series in
/// memory. Shape and cosmetic lists are validated at construction so the
/// layout pass never observes a ragged table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDataSource {
    rows: Vec<Vec<f64>>,
    stack_count: usize,
    labels: Option<Vec<String>>,
    stack_colors: Option<Vec<Color>>,
    y_axis_labels: Option<usize>,
}

impl TableDataSource {
    /// Builds a source from rows of exactly `stack_count` values each.
    pub fn new(rows: Vec<Vec<f64>>, stack_count: usize) -> ChartResult<Self> {
        for (item_index, row) in rows.iter().enumerate() {
            if row.len() != stack_count {
                return Err(ChartError::InvalidConfiguration(format!(
                    "row {item_index} has {} values, expected {stack_count}",
                    row.len()
                )));
            }
        }

        Ok(Self {
            rows,
            stack_count,
            labels: None,
            stack_colors: None,
            y_axis_labels: None,
        })
    }

    /// Attaches one x-axis label per item.
    pub fn with_labels(mut self, labels: Vec<String>) -> ChartResult<Self> {
        if labels.len() != self.rows.len() {
            return Err(ChartError::InvalidConfiguration(format!(
                "{} labels provided for {} items",
                labels.len(),
                self.rows.len()
            )));
        }
        self.labels = Some(labels);
        Ok(self)
    }

    /// Attaches one color per stack.
    pub fn with_stack_colors(mut self, colors: Vec<Color>) -> ChartResult<Self> {
        if colors.len() != self.stack_count {
            return Err(ChartError::InvalidConfiguration(format!(
                "{} colors provided for {} stacks",
                colors.len(),
                self.stack_count
            )));
        }
        for color in &colors {
            color.validate()?;
        }
        self.stack_colors = Some(colors);
        Ok(self)
    }

    /// Requests `count` evenly spaced y-axis labels.
    #[must_use]
    pub fn with_y_axis_labels(mut self, count: usize) -> Self {
        self.y_axis_labels = Some(count);
        self
    }
}

impl ChartDataSource for TableDataSource {
    fn item_count(&self) -> usize {
        self.rows.len()
    }

    fn stack_count(&self) -> usize {
        self.stack_count
    }

    fn value_at(&self, item: usize, stack: usize) -> f64 {
        self.rows[item][stack]
    }

    fn label_for(&self, item: usize) -> Option<String> {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(item).cloned())
    }

    fn color_for(&self, stack: usize) -> Option<Color> {
        self.stack_colors
            .as_ref()
            .and_then(|colors| colors.get(stack).copied())
    }

    fn y_axis_label_count(&self) -> Option<usize> {
        self.y_axis_labels
    }
}
