use serde::{Deserialize, Serialize};

use crate::core::{AxisLayout, ChartMode, Viewport};
use crate::error::{ChartError, ChartResult};

/// Public chart configuration for one layout pass.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub mode: ChartMode,
    #[serde(default)]
    pub axis: AxisLayout,
}

impl ChartConfig {
    /// Creates a bar-mode config with default axis layout.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            mode: ChartMode::default(),
            axis: AxisLayout::default(),
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: ChartMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisLayout) -> Self {
        self.axis = axis;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.axis.validate()?;
        Ok(())
    }
}
