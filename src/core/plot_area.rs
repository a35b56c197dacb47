use serde::{Deserialize, Serialize};

use crate::core::types::Viewport;
use crate::error::{ChartError, ChartResult};

/// Axis margin and partitioning controls for the plot region.
///
/// The defaults reproduce the classic layout: a 50px left gutter for
/// y-axis labels, 10px pre/post padding, 10px top padding and a plot
/// region spanning the top 80% of the surface. The ratio is configurable
/// rather than baked in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    #[serde(default = "default_label_pad")]
    pub label_pad: f64,
    #[serde(default = "default_pre_pad")]
    pub pre_pad: f64,
    #[serde(default = "default_post_pad")]
    pub post_pad: f64,
    #[serde(default = "default_top_pad")]
    pub top_pad: f64,
    #[serde(default = "default_plot_height_ratio")]
    pub plot_height_ratio: f64,
    #[serde(default = "default_x_label_offset")]
    pub x_label_offset: f64,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            label_pad: default_label_pad(),
            pre_pad: default_pre_pad(),
            post_pad: default_post_pad(),
            top_pad: default_top_pad(),
            plot_height_ratio: default_plot_height_ratio(),
            x_label_offset: default_x_label_offset(),
        }
    }
}

impl AxisLayout {
    pub fn validate(self) -> ChartResult<Self> {
        for (field, value) in [
            ("label_pad", self.label_pad),
            ("pre_pad", self.pre_pad),
            ("post_pad", self.post_pad),
            ("top_pad", self.top_pad),
            ("x_label_offset", self.x_label_offset),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfiguration(format!(
                    "axis layout `{field}` must be finite and >= 0"
                )));
            }
        }

        if !self.plot_height_ratio.is_finite()
            || self.plot_height_ratio <= 0.0
            || self.plot_height_ratio > 1.0
        {
            return Err(ChartError::InvalidConfiguration(
                "axis layout `plot_height_ratio` must be finite and in (0, 1]".to_owned(),
            ));
        }

        Ok(self)
    }
}

fn default_label_pad() -> f64 {
    50.0
}

fn default_pre_pad() -> f64 {
    10.0
}

fn default_post_pad() -> f64 {
    10.0
}

fn default_top_pad() -> f64 {
    10.0
}

fn default_plot_height_ratio() -> f64 {
    0.8
}

fn default_x_label_offset() -> f64 {
    5.0
}

/// Partitioned drawing region for one layout pass.
///
/// Carries the resolved horizontal/vertical extents so projection code
/// never has to re-derive margins from the raw viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    usable_width: f64,
    plot_height: f64,
    baseline_y: f64,
    surface_width: f64,
    label_pad: f64,
    pre_pad: f64,
    top_pad: f64,
    x_label_offset: f64,
}

impl PlotArea {
    /// Resolves the plot region from a viewport and axis layout.
    ///
    /// Fails when the viewport is zero-sized or the margins leave no
    /// usable plotting space.
    pub fn new(viewport: Viewport, axis: AxisLayout) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let axis = axis.validate()?;

        let surface_width = f64::from(viewport.width);
        let surface_height = f64::from(viewport.height);

        let usable_width = surface_width - axis.label_pad - axis.pre_pad - axis.post_pad;
        if usable_width <= 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "horizontal padding ({}) leaves no usable plot width in a {} wide surface",
                axis.label_pad + axis.pre_pad + axis.post_pad,
                surface_width
            )));
        }

        let baseline_y = surface_height * axis.plot_height_ratio;
        let plot_height = baseline_y - axis.top_pad;
        if plot_height <= 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "top padding {} leaves no usable plot height above the {} baseline",
                axis.top_pad, baseline_y
            )));
        }

        Ok(Self {
            usable_width,
            plot_height,
            baseline_y,
            surface_width,
            label_pad: axis.label_pad,
            pre_pad: axis.pre_pad,
            top_pad: axis.top_pad,
            x_label_offset: axis.x_label_offset,
        })
    }

    #[must_use]
    pub fn usable_width(self) -> f64 {
        self.usable_width
    }

    #[must_use]
    pub fn plot_height(self) -> f64 {
        self.plot_height
    }

    /// Y coordinate of the x-axis line.
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        self.baseline_y
    }

    #[must_use]
    pub fn surface_width(self) -> f64 {
        self.surface_width
    }

    #[must_use]
    pub fn top_pad(self) -> f64 {
        self.top_pad
    }

    /// X coordinate of the y-axis line.
    #[must_use]
    pub fn y_axis_x(self) -> f64 {
        self.label_pad
    }

    /// Anchor y for item labels, just below the plot region.
    #[must_use]
    pub fn x_label_y(self) -> f64 {
        self.baseline_y + self.x_label_offset
    }

    /// Partitions the usable width into per-item slots.
    ///
    /// Each item occupies two width units, separated by one-unit gaps:
    /// `item_count * 2 + (item_count - 1)` units in total.
    pub fn slots(self, item_count: usize) -> ChartResult<SlotGeometry> {
        if item_count == 0 {
            return Err(ChartError::InvalidConfiguration(
                "cannot partition slots for zero items".to_owned(),
            ));
        }

        let total_units = (item_count * 2 + (item_count - 1)) as f64;
        Ok(SlotGeometry {
            unit_width: self.usable_width / total_units,
            origin_x: self.pre_pad + self.label_pad,
        })
    }
}

/// Horizontal slot geometry shared by every item of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotGeometry {
    unit_width: f64,
    origin_x: f64,
}

impl SlotGeometry {
    #[must_use]
    pub fn unit_width(self) -> f64 {
        self.unit_width
    }

    /// X origin of item `item_index`: each item strides two bar units
    /// plus one gap unit.
    #[must_use]
    pub fn slot_x(self, item_index: usize) -> f64 {
        (item_index as f64) * self.unit_width * 3.0 + self.origin_x
    }

    #[must_use]
    pub fn bar_width(self) -> f64 {
        self.unit_width * 2.0
    }
}
