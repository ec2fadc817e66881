// File: crates/raster-render/src/chart.rs
// Summary: Line chart presenter owning its label/data sets, axes and result table.

use raster_core::{Mode, PointSequence, Presenter};

use crate::axis::Axis;
use crate::table::ResultTable;
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Fraction of the data span added around autoscaled axes.
const AXIS_MARGIN: f64 = 0.05;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
    /// Mark each sample with a dot on top of the polyline.
    pub draw_points: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
            draw_points: true,
        }
    }
}

/// Display state for one line graph. Every `show` replaces the previous data wholesale.
pub struct LineChart {
    pub dataset_label: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    labels: Vec<f64>,
    data: Vec<f64>,
    table: ResultTable,
}

impl Default for LineChart {
    fn default() -> Self { Self::new() }
}

impl LineChart {
    pub fn new() -> Self {
        Self {
            dataset_label: "Line Graph".to_string(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            labels: Vec::new(),
            data: Vec::new(),
            table: ResultTable::Hidden,
        }
    }

    /// X values currently plotted.
    pub fn labels(&self) -> &[f64] { &self.labels }

    /// Y values currently plotted.
    pub fn data(&self) -> &[f64] { &self.data }

    pub fn table(&self) -> &ResultTable { &self.table }

    /// Mode whose table is visible, if any.
    pub fn visible_table(&self) -> Option<Mode> { self.table.visible() }

    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.labels.iter().copied().zip(self.data.iter().copied())
    }

    /// Fit both axes to the plotted data. Leaves axes alone when there is nothing to fit.
    pub fn autoscale_axes(&mut self, margin: f64) {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for (x, y) in self.points() {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return;
        }
        self.x_axis.fit(x_min, x_max, margin);
        self.y_axis.fit(y_min, y_max, margin);
    }

    fn reset_axes(&mut self) {
        let (x_title, y_title) = (std::mem::take(&mut self.x_axis.title), std::mem::take(&mut self.y_axis.title));
        self.x_axis = Axis { title: x_title, ..Axis::default_x() };
        self.y_axis = Axis { title: y_title, ..Axis::default_y() };
    }
}

impl Presenter for LineChart {
    fn show(&mut self, points: &PointSequence) {
        self.labels = points.labels();
        self.data = points.data();
        self.table = ResultTable::from_points(points);
        if self.labels.is_empty() {
            self.reset_axes();
        } else {
            self.autoscale_axes(AXIS_MARGIN);
        }
        log::debug!("chart shows {} {} points", self.labels.len(), points.mode());
    }

    fn clear(&mut self) {
        self.labels.clear();
        self.data.clear();
        self.table = ResultTable::Hidden;
        self.reset_axes();
        log::debug!("chart cleared");
    }
}
