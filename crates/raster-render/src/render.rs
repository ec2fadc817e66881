// File: crates/raster-render/src/render.rs
// Summary: Headless PNG rendering of a `LineChart` using Skia CPU raster surfaces.

use anyhow::{Context, Result};
use skia_safe as skia;

use crate::axis::Axis;
use crate::chart::{LineChart, RenderOptions};
use crate::geometry::PlotArea;
use crate::grid::{linspace, tick_label};
use crate::theme::{Rgba, Theme};

const X_TICKS: usize = 9;
const Y_TICKS: usize = 6;

impl LineChart {
    /// Render the chart to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Render the chart to in-memory PNG bytes.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create {}x{} raster surface", opts.width, opts.height))?;
        let canvas = surface.canvas();
        let theme = &opts.theme;
        canvas.clear(color(theme.background));

        let area = PlotArea::inset(opts.width, opts.height, &opts.insets);
        draw_grid(canvas, &area, theme);
        draw_axes(canvas, &area, &self.x_axis, &self.y_axis, theme, opts.draw_labels);
        draw_series(canvas, &area, self, theme, opts.draw_points);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn stroke(c: Rgba, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color(c));
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme) {
    let paint = stroke(theme.grid, 1.0);
    let (l, t, r, b) = (area.left as f64, area.top as f64, area.right as f64, area.bottom as f64);
    for x in linspace(l, r, X_TICKS) {
        canvas.draw_line((x as f32, t as f32), (x as f32, b as f32), &paint);
    }
    for y in linspace(t, b, Y_TICKS) {
        canvas.draw_line((l as f32, y as f32), (r as f32, y as f32), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, area: &PlotArea, x: &Axis, y: &Axis, theme: &Theme, labels: bool) {
    let axis_paint = stroke(theme.axis_line, 1.5);
    let (l, t, r, b) = (area.left as f32, area.top as f32, area.right as f32, area.bottom as f32);
    canvas.draw_line((l, b), (r, b), &axis_paint);
    canvas.draw_line((l, t), (l, b), &axis_paint);

    if !labels {
        return;
    }
    let mut title_paint = skia::Paint::default();
    title_paint.set_color(color(theme.axis_label));
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(color(theme.tick));
    let mut font = skia::Font::default();
    font.set_size(12.0);

    for (px, v) in linspace(l as f64, r as f64, X_TICKS).into_iter().zip(linspace(x.min, x.max, X_TICKS)) {
        canvas.draw_str(tick_label(v), (px as f32 - 8.0, b + 16.0), &font, &tick_paint);
    }
    for (py, v) in linspace(b as f64, t as f64, Y_TICKS).into_iter().zip(linspace(y.min, y.max, Y_TICKS)) {
        canvas.draw_str(tick_label(v), (l - 44.0, py as f32 + 4.0), &font, &tick_paint);
    }

    font.set_size(14.0);
    canvas.draw_str(&x.title, ((l + r) * 0.5, b + 36.0), &font, &title_paint);
    canvas.draw_str(&y.title, (l - 56.0, t - 8.0), &font, &title_paint);
}

fn draw_series(canvas: &skia::Canvas, area: &PlotArea, chart: &LineChart, theme: &Theme, dots: bool) {
    let pts: Vec<(f32, f32)> = chart
        .points()
        .map(|(x, y)| area.to_screen(&chart.x_axis, &chart.y_axis, x, y))
        .collect();
    let Some(&first) = pts.first() else { return };

    if pts.len() >= 2 {
        let mut path = skia::Path::new();
        path.move_to(first);
        for &p in &pts[1..] {
            path.line_to(p);
        }
        canvas.draw_path(&path, &stroke(theme.line_stroke, 2.0));
    }

    // a single sample has no segment, so always mark it
    if dots || pts.len() == 1 {
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color(theme.point_fill));
        for &p in &pts {
            canvas.draw_circle(p, 3.0, &fill);
        }
    }
}
