//! Canvas 2D backend.
//!
//! Paints the engine's draw list with the 2D context: spheres as discs
//! (lit ones with a radial gradient offset toward the light), polylines as
//! strokes, point clouds as small squares. The backing store is scaled by
//! the device pixel ratio; drawing happens in CSS pixels.

use std::f64::consts::TAU;

use orrery_engine::{
    build_draw_list, Color, DrawCommand, DrawList, LightState, PerspectiveCamera, Renderer, Scene,
    SphereInstance, Viewport,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Gradient highlight sits this far from the disc center, in radii.
const HIGHLIGHT_OFFSET: f64 = 0.55;
/// Opacity of the meridian line drawn on lit spheres to show spin.
const MERIDIAN_ALPHA: f64 = 0.25;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    viewport: Viewport,
    pixel_ratio: f64,
    clear_color: Color,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement, clear_color: Color, pixel_ratio: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let viewport = Viewport::new(canvas.client_width().max(0) as u32, canvas.client_height().max(0) as u32);

        Ok(Self {
            canvas,
            ctx,
            viewport,
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
            clear_color,
        })
    }

    fn apply_size(&self) -> Result<(), JsValue> {
        let Viewport { width, height } = self.viewport;
        self.canvas.set_width((width as f64 * self.pixel_ratio).round() as u32);
        self.canvas.set_height((height as f64 * self.pixel_ratio).round() as u32);
        let style = self.canvas.style();
        style.set_property("width", &format!("{width}px"))?;
        style.set_property("height", &format!("{height}px"))?;
        // Resizing the backing store resets the transform.
        self.ctx
            .set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0)
    }

    fn paint(&self, list: &DrawList) -> Result<(), JsValue> {
        let (w, h) = (list.viewport.width as f64, list.viewport.height as f64);
        self.ctx.set_global_alpha(1.0);
        self.ctx.set_fill_style_str(&self.clear_color.to_css());
        self.ctx.fill_rect(0.0, 0.0, w, h);

        for item in &list.items {
            match &item.command {
                DrawCommand::Sphere(sphere) => self.paint_sphere(sphere)?,
                DrawCommand::Polyline { runs, color } => {
                    self.ctx.set_stroke_style_str(&color.to_css());
                    self.ctx.set_line_width(1.0);
                    self.ctx.begin_path();
                    for run in runs {
                        let mut points = run.iter();
                        if let Some(first) = points.next() {
                            self.ctx.move_to(first.x as f64, first.y as f64);
                        }
                        for p in points {
                            self.ctx.line_to(p.x as f64, p.y as f64);
                        }
                    }
                    self.ctx.stroke();
                }
                DrawCommand::Points { points, color, size } => {
                    self.ctx.set_fill_style_str(&color.to_css());
                    let size = *size as f64;
                    let half = size / 2.0;
                    for p in points {
                        self.ctx.fill_rect(p.x as f64 - half, p.y as f64 - half, size, size);
                    }
                }
            }
        }
        Ok(())
    }

    fn paint_sphere(&self, sphere: &SphereInstance) -> Result<(), JsValue> {
        let (x, y, r) = (sphere.center.x as f64, sphere.center.y as f64, sphere.radius as f64);
        if r <= 0.0 {
            return Ok(());
        }

        match &sphere.shading {
            None => self.ctx.set_fill_style_str(&sphere.color.to_css()),
            Some(shading) => {
                let hx = x + shading.toward_light.x as f64 * r * HIGHLIGHT_OFFSET;
                let hy = y + shading.toward_light.y as f64 * r * HIGHLIGHT_OFFSET;
                let gradient = self.ctx.create_radial_gradient(hx, hy, 0.0, x, y, r)?;
                gradient.add_color_stop(0.0, &shading.lit.to_css())?;
                gradient.add_color_stop(1.0, &shading.unlit.to_css())?;
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
        }
        self.ctx.begin_path();
        self.ctx.arc(x, y, r, 0.0, TAU)?;
        self.ctx.fill();

        if let Some(shading) = &sphere.shading {
            // A meridian whose width follows the spin angle.
            let rx = r * (sphere.spin as f64).cos().abs();
            if rx > 0.5 {
                self.ctx.set_global_alpha(MERIDIAN_ALPHA);
                self.ctx.set_stroke_style_str(&shading.unlit.to_css());
                self.ctx.begin_path();
                self.ctx.ellipse(x, y, rx, r, 0.0, 0.0, TAU)?;
                self.ctx.stroke();
                self.ctx.set_global_alpha(1.0);
            }
        }
        Ok(())
    }
}

impl Renderer for CanvasRenderer {
    fn backend(&self) -> &'static str {
        "canvas2d"
    }

    fn render(&mut self, scene: &Scene, camera: &PerspectiveCamera, lights: &LightState) {
        let list = build_draw_list(scene, camera, lights, self.viewport);
        if let Err(err) = self.paint(&list) {
            log::warn!("canvas paint failed: {err:?}");
        }
    }

    fn set_size(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        if let Err(err) = self.apply_size() {
            log::warn!("canvas resize failed: {err:?}");
        }
    }

    fn size(&self) -> Viewport {
        self.viewport
    }
}
