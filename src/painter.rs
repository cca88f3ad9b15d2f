use field_core::{GradientStops, Painter};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// `Painter` over a Canvas 2D context. Coordinates are CSS pixels; the
/// context transform takes care of the device pixel ratio.
pub struct CanvasPainter {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

fn add_stops(gradient: &web::CanvasGradient, stops: &GradientStops) {
    for stop in stops {
        _ = gradient.add_color_stop(stop.offset, &stop.color.to_string());
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, bounds: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, bounds.x as f64, bounds.y as f64);
    }

    fn stroke_link(&mut self, from: Vec2, to: Vec2, stops: &GradientStops, width: f32) {
        let (x0, y0, x1, y1) = (from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        self.ctx.begin_path();
        self.ctx.move_to(x0, y0);
        self.ctx.line_to(x1, y1);
        let gradient = self.ctx.create_linear_gradient(x0, y0, x1, y1);
        add_stops(&gradient, stops);
        self.ctx.set_stroke_style(&gradient);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, glow_radius: f32, stops: &GradientStops) {
        let (x, y) = (center.x as f64, center.y as f64);
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius as f64, 0.0, TAU).is_err() {
            return;
        }
        let gradient = match self
            .ctx
            .create_radial_gradient(x, y, 0.0, x, y, glow_radius as f64)
        {
            Ok(g) => g,
            Err(_) => return,
        };
        add_stops(&gradient, stops);
        self.ctx.set_fill_style(&gradient);
        self.ctx.fill();
    }
}
