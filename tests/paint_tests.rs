// Host-side tests for the paint pass and palettes, using a recording painter
// in place of the canvas.

use field_core::{
    paint, ColorStop, FieldConfig, GradientStops, Painter, Palette, ParticleField,
    PointerState, Rgba, VisualMode,
};
use glam::Vec2;

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear(Vec2),
    Link {
        from: Vec2,
        to: Vec2,
        stops: Vec<ColorStop>,
        width: f32,
    },
    Glow {
        center: Vec2,
        radius: f32,
        glow_radius: f32,
        stops: Vec<ColorStop>,
    },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
}

impl Painter for Recorder {
    fn clear(&mut self, bounds: Vec2) {
        self.ops.push(Op::Clear(bounds));
    }

    fn stroke_link(&mut self, from: Vec2, to: Vec2, stops: &GradientStops, width: f32) {
        self.ops.push(Op::Link {
            from,
            to,
            stops: stops.to_vec(),
            width,
        });
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, glow_radius: f32, stops: &GradientStops) {
        self.ops.push(Op::Glow {
            center,
            radius,
            glow_radius,
            stops: stops.to_vec(),
        });
    }
}

fn warmed_up_field() -> ParticleField {
    let mut field = ParticleField::new(FieldConfig::HERO, 9);
    field.resize(800.0, 600.0);
    let mut pointer = PointerState::default();
    pointer.move_to(400.0, 300.0);
    for _ in 0..30 {
        field.update(&pointer);
    }
    field
}

fn link_alphas(ops: &[Op]) -> Vec<f32> {
    ops.iter()
        .filter_map(|op| match op {
            Op::Link { stops, .. } => Some(stops[0].color.a),
            _ => None,
        })
        .collect()
}

#[test]
fn paint_clears_then_links_then_particles() {
    let field = warmed_up_field();
    let mut rec = Recorder::default();
    let summary = paint(&field, VisualMode::Dark, &mut rec);

    assert_eq!(rec.ops.first(), Some(&Op::Clear(Vec2::new(800.0, 600.0))));
    assert_eq!(summary.particles, field.len());
    assert_eq!(summary.links, field.links().count());
    assert!(summary.links > 0);
    assert_eq!(rec.ops.len(), 1 + summary.links + summary.particles);

    let first_glow = rec
        .ops
        .iter()
        .position(|op| matches!(op, Op::Glow { .. }))
        .expect("particles drawn");
    assert!(rec.ops[first_glow..]
        .iter()
        .all(|op| matches!(op, Op::Glow { .. })));
}

#[test]
fn glow_matches_particle_size() {
    let field = warmed_up_field();
    let mut rec = Recorder::default();
    paint(&field, VisualMode::Dark, &mut rec);
    let glows = rec.ops.iter().filter_map(|op| match op {
        Op::Glow {
            center,
            radius,
            glow_radius,
            ..
        } => Some((*center, *radius, *glow_radius)),
        _ => None,
    });
    for ((center, radius, glow_radius), p) in glows.zip(field.particles()) {
        assert_eq!(center, p.position);
        assert_eq!(radius, p.size);
        assert!((glow_radius - 2.0 * p.size).abs() < 1e-6);
    }
}

#[test]
fn links_use_brighter_endpoint_for_width() {
    let field = warmed_up_field();
    let mut rec = Recorder::default();
    paint(&field, VisualMode::Dark, &mut rec);
    let widths: Vec<f32> = rec
        .ops
        .iter()
        .filter_map(|op| match op {
            Op::Link { width, .. } => Some(*width),
            _ => None,
        })
        .collect();
    for (w, link) in widths.iter().zip(field.links()) {
        assert!((w - (0.5 + link.brightness)).abs() < 1e-6);
    }
}

#[test]
fn light_mode_strengthens_links() {
    let field = warmed_up_field();
    let mut dark = Recorder::default();
    let mut light = Recorder::default();
    paint(&field, VisualMode::Dark, &mut dark);
    paint(&field, VisualMode::Light, &mut light);

    let dark_alphas = link_alphas(&dark.ops);
    let light_alphas = link_alphas(&light.ops);
    assert_eq!(dark_alphas.len(), light_alphas.len());
    for (d, l) in dark_alphas.iter().zip(&light_alphas) {
        assert!((l - d * 1.5).abs() < 1e-6);
        assert!(*l <= 0.75 + 1e-6);
    }
}

#[test]
fn mode_switch_applies_on_next_paint() {
    let mut field = warmed_up_field();
    let mut rec = Recorder::default();
    paint(&field, VisualMode::Dark, &mut rec);
    field.update(&PointerState::default());
    let mut after = Recorder::default();
    paint(&field, VisualMode::Light, &mut after);

    let light_primary = Palette::for_mode(VisualMode::Light).primary;
    let glow = after
        .ops
        .iter()
        .find_map(|op| match op {
            Op::Glow { stops, .. } => Some(stops[0].color),
            _ => None,
        })
        .expect("glow drawn");
    assert_eq!((glow.r, glow.g, glow.b), (light_primary.r, light_primary.g, light_primary.b));
}

#[test]
fn glow_stops_fade_to_transparent() {
    let dark = Palette::for_mode(VisualMode::Dark);
    let stops = dark.glow_stops(0.0);
    assert_eq!(stops.len(), 3);
    assert_eq!(stops[0].offset, 0.0);
    assert!((stops[0].color.a - 0.4).abs() < 1e-6);
    assert!((stops[1].color.a - 0.2).abs() < 1e-6);
    assert_eq!(stops[2].color.a, 0.0);

    let lit = dark.glow_stops(1.0);
    assert!((lit[0].color.a - 1.0).abs() < 1e-6);
    assert!((lit[1].color.a - 0.6).abs() < 1e-6);

    let light = Palette::for_mode(VisualMode::Light).glow_stops(1.0);
    assert!((light[0].color.a - 1.0).abs() < 1e-6);
    assert!((light[1].color.a - 0.7).abs() < 1e-6);
}

#[test]
fn rgba_formats_as_css() {
    let purple = Rgba::rgb(142, 45, 226);
    assert_eq!(purple.with_alpha(0.5).to_string(), "rgba(142, 45, 226, 0.5)");
    assert_eq!(purple.with_alpha(0.0).to_string(), "rgba(142, 45, 226, 0)");
    assert_eq!(purple.with_alpha(1.7).to_string(), "rgba(142, 45, 226, 1)");
    assert_eq!(purple.with_alpha(f32::NAN).to_string(), "rgba(142, 45, 226, 0)");
}

#[test]
fn visual_mode_parses() {
    assert_eq!("dark".parse::<VisualMode>(), Ok(VisualMode::Dark));
    assert_eq!(" light ".parse::<VisualMode>(), Ok(VisualMode::Light));
    assert!("sepia".parse::<VisualMode>().is_err());
    assert_eq!(VisualMode::from_dark_flag(false), VisualMode::Light);
    assert_eq!(VisualMode::Dark.name(), "dark");
}
