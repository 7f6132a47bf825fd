use super::*;
use crate::function::piecewise::PiecewiseLinear;
use crate::function::shapes::Boxcar;
use crate::function::tent::Tent;
use crate::layer::FUNCTION_FILL;
use crate::layer::checkers::Checkers;

fn pulse(value: f64) -> Function {
    Boxcar::new(0.0, 1.0, value).into()
}

#[test]
fn select_prefers_the_most_recent_function() {
    let mut ed = Editor::new();
    let low = ed.add_function(pulse(0.8));
    let high = ed.add_function(pulse(0.8));
    assert_ne!(low, high);
    assert_eq!(ed.select(Point::new(0.5, 0.4)), Some(high));
}

#[test]
fn select_misses_points_above_every_curve() {
    let mut ed = Editor::new();
    ed.add_function(pulse(0.5));
    assert_eq!(ed.select(Point::new(0.5, 0.6)), None);
    // The hit boundary is exclusive.
    assert_eq!(ed.select(Point::new(0.5, 0.5)), None);
}

#[test]
fn move_to_top_reorders_selection() {
    let mut ed = Editor::new();
    let first = ed.add_function(pulse(0.8));
    let second = ed.add_function(pulse(0.8));
    assert_eq!(ed.select(Point::new(0.5, 0.4)), Some(second));

    assert!(ed.move_to_top(first));
    assert_eq!(ed.select(Point::new(0.5, 0.4)), Some(first));
}

#[test]
fn move_to_top_of_topmost_is_a_noop() {
    let mut ed = Editor::new();
    ed.add_function(pulse(0.8));
    let top = ed.add_function(pulse(0.8));
    assert!(ed.move_to_top(top));
    assert_eq!(ed.select(Point::new(0.5, 0.4)), Some(top));
}

#[test]
fn move_to_top_ignores_unknown_ids() {
    let mut ed = Editor::new();
    let only = ed.add_function(pulse(1.0));

    let mut other = Editor::new();
    let _ = other.add_function(pulse(1.0));
    let unknown = other.add_function(pulse(1.0)); // id 1, absent in `ed`
    assert!(!ed.move_to_top(unknown));
    assert_eq!(ed.select(Point::new(0.5, 0.5)), Some(only));
}

#[test]
fn eval_is_the_pointwise_envelope() {
    let mut ed = Editor::new();
    assert_eq!(ed.eval(0.5), 0.0);

    ed.add_function(Tent::default().into());
    ed.add_function(pulse(0.3));
    assert!((ed.eval(0.5) - 1.0).abs() < 1e-9);
    assert!((ed.eval(0.05) - 0.3).abs() < 1e-9);
}

#[test]
fn sample_alpha_covers_both_endpoints() {
    let mut ed = Editor::new();
    ed.add_function(PiecewiseLinear::default().into());
    let s = ed.sample_alpha(3);
    assert_eq!(s.len(), 3);
    assert!(s[0].abs() < 1e-9);
    assert!((s[1] - 0.5).abs() < 1e-9);
    assert!((s[2] - 1.0).abs() < 1e-9);
}

#[test]
fn rasterize_rejects_zero_dimensions() {
    let ed = Editor::new();
    assert!(ed.rasterize(0, 8).is_err());
    assert!(ed.rasterize(8, 0).is_err());
}

#[test]
fn empty_editor_rasterizes_transparent_black() {
    let ed = Editor::new();
    let r = ed.rasterize(4, 4).unwrap();
    assert!(r.pixels().iter().all(|&px| px == 0));
}

#[test]
fn functions_blend_under_the_accumulator() {
    let mut ed = Editor::new();
    ed.set_show_outline(false);
    ed.add_function(pulse(1.0));
    ed.add_function(pulse(1.0));
    let r = ed.rasterize(2, 2).unwrap();

    // The second layer lands below the first: the accumulator is the src
    // operand, so its alpha grows by the over identity, not by replacement.
    let fill = unpack(pack(FUNCTION_FILL));
    let expected = pack(over(fill, fill));
    assert_eq!(r.get(0, 0).unwrap(), expected);
}

#[test]
fn background_stays_below_the_functions() {
    let mut ed = Editor::new();
    ed.set_show_outline(false);
    ed.add_function(pulse(1.0));
    let white = Rgba::opaque(1.0, 1.0, 1.0);
    ed.set_background(Box::new(Checkers::new(64, white, white).unwrap()));
    let r = ed.rasterize(4, 4).unwrap();

    let fill = unpack(pack(FUNCTION_FILL));
    let expected = pack(over(fill, unpack(pack(white))));
    assert_eq!(r.get(0, 0).unwrap(), expected);
    // An opaque background composited the other way round would win outright.
    assert_ne!(r.get(0, 0).unwrap(), pack(white));
}

#[test]
fn background_only_editor_shows_the_checkerboard() {
    let mut ed = Editor::new();
    let black = Rgba::opaque(0.0, 0.0, 0.0);
    let white = Rgba::opaque(1.0, 1.0, 1.0);
    ed.set_background(Box::new(Checkers::new(16, black, white).unwrap()));
    let r = ed.rasterize(256, 128).unwrap();
    assert_eq!(r.get(0, 0).unwrap(), pack(black));
    assert_eq!(r.get(16, 0).unwrap(), pack(white));
}

#[test]
fn outline_plots_the_envelope_row() {
    let mut ed = Editor::new();
    ed.add_function(PiecewiseLinear::default().into());
    let r = ed.rasterize(9, 8).unwrap();
    let orange = pack(OUTLINE);

    // Column 4 samples x = 0.5 -> row 4.
    assert_eq!(r.get(4, 4).unwrap(), orange);
    // Column 8 samples x = 1.0; the envelope hits 1 and clamps to the top row.
    assert_eq!(r.get(8, 7).unwrap(), orange);
    // Column 0 samples x = 0.0; a zero envelope draws nothing.
    assert_ne!(r.get(0, 0).unwrap(), orange);
}

#[test]
fn outline_can_be_disabled() {
    let mut ed = Editor::new();
    assert!(ed.show_outline());
    ed.add_function(PiecewiseLinear::default().into());
    ed.set_show_outline(false);
    let r = ed.rasterize(9, 8).unwrap();
    assert_ne!(r.get(4, 4).unwrap(), pack(OUTLINE));
}

#[test]
fn function_mut_changes_apply_on_next_rasterize() {
    let mut ed = Editor::new();
    ed.set_show_outline(false);
    let id = ed.add_function(pulse(0.0));
    let before = ed.rasterize(2, 4).unwrap();
    assert!(before.pixels().iter().all(|&px| px == 0));

    *ed.function_mut(id).unwrap() = pulse(1.0);
    let after = ed.rasterize(2, 4).unwrap();
    assert!(after.pixels().iter().all(|&px| px != 0));
}

#[test]
fn blend_under_requires_matching_sizes() {
    let mut a = Raster::new(2, 2).unwrap();
    let b = Raster::new(3, 2).unwrap();
    assert!(blend_under(&mut a, &b).is_err());
}
