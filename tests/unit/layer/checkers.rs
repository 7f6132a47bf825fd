use super::*;

#[test]
fn cell_size_zero_is_rejected() {
    let black = Rgba::opaque(0.0, 0.0, 0.0);
    let white = Rgba::opaque(1.0, 1.0, 1.0);
    assert!(Checkers::new(0, black, white).is_err());
}

#[test]
fn parity_rule_picks_colors() {
    let black = Rgba::opaque(0.0, 0.0, 0.0);
    let white = Rgba::opaque(1.0, 1.0, 1.0);
    let c = Checkers::new(16, black, white).unwrap();
    let r = c.rasterize(256, 128).unwrap();

    assert_eq!(r.get(0, 0).unwrap(), pack(black));
    assert_eq!(r.get(16, 0).unwrap(), pack(white));
    assert_eq!(r.get(0, 16).unwrap(), pack(white));
    assert_eq!(r.get(16, 16).unwrap(), pack(black));
    // Still inside the first cell.
    assert_eq!(r.get(15, 15).unwrap(), pack(black));
}

#[test]
fn checker_colors_render_opaque() {
    let c = Checkers::new(
        4,
        Rgba::new(0.5, 0.5, 0.5, 0.2),
        Rgba::new(0.9, 0.9, 0.9, 0.1),
    )
    .unwrap();
    let r = c.rasterize(8, 8).unwrap();
    assert_eq!(r.get(0, 0).unwrap() >> 24, 0xff);
    assert_eq!(r.get(7, 0).unwrap() >> 24, 0xff);
}

#[test]
fn default_checkers_are_eight_pixel_black_and_white() {
    let c = Checkers::default();
    assert_eq!(c.cell_size(), 8);
    let r = c.rasterize(16, 16).unwrap();
    assert_eq!(r.get(0, 0).unwrap(), pack(Rgba::opaque(0.0, 0.0, 0.0)));
    assert_eq!(r.get(8, 0).unwrap(), pack(Rgba::opaque(1.0, 1.0, 1.0)));
}
