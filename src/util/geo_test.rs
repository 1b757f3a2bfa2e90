use super::*;

// =============================================================
// Coordinate string parsing
// =============================================================

#[test]
fn parse_coords_plain_pair() {
    let c = parse_coords("43.4643,-80.5204").expect("coordinate");
    assert_eq!(c.lat, 43.4643);
    assert_eq!(c.lng, -80.5204);
}

#[test]
fn parse_coords_tolerates_space_after_comma() {
    let c = parse_coords("34.0522, -118.2437").expect("coordinate");
    assert_eq!(c.lat, 34.0522);
    assert_eq!(c.lng, -118.2437);
}

#[test]
fn parse_coords_rejects_out_of_range_latitude() {
    assert!(parse_coords("90.5,0").is_none());
    assert!(parse_coords("-91,0").is_none());
}

#[test]
fn parse_coords_rejects_out_of_range_longitude() {
    assert!(parse_coords("0,180.1").is_none());
    assert!(parse_coords("0,-181").is_none());
}

#[test]
fn parse_coords_rejects_garbage() {
    assert!(parse_coords("").is_none());
    assert!(parse_coords("not a coordinate").is_none());
    assert!(parse_coords("43.4").is_none());
    assert!(parse_coords("43.4,").is_none());
}

#[test]
fn format_coords_round_trips() {
    let c = Coordinate { lat: 43.5, lng: -80.25 };
    assert_eq!(parse_coords(&format_coords(c)), Some(c));
}

// =============================================================
// Viewport and projection
// =============================================================

#[test]
fn viewport_for_empty_uses_default_center() {
    let view = viewport_for(&[]);
    assert_eq!(view.center, DEFAULT_CENTER);
}

#[test]
fn viewport_for_single_point_centers_on_it() {
    let c = Coordinate { lat: 10.0, lng: 20.0 };
    let view = viewport_for(&[c]);
    assert_eq!(view.center, c);
    // A lone marker still gets a non-degenerate window.
    assert!(view.half_lat > 0.0);
    assert!(view.half_lng > 0.0);
}

#[test]
fn viewport_for_averages_centers() {
    let view = viewport_for(&[
        Coordinate { lat: 0.0, lng: 0.0 },
        Coordinate { lat: 2.0, lng: 4.0 },
    ]);
    assert_eq!(view.center, Coordinate { lat: 1.0, lng: 2.0 });
    // Padded past the farthest marker.
    assert!(view.half_lat >= 1.0);
    assert!(view.half_lng >= 2.0);
}

#[test]
fn project_center_lands_in_the_middle() {
    let view = viewport_for(&[]);
    assert_eq!(project(view.center, &view), (50.0, 50.0));
}

#[test]
fn project_clamps_outside_the_window() {
    let view = Viewport {
        center: Coordinate { lat: 0.0, lng: 0.0 },
        half_lat: 1.0,
        half_lng: 1.0,
    };
    let (x, y) = project(Coordinate { lat: 50.0, lng: -50.0 }, &view);
    assert_eq!(x, 0.0);
    assert_eq!(y, 0.0);
}

#[test]
fn project_north_is_up() {
    let view = Viewport {
        center: Coordinate { lat: 0.0, lng: 0.0 },
        half_lat: 1.0,
        half_lng: 1.0,
    };
    let (_, y) = project(Coordinate { lat: 0.5, lng: 0.0 }, &view);
    assert!(y < 50.0);
}

#[test]
fn unproject_inverts_project() {
    let view = Viewport {
        center: Coordinate { lat: 43.0, lng: -80.0 },
        half_lat: 2.0,
        half_lng: 3.0,
    };
    let original = Coordinate { lat: 43.5, lng: -81.5 };
    let (x, y) = project(original, &view);
    let back = unproject(x, y, &view);
    assert!((back.lat - original.lat).abs() < 1e-9);
    assert!((back.lng - original.lng).abs() < 1e-9);
}
