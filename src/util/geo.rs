//! Coordinate parsing and the lightweight map projection.
//!
//! The server stores sighting coordinates as a `"lat,lng"` string; this
//! module parses and formats that shape with the same ranges the server
//! validates, and projects coordinates into a percent-based marker layer
//! for the map pane.

#[cfg(test)]
#[path = "geo_test.rs"]
mod geo_test;

/// A latitude/longitude pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// Map center used before any sightings are loaded (Waterloo, ON).
pub const DEFAULT_CENTER: Coordinate = Coordinate { lat: 43.4643, lng: -80.5204 };

/// Smallest half-span in degrees, so a single marker never collapses the view.
const MIN_HALF_SPAN: f64 = 0.05;

/// Parse the server's `"lat,lng"` coordinate string.
///
/// Enforces the same ranges the server validates: latitude within ±90,
/// longitude within ±180. Returns `None` for anything malformed.
pub fn parse_coords(raw: &str) -> Option<Coordinate> {
    let (lat, lng) = raw.split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lng: f64 = lng.trim().parse().ok()?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }
    Some(Coordinate { lat, lng })
}

/// Format a coordinate back into the wire shape.
pub fn format_coords(coordinate: Coordinate) -> String {
    format!("{},{}", coordinate.lat, coordinate.lng)
}

/// Visible map window: a center plus half-spans in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub center: Coordinate,
    pub half_lat: f64,
    pub half_lng: f64,
}

/// Window centered on the average of the markers, padded enough to keep all
/// of them visible. Falls back to [`DEFAULT_CENTER`] when there are none.
pub fn viewport_for(coords: &[Coordinate]) -> Viewport {
    if coords.is_empty() {
        return Viewport { center: DEFAULT_CENTER, half_lat: 1.0, half_lng: 1.0 };
    }

    #[allow(clippy::cast_precision_loss)]
    let n = coords.len() as f64;
    let center = Coordinate {
        lat: coords.iter().map(|c| c.lat).sum::<f64>() / n,
        lng: coords.iter().map(|c| c.lng).sum::<f64>() / n,
    };

    let mut half_lat = 0.0_f64;
    let mut half_lng = 0.0_f64;
    for c in coords {
        half_lat = half_lat.max((c.lat - center.lat).abs());
        half_lng = half_lng.max((c.lng - center.lng).abs());
    }

    Viewport {
        center,
        half_lat: (half_lat * 1.2).max(MIN_HALF_SPAN),
        half_lng: (half_lng * 1.2).max(MIN_HALF_SPAN),
    }
}

/// Project a coordinate into percent offsets inside the viewport
/// (0,0 = top-left, 100,100 = bottom-right), clamped to the edges.
pub fn project(coordinate: Coordinate, view: &Viewport) -> (f64, f64) {
    let x = 50.0 + (coordinate.lng - view.center.lng) / view.half_lng * 50.0;
    let y = 50.0 - (coordinate.lat - view.center.lat) / view.half_lat * 50.0;
    (x.clamp(0.0, 100.0), y.clamp(0.0, 100.0))
}

/// Inverse of [`project`], for click-to-pick on the map pane.
pub fn unproject(x_pct: f64, y_pct: f64, view: &Viewport) -> Coordinate {
    Coordinate {
        lat: view.center.lat - (y_pct - 50.0) / 50.0 * view.half_lat,
        lng: view.center.lng + (x_pct - 50.0) / 50.0 * view.half_lng,
    }
}
