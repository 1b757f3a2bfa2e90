//! Map-pick state for the report-sighting flow.
//!
//! The report form arms `map_should_pick`; the map pane then writes the
//! clicked coordinate into `picked`.

use crate::util::geo::Coordinate;

#[derive(Clone, Copy, Debug, Default)]
pub struct CoordinatesState {
    pub picked: Option<Coordinate>,
    pub map_should_pick: bool,
}
