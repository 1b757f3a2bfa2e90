//! Sighting list and selection state, shared by the list, map, and detail
//! views.

#[cfg(test)]
#[path = "sightings_test.rs"]
mod sightings_test;

use crate::net::types::Sighting;

#[derive(Clone, Debug, Default)]
pub struct SightingsState {
    pub sightings: Vec<Sighting>,
    pub selected_id: Option<String>,
}

impl SightingsState {
    /// Replace the list, dropping a selection that no longer resolves.
    pub fn set_sightings(&mut self, sightings: Vec<Sighting>) {
        self.sightings = sightings;
        if let Some(id) = &self.selected_id {
            if !self.sightings.iter().any(|s| &s.id == id) {
                self.selected_id = None;
            }
        }
    }

    pub fn add_sighting(&mut self, sighting: Sighting) {
        self.sightings.push(sighting);
    }

    pub fn remove_sighting(&mut self, id: &str) {
        self.sightings.retain(|s| s.id != id);
        if self.selected_id.as_deref() == Some(id) {
            self.selected_id = None;
        }
    }

    pub fn select(&mut self, id: Option<String>) {
        self.selected_id = id;
    }

    /// Currently selected sighting, when the id still resolves.
    pub fn selected(&self) -> Option<&Sighting> {
        let id = self.selected_id.as_deref()?;
        self.sightings.iter().find(|s| s.id == id)
    }
}
