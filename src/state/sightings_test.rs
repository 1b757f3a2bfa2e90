use super::*;

fn sighting(id: &str) -> Sighting {
    Sighting {
        id: id.to_owned(),
        name: format!("Sighting {id}"),
        notes: None,
        coords: "43.46,-80.52".to_owned(),
        image: None,
        user_id: None,
        created_date: None,
    }
}

#[test]
fn add_and_remove_sightings() {
    let mut state = SightingsState::default();
    state.add_sighting(sighting("s-1"));
    state.add_sighting(sighting("s-2"));
    assert_eq!(state.sightings.len(), 2);

    state.remove_sighting("s-1");
    assert_eq!(state.sightings.len(), 1);
    assert_eq!(state.sightings[0].id, "s-2");
}

#[test]
fn selected_resolves_by_id() {
    let mut state = SightingsState::default();
    state.set_sightings(vec![sighting("s-1"), sighting("s-2")]);
    state.select(Some("s-2".to_owned()));
    assert_eq!(state.selected().map(|s| s.id.as_str()), Some("s-2"));

    state.select(None);
    assert!(state.selected().is_none());
}

#[test]
fn set_sightings_drops_a_stale_selection() {
    let mut state = SightingsState::default();
    state.set_sightings(vec![sighting("s-1")]);
    state.select(Some("s-1".to_owned()));

    state.set_sightings(vec![sighting("s-2")]);
    assert_eq!(state.selected_id, None);
}

#[test]
fn set_sightings_keeps_a_selection_that_survives() {
    let mut state = SightingsState::default();
    state.set_sightings(vec![sighting("s-1")]);
    state.select(Some("s-1".to_owned()));

    state.set_sightings(vec![sighting("s-1"), sighting("s-2")]);
    assert_eq!(state.selected_id.as_deref(), Some("s-1"));
}

#[test]
fn remove_clears_the_selection_it_removes() {
    let mut state = SightingsState::default();
    state.set_sightings(vec![sighting("s-1")]);
    state.select(Some("s-1".to_owned()));

    state.remove_sighting("s-1");
    assert_eq!(state.selected_id, None);
}
