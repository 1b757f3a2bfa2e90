use super::*;

#[test]
fn endpoint_paths_match_the_server_table() {
    assert_eq!(ApiEndpoint::Login.path(), "/login");
    assert_eq!(ApiEndpoint::Signup.path(), "/signup");
    assert_eq!(ApiEndpoint::Logout.path(), "/logout");
    assert_eq!(ApiEndpoint::Refresh.path(), "/refresh");
    assert_eq!(ApiEndpoint::Sightings.path(), "/sightings");
    assert_eq!(ApiEndpoint::SubmitSighting.path(), "/submit-sighting");
    assert_eq!(ApiEndpoint::UpdateProfile.path(), "/update-profile");
    assert_eq!(ApiEndpoint::ImageUpload.path(), "/image-upload");
}

#[test]
fn urls_carry_the_api_prefix() {
    assert_eq!(ApiEndpoint::Refresh.url(), "/api/refresh");
    assert_eq!(user_url("42"), "/api/user/42");
    assert_eq!(image_url("img-7"), "/api/image/img-7");
    assert_eq!(image_delete_url("img-7"), "/api/image-delete/img-7");
}

#[test]
fn sighting_coordinate_parses_the_stored_string() {
    let sighting = Sighting {
        id: "s-1".to_owned(),
        name: "Central Park".to_owned(),
        notes: None,
        coords: "40.785091,-73.968285".to_owned(),
        image: None,
        user_id: None,
        created_date: None,
    };
    let c = sighting.coordinate().expect("coordinate");
    assert_eq!(c.lat, 40.785_091);

    let broken = Sighting { coords: "somewhere".to_owned(), ..sighting };
    assert!(broken.coordinate().is_none());
}

#[test]
fn sighting_deserializes_with_missing_optionals() {
    let sighting: Sighting = serde_json::from_value(serde_json::json!({
        "id": "s-2",
        "name": "Riverside",
        "coords": "40.8,-73.97"
    }))
    .expect("sighting");
    assert_eq!(sighting.notes, None);
    assert_eq!(sighting.image, None);
}

#[test]
fn profile_update_skips_absent_fields() {
    let update = ProfileUpdate { description: Some("likes geese".to_owned()), ..ProfileUpdate::default() };
    let value = serde_json::to_value(&update).expect("json");
    assert_eq!(value, serde_json::json!({"description": "likes geese"}));
}
