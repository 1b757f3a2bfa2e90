//! Wire types and endpoint table for the HonkSpotter API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::util::geo::{self, Coordinate};

/// Same-origin API prefix.
pub const API_BASE: &str = "/api";

/// Fixed-path API endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiEndpoint {
    Login,
    Signup,
    Logout,
    Refresh,
    Sightings,
    SubmitSighting,
    UpdateProfile,
    ImageUpload,
}

impl ApiEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::Logout => "/logout",
            Self::Refresh => "/refresh",
            Self::Sightings => "/sightings",
            Self::SubmitSighting => "/submit-sighting",
            Self::UpdateProfile => "/update-profile",
            Self::ImageUpload => "/image-upload",
        }
    }

    pub fn url(self) -> String {
        format!("{API_BASE}{}", self.path())
    }
}

pub fn user_url(user_id: &str) -> String {
    format!("{API_BASE}/user/{user_id}")
}

pub fn image_url(image_id: &str) -> String {
    format!("{API_BASE}/image/{image_id}")
}

pub fn image_delete_url(image_id: &str) -> String {
    format!("{API_BASE}/image-delete/{image_id}")
}

/// A reported goose sighting as the server returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// `"lat,lng"` string; parse with [`Sighting::coordinate`].
    pub coords: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub created_date: Option<String>,
}

impl Sighting {
    /// Parsed coordinate, or `None` when the stored string is malformed.
    pub fn coordinate(&self) -> Option<Coordinate> {
        geo::parse_coords(&self.coords)
    }
}

/// A user profile as the server returns it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub is_banned: bool,
}

/// Login/signup request body.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Login/signup/refresh response body.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
}

/// Refresh request body: the stale token is a hint for the server, not auth.
#[derive(Clone, Debug, Serialize)]
pub struct RefreshRequest {
    pub access_token: Option<String>,
}

/// `POST /submit-sighting` request body.
#[derive(Clone, Debug, Serialize)]
pub struct SightingDraft {
    pub name: String,
    pub notes: String,
    pub coords: String,
    pub image: String,
}

/// `POST /update-profile` request body; absent fields are left unchanged.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SightingsEnvelope {
    pub sightings: Vec<Sighting>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SightingEnvelope {
    pub sighting: Sighting,
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ImageUploadResponse {
    pub id: String,
}
