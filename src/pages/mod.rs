//! Top-level route pages.

pub mod auth;
pub mod home;
pub mod profile;
