//! UI components shared across pages.

pub mod auth_form;
pub mod auth_guard;
pub mod edit_profile_dialog;
pub mod image_upload;
pub mod map_panel;
pub mod navbar;
pub mod notice_stack;
pub mod profile_card;
pub mod profile_picture;
pub mod sighting_detail;
pub mod sighting_list;
pub mod sighting_report;
