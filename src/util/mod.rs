//! Small shared helpers: cookies, coordinate math, form validation.

pub mod cookie;
pub mod geo;
pub mod validate;
