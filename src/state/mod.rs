//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `sightings`, etc.) so individual
//! components can depend on small focused models. Each is held in an
//! `RwSignal` provided through context by the root component; the session
//! signal is the single owner of the access token.

pub mod coordinates;
pub mod notices;
pub mod session;
pub mod sightings;
