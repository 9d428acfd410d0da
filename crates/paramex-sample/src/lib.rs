//! # Paramex Sample Library
//!
//! Records and request builders shared by the sample binary and its integration tests.

pub mod error;
pub mod model;
pub mod requests;
