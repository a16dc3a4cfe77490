//! Domain layer for the Navigator deep-link builder
//!
//! Contains value objects shared by the integration crates. This layer has
//! no external dependencies beyond serde and defines the ubiquitous language.

pub mod value_objects;

pub use value_objects::*;
