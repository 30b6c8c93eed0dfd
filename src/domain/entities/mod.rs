//! Domain entities.

mod mapping;

pub use mapping::{Mapping, NewMapping};
