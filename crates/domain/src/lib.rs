//! Persona Domain - a person entity with a guarded secret.
//!
//! `Person` exposes its name and age read-only and its secret through an
//! accessor pair. `Student` extends a person by composition.

pub mod aggregates;
pub mod profile;
pub mod value_objects;

pub use aggregates::{Person, Student};
pub use profile::PersonProfile;
pub use value_objects::Secret;
