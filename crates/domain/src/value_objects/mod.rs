//! Value objects - Immutable objects defined by their attributes

mod secret;

pub use secret::Secret;
