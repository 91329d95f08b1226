//! Read-only view shared by every person-like type.

/// Public identity of a person: a name and an age, both fixed once built.
///
/// Implemented by [`Person`](crate::aggregates::Person) directly and by
/// [`Student`](crate::aggregates::Student) through the person it owns.
pub trait PersonProfile {
    /// The person's name.
    fn name(&self) -> &str;

    /// The person's age. Zero and negative values are not rejected.
    fn age(&self) -> i64;
}
