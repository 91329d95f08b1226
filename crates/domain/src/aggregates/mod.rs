//! Aggregate roots - domain objects that own their related data
//!
//! Fields are private; behavior and access go through methods. Where another
//! language would subclass, an aggregate here owns the base aggregate and is
//! granted crate-private accessors.

pub mod person;
pub mod student;

pub use person::Person;
pub use student::Student;
