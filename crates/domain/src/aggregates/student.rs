//! Student aggregate - a `Person` extended with a class assignment
//!
//! Composition stands in for subclassing: a `Student` owns its `Person` and
//! reads the guarded secret through the person's crate-private accessor.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::aggregates::Person;
use crate::profile::PersonProfile;
use crate::value_objects::Secret;

const GREETING: &str = "Hello";

/// A person enrolled in a class.
///
/// # Example
///
/// ```
/// use persona_domain::aggregates::Student;
/// use persona_domain::PersonProfile;
///
/// let student = Student::new("Sara", 19, "0000", "Algebra");
///
/// assert_eq!(student.name(), "Sara");
/// assert_eq!(student.class_name(), "Algebra");
/// assert_eq!(student.greet(), "Hello");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    person: Person,
    class_name: String,
}

impl Student {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        secret: impl Into<Secret>,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            person: Person::new(name, age, secret),
            class_name: class_name.into(),
        }
    }

    /// Wrap an existing person.
    pub fn from_person(person: Person, class_name: impl Into<String>) -> Self {
        Self {
            person,
            class_name: class_name.into(),
        }
    }

    #[inline]
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Mutable access to the underlying person, e.g. to rotate the secret.
    #[inline]
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn greet(&self) -> &'static str {
        GREETING
    }

    /// The owning person's secret, via the privileged accessor.
    pub fn secret(&self) -> &str {
        self.person.guarded_secret().as_str()
    }

    pub fn into_person(self) -> Person {
        self.person
    }
}

impl PersonProfile for Student {
    fn name(&self) -> &str {
        self.person.name()
    }

    fn age(&self) -> i64 {
        self.person.age()
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudentWireFormat {
    #[serde(flatten)]
    person: Person,
    class_name: String,
}

impl Serialize for Student {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = StudentWireFormat {
            person: self.person.clone(),
            class_name: self.class_name.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Student {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = StudentWireFormat::deserialize(deserializer)?;
        Ok(Student::from_person(wire.person, wire.class_name))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_student() -> Student {
        Student::new("Ahmed", 25, "1234", "Physics")
    }

    #[test]
    fn new_builds_underlying_person() {
        let student = create_test_student();

        assert_eq!(student.person().name(), "Ahmed");
        assert_eq!(student.person().age(), 25);
        assert_eq!(student.class_name(), "Physics");
    }

    #[test]
    fn greet_says_hello() {
        assert_eq!(create_test_student().greet(), "Hello");
    }

    #[test]
    fn secret_mirrors_person_after_mutation() {
        let mut student = create_test_student();
        assert_eq!(student.secret(), "1234");

        student.person_mut().set_secret("5678");

        assert_eq!(student.secret(), "5678");
        assert_eq!(student.person().secret(), "5678");
    }

    #[test]
    fn profile_delegates_to_person() {
        let student = create_test_student();
        let profile: &dyn PersonProfile = &student;

        assert_eq!(profile.name(), "Ahmed");
        assert_eq!(profile.age(), 25);
    }

    #[test]
    fn from_person_and_back() {
        let person = Person::new("Lina", 30, "s3");
        let student = Student::from_person(person.clone(), "Art");

        assert_eq!(student.into_person(), person);
    }

    #[test]
    fn serialize_flattens_person_fields() {
        let json = serde_json::to_value(create_test_student()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Ahmed",
                "age": 25,
                "secret": "1234",
                "className": "Physics"
            })
        );

        let back: Student = serde_json::from_value(json).unwrap();
        assert_eq!(back, create_test_student());
    }
}
