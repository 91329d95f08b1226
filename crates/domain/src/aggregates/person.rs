//! Person aggregate - a named entity carrying one guarded value
//!
//! # Rustic DDD Design
//!
//! - **Private fields**: `name` and `age` have read accessors only
//! - **Guarded value**: `secret` is reachable solely through `secret()` / `set_secret()`
//! - **Infallible construction**: every input is stored verbatim

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::profile::PersonProfile;
use crate::value_objects::Secret;

/// A person with a public identity and a guarded secret.
///
/// # Invariants
///
/// - `name` and `age` never change after construction
/// - `secret` is always present; only `set_secret` can replace it
///
/// # Example
///
/// ```
/// use persona_domain::aggregates::Person;
///
/// let mut person = Person::new("Ahmed", 25, "1234");
/// person.set_secret("5678");
///
/// assert_eq!(person.secret(), "5678");
/// assert_eq!(person.name(), "Ahmed");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    age: i64,
    secret: Secret,
}

impl Person {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a new person.
    ///
    /// No validation takes place: empty strings and zero or negative ages are
    /// stored as given.
    pub fn new(name: impl Into<String>, age: i64, secret: impl Into<Secret>) -> Self {
        Self {
            name: name.into(),
            age,
            secret: secret.into(),
        }
    }

    // =========================================================================
    // Read-only Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn age(&self) -> i64 {
        self.age
    }

    // =========================================================================
    // Guarded Value
    // =========================================================================

    /// Returns the current secret.
    #[inline]
    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }

    /// Replace the secret. The last write wins.
    pub fn set_secret(&mut self, secret: impl Into<Secret>) {
        self.secret = secret.into();
    }

    /// Privileged access for types composed around a `Person`.
    ///
    /// Kept apart from the public getter so composed types do not depend on
    /// the public accessor surface.
    #[inline]
    pub(crate) fn guarded_secret(&self) -> &Secret {
        &self.secret
    }

    /// Returns the secret.
    ///
    /// Despite reading like a display helper, this does **not** combine
    /// `name` and `age`; it mirrors [`Person::secret`]. Callers that want a
    /// human-readable label must build it themselves.
    #[inline]
    pub fn describe(&self) -> &str {
        self.secret.as_str()
    }
}

impl PersonProfile for Person {
    fn name(&self) -> &str {
        Person::name(self)
    }

    fn age(&self) -> i64 {
        Person::age(self)
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersonWireFormat {
    name: String,
    age: i64,
    secret: Secret,
}

impl Serialize for Person {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = PersonWireFormat {
            name: self.name.clone(),
            age: self.age,
            secret: self.secret.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Person {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = PersonWireFormat::deserialize(deserializer)?;
        Ok(Person::new(wire.name, wire.age, wire.secret))
    }
}

// ============================================================================
// Tests
// ============================================================================
