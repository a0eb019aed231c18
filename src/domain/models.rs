use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One of the three inputs on the form.
///
/// The declaration order is the render order and the focus order, and it
/// is also the iteration order of [`ErrorMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Age,
    Email,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Age, Field::Email];

    /// Stable identifier used for the input name and as the error map key.
    pub fn id(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Age => "age",
            Field::Email => "email",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Age => "Age",
            Field::Email => "Email",
        }
    }

    /// The field after this one, or `None` for the last field.
    pub fn next(self) -> Option<Field> {
        match self {
            Field::Name => Some(Field::Age),
            Field::Age => Some(Field::Email),
            Field::Email => None,
        }
    }

    /// The field before this one, or `None` for the first field.
    pub fn previous(self) -> Option<Field> {
        match self {
            Field::Name => None,
            Field::Age => Some(Field::Name),
            Field::Email => Some(Field::Age),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// A form entry. Used both for the draft being edited and for accepted
/// submissions.
///
/// Age is kept as the text the user typed; it is only interpreted as a
/// number while validating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub age: String,
    pub email: String,
}

impl Record {
    pub fn new(name: impl Into<String>, age: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age: age.into(),
            email: email.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Age => &self.age,
            Field::Email => &self.email,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Age => &mut self.age,
            Field::Email => &mut self.email,
        }
    }

    /// Replaces a single field, leaving the others as they are.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_empty())
    }
}

/// Per-field validation messages from the most recent submit attempt.
///
/// Holds at most one message per field. A field that passed validation is
/// simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<Field, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the message for `field`, replacing any previous one.
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, message)| (*field, message.as_str()))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.entries.keys().copied()
    }

    /// The first failing field in render order.
    pub fn first_field(&self) -> Option<Field> {
        self.entries.keys().next().copied()
    }
}

impl Serialize for ErrorMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, message) in &self.entries {
            map.serialize_entry(field.id(), message)?;
        }
        map.end()
    }
}
