use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Record identifier assigned by the backend.
///
/// json-server 0.x hands out integers while 1.x generates short strings such
/// as `"a3f1"`, so both shapes are accepted. Integer ids are written back as
/// JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseId(String);

impl CourseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value, when the id is a canonical integer.
    pub fn as_i64(&self) -> Option<i64> {
        self.0
            .parse::<i64>()
            .ok()
            .filter(|value| value.to_string() == self.0)
    }
}

impl From<i64> for CourseId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CourseId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for CourseId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for CourseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_i64() {
            Some(value) => serializer.serialize_i64(value),
            None => serializer.serialize_str(&self.0),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for CourseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawId::deserialize(deserializer)? {
            RawId::Number(value) => Self::from(value),
            RawId::Text(value) => Self(value),
        })
    }
}

/// Categories offered by the course form.
pub const COURSE_CATEGORIES: &[&str] = &["Đại cương"];

pub fn is_known_category(category: &str) -> bool {
    COURSE_CATEGORIES.contains(&category)
}

/// A catalog record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub credit: f64,
    pub category: String,
    pub teacher: String,
}

impl Course {
    pub fn to_input(&self) -> CourseInput {
        CourseInput {
            name: self.name.clone(),
            credit: self.credit,
            category: self.category.clone(),
            teacher: self.teacher.clone(),
        }
    }
}

/// Form payload for creating or replacing a course.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CourseInput {
    pub name: String,
    pub credit: f64,
    pub category: String,
    pub teacher: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}
