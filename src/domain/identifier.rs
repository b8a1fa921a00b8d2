use std::fmt;

use super::AppError;

/// A user-supplied project, plugin, or service name.
///
/// The raw form is used verbatim as a path segment and in generated text.
/// No path sanitization is applied; only the empty string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: &str) -> Result<Self, AppError> {
        if raw.is_empty() {
            return Err(AppError::EmptyIdentifier);
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First character upper-cased, remainder unchanged (`myThing` -> `MyThing`).
    pub fn capitalized(&self) -> String {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
