use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::EntryType;

/// Immutable snapshot of one entry listed by the store: its name parts and type flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryDescriptor {
    base_name: String,
    extension: String,
    #[serde(rename = "type")]
    entry_type: EntryType,
}

impl EntryDescriptor {
    pub fn new(base_name: impl Into<String>, extension: impl Into<String>, entry_type: EntryType) -> Self {
        Self {
            base_name: base_name.into(),
            extension: extension.into(),
            entry_type,
        }
    }

    pub fn file(base_name: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::new(base_name, extension, EntryType::FILE)
    }

    /// Directories are listed with their whole name as the base name.
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, String::new(), EntryType::DIRECTORY)
    }

    #[inline]
    pub fn base_name(&self) -> &str {
        &self.base_name
    }

    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[inline]
    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    /// `base_name.extension`, or just the base name when there is no extension.
    pub fn full_name(&self) -> String {
        if self.extension.is_empty() {
            return self.base_name.clone();
        }
        let mut name = String::with_capacity(self.base_name.len() + self.extension.len() + 1);
        name.push_str(&self.base_name);
        name.push('.');
        name.push_str(&self.extension);
        name
    }

    /// Splits the descriptor into `(base_name, extension, entry_type)`.
    pub fn into_parts(self) -> (String, String, EntryType) {
        (self.base_name, self.extension, self.entry_type)
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.entry_type.is_directory()
    }

    #[inline]
    pub fn is_file(&self) -> bool {
        self.entry_type.is_file()
    }
}

impl fmt::Display for EntryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.extension.is_empty() {
            write!(f, "{}", self.base_name)
        } else {
            write!(f, "{}.{}", self.base_name, self.extension)
        }
    }
}
