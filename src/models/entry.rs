//! Virtual filesystem records.
//!
//! The file tree is a flat list of [`Entry`] values linked by parent ids.
//! Nothing here owns children; hierarchy views are derived on demand by
//! [`crate::core::tree`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque identifier of an entry, unique within a session.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl PartialEq<&str> for EntryId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Discriminant of an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

impl EntryKind {
    /// Prefix for generated ids (`file-3`, `folder-7`).
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Folder => "folder",
        }
    }
}

/// Variant-specific payload of an entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EntryData {
    File {
        /// Extension with leading dot, kept in step with the name.
        extension: String,
        content: String,
    },
    Folder {
        #[serde(rename = "isOpen")]
        is_open: bool,
    },
}

/// A file or folder in the virtual filesystem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub parent_id: Option<EntryId>,
    #[serde(flatten)]
    pub data: EntryData,
}

impl Entry {
    pub fn file(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        parent_id: Option<EntryId>,
        extension: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
            data: EntryData::File {
                extension: extension.into(),
                content: content.into(),
            },
        }
    }

    pub fn folder(
        id: impl Into<EntryId>,
        name: impl Into<String>,
        parent_id: Option<EntryId>,
        is_open: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id,
            data: EntryData::Folder { is_open },
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self.data {
            EntryData::File { .. } => EntryKind::File,
            EntryData::Folder { .. } => EntryKind::Folder,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self.data, EntryData::File { .. })
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.data, EntryData::Folder { .. })
    }

    /// Whether a folder is expanded. Always false for files.
    pub fn is_open(&self) -> bool {
        matches!(self.data, EntryData::Folder { is_open: true })
    }

    /// File content (files only).
    pub fn content(&self) -> Option<&str> {
        match &self.data {
            EntryData::File { content, .. } => Some(content),
            EntryData::Folder { .. } => None,
        }
    }

    /// File extension with leading dot (files only).
    pub fn extension(&self) -> Option<&str> {
        match &self.data {
            EntryData::File { extension, .. } => Some(extension),
            EntryData::Folder { .. } => None,
        }
    }

    pub fn is_child_of(&self, parent: Option<&EntryId>) -> bool {
        self.parent_id.as_ref() == parent
    }
}

/// Split a file name on its last dot into `(stem, extension)`.
///
/// The extension keeps its leading dot. Names without a dot have no extension.
pub fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(idx) => (&name[..idx], Some(&name[idx..])),
        None => (name, None),
    }
}
