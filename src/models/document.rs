//! Wire models for folder listings.
//!
//! Every listing endpoint returns a JSON array of documents. A document is
//! either a folder or a file, discriminated by the `type` field: the literal
//! `"folder"` tags a folder, anything else is a file's extension/kind.

use serde::{Deserialize, Serialize};

/// The `type` value that tags a folder in a listing.
pub const FOLDER_KIND: &str = "folder";

// =============================================================================
// Document
// =============================================================================

/// One entry of a folder listing (file or subfolder).
///
/// All fields arrive as strings, numeric-looking sizes and dates included.
/// Missing fields deserialize to empty strings so sorting treats them as
/// empty rather than failing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Document {
    /// Identity, unique within a folder's children.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// `"folder"` for folders; the file extension/kind otherwise.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Date the document was added (ISO-like string).
    #[serde(rename = "dateAdded", default)]
    pub date_added: String,
    /// Size as reported by the backend.
    #[serde(default)]
    pub size: String,
    /// Directory path used to build the download URL. Files only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Document {
    /// Whether this entry is a subfolder (as opposed to a file).
    pub fn is_folder(&self) -> bool {
        self.kind == FOLDER_KIND
    }

    /// Build the download URL for a file: `{origin}{path}/{id}.{kind}`.
    ///
    /// Returns `None` for entries without a `path` (folders).
    pub fn download_url(&self, origin: &str) -> Option<String> {
        let path = self.path.as_deref()?;
        Some(format!("{}{}/{}.{}", origin, path, self.id, self.kind))
    }
}

// =============================================================================
// Opened folders
// =============================================================================

/// Identity of a folder that has been opened (one level of the path).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FolderRef {
    pub id: String,
    pub name: String,
}

impl FolderRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One level of the navigation stack: a folder identity paired with its
/// already-fetched children. `children` order is re-sorted in place whenever
/// the sort option changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenedFolder {
    pub parent: FolderRef,
    pub children: Vec<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_deserialization() {
        let json = r#"[
            { "id": "f1", "name": "Pics", "type": "folder", "dateAdded": "2021-01-01", "size": "0" },
            { "id": "d7", "name": "Notes", "type": "txt", "dateAdded": "2021-02-03", "size": "1204", "path": "/files" }
        ]"#;
        let docs: Vec<Document> = serde_json::from_str(json).unwrap();

        assert_eq!(docs.len(), 2);
        assert!(docs[0].is_folder());
        assert_eq!(docs[0].date_added, "2021-01-01");
        assert_eq!(docs[0].path, None);
        assert!(!docs[1].is_folder());
        assert_eq!(docs[1].kind, "txt");
        assert_eq!(docs[1].path.as_deref(), Some("/files"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let doc: Document = serde_json::from_str(r#"{ "id": "x" }"#).unwrap();
        assert_eq!(doc.name, "");
        assert_eq!(doc.kind, "");
        assert_eq!(doc.date_added, "");
        assert_eq!(doc.size, "");
        assert!(!doc.is_folder());
    }

    #[test]
    fn test_download_url() {
        let file = Document {
            id: "d7".to_string(),
            name: "Notes".to_string(),
            kind: "txt".to_string(),
            path: Some("/files".to_string()),
            ..Document::default()
        };
        assert_eq!(
            file.download_url("http://localhost:3000").as_deref(),
            Some("http://localhost:3000/files/d7.txt")
        );

        let folder = Document {
            id: "f1".to_string(),
            kind: FOLDER_KIND.to_string(),
            ..Document::default()
        };
        assert_eq!(folder.download_url("http://localhost:3000"), None);
    }
}
