use crate::file_source::content_type::content_type_for;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An image (or would-be image) chosen by the user, held fully in memory.
#[derive(Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    /// Builds a file from its display name and contents, deriving the declared
    /// content type from the name and, failing that, from the leading bytes.
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        let name = name.into();
        let bytes = bytes.into();
        let content_type = content_type_for(&name, &bytes);
        Self {
            name,
            content_type,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("content_type", &self.content_type)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .finish()
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Where selected files come from: a native dialog and the filesystem.
pub trait FileSource: Send + Sync {
    /// Opens a picker. `Ok(None)` means the user cancelled.
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>>;

    fn load(&self, path: &Path) -> Result<SelectedFile, Box<dyn std::error::Error + Send + Sync>>;
}
