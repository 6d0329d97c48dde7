use crate::file_source::interface::{display_name, FileSource, SelectedFile};
use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff", "ico", "avif",
];

/// Native file dialog plus plain filesystem reads.
pub struct FileSourceNative {
    logger: Arc<dyn Logger + Send + Sync>,
    title: String,
}

impl FileSourceNative {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_source").with_namespace("native"),
            title: "Select an image".to_string(),
        }
    }
}

impl FileSource for FileSourceNative {
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("Opening file dialog...")?;

        // The "All files" filter keeps non-images selectable so they hit the
        // same rejection path as a drop would.
        let picked = rfd::FileDialog::new()
            .set_title(&self.title)
            .add_filter("Images", IMAGE_EXTENSIONS)
            .add_filter("All files", &["*"])
            .pick_file();

        match &picked {
            Some(path) => self.logger.info(&format!("Picked {}", path.display()))?,
            None => self.logger.info("File dialog cancelled")?,
        }

        Ok(picked)
    }

    fn load(&self, path: &Path) -> Result<SelectedFile, Box<dyn std::error::Error + Send + Sync>> {
        let bytes = std::fs::read(path)?;
        let file = SelectedFile::new(display_name(path), bytes);
        self.logger.info(&format!("Loaded {:?}", file))?;
        Ok(file)
    }
}
