use crate::file_source::interface::{display_name, FileSource, SelectedFile};
use crate::library::logger::interface::Logger;
use std::collections::{HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory file system with a scripted picker.
pub struct FileSourceFake {
    logger: Arc<dyn Logger + Send + Sync>,
    files: Mutex<HashMap<PathBuf, Vec<u8>>>,
    picks: Mutex<VecDeque<Option<PathBuf>>>,
}

impl FileSourceFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("file_source").with_namespace("fake"),
            files: Mutex::new(HashMap::new()),
            picks: Mutex::new(VecDeque::new()),
        }
    }

    pub fn insert(&self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.into(), bytes);
        }
    }

    /// Queues what the next `pick` returns. `None` simulates a cancelled dialog.
    pub fn queue_pick(&self, path: Option<PathBuf>) {
        if let Ok(mut picks) = self.picks.lock() {
            picks.push_back(path);
        }
    }
}

impl FileSource for FileSourceFake {
    fn pick(&self) -> Result<Option<PathBuf>, Box<dyn std::error::Error + Send + Sync>> {
        let picked = self
            .picks
            .lock()
            .map_err(|e| e.to_string())?
            .pop_front()
            .flatten();
        self.logger.info(&format!("FileSourceFake::pick() -> {:?}", picked))?;
        Ok(picked)
    }

    fn load(&self, path: &Path) -> Result<SelectedFile, Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("FileSourceFake::load({})", path.display()))?;
        let files = self.files.lock().map_err(|e| e.to_string())?;
        match files.get(path) {
            Some(bytes) => Ok(SelectedFile::new(display_name(path), bytes.clone())),
            None => Err(format!("No such file: {}", path.display()).into()),
        }
    }
}
