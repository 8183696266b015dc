//! Mock card and filesystem for host tests

use std::string::{String, ToString};
use std::vec::Vec;

use pocket_hal::{CardError, CardHost, Filesystem, FormatOptions};

/// Single directory with fixed entries
pub struct MockFilesystem {
    pub path: String,
    pub entries: Vec<String>,
    pub opened: usize,
    pub visited: usize,
}

impl MockFilesystem {
    pub fn with_dir(path: &str, entries: &[&str]) -> Self {
        Self {
            path: path.to_string(),
            entries: entries.iter().map(|e| e.to_string()).collect(),
            opened: 0,
            visited: 0,
        }
    }
}

impl Filesystem for MockFilesystem {
    fn read_dir(
        &mut self,
        path: &str,
        visit: &mut dyn FnMut(&str) -> bool,
    ) -> Result<(), CardError> {
        if path != self.path {
            return Err(CardError::NotFound);
        }
        self.opened += 1;
        for entry in &self.entries {
            self.visited += 1;
            if !visit(entry.as_str()) {
                break;
            }
        }
        Ok(())
    }
}

/// Card host recording mount state and format calls
pub struct MockCardHost {
    pub mounted: bool,
    pub fail_mount: Option<CardError>,
    pub fail_unmount: Option<CardError>,
    pub fail_format: Option<CardError>,
    pub last_format: Option<FormatOptions>,
    pub mounted_during_format: Option<bool>,
}

impl MockCardHost {
    pub fn new() -> Self {
        Self {
            mounted: false,
            fail_mount: None,
            fail_unmount: None,
            fail_format: None,
            last_format: None,
            mounted_during_format: None,
        }
    }
}

impl CardHost for MockCardHost {
    fn mount(&mut self) -> Result<(), CardError> {
        if let Some(e) = self.fail_mount {
            return Err(e);
        }
        self.mounted = true;
        Ok(())
    }

    fn unmount(&mut self) -> Result<(), CardError> {
        if let Some(e) = self.fail_unmount {
            return Err(e);
        }
        self.mounted = false;
        Ok(())
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn format(&mut self, options: &FormatOptions) -> Result<(), CardError> {
        self.mounted_during_format = Some(self.mounted);
        if let Some(e) = self.fail_format {
            return Err(e);
        }
        self.last_format = Some(*options);
        Ok(())
    }
}
