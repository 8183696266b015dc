//! Storage errors

use pocket_hal::CardError;

/// Storage layer errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Extension filter is empty
    InvalidExtension,
    /// Directory could not be opened
    OpenDir(CardError),
    /// Out of memory while collecting names
    Alloc,
    /// Mount failed
    Mount(CardError),
    /// Unmount failed
    Unmount(CardError),
    /// Partitioning or filesystem creation failed
    Format(CardError),
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidExtension => write!(f, "extension must not be empty"),
            Self::OpenDir(e) => write!(f, "opendir failed: {}", e),
            Self::Alloc => write!(f, "out of memory"),
            Self::Mount(e) => write!(f, "mount failed: {}", e),
            Self::Unmount(e) => write!(f, "unmount failed: {}", e),
            Self::Format(e) => write!(f, "format failed: {}", e),
        }
    }
}
