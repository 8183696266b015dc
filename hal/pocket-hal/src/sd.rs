//! Removable storage card abstractions
//!
//! Split in two: [`CardHost`] covers the card itself (mount, unmount,
//! low-level format) and [`Filesystem`] covers reading the mounted volume.

/// Card and filesystem errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CardError {
    /// No card in the slot or the card did not answer
    NoCard,
    /// Host controller or bus initialisation failed
    Host,
    /// Volume could not be mounted
    Mount,
    /// Volume could not be unmounted
    Unmount,
    /// Partitioning failed
    Partition,
    /// Creating the filesystem failed
    Mkfs,
    /// Directory could not be opened
    NotFound,
}

impl core::fmt::Display for CardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NoCard => write!(f, "no card"),
            Self::Host => write!(f, "card host init failed"),
            Self::Mount => write!(f, "mount failed"),
            Self::Unmount => write!(f, "unmount failed"),
            Self::Partition => write!(f, "partitioning failed"),
            Self::Mkfs => write!(f, "filesystem creation failed"),
            Self::NotFound => write!(f, "directory not found"),
        }
    }
}

/// Filesystem type written by a format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FsType {
    /// FAT32
    #[default]
    Fat32,
    /// exFAT
    ExFat,
}

/// Parameters for a card format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormatOptions {
    /// Filesystem to create
    pub fs_type: FsType,
    /// Share of the card given to the single partition (percent)
    pub partition_percent: u8,
    /// Number of FAT copies
    pub fat_count: u8,
    /// Data area alignment in sectors
    pub align_sectors: u32,
    /// Number of root directory entries
    pub root_entries: u32,
    /// Cluster size in bytes
    pub cluster_size: u32,
}

impl FormatOptions {
    /// Options used for every format: one partition spanning the card,
    /// two FATs, 16 KiB clusters
    pub const fn new(fs_type: FsType) -> Self {
        Self {
            fs_type,
            partition_percent: 100,
            fat_count: 2,
            align_sectors: 16,
            root_entries: 2,
            cluster_size: 16 * 1024,
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new(FsType::default())
    }
}

/// Storage card slot
pub trait CardHost {
    /// Mount the card's volume
    fn mount(&mut self) -> Result<(), CardError>;

    /// Unmount the card's volume
    fn unmount(&mut self) -> Result<(), CardError>;

    /// Check if the volume is mounted
    fn is_mounted(&self) -> bool;

    /// Partition the card and create a fresh filesystem
    ///
    /// The volume must be unmounted.
    fn format(&mut self, options: &FormatOptions) -> Result<(), CardError>;
}

/// Read access to a mounted volume
pub trait Filesystem {
    /// Call `visit` with the name of every entry in the directory at `path`
    ///
    /// Entries are visited in directory order. `visit` returns `false` to
    /// stop the walk early.
    fn read_dir(
        &mut self,
        path: &str,
        visit: &mut dyn FnMut(&str) -> bool,
    ) -> Result<(), CardError>;
}
