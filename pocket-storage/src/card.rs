//! Storage card lifecycle

use pocket_hal::{CardHost, FormatOptions, FsType};

use crate::error::StorageError;

/// Storage card slot
pub struct SdCard<H> {
    host: H,
}

impl<H: CardHost> SdCard<H> {
    /// Wrap a card host; nothing is mounted yet
    pub fn new(host: H) -> Self {
        Self { host }
    }

    /// Mount the card
    pub fn mount(&mut self) -> Result<(), StorageError> {
        self.host.mount().map_err(|e| {
            error!("card mount failed: {}", e);
            StorageError::Mount(e)
        })?;
        info!("card mounted");
        Ok(())
    }

    /// Unmount the card
    pub fn unmount(&mut self) -> Result<(), StorageError> {
        self.host.unmount().map_err(|e| {
            error!("card unmount failed: {}", e);
            StorageError::Unmount(e)
        })
    }

    /// Check if the card is mounted
    pub fn is_mounted(&self) -> bool {
        self.host.is_mounted()
    }

    /// Repartition the card and create a fresh filesystem
    ///
    /// A mounted card is unmounted first; an unmount failure is logged and
    /// the format goes ahead. The card is left unmounted.
    pub fn format(&mut self, fs_type: FsType) -> Result<(), StorageError> {
        if self.host.is_mounted() {
            // error already logged, formatting does not need a clean unmount
            let _ = self.unmount();
        }

        let options = FormatOptions::new(fs_type);
        info!("formatting card");
        self.host.format(&options).map_err(|e| {
            error!("card format failed: {}", e);
            StorageError::Format(e)
        })?;
        info!("card formatted");
        Ok(())
    }

    /// Card host
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Card host, mutably
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
