//! Storage card support for Pocket handhelds
//!
//! Card lifecycle ([`SdCard`]: mount, unmount, format) and the ROM browser's
//! directory listing ([`list_files`]). Both are written against the
//! `pocket-hal` card traits.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

extern crate alloc;

#[macro_use]
mod fmt;

pub mod card;
pub mod error;
pub mod listing;

#[cfg(test)]
mod mocks;

pub use card::SdCard;
pub use error::StorageError;
pub use listing::{compare_ignore_case, has_extension, list_files, MAX_FILES};
