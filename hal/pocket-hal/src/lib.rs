//! Pocket Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits implemented by the
//! board support code of each handheld variant. The display pipeline, the
//! input poller and the storage layer are written against these traits only.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │  pocket-display   pocket-input   pocket-storage      │
//! └──────────────────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌──────────────────────────────────────────────────────┐
//! │  pocket-hal (this crate - traits)                    │
//! └──────────────────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  SPI panel    │       │  DSI panel +  │
//! │  boards       │       │  accelerator  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::ControlPin`], [`gpio::InputPin`] - Digital I/O
//! - [`lcd::LcdPanel`], [`lcd::IoPanel`], [`lcd::DpiPanel`] - Panel transfer channels
//! - [`lcd::IoTransferDone`], [`lcd::DpiTransferDone`] - Completion callback shapes
//! - [`scaler::Scaler`] - Hardware image scaling accelerator
//! - [`adc::AnalogInput`] - One-shot ADC channels
//! - [`i2c::I2cBus`] - I2C bus operations
//! - [`sd::CardHost`], [`sd::Filesystem`] - Removable storage card

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod lcd;
pub mod scaler;
pub mod sd;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use gpio::{ControlPin, InputPin, OutputPin};
pub use i2c::I2cBus;
pub use lcd::{
    DpiPanel, DpiTransferDone, DpiTransferEvent, IoPanel, IoTransferDone, IoTransferEvent,
    LcdError, LcdPanel, PanelRegion,
};
pub use scaler::{ScaleRequest, Scaler, ScalerError};
pub use sd::{CardError, CardHost, Filesystem, FormatOptions, FsType};
