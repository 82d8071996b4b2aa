//! DedSec watch face
//!
//! Maps the device state onto what the watch face shows: the time and
//! date, a battery bar colored by charge level, the Bluetooth link and
//! charging icons, and a blinking slogan.
//!
//! The host delivers a tick every second plus battery and link change
//! events, either directly to [`DedsecWatchface`] or through the
//! [`FaceEvents`] queue drained by [`run`]. Every update replaces the
//! whole [`PresentationState`] and pushes it to a [`PresentationSink`].
//!
//! # Crate Features
//!
//! - **`defmt`**: log through [`defmt`](https://docs.rs/defmt). Needs a
//!   global logger such as `defmt-rtt` in the firmware.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod peripherals;
pub mod system;
pub mod ui;

pub use peripherals::battery::{BatterySample, ColorPolicy, ColorTag, PowerState, PowerStateMapper};
pub use system::{
    bluetooth::{LinkIndicator, LinkSample, LinkState},
    config::{BatteryRefresh, FaceConfig},
    time::{ClockSample, TimeFormatter, TimeText},
    DeviceState,
};
pub use ui::{
    blink::{BlinkText, BlinkToggle},
    canvas::{AlertSignal, CanvasSink, Palette},
    dedsec_watchface::DedsecWatchface,
    events::{run, FaceEvent, FaceEvents},
    layout::{DisplayShape, Layout},
    present, PresentationSink, PresentationState, WatchFace,
};
