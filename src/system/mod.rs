use crate::{peripherals::battery::BatterySample, system::bluetooth::LinkSample};

pub mod bluetooth;
pub mod config;
pub mod time;

/// Synchronous queries for state the host otherwise pushes as events
pub trait DeviceState {
    fn battery(&self) -> BatterySample;

    fn link(&self) -> LinkSample;
}
