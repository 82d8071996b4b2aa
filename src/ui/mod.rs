//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use crate::{
    peripherals::battery::{ColorTag, PowerState},
    system::{
        time::{ClockSample, TimeText},
        DeviceState,
    },
};

pub mod blink;
pub mod canvas;
pub mod dedsec_watchface;
pub mod events;
pub mod layout;

use blink::BlinkText;
use events::FaceEvent;

/// Everything the screen shows, replaced as a whole on every update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub time: TimeText,
    pub power: PowerState,
    /// Show the Bluetooth icon
    pub link_visible: bool,
    pub blink_on: bool,
}

impl PresentationState {
    pub fn blink_text(&self) -> BlinkText {
        BlinkText::from_bit(self.blink_on)
    }
}

/// Receiver of the presentation, bound to the actual screen
pub trait PresentationSink {
    type Error;

    fn set_time_text(&mut self, hour: &str, minute: &str, date: &str) -> Result<(), Self::Error>;

    /// Width of the battery bar in pixels
    fn set_bar_geometry(&mut self, width: u32) -> Result<(), Self::Error>;

    fn set_color_tag(&mut self, tag: ColorTag) -> Result<(), Self::Error>;

    fn set_battery_indicator_visible(&mut self, visible: bool) -> Result<(), Self::Error>;

    fn set_link_indicator_visible(&mut self, visible: bool) -> Result<(), Self::Error>;

    fn set_blink_text(&mut self, text: BlinkText) -> Result<(), Self::Error>;

    /// Short vibration pulse
    fn trigger_alert(&mut self) -> Result<(), Self::Error>;
}

/// Push every field of `state` to the sink
pub fn present<S>(state: &PresentationState, sink: &mut S) -> Result<(), S::Error>
where
    S: PresentationSink,
{
    sink.set_time_text(
        state.time.hour.as_str(),
        state.time.minute.as_str(),
        state.time.date.as_str(),
    )?;
    sink.set_bar_geometry(state.power.bar_width)?;
    sink.set_color_tag(state.power.color)?;
    sink.set_battery_indicator_visible(state.power.indicator_visible)?;
    sink.set_link_indicator_visible(state.link_visible)?;
    sink.set_blink_text(state.blink_text())
}

pub trait WatchFace {
    /// Show the initial state from the host peeks
    fn start<D, S>(
        &mut self,
        clock: ClockSample,
        device: &D,
        sink: &mut S,
    ) -> Result<(), S::Error>
    where
        D: DeviceState,
        S: PresentationSink;

    /// Update watchface with an event
    fn handle<D, S>(&mut self, event: FaceEvent, device: &D, sink: &mut S) -> Result<(), S::Error>
    where
        D: DeviceState,
        S: PresentationSink;

    /// Last presented state
    fn state(&self) -> &PresentationState;
}
