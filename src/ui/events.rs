//! Event delivery from the host to the watch face

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, channel::Channel};

use crate::{
    peripherals::battery::BatterySample,
    system::{bluetooth::LinkSample, time::ClockSample, DeviceState},
};

use super::{PresentationSink, WatchFace};

/// Events buffered before the host has to wait
pub const EVENT_QUEUE_DEPTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceEvent {
    /// Periodic tick, once per second
    Tick(ClockSample),
    BatteryChanged(BatterySample),
    LinkChanged(LinkSample),
}

/// Queue the host pushes events into
pub type FaceEvents = Channel<CriticalSectionRawMutex, FaceEvent, EVENT_QUEUE_DEPTH>;

/// Deliver events to the watch face one at a time, in arrival order.
///
/// Returns on the first sink error.
pub async fn run<F, D, S>(
    face: &mut F,
    events: &FaceEvents,
    device: &D,
    sink: &mut S,
) -> Result<(), S::Error>
where
    F: WatchFace,
    D: DeviceState,
    S: PresentationSink,
{
    loop {
        let event = events.receive().await;
        trace!("Face event received");
        face.handle(event, device, sink)?;
    }
}
