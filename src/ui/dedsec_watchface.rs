//! DedSec watchface
//!
//! Owns the presented state and the little state carried between updates:
//! the blink bit and the last Bluetooth link state.

use crate::{
    peripherals::battery::{BatterySample, PowerStateMapper},
    system::{
        bluetooth::{LinkIndicator, LinkSample},
        config::{BatteryRefresh, FaceConfig},
        time::{ClockSample, TimeFormatter},
        DeviceState,
    },
};

use super::{
    blink::BlinkToggle, events::FaceEvent, layout::Layout, present, PresentationSink,
    PresentationState, WatchFace,
};

pub struct DedsecWatchface {
    config: FaceConfig,
    layout: Layout,
    mapper: PowerStateMapper,
    blink: BlinkToggle,
    link: LinkIndicator,
    /// Last presented state
    state: PresentationState,
}

impl DedsecWatchface {
    /// Create new watchface
    pub fn new(config: FaceConfig) -> Self {
        let layout = Layout::new(config.shape, config.size);
        let mapper = PowerStateMapper::new(config.color_policy, layout.bar_max_width());

        Self {
            config,
            layout,
            mapper,
            blink: BlinkToggle::new(),
            link: LinkIndicator::new(),
            state: PresentationState::default(),
        }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Periodic tick: time text, blink and optionally the battery bar
    pub fn tick<D, S>(&mut self, clock: ClockSample, device: &D, sink: &mut S) -> Result<(), S::Error>
    where
        D: DeviceState,
        S: PresentationSink,
    {
        let mut next = self.state;
        next.time = TimeFormatter::format(&clock);
        next.blink_on = self.blink.advance();
        if self.config.battery_refresh == BatteryRefresh::EveryTick {
            next.power = self.mapper.map(device.battery());
        }

        self.commit(next, sink)
    }

    /// Battery state change event
    pub fn battery_changed<S>(&mut self, sample: BatterySample, sink: &mut S) -> Result<(), S::Error>
    where
        S: PresentationSink,
    {
        info!(
            "Battery status: {} ({})",
            sample.percent,
            if sample.charging {
                "charging"
            } else {
                "discharging"
            }
        );

        let mut next = self.state;
        next.power = self.mapper.map(sample);

        self.commit(next, sink)
    }

    /// Bluetooth connection change event
    pub fn link_changed<S>(&mut self, sample: LinkSample, sink: &mut S) -> Result<(), S::Error>
    where
        S: PresentationSink,
    {
        info!("Bluetooth connected: {}", sample.connected);

        let link = self.link.map(sample);
        let mut next = self.state;
        next.link_visible = link.visible;

        // Alert even if drawing failed, the transition is already recorded
        let presented = self.commit(next, sink);
        if link.alert {
            sink.trigger_alert()?;
        }
        presented
    }

    /// Replace the state and push it to the sink
    fn commit<S>(&mut self, next: PresentationState, sink: &mut S) -> Result<(), S::Error>
    where
        S: PresentationSink,
    {
        self.state = next;
        present(&self.state, sink)
    }
}

impl WatchFace for DedsecWatchface {
    fn start<D, S>(&mut self, clock: ClockSample, device: &D, sink: &mut S) -> Result<(), S::Error>
    where
        D: DeviceState,
        S: PresentationSink,
    {
        let next = PresentationState {
            time: TimeFormatter::format(&clock),
            power: self.mapper.map(device.battery()),
            link_visible: self.link.peek(device.link()),
            blink_on: self.blink.value(),
        };
        debug!("Watchface started");

        self.commit(next, sink)
    }

    fn handle<D, S>(&mut self, event: FaceEvent, device: &D, sink: &mut S) -> Result<(), S::Error>
    where
        D: DeviceState,
        S: PresentationSink,
    {
        match event {
            FaceEvent::Tick(clock) => self.tick(clock, device, sink),
            FaceEvent::BatteryChanged(sample) => self.battery_changed(sample, sink),
            FaceEvent::LinkChanged(sample) => self.link_changed(sample, sink),
        }
    }

    fn state(&self) -> &PresentationState {
        &self.state
    }
}
