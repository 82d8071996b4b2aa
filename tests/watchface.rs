use core::convert::Infallible;
use std::cell::Cell;

use chrono::NaiveDate;
use dedsec_face::{
    run, BatterySample, BlinkText, ClockSample, ColorPolicy, ColorTag, DedsecWatchface,
    DeviceState, FaceConfig, FaceEvent, FaceEvents, LinkSample, PresentationSink, WatchFace,
};
use embassy_futures::{block_on, select::select};

/// Latest values seen by the screen
#[derive(Default)]
struct Screen {
    hour: String,
    minute: String,
    date: String,
    bar_width: u32,
    color: Option<ColorTag>,
    battery_icon: bool,
    link_icon: bool,
    blink: Option<BlinkText>,
    alerts: usize,
    updates: usize,
}

impl PresentationSink for Screen {
    type Error = Infallible;

    fn set_time_text(&mut self, hour: &str, minute: &str, date: &str) -> Result<(), Infallible> {
        self.hour = hour.into();
        self.minute = minute.into();
        self.date = date.into();
        self.updates += 1;
        Ok(())
    }

    fn set_bar_geometry(&mut self, width: u32) -> Result<(), Infallible> {
        self.bar_width = width;
        Ok(())
    }

    fn set_color_tag(&mut self, tag: ColorTag) -> Result<(), Infallible> {
        self.color = Some(tag);
        Ok(())
    }

    fn set_battery_indicator_visible(&mut self, visible: bool) -> Result<(), Infallible> {
        self.battery_icon = visible;
        Ok(())
    }

    fn set_link_indicator_visible(&mut self, visible: bool) -> Result<(), Infallible> {
        self.link_icon = visible;
        Ok(())
    }

    fn set_blink_text(&mut self, text: BlinkText) -> Result<(), Infallible> {
        self.blink = Some(text);
        Ok(())
    }

    fn trigger_alert(&mut self) -> Result<(), Infallible> {
        self.alerts += 1;
        Ok(())
    }
}

/// Host services answering peeks
struct Device {
    battery: Cell<BatterySample>,
    connected: Cell<bool>,
}

impl Device {
    fn new(percent: u8, charging: bool, connected: bool) -> Self {
        Self {
            battery: Cell::new(BatterySample::new(percent, charging).unwrap()),
            connected: Cell::new(connected),
        }
    }
}

impl DeviceState for Device {
    fn battery(&self) -> BatterySample {
        self.battery.get()
    }

    fn link(&self) -> LinkSample {
        LinkSample::new(self.connected.get())
    }
}

fn clock(h: u32, m: u32, s: u32, is_24h: bool) -> ClockSample {
    let time = NaiveDate::from_ymd_opt(2024, 3, 5)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap();
    ClockSample::new(time, is_24h)
}

#[test]
fn battery_event_then_tick() {
    let config = FaceConfig::round();
    let mut face = DedsecWatchface::new(config);
    let device = Device::new(90, false, true);
    let mut screen = Screen::default();

    face.start(clock(13, 4, 59, true), &device, &mut screen)
        .unwrap();
    assert_eq!(screen.blink, Some(BlinkText::Plain));

    let sample = BatterySample::new(20, true).unwrap();
    face.handle(FaceEvent::BatteryChanged(sample), &device, &mut screen)
        .unwrap();
    face.handle(FaceEvent::Tick(clock(13, 5, 0, true)), &device, &mut screen)
        .unwrap();

    // 20% of the 153 px band
    assert_eq!(screen.bar_width, 31);
    assert_eq!(screen.color, Some(ColorTag::Critical));
    assert!(screen.battery_icon);
    assert_eq!(screen.hour, "13");
    assert_eq!(screen.minute, "05");
    assert_eq!(screen.date, "Tue_05_03_2024");
    assert_eq!(screen.blink, Some(BlinkText::Cursor));
    assert_eq!(screen.alerts, 0);
}

#[test]
fn twelve_hour_clock() {
    let mut face = DedsecWatchface::new(FaceConfig::rectangular());
    let device = Device::new(90, false, true);
    let mut screen = Screen::default();

    face.start(clock(13, 5, 0, false), &device, &mut screen)
        .unwrap();
    assert_eq!(screen.hour, "01");
}

#[test]
fn charge_aware_policy_end_to_end() {
    let config = FaceConfig::round().with_color_policy(ColorPolicy::ChargeAware);
    let mut face = DedsecWatchface::new(config);
    let device = Device::new(26, false, true);
    let mut screen = Screen::default();

    face.start(clock(8, 0, 0, true), &device, &mut screen)
        .unwrap();
    assert_eq!(screen.color, Some(ColorTag::Normal));

    let full = BatterySample::new(100, true).unwrap();
    face.handle(FaceEvent::BatteryChanged(full), &device, &mut screen)
        .unwrap();
    assert_eq!(screen.color, Some(ColorTag::Charging));
    assert_eq!(screen.bar_width, 153);
    assert!(!screen.battery_icon);
}

#[test]
fn queued_events_are_delivered_in_order() {
    let events = FaceEvents::new();
    let device = Device::new(60, false, true);
    let mut face = DedsecWatchface::new(FaceConfig::rectangular());
    let mut screen = Screen::default();

    face.start(clock(23, 59, 58, true), &device, &mut screen)
        .unwrap();

    events.try_send(FaceEvent::LinkChanged(LinkSample::new(false))).unwrap();
    events.try_send(FaceEvent::Tick(clock(23, 59, 59, true))).unwrap();
    events.try_send(FaceEvent::LinkChanged(LinkSample::new(false))).unwrap();
    events.try_send(FaceEvent::Tick(clock(0, 0, 0, true))).unwrap();

    // The loop drains the queue on its first poll, then waits
    block_on(select(
        run(&mut face, &events, &device, &mut screen),
        async {},
    ));

    assert_eq!(screen.alerts, 1);
    assert!(!screen.link_icon);
    assert_eq!(screen.hour, "00");
    assert_eq!(screen.minute, "00");
    // Start plus four events
    assert_eq!(screen.updates, 5);
    // Two ticks bring the blink back to its initial variant
    assert_eq!(screen.blink, Some(BlinkText::Plain));
    assert!(!face.state().blink_on);
}

#[test]
fn every_tick_refresh_follows_battery_peek() {
    let device = Device::new(60, false, true);
    let mut face = DedsecWatchface::new(FaceConfig::rectangular());
    let mut screen = Screen::default();

    face.start(clock(10, 0, 0, true), &device, &mut screen)
        .unwrap();
    assert_eq!(screen.color, Some(ColorTag::Normal));

    device.battery.set(BatterySample::new(45, false).unwrap());
    face.handle(FaceEvent::Tick(clock(10, 0, 1, true)), &device, &mut screen)
        .unwrap();
    assert_eq!(screen.color, Some(ColorTag::Low));
    assert_eq!(screen.bar_width, 55);
}

#[test]
fn disconnected_at_startup_does_not_alert() {
    let device = Device::new(60, false, false);
    let mut face = DedsecWatchface::new(FaceConfig::round());
    let mut screen = Screen::default();

    face.start(clock(10, 0, 0, true), &device, &mut screen)
        .unwrap();
    face.handle(FaceEvent::LinkChanged(LinkSample::new(false)), &device, &mut screen)
        .unwrap();
    assert_eq!(screen.alerts, 0);
    assert!(!screen.link_icon);

    device.connected.set(true);
    face.handle(FaceEvent::LinkChanged(device.link()), &device, &mut screen)
        .unwrap();
    assert!(screen.link_icon);
    assert_eq!(screen.alerts, 0);
}
