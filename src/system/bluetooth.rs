//! Bluetooth link indicator

/// Connection state reported by the host's Bluetooth service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkSample {
    pub connected: bool,
}

impl LinkSample {
    pub fn new(connected: bool) -> Self {
        Self { connected }
    }
}

/// Result of mapping a link sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkState {
    /// Show the link icon
    pub visible: bool,
    /// Pulse the vibration motor once
    pub alert: bool,
}

/// Tracks the link state to raise an alert when the phone disconnects
#[derive(Debug, Default)]
pub struct LinkIndicator {
    /// Last known connection state, `None` before the first sample
    connected: Option<bool>,
}

impl LinkIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the startup state. Never alerts.
    pub fn peek(&mut self, sample: LinkSample) -> bool {
        self.connected = Some(sample.connected);
        sample.connected
    }

    /// Map a connection change event.
    ///
    /// The alert fires once when the link goes from connected to
    /// disconnected and stays quiet while it remains down.
    pub fn map(&mut self, sample: LinkSample) -> LinkState {
        let alert = self.connected == Some(true) && !sample.connected;
        self.connected = Some(sample.connected);

        if alert {
            debug!("Bluetooth link lost");
        }

        LinkState {
            visible: sample.connected,
            alert,
        }
    }
}
