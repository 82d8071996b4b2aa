//! Battery status and the power bar
//!
//! Voltage conversion based upon https://github.com/dbrgn/pinetime-rtic/blob/master/pinetime-rtic/src/battery.rs
//! and https://wiki.pine64.org/wiki/PineTime.

use embedded_graphics::pixelcolor::Rgb565;

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Charge above 100 percent
    OutOfBounds,
    /// ADC reading outside the 12 bit range
    InvalidMeasurement,
}

/// Battery state as reported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatterySample {
    /// Charge in percent (0–100)
    pub percent: u8,
    /// Charger connected
    pub charging: bool,
}

impl BatterySample {
    /// Create sample, rejecting charge above 100 percent
    pub fn new(percent: u8, charging: bool) -> Result<Self, Error> {
        match percent {
            0..=100 => Ok(Self { percent, charging }),
            _ => Err(Error::OutOfBounds),
        }
    }

    /// Estimate charge from the battery voltage in millivolts.
    ///
    /// Uses fixed data points and linear interpolation in between.
    pub fn from_millivolts(voltage: u16, charging: bool) -> Self {
        let percent = (match voltage {
            0..=3449 => 0,
            3450..=3699 => (voltage - 3450) / 5,
            3700..=4199 => 50 + (voltage - 3700) / 10,
            _ => 100,
        }) as u8;

        Self { percent, charging }
    }

    /// Estimate charge from a raw 12 bit SAADC reading
    pub fn from_adc(raw_measurement: i16, charging: bool) -> Result<Self, Error> {
        match raw_measurement {
            0..=4095 => {
                // Use u32 during calculation to prevent overflow.
                // 2 * 1000 for mV over (2 ^ 12 / 3.3V reference).
                let voltage = (raw_measurement as u32 * 2000 / 1241) as u16;
                Ok(Self::from_millivolts(voltage, charging))
            }
            _ => Err(Error::InvalidMeasurement),
        }
    }
}

/// Battery bar coloring policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorPolicy {
    /// Critical up to 25%, low up to 50%, normal above
    #[default]
    ThreeTier,
    /// Critical up to 25%, charging while plugged in, normal otherwise
    ChargeAware,
}

/// Battery bar state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorTag {
    Critical,
    Low,
    Charging,
    Normal,
}

impl ColorTag {
    /// Color of the bar itself
    pub const fn bar_color(self) -> Rgb565 {
        match self {
            // Dark candy apple red
            ColorTag::Critical => Rgb565::new(21, 0, 0),
            // Chrome yellow
            ColorTag::Low => Rgb565::new(31, 42, 0),
            // Islamic green
            ColorTag::Charging => Rgb565::new(0, 42, 0),
            // Cyan
            ColorTag::Normal => Rgb565::new(0, 63, 31),
        }
    }

    /// Darker shade for the band behind the bar
    pub const fn background_color(self) -> Rgb565 {
        match self {
            // Bulgarian rose
            ColorTag::Critical => Rgb565::new(10, 0, 0),
            // Windsor tan
            ColorTag::Low => Rgb565::new(21, 21, 0),
            // Dark green
            ColorTag::Charging => Rgb565::new(0, 21, 0),
            // Tiffany blue
            ColorTag::Normal => Rgb565::new(0, 42, 21),
        }
    }
}

/// Mapped battery presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerState {
    /// Bar width in pixels
    pub bar_width: u32,
    pub color: ColorTag,
    /// Show the charging icon
    pub indicator_visible: bool,
}

impl Default for PowerState {
    fn default() -> Self {
        Self {
            bar_width: 0,
            color: ColorTag::Normal,
            indicator_visible: false,
        }
    }
}

/// Maps battery samples onto the power bar
#[derive(Debug, Clone, Copy)]
pub struct PowerStateMapper {
    policy: ColorPolicy,
    /// Width of a full bar in pixels
    bar_max_width: u32,
}

impl PowerStateMapper {
    pub fn new(policy: ColorPolicy, bar_max_width: u32) -> Self {
        Self {
            policy,
            bar_max_width,
        }
    }

    pub fn bar_max_width(&self) -> u32 {
        self.bar_max_width
    }

    /// Map a sample, reading charge above 100 percent as full
    pub fn map(&self, sample: BatterySample) -> PowerState {
        let sample = BatterySample {
            percent: sample.percent.min(100),
            ..sample
        };
        let state = PowerState {
            bar_width: self.bar_width(sample.percent),
            color: self.color(sample),
            // Hide the icon once charging completes, even while plugged in
            indicator_visible: sample.charging && sample.percent != 100,
        };

        trace!(
            "Battery {}% mapped to {} px",
            sample.percent,
            state.bar_width
        );
        state
    }

    /// Bar width proportional to the charge, rounded half up
    pub fn bar_width(&self, percent: u8) -> u32 {
        let percent = percent.min(100) as u64;
        let width = (self.bar_max_width as u64 * percent + 50) / 100;
        (width as u32).min(self.bar_max_width)
    }

    pub fn color(&self, sample: BatterySample) -> ColorTag {
        match (self.policy, sample.percent) {
            (_, 0..=25) => ColorTag::Critical,
            (ColorPolicy::ThreeTier, 26..=50) => ColorTag::Low,
            (ColorPolicy::ThreeTier, _) => ColorTag::Normal,
            (ColorPolicy::ChargeAware, _) if sample.charging => ColorTag::Charging,
            (ColorPolicy::ChargeAware, _) => ColorTag::Normal,
        }
    }
}
