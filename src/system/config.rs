//! Watch face configuration

use embedded_graphics::geometry::Size;

use crate::{peripherals::battery::ColorPolicy, ui::layout::DisplayShape};

/// When the battery bar is recomputed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryRefresh {
    /// Only on battery state change events
    #[default]
    OnEvent,
    /// Also on every tick, from a fresh battery peek
    EveryTick,
}

/// Watch face configuration, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceConfig {
    /// Battery bar coloring
    pub color_policy: ColorPolicy,
    /// Battery bar refresh
    pub battery_refresh: BatteryRefresh,
    /// Screen outline
    pub shape: DisplayShape,
    /// Screen size in pixels
    pub size: Size,
}

impl FaceConfig {
    /// Create configuration for a screen with default policies
    pub fn new(shape: DisplayShape, size: Size) -> Self {
        Self {
            color_policy: ColorPolicy::default(),
            battery_refresh: BatteryRefresh::default(),
            shape,
            size,
        }
    }

    /// 144x168 rectangular screen.
    ///
    /// The bar is refreshed every tick to keep it in sync with the blink.
    pub fn rectangular() -> Self {
        Self::new(DisplayShape::Rectangular, Size::new(144, 168))
            .with_battery_refresh(BatteryRefresh::EveryTick)
    }

    /// 180x180 round screen
    pub fn round() -> Self {
        Self::new(DisplayShape::Round, Size::new(180, 180))
    }

    pub fn with_color_policy(mut self, color_policy: ColorPolicy) -> Self {
        self.color_policy = color_policy;
        self
    }

    pub fn with_battery_refresh(mut self, battery_refresh: BatteryRefresh) -> Self {
        self.battery_refresh = battery_refresh;
        self
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::rectangular()
    }
}
