//! Screen layout of the watch face
//!
//! All regions are derived from the screen size at runtime, so the same
//! face runs on round and rectangular screens of any resolution.

use embedded_graphics::{
    geometry::{Point, Size},
    primitives::Rectangle,
    text::Alignment,
};

/// Height of the single-line text bands
const BAND_HEIGHT: u32 = 18;

const ICON_LINK: Size = Size::new(20, 20);
const ICON_BATTERY: Size = Size::new(22, 18);
const TIME_LABEL: Size = Size::new(60, 80);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayShape {
    Rectangular,
    Round,
}

/// Regions of the watch face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub shape: DisplayShape,
    pub size: Size,
    pub hour: Rectangle,
    pub minute: Rectangle,
    /// Bluetooth link icon
    pub link_icon: Rectangle,
    /// Charging icon
    pub battery_icon: Rectangle,
    /// Connection band, as wide as a full battery bar
    pub bar: Rectangle,
    /// Blinking slogan
    pub blink: Rectangle,
    pub date: Rectangle,
    /// Alignment of the slogan and date text
    pub text_alignment: Alignment,
}

impl Layout {
    /// Compute the layout for a screen
    pub fn new(shape: DisplayShape, size: Size) -> Self {
        let w = size.width as i32;
        let h = size.height as i32;

        // Bands at fixed fractions of the screen height
        let bar_y = h * 72 / 100;
        let bar = Rectangle::new(
            Point::new(0, bar_y),
            Size::new(size.width * 85 / 100, BAND_HEIGHT),
        );
        let blink = Rectangle::new(
            Point::new(0, h * 80 / 100),
            Size::new(size.width, BAND_HEIGHT),
        );
        let date = Rectangle::new(
            Point::new(0, h * 88 / 100),
            Size::new(size.width, BAND_HEIGHT),
        );

        match shape {
            DisplayShape::Rectangular => Self {
                shape,
                size,
                hour: Rectangle::new(Point::new(0, -5), TIME_LABEL),
                minute: Rectangle::new(Point::new(0, 50), TIME_LABEL),
                link_icon: Rectangle::new(Point::new(0, h - 24), ICON_LINK),
                battery_icon: Rectangle::new(Point::new(w - 22, bar_y), ICON_BATTERY),
                bar,
                blink,
                date,
                text_alignment: Alignment::Right,
            },
            DisplayShape::Round => Self {
                shape,
                size,
                // Inset from the curved edge
                hour: Rectangle::new(Point::new(15, 5), TIME_LABEL),
                minute: Rectangle::new(Point::new(15, 60), TIME_LABEL),
                link_icon: Rectangle::new(Point::new(w - 26, h / 2 - 8), ICON_LINK),
                battery_icon: Rectangle::new(Point::new(w - 28, h * 63 / 100), ICON_BATTERY),
                bar,
                blink,
                date,
                text_alignment: Alignment::Center,
            },
        }
    }

    /// Width of a full battery bar
    pub fn bar_max_width(&self) -> u32 {
        self.bar.size.width
    }
}
