//! Presentation sink drawing onto an embedded-graphics target

use embassy_sync::{blocking_mutex::raw::CriticalSectionRawMutex, signal::Signal};
use embedded_graphics::{
    geometry::{Point, Size},
    mono_font::{ascii::FONT_6X10, MonoFont, MonoTextStyle},
    pixelcolor::{Rgb565, RgbColor},
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

use crate::peripherals::battery::ColorTag;

use super::{blink::BlinkText, layout::Layout, PresentationSink};

const CONNECTION_TEXT: &str = "CONNECTION IS POWER";

const BACKGROUND_COLOR: Rgb565 = Rgb565::BLACK;
const FOREGROUND_COLOR: Rgb565 = Rgb565::WHITE;

/// Colors available on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Palette {
    /// Bar and band in the color tag's pair
    #[default]
    Color,
    /// White bar on a clear band, color tags are ignored
    Monochrome,
}

/// Number of vibration pulses, picked up by the host's vibration task
pub type AlertSignal = Signal<CriticalSectionRawMutex, u8>;

pub struct CanvasSink<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    target: D,
    layout: Layout,
    notify: &'a AlertSignal,
    /// Current bar width
    bar_width: u32,
    /// Current bar color
    color: ColorTag,
    palette: Palette,
}

impl<'a, D> CanvasSink<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: D, layout: Layout, notify: &'a AlertSignal) -> Self {
        Self {
            target,
            layout,
            notify,
            bar_width: 0,
            color: ColorTag::Normal,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Clear the whole screen
    pub fn clear(&mut self) -> Result<(), D::Error> {
        self.target.clear(BACKGROUND_COLOR)
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    /// Give back the draw target
    pub fn release(self) -> D {
        self.target
    }

    fn fill(&mut self, area: Rectangle, color: Rgb565) -> Result<(), D::Error> {
        area.into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut self.target)
    }

    /// Clear `area` and write `text` into it
    fn label(
        &mut self,
        area: Rectangle,
        text: &str,
        font: &MonoFont<'_>,
        alignment: Alignment,
    ) -> Result<(), D::Error> {
        self.fill(area, BACKGROUND_COLOR)?;
        let style = MonoTextStyle::new(font, FOREGROUND_COLOR);
        draw_text(&mut self.target, area, text, style, alignment)
    }

    /// Bar and band colors for the current tag
    fn bar_colors(&self) -> (Rgb565, Rgb565) {
        match self.palette {
            Palette::Color => (self.color.bar_color(), self.color.background_color()),
            Palette::Monochrome => (FOREGROUND_COLOR, BACKGROUND_COLOR),
        }
    }

    /// Band in the dark shade with the bar on top.
    ///
    /// The slogan is white on the band and black where the bar covers it.
    fn draw_bar(&mut self) -> Result<(), D::Error> {
        let band = self.layout.bar;
        let bar = Rectangle::new(band.top_left, Size::new(self.bar_width, band.size.height));

        let (bar_color, band_color) = self.bar_colors();

        self.fill(band, band_color)?;
        let style = MonoTextStyle::new(&FONT_6X10, FOREGROUND_COLOR);
        draw_text(&mut self.target, band, CONNECTION_TEXT, style, Alignment::Center)?;

        self.fill(bar, bar_color)?;
        let style = MonoTextStyle::new(&FONT_6X10, Rgb565::BLACK);
        draw_text(
            &mut self.target.clipped(&bar),
            band,
            CONNECTION_TEXT,
            style,
            Alignment::Center,
        )
    }

    fn icon(&mut self, area: Rectangle, visible: bool) -> Result<(), D::Error> {
        self.fill(
            area,
            if visible {
                FOREGROUND_COLOR
            } else {
                BACKGROUND_COLOR
            },
        )
    }
}

/// Draw single-line text vertically centered in `area`
fn draw_text<T>(
    target: &mut T,
    area: Rectangle,
    text: &str,
    style: MonoTextStyle<'_, Rgb565>,
    alignment: Alignment,
) -> Result<(), T::Error>
where
    T: DrawTarget<Color = Rgb565>,
{
    let x = match alignment {
        Alignment::Left => area.top_left.x,
        Alignment::Center => area.center().x,
        Alignment::Right => area.top_left.x + area.size.width as i32 - 1,
    };
    let position = Point::new(x, area.center().y);
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Middle)
        .build();

    Text::with_text_style(text, position, style, text_style).draw(target)?;
    Ok(())
}

impl<'a, D> PresentationSink for CanvasSink<'a, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Error = D::Error;

    fn set_time_text(&mut self, hour: &str, minute: &str, date: &str) -> Result<(), D::Error> {
        self.label(self.layout.hour, hour, &PROFONT_24_POINT, Alignment::Center)?;
        self.label(self.layout.minute, minute, &PROFONT_24_POINT, Alignment::Center)?;
        self.label(self.layout.date, date, &FONT_6X10, self.layout.text_alignment)
    }

    fn set_bar_geometry(&mut self, width: u32) -> Result<(), D::Error> {
        self.bar_width = width.min(self.layout.bar_max_width());
        self.draw_bar()
    }

    fn set_color_tag(&mut self, tag: ColorTag) -> Result<(), D::Error> {
        self.color = tag;
        self.draw_bar()
    }

    fn set_battery_indicator_visible(&mut self, visible: bool) -> Result<(), D::Error> {
        self.icon(self.layout.battery_icon, visible)
    }

    fn set_link_indicator_visible(&mut self, visible: bool) -> Result<(), D::Error> {
        self.icon(self.layout.link_icon, visible)
    }

    fn set_blink_text(&mut self, text: BlinkText) -> Result<(), D::Error> {
        self.label(
            self.layout.blink,
            text.as_str(),
            &FONT_6X10,
            self.layout.text_alignment,
        )
    }

    fn trigger_alert(&mut self) -> Result<(), D::Error> {
        self.notify.signal(1);
        Ok(())
    }
}
