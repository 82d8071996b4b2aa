//! Blinking slogan

const SLOGAN: &str = "_hacking is our weapon";

/// Rendering variant of the slogan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkText {
    /// Without the leading cursor
    Plain,
    /// With the leading cursor
    Cursor,
}

impl BlinkText {
    pub fn from_bit(on: bool) -> Self {
        if on {
            BlinkText::Cursor
        } else {
            BlinkText::Plain
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlinkText::Plain => &SLOGAN[1..],
            BlinkText::Cursor => SLOGAN,
        }
    }
}

/// One bit oscillator, advanced once per tick.
///
/// Missed ticks are not caught up.
#[derive(Debug, Default)]
pub struct BlinkToggle {
    on: bool,
}

impl BlinkToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> bool {
        self.on
    }

    /// Flip and return the new value
    pub fn advance(&mut self) -> bool {
        self.on = !self.on;
        self.on
    }
}
