//! Wall-clock time for the top bar.

use std::fmt;

/// Hours and minutes, as shown in the top bar
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time, `None` when out of range
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Create a time from packed BCD register values, as real-time clocks
    /// commonly report them
    pub fn from_bcd(hour: u8, minute: u8) -> Option<Self> {
        Self::new(bcd_to_binary(hour), bcd_to_binary(minute))
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }
}

fn bcd_to_binary(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}

/// Always five characters: `HH:MM`
impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Real-time clock seam
pub trait ClockSource {
    fn now(&mut self) -> TimeOfDay;
}

/// Clock that never moves
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedClock(pub TimeOfDay);

impl ClockSource for FixedClock {
    fn now(&mut self) -> TimeOfDay {
        self.0
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Formatting is fixed-width for every valid time
        #[test]
        fn format_is_fixed_width(hour in 0u8..24, minute in 0u8..60) {
            let text = TimeOfDay::new(hour, minute).unwrap().to_string();
            prop_assert_eq!(text.len(), 5);
            prop_assert_eq!(text.as_bytes()[2], b':');
        }
    }
}
