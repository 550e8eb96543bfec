//! Timeline horizons the results can be viewed at.

use serde::{Deserialize, Serialize};

/// A point on the results timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimelineHorizon {
    Now,
    Year5,
    Year10,
    Year30,
}

impl TimelineHorizon {
    pub const ALL: [TimelineHorizon; 4] = [
        TimelineHorizon::Now,
        TimelineHorizon::Year5,
        TimelineHorizon::Year10,
        TimelineHorizon::Year30,
    ];

    pub const fn years(self) -> u8 {
        match self {
            TimelineHorizon::Now => 0,
            TimelineHorizon::Year5 => 5,
            TimelineHorizon::Year10 => 10,
            TimelineHorizon::Year30 => 30,
        }
    }

    /// Label sent as `timeline_horizon`, e.g. "5 Years".
    pub fn label(self) -> String {
        format!("{} Years", self.years())
    }

    /// Whether this horizon lies at or beyond a point of no return year.
    pub fn is_past(self, point_of_no_return_year: u8) -> bool {
        self != TimelineHorizon::Now && self.years() >= point_of_no_return_year
    }
}
