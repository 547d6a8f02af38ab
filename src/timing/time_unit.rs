use std::str::FromStr;
use std::time::Duration;

use derive_more::{Display, Error, IsVariant};

/// A granularity of time, from nanoseconds to days.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum TimeUnit {
    #[display("nanoseconds")]
    Nanoseconds,
    #[display("microseconds")]
    Microseconds,
    #[display("milliseconds")]
    Milliseconds,
    #[display("seconds")]
    Seconds,
    #[display("minutes")]
    Minutes,
    #[display("hours")]
    Hours,
    #[display("days")]
    Days,
}

impl TimeUnit {
    /// The number of nanoseconds in a single unit.
    pub const fn nanos(self) -> u128 {
        match self {
            TimeUnit::Nanoseconds => 1,
            TimeUnit::Microseconds => 1_000,
            TimeUnit::Milliseconds => 1_000_000,
            TimeUnit::Seconds => 1_000_000_000,
            TimeUnit::Minutes => 60 * 1_000_000_000,
            TimeUnit::Hours => 60 * 60 * 1_000_000_000,
            TimeUnit::Days => 24 * 60 * 60 * 1_000_000_000,
        }
    }

    /// Converts `amount` of the unit `from` into this unit. Conversions to a coarser unit truncate,
    /// conversions to a finer unit saturate at [`u64::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use functional_core::timing::TimeUnit;
    /// assert_eq!(TimeUnit::Seconds.convert(1500, TimeUnit::Milliseconds), 1);
    /// assert_eq!(TimeUnit::Milliseconds.convert(2, TimeUnit::Seconds), 2000);
    /// ```
    pub fn convert(self, amount: u64, from: TimeUnit) -> u64 {
        let nanos = u128::from(amount) * from.nanos();
        u64::try_from(nanos / self.nanos()).unwrap_or(u64::MAX)
    }

    /// Converts a [`Duration`] into a whole number of this unit.
    pub fn of(self, duration: Duration) -> u64 {
        u64::try_from(duration.as_nanos() / self.nanos()).unwrap_or(u64::MAX)
    }

    /// Creates a [`Duration`] of `amount` of this unit, saturating at [`Duration::MAX`].
    pub fn to_duration(self, amount: u64) -> Duration {
        let nanos = u128::from(amount) * self.nanos();
        let seconds = nanos / TimeUnit::Seconds.nanos();
        match u64::try_from(seconds) {
            Ok(seconds) => {
                // Always below one billion.
                let subsec = (nanos % TimeUnit::Seconds.nanos()) as u32;
                Duration::new(seconds, subsec)
            },
            Err(_) => Duration::MAX,
        }
    }
}

#[derive(Debug, Display, Error)]
#[display("invalid time unit: {name}")]
pub struct InvalidTimeUnitError {
    pub name: String,
}

impl FromStr for TimeUnit {
    type Err = InvalidTimeUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ns" | "nanoseconds" => TimeUnit::Nanoseconds,
            "us" | "microseconds" => TimeUnit::Microseconds,
            "ms" | "milliseconds" => TimeUnit::Milliseconds,
            "s" | "seconds" => TimeUnit::Seconds,
            "m" | "minutes" => TimeUnit::Minutes,
            "h" | "hours" => TimeUnit::Hours,
            "d" | "days" => TimeUnit::Days,
            _ => Err(InvalidTimeUnitError {
                name: s.to_owned(),
            })?,
        })
    }
}
