/// Time of day as delivered by the minute clock, and its digit layout
use std::fmt;
use std::str::FromStr;

use nom::{
    character::complete::{char, digit1, space0},
    combinator::{all_consuming, map_res, verify},
    sequence::{delimited, separated_pair},
    IResult,
};

use crate::error::FaceError;

/// Hour and minute at minute granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Result<Self, FaceError> {
        if hour > 23 || minute > 59 {
            return Err(FaceError::InvalidTime { hour, minute });
        }
        Ok(Self {
            hour: hour as u8,
            minute: minute as u8,
        })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Hour as shown on the face: unchanged in 24-hour mode, 1..=12 otherwise
    pub fn display_hour(&self, twenty_four_hour: bool) -> u8 {
        match self.hour {
            h if twenty_four_hour => h,
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }

    /// The following minute, wrapping past midnight
    pub fn next_minute(&self) -> Self {
        let total = (u32::from(self.hour) * 60 + u32::from(self.minute) + 1) % (24 * 60);
        Self {
            hour: (total / 60) as u8,
            minute: (total % 60) as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

fn hours(input: &str) -> IResult<&str, u32> {
    map_res(verify(digit1, |d: &str| d.len() <= 2), |d: &str| d.parse::<u32>())(input)
}

fn minutes(input: &str) -> IResult<&str, u32> {
    map_res(verify(digit1, |d: &str| d.len() == 2), |d: &str| d.parse::<u32>())(input)
}

fn parse_time(input: &str) -> IResult<&str, (u32, u32)> {
    all_consuming(delimited(
        space0,
        separated_pair(hours, char(':'), minutes),
        space0,
    ))(input)
}

impl FromStr for TimeOfDay {
    type Err = FaceError;

    /// Parse `H:MM` or `HH:MM`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, (hour, minute)) =
            parse_time(s).map_err(|_| FaceError::MalformedTime(s.to_string()))?;
        Self::new(hour, minute)
    }
}

/// Digits assigned to the four slots: hour tens, hour ones, minute tens, minute ones.
///
/// Only the hour tens digit can be blank; the minute tens digit always shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceDigits {
    pub hour_tens: Option<u8>,
    pub hour_ones: u8,
    pub minute_tens: u8,
    pub minute_ones: u8,
}

impl FaceDigits {
    pub fn new(time: TimeOfDay, twenty_four_hour: bool) -> Self {
        let hour = time.display_hour(twenty_four_hour);
        let hour_tens = hour / 10;
        Self {
            // a leading zero is kept in 24-hour mode
            hour_tens: (twenty_four_hour || hour_tens != 0).then_some(hour_tens),
            hour_ones: hour % 10,
            minute_tens: time.minute / 10,
            minute_ones: time.minute % 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(hour: u32, minute: u32) -> TimeOfDay {
        TimeOfDay::new(hour, minute).unwrap()
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            TimeOfDay::new(24, 0),
            Err(FaceError::InvalidTime { hour: 24, minute: 0 })
        );
        assert!(TimeOfDay::new(12, 60).is_err());
    }

    #[test]
    fn test_twelve_hour_conversion() {
        assert_eq!(time(0, 0).display_hour(false), 12);
        assert_eq!(time(1, 0).display_hour(false), 1);
        assert_eq!(time(12, 0).display_hour(false), 12);
        assert_eq!(time(13, 0).display_hour(false), 1);
        assert_eq!(time(23, 0).display_hour(false), 11);
        assert_eq!(time(0, 0).display_hour(true), 0);
        assert_eq!(time(23, 0).display_hour(true), 23);
    }

    #[test]
    fn test_parse() {
        assert_eq!("00:05".parse::<TimeOfDay>(), Ok(time(0, 5)));
        assert_eq!("9:41".parse::<TimeOfDay>(), Ok(time(9, 41)));
        assert_eq!(" 23:59 ".parse::<TimeOfDay>(), Ok(time(23, 59)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in ["", "12", "12:5", "123:00", "12:345", "ab:cd", "12:00pm", "-1:00"] {
            assert_eq!(
                bad.parse::<TimeOfDay>(),
                Err(FaceError::MalformedTime(bad.to_string())),
                "{:?}",
                bad
            );
        }
        assert!(matches!(
            "25:00".parse::<TimeOfDay>(),
            Err(FaceError::InvalidTime { hour: 25, .. })
        ));
    }

    #[test]
    fn test_display_round_trips() {
        assert_eq!(time(7, 3).to_string(), "07:03");
    }

    #[test]
    fn test_next_minute_wraps() {
        assert_eq!(time(9, 59).next_minute(), time(10, 0));
        assert_eq!(time(23, 59).next_minute(), time(0, 0));
    }

    #[test]
    fn test_midnight_twelve_hour_digits() {
        let digits = FaceDigits::new(time(0, 5), false);
        assert_eq!(
            digits,
            FaceDigits {
                hour_tens: Some(1),
                hour_ones: 2,
                minute_tens: 0,
                minute_ones: 5,
            }
        );
    }

    #[test]
    fn test_leading_zero_hidden_on_hour_only() {
        let digits = FaceDigits::new(time(9, 7), false);
        assert_eq!(digits.hour_tens, None);
        assert_eq!(digits.hour_ones, 9);
        assert_eq!(digits.minute_tens, 0);

        let digits = FaceDigits::new(time(9, 7), true);
        assert_eq!(digits.hour_tens, Some(0));
    }
}
