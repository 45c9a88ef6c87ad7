use chrono::NaiveDate;
use std::fmt::Display;

/// Daily recurrence bounded by an inclusive end date.
///
/// Rendered in the RRULE wire format the calendar gateway expects: the
/// UNTIL component is expressed in UTC with date-only granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRecurrence {
    until: NaiveDate,
}

impl DailyRecurrence {
    pub fn until(date: NaiveDate) -> Self {
        Self { until: date }
    }
}

impl Display for DailyRecurrence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RRULE:FREQ=DAILY;UNTIL={}T000000Z",
            self.until.format("%Y%m%d")
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn renders_gateway_rrule_format() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 12).unwrap();
        assert_eq!(
            DailyRecurrence::until(date).to_string(),
            "RRULE:FREQ=DAILY;UNTIL=20260812T000000Z"
        );
    }

    #[test]
    fn pads_single_digit_components() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        assert_eq!(
            DailyRecurrence::until(date).to_string(),
            "RRULE:FREQ=DAILY;UNTIL=20260105T000000Z"
        );
    }
}
