/// Fallback when the prescription carries no parseable duration.
const DEFAULT_DURATION_DAYS: u32 = 7;

const UNITS: [(&str, u32); 3] = [("day", 1), ("week", 7), ("month", 30)];

/// Turns free-form prescription duration text into a day count.
///
/// Looks for the first integer followed by optional whitespace and a unit
/// substring, checking units in the order day, week, month. The first unit
/// with a quantity wins; quantities for different units never sum. The
/// substring match also covers plurals ("weeks" matches via "week").
/// Unparseable or empty text falls back to 7 days.
pub fn parse_duration_days(text: &str) -> u32 {
    let lowered = text.to_lowercase();
    for &(unit, multiplier) in UNITS.iter() {
        if let Some(quantity) = quantity_before_unit(&lowered, unit) {
            return quantity.saturating_mul(multiplier).max(1);
        }
    }
    DEFAULT_DURATION_DAYS
}

/// The integer immediately preceding the first occurrence of `unit`,
/// allowing whitespace between the digits and the unit.
fn quantity_before_unit(text: &str, unit: &str) -> Option<u32> {
    for (idx, _) in text.match_indices(unit) {
        let head = text[..idx].trim_end();
        let digits_start = head
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_digit())
            .last()
            .map(|(i, _)| i);
        let digits = match digits_start {
            Some(start) => &head[start..],
            None => continue,
        };
        if let Ok(quantity) = digits.parse::<u32>() {
            return Some(quantity);
        }
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_days_weeks_and_months() {
        assert_eq!(parse_duration_days("5 days"), 5);
        assert_eq!(parse_duration_days("2 weeks"), 14);
        assert_eq!(parse_duration_days("1 month"), 30);
        assert_eq!(parse_duration_days("10days"), 10);
        assert_eq!(parse_duration_days("Take for 3 Days"), 3);
    }

    #[test]
    fn falls_back_to_seven_days() {
        assert_eq!(parse_duration_days(""), 7);
        assert_eq!(parse_duration_days("as prescribed"), 7);
        assert_eq!(parse_duration_days("week"), 7);
        assert_eq!(parse_duration_days("until finished"), 7);
    }

    #[test]
    fn day_quantity_wins_over_other_units() {
        assert_eq!(parse_duration_days("1 week and 2 days"), 2);
        assert_eq!(parse_duration_days("2 days per week"), 2);
    }

    #[test]
    fn first_occurrence_of_a_unit_wins() {
        assert_eq!(parse_duration_days("3 weeks then 1 week"), 21);
    }

    #[test]
    fn skips_unit_occurrences_without_a_quantity() {
        assert_eq!(parse_duration_days("each day for 5 days"), 5);
    }
}
