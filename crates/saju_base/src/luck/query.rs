//! Lookups over a generated luck sequence.

use super::types::{DecadeCycleEntry, YEARS_PER_CYCLE};

/// Decade in force during a calendar year, if the sequence covers it.
pub fn active_decade(
    entries: &[DecadeCycleEntry],
    calendar_year: i32,
) -> Option<&DecadeCycleEntry> {
    entries.iter().find(|e| e.contains_year(calendar_year))
}

/// Decade in force at a given age, if the sequence covers it.
pub fn decade_for_age(entries: &[DecadeCycleEntry], age: u32) -> Option<&DecadeCycleEntry> {
    entries
        .iter()
        .find(|e| (e.onset_age..e.onset_age + YEARS_PER_CYCLE as u32).contains(&age))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sexagenary::SexagenaryIndex;

    fn entries() -> Vec<DecadeCycleEntry> {
        (0..3)
            .map(|i: usize| DecadeCycleEntry {
                order: i + 1,
                index: SexagenaryIndex::JIAZI.step(i as i64 + 1),
                onset_age: 4 + 10 * i as u32,
                onset_year: 1994 + 10 * i as i32,
                end_year: 2003 + 10 * i as i32,
            })
            .collect()
    }

    #[test]
    fn year_lookup() {
        let e = entries();
        assert!(active_decade(&e, 1993).is_none());
        assert_eq!(active_decade(&e, 1994).map(|d| d.order), Some(1));
        assert_eq!(active_decade(&e, 2004).map(|d| d.order), Some(2));
        assert_eq!(active_decade(&e, 2023).map(|d| d.order), Some(3));
        assert!(active_decade(&e, 2024).is_none());
    }

    #[test]
    fn age_lookup() {
        let e = entries();
        assert!(decade_for_age(&e, 3).is_none());
        assert_eq!(decade_for_age(&e, 13).map(|d| d.order), Some(1));
        assert_eq!(decade_for_age(&e, 14).map(|d| d.order), Some(2));
    }
}
