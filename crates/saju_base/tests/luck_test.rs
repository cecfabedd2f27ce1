//! Decade luck-cycle generation from complete charts.

use saju_base::luck::{generate, generate_n};
use saju_base::{
    CycleDirection, DecadeCycle, Gender, LuckConfig, TermDirection, active_decade, days_between,
    resolve_pillars,
};
use saju_time::{CivilDateTime, correct};

fn corrected(input: &str) -> CivilDateTime {
    correct(input.parse().expect("valid fixture"))
}

fn summary(cycle: DecadeCycle) -> Vec<(String, u32, i32, i32)> {
    cycle
        .map(|e| (e.index.name(), e.onset_age, e.onset_year, e.end_year))
        .collect()
}

fn owned(rows: &[(&str, u32, i32, i32)]) -> Vec<(String, u32, i32, i32)> {
    rows.iter()
        .map(|&(n, a, y, e)| (n.to_string(), a, y, e))
        .collect()
}

#[test]
fn male_yin_year_runs_backward() {
    let birth = corrected("1990-02-04T00:10");
    let fp = resolve_pillars(&birth);
    let config = LuckConfig {
        cycle_count: 4,
        ..LuckConfig::default()
    };
    let cycle = DecadeCycle::new(&fp, &birth, Gender::Male, &config);
    assert_eq!(cycle.direction(), CycleDirection::Backward);
    assert_eq!(cycle.onset_days(), -28);
    assert_eq!(cycle.onset_age(), 9);
    assert_eq!(
        summary(cycle),
        owned(&[
            ("丙子", 9, 1999, 2008),
            ("乙亥", 19, 2009, 2018),
            ("甲戌", 29, 2019, 2028),
            ("癸酉", 39, 2029, 2038),
        ])
    );
}

#[test]
fn zero_day_onset_is_forced_to_age_one() {
    // Corrected birth is 23:38, eleven and a half hours before the next section.
    let birth = corrected("1990-02-04T00:10");
    let fp = resolve_pillars(&birth);
    let cycle = generate(&fp, &birth, Gender::Female);
    assert_eq!(cycle.direction(), CycleDirection::Forward);
    assert_eq!(cycle.onset_days(), 0);
    assert_eq!(cycle.onset_age(), 1);
    let first = cycle.take_entries(2);
    assert_eq!(first[0].index.name(), "戊寅");
    assert_eq!((first[0].onset_year, first[0].end_year), (1991, 2000));
    assert_eq!(first[1].index.name(), "己卯");
}

#[test]
fn golden_sequences() {
    let birth = corrected("2024-06-15T12:00");
    let fp = resolve_pillars(&birth);
    let male = generate(&fp, &birth, Gender::Male);
    assert_eq!(male.onset_days(), 22);
    assert_eq!(
        summary(male).into_iter().take(3).collect::<Vec<_>>(),
        owned(&[
            ("辛未", 7, 2031, 2040),
            ("壬申", 17, 2041, 2050),
            ("癸酉", 27, 2051, 2060),
        ])
    );
    let female = generate(&fp, &birth, Gender::Female);
    assert_eq!(female.onset_days(), -8);
    assert_eq!(
        summary(female).into_iter().take(3).collect::<Vec<_>>(),
        owned(&[
            ("己巳", 3, 2027, 2036),
            ("戊辰", 13, 2037, 2046),
            ("丁卯", 23, 2047, 2056),
        ])
    );

    let birth = corrected("1988-07-01T12:00");
    let fp = resolve_pillars(&birth);
    let entries = generate_n(&fp, &birth, Gender::Male, 2);
    assert_eq!(entries[0].index.name(), "己未");
    assert_eq!(entries[0].onset_age, 2);
    assert_eq!(entries[1].onset_year, 2000);

    let birth = corrected("1969-07-20T23:40");
    let fp = resolve_pillars(&birth);
    let entries = generate_n(&fp, &birth, Gender::Female, 1);
    assert_eq!(entries[0].index.name(), "壬申");
    assert_eq!(entries[0].onset_age, 6);
}

#[test]
fn onset_days_come_from_section_table() {
    let birth = corrected("2024-06-15T12:00");
    let fp = resolve_pillars(&birth);
    let fwd = generate(&fp, &birth, Gender::Male);
    let back = generate(&fp, &birth, Gender::Female);
    assert_eq!(fwd.onset_days(), days_between(&birth, TermDirection::Forward));
    assert_eq!(back.onset_days(), days_between(&birth, TermDirection::AtOrBefore));
}

#[test]
fn monotonic_over_many_charts() {
    for (input, gender) in [
        ("1948-07-01T08:00", Gender::Male),
        ("1959-01-05T06:00", Gender::Female),
        ("1977-11-30T19:20", Gender::Male),
        ("2003-03-21T02:45", Gender::Female),
        ("2040-09-09T14:00", Gender::Male),
    ] {
        let birth = corrected(input);
        let fp = resolve_pillars(&birth);
        let cycle = generate(&fp, &birth, gender);
        let step = cycle.direction().step();
        let entries: Vec<_> = cycle.collect();
        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].index, fp.month.index.step(step));
        assert!(entries[0].onset_age >= 1);
        for pair in entries.windows(2) {
            assert_eq!(pair[1].onset_age, pair[0].onset_age + 10, "{input}");
            assert_eq!(pair[1].index, pair[0].index.step(step), "{input}");
            assert_eq!(pair[1].onset_year, pair[0].end_year + 1, "{input}");
        }
    }
}

#[test]
fn regenerating_is_deterministic() {
    let birth = corrected("1975-10-10T05:15");
    let fp = resolve_pillars(&birth);
    let a: Vec<_> = generate(&fp, &birth, Gender::Female).collect();
    let b: Vec<_> = generate(&fp, &birth, Gender::Female).collect();
    assert_eq!(a, b);
}

#[test]
fn active_decade_lookup() {
    let birth = corrected("1990-02-04T00:10");
    let fp = resolve_pillars(&birth);
    let entries: Vec<_> = generate(&fp, &birth, Gender::Male).collect();
    assert_eq!(active_decade(&entries, 2020).map(|e| e.index.name()), Some("甲戌".into()));
    assert!(active_decade(&entries, 1998).is_none());
}
