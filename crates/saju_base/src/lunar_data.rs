//! Packed lunar year table, 1900 to 2049.
//!
//! Korean lunisolar calendar: months begin on the civil date of the new
//! moon and major terms are dated in Korean standard time of the period
//! (UTC+8:30 before 1912 and from 1954-03-21 to 1961-08-09, UTC+9
//! otherwise). Month starts and leap months differ from the Chinese
//! calendar whenever an event falls between 23:00 and 24:00 Beijing time,
//! e.g. 2012 (leap 3, not 4) and 2017 (leap 5, not 6).
//!
//! One word per lunar year:
//! - bits 0-3: number of the leap month, 0 when the year has none;
//! - bits 15..4: months 1..12, set bit = 30 days, clear = 29;
//! - bit 16: set when the leap month has 30 days.
//!
//! Lunar 1900-01-01 fell on solar 1900-01-31; every later year starts the
//! day after the previous one ends.

use saju_time::CivilDate;

/// First lunar year in the table.
pub const LUNAR_TABLE_FIRST_YEAR: i32 = 1900;

/// Last lunar year in the table.
pub const LUNAR_TABLE_LAST_YEAR: i32 = 2049;

/// Solar date of lunar 1900-01-01.
pub const LUNAR_EPOCH: CivilDate = CivilDate {
    year: 1900,
    month: 1,
    day: 31,
};

pub const LEAP_MONTH_MASK: u32 = 0xf;
pub const LONG_LEAP_MONTH_BIT: u32 = 0x10000;

/// Bit for a regular month (1..=12) being 30 days long.
pub const fn long_month_bit(month: u32) -> u32 {
    0x10000 >> month
}

#[rustfmt::skip]
pub const LUNAR_YEAR_INFO: [u32; 150] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x05565, 0x0d2a0, 0x0e950, 0x16554, 0x056a0, 0x0aad0, 0x055d2, // 1900-1909
    0x04ae0, 0x0a5d6, 0x0a4d0, 0x0d250, 0x0da95, 0x0b550, 0x056a0, 0x0ada2, 0x095d0, 0x04bb7, // 1910-1919
    0x049b0, 0x0a4b0, 0x0b4b5, 0x06a90, 0x0ad40, 0x0bb54, 0x02b60, 0x095b0, 0x05372, 0x04970, // 1920-1929
    0x06566, 0x0e4a0, 0x0ea50, 0x16a95, 0x05b50, 0x02b60, 0x18ae3, 0x092e0, 0x1c8d7, 0x0c950, // 1930-1939
    0x0d4a0, 0x1d8a6, 0x0b690, 0x056d0, 0x125b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0d557, // 1940-1949
    0x0b4a0, 0x0b550, 0x15555, 0x04db0, 0x025b0, 0x18573, 0x052b0, 0x0a9b8, 0x06950, 0x06aa0, // 1950-1959
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05270, 0x07263, 0x0d950, 0x06b57, 0x056a0, // 1960-1969
    0x09ad0, 0x04dd5, 0x04ae0, 0x0a4e0, 0x0d4d4, 0x0d250, 0x0d598, 0x0b540, 0x0d6a0, 0x195a6, // 1970-1979
    0x095b0, 0x049b0, 0x0a9b4, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0b756, 0x02b60, 0x095b0, // 1980-1989
    0x04b75, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06d98, 0x05ad0, 0x02b60, 0x096e5, 0x092e0, // 1990-1999
    0x0c960, 0x0e954, 0x0d4a0, 0x0da50, 0x07552, 0x056c0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000-2009
    0x0a950, 0x0b4a0, 0x1b4a3, 0x0b550, 0x055d9, 0x04ba0, 0x0a5b0, 0x05575, 0x052b0, 0x0a950, // 2010-2019
    0x0b954, 0x06aa0, 0x0ad50, 0x06b52, 0x04b60, 0x0a6e6, 0x0a570, 0x05270, 0x06a65, 0x0d930, // 2020-2029
    0x05aa0, 0x0b6a3, 0x096d0, 0x04afb, 0x04ae0, 0x0a4d0, 0x1d0d6, 0x0d250, 0x0d520, 0x0dd45, // 2030-2039
    0x0b6a0, 0x096d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0b250, 0x1b255, 0x06d40, 0x0ada0, // 2040-2049
];
