//! Pure date arithmetic behind the week, month, and year views. The views
//! are Sunday-anchored throughout, matching the weekday numbering the task
//! recurrence rules use (0 = Sunday).

use chrono::{Datelike, NaiveDate};

/// The Sunday-through-Saturday week containing `date`.
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let back = date.weekday().num_days_from_sunday() as i64;
    let sunday = date - chrono::Duration::days(back);
    std::array::from_fn(|i| sunday + chrono::Duration::days(i as i64))
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(
        if month == 12 { year + 1 } else { year },
        if month == 12 { 1 } else { month + 1 },
        1,
    )
    .unwrap()
    .pred_opt()
    .unwrap()
    .day()
}

/// Every date of a month, first to last.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    (1..=days_in_month(year, month))
        .filter_map(|day| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// First day of the month before the one containing `date`.
pub fn prev_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_sub_months(chrono::Months::new(1))
        .unwrap_or(date)
}

/// First day of the month after the one containing `date`.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(chrono::Months::new(1))
        .unwrap_or(date)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

/// Cell layout for the year heat-map: Sunday-start weeks as columns, one
/// cell per `weekday + 7 * week`. Week 0 is the week containing January 1.
/// Cells outside the year are `None`. Usually 53 columns; 54 when a long
/// year starts late in the week.
pub fn year_heatmap(year: i32) -> Vec<Option<NaiveDate>> {
    let jan1 = match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };
    let lead = jan1.weekday().num_days_from_sunday();
    let days = if jan1.leap_year() { 366 } else { 365 };
    let weeks = (lead + days).div_ceil(7) as usize;

    let mut cells = vec![None; weeks * 7];
    for ordinal0 in 0..days {
        let date = jan1 + chrono::Duration::days(i64::from(ordinal0));
        let weekday = date.weekday().num_days_from_sunday();
        let week = (lead + ordinal0) / 7;
        cells[(weekday + 7 * week) as usize] = Some(date);
    }
    cells
}
