//! Month-grid math for the appointments calendar.
//!
//! DESIGN
//! ======
//! The calendar is a plain Monday-first month grid. Appointments arrive as
//! separate `YYYY-MM-DD` / `HH:MM[:SS]` strings and are bucketed per day;
//! rows whose date or time does not parse are skipped rather than failing
//! the whole page.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

use crate::net::types::Appointment;

const FRENCH_MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Column headers, Monday first.
pub const FRENCH_WEEKDAYS: [&str; 7] = ["lun.", "mar.", "mer.", "jeu.", "ven.", "sam.", "dim."];

/// One displayed month, anchored on its first day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthCursor {
    first: NaiveDate,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self { first: date.with_day(1).unwrap_or(date) }
    }

    /// Month of the local calendar date.
    pub fn current() -> Self {
        Self::containing(today())
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    #[must_use]
    pub fn prev(&self) -> Self {
        Self { first: self.first.checked_sub_months(Months::new(1)).unwrap_or(self.first) }
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self { first: self.first.checked_add_months(Months::new(1)).unwrap_or(self.first) }
    }

    /// Header such as `octobre 2026`.
    pub fn label(&self) -> String {
        format!("{} {}", FRENCH_MONTHS[self.first.month0() as usize], self.first.year())
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first;
        u32::try_from(next.signed_duration_since(self.first).num_days()).unwrap_or(0)
    }

    /// Rows of seven cells, Monday first; cells outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let leading = self.first.weekday().num_days_from_monday() as usize;
        let mut cells: Vec<Option<NaiveDate>> = vec![None; leading];
        cells.extend(self.first.iter_days().take(self.days_in_month() as usize).map(Some));
        while cells.len() % 7 != 0 {
            cells.push(None);
        }
        cells
            .chunks(7)
            .map(|chunk| {
                let mut row = [None; 7];
                row.copy_from_slice(chunk);
                row
            })
            .collect()
    }
}

/// Local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `dd/mm/yyyy`, as shown next to the "today" button.
pub fn today_label(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn parse_appointment_time(time: &str) -> Option<NaiveTime> {
    let time = time.trim();
    NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .ok()
}

/// Start of an appointment, or `None` when either part is malformed.
pub fn parse_appointment_start(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").ok()?;
    Some(date.and_time(parse_appointment_time(time)?))
}

/// Appointments starting on `day`, earliest first.
pub fn events_on(day: NaiveDate, appointments: &[Appointment]) -> Vec<Appointment> {
    let mut events: Vec<(NaiveDateTime, Appointment)> = appointments
        .iter()
        .filter_map(|appt| parse_appointment_start(&appt.date, &appt.time).map(|start| (start, appt.clone())))
        .filter(|(start, _)| start.date() == day)
        .collect();
    events.sort_by_key(|(start, _)| *start);
    events.into_iter().map(|(_, appt)| appt).collect()
}

/// Calendar label: `{resident} - {reason}`.
pub fn event_title(appointment: &Appointment) -> String {
    format!("{} - {}", appointment.resident_name, appointment.reason)
}
