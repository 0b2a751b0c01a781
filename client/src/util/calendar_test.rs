use super::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn appt(id: i64, date: &str, time: &str, who: &str, reason: &str) -> Appointment {
    Appointment {
        id,
        resident_id: 1,
        date: date.to_owned(),
        time: time.to_owned(),
        reason: reason.to_owned(),
        transporteur: String::new(),
        heure_transport: String::new(),
        resident_name: who.to_owned(),
    }
}

// =============================================================
// MonthCursor
// =============================================================

#[test]
fn containing_anchors_on_first_day() {
    let cursor = MonthCursor::containing(date(2026, 10, 17));
    assert_eq!(cursor.first_day(), date(2026, 10, 1));
    assert_eq!((cursor.year(), cursor.month()), (2026, 10));
}

#[test]
fn prev_and_next_cross_year_boundaries() {
    let jan = MonthCursor::containing(date(2027, 1, 9));
    assert_eq!(jan.prev().first_day(), date(2026, 12, 1));
    let dec = MonthCursor::containing(date(2026, 12, 31));
    assert_eq!(dec.next().first_day(), date(2027, 1, 1));
}

#[test]
fn label_uses_french_month_names() {
    assert_eq!(MonthCursor::containing(date(2026, 10, 17)).label(), "octobre 2026");
    assert_eq!(MonthCursor::containing(date(2026, 8, 1)).label(), "août 2026");
}

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(MonthCursor::containing(date(2028, 2, 10)).days_in_month(), 29);
    assert_eq!(MonthCursor::containing(date(2026, 2, 10)).days_in_month(), 28);
    assert_eq!(MonthCursor::containing(date(2026, 10, 1)).days_in_month(), 31);
}

#[test]
fn weeks_start_on_monday() {
    // 1 October 2026 is a Thursday.
    let weeks = MonthCursor::containing(date(2026, 10, 1)).weeks();
    assert_eq!(weeks[0][..3], [None, None, None]);
    assert_eq!(weeks[0][3], Some(date(2026, 10, 1)));
    assert_eq!(weeks.last().unwrap()[5], Some(date(2026, 10, 31)));
    assert_eq!(weeks.last().unwrap()[6], None);
    assert_eq!(weeks.len(), 5);
}

#[test]
fn weeks_cover_every_day_once() {
    let cursor = MonthCursor::containing(date(2026, 3, 1));
    let days: Vec<NaiveDate> = cursor.weeks().iter().flatten().filter_map(|c| *c).collect();
    assert_eq!(days.len(), 31);
    assert_eq!(days[0], date(2026, 3, 1));
}

// =============================================================
// Appointment parsing + bucketing
// =============================================================

#[test]
fn start_accepts_minutes_and_seconds() {
    let with_secs = parse_appointment_start("2026-10-20", "09:30:00").unwrap();
    let without = parse_appointment_start("2026-10-20", "09:30").unwrap();
    assert_eq!(with_secs, without);
}

#[test]
fn start_rejects_malformed_values() {
    assert_eq!(parse_appointment_start("20/10/2026", "09:30"), None);
    assert_eq!(parse_appointment_start("2026-10-20", "9h30"), None);
}

#[test]
fn events_on_filters_day_and_sorts_by_time() {
    let rows = vec![
        appt(1, "2026-10-20", "14:00", "Marie Dupont", "Dentiste"),
        appt(2, "2026-10-21", "08:00", "Jean Martin", "Kiné"),
        appt(3, "2026-10-20", "09:15:00", "Jean Martin", "Prise de sang"),
        appt(4, "bad", "10:00", "X", "Y"),
    ];
    let ids: Vec<i64> = events_on(date(2026, 10, 20), &rows).iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn event_title_joins_resident_and_reason() {
    let row = appt(1, "2026-10-20", "14:00", "Marie Dupont", "Dentiste");
    assert_eq!(event_title(&row), "Marie Dupont - Dentiste");
}

#[test]
fn today_label_is_day_month_year() {
    assert_eq!(today_label(date(2026, 3, 7)), "07/03/2026");
}
