use chrono::{Datelike, NaiveDateTime, Timelike, Utc, Weekday};
use crate::config;

/// Opening window of one weekday, in minutes since midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OfficeHours {
    pub weekday: Weekday,
    pub opens: u32,
    pub closes: u32,
}

const fn hm(hour: u32, minute: u32) -> u32 {
    hour * 60 + minute
}

pub const WEEK: &[OfficeHours] = &[
    OfficeHours { weekday: Weekday::Mon, opens: hm(8, 0), closes: hm(20, 0) },
    OfficeHours { weekday: Weekday::Tue, opens: hm(8, 0), closes: hm(20, 0) },
    OfficeHours { weekday: Weekday::Wed, opens: hm(8, 0), closes: hm(20, 0) },
    OfficeHours { weekday: Weekday::Thu, opens: hm(8, 0), closes: hm(20, 0) },
    OfficeHours { weekday: Weekday::Fri, opens: hm(8, 0), closes: hm(19, 0) },
    OfficeHours { weekday: Weekday::Sat, opens: hm(8, 0), closes: hm(13, 0) },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Open { closes: u32 },
    /// Next opening as (weekday, minute, days ahead). 0 days ahead is later today.
    Closed { next: Option<(Weekday, u32, u32)> },
}

fn hours_for(hours: &[OfficeHours], weekday: Weekday) -> Option<&OfficeHours> {
    hours.iter().find(|h| h.weekday == weekday)
}

pub fn status_at(hours: &[OfficeHours], at: NaiveDateTime) -> Status {
    let today = at.weekday();
    let minute = hm(at.hour(), at.minute());

    if let Some(h) = hours_for(hours, today) {
        if minute >= h.opens && minute < h.closes {
            return Status::Open { closes: h.closes };
        }
        if minute < h.opens {
            return Status::Closed { next: Some((today, h.opens, 0)) };
        }
    }

    let mut day = today;
    for days_ahead in 1..=7 {
        day = day.succ();
        if let Some(h) = hours_for(hours, day) {
            return Status::Closed { next: Some((day, h.opens, days_ahead)) };
        }
    }
    Status::Closed { next: None }
}

pub fn is_open_at(hours: &[OfficeHours], at: NaiveDateTime) -> bool {
    matches!(status_at(hours, at), Status::Open { .. })
}

/// Wall-clock time at the clinic.
pub fn now_local() -> NaiveDateTime {
    Utc::now().with_timezone(&config::TIMEZONE).naive_local()
}

pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "segunda",
        Weekday::Tue => "terça",
        Weekday::Wed => "quarta",
        Weekday::Thu => "quinta",
        Weekday::Fri => "sexta",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}h{:02}", minutes / 60, minutes % 60)
}

pub fn status_label(status: Status) -> String {
    match status {
        Status::Open { closes } => format!("Aberto agora · fecha às {}", format_minutes(closes)),
        Status::Closed { next: Some((_, opens, 0)) } => {
            format!("Fechado · abre hoje às {}", format_minutes(opens))
        }
        Status::Closed { next: Some((_, opens, 1)) } => {
            format!("Fechado · abre amanhã às {}", format_minutes(opens))
        }
        Status::Closed { next: Some((day, opens, _)) } => {
            format!("Fechado · abre {} às {}", weekday_label(day), format_minutes(opens))
        }
        Status::Closed { next: None } => "Fechado".to_string(),
    }
}

/// One line per opening window, e.g. "segunda: 08h00 – 20h00".
pub fn schedule_lines(hours: &[OfficeHours]) -> Vec<String> {
    hours
        .iter()
        .map(|h| {
            format!(
                "{}: {} – {}",
                weekday_label(h.weekday),
                format_minutes(h.opens),
                format_minutes(h.closes)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    // 2026-10-19 is a Monday.
    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn open_during_weekday_hours() {
        assert_eq!(status_at(WEEK, at(19, 10, 30)), Status::Open { closes: hm(20, 0) });
        assert!(is_open_at(WEEK, at(19, 8, 0)));
        assert!(!is_open_at(WEEK, at(19, 20, 0)));
    }

    #[test]
    fn early_morning_opens_later_today() {
        assert_eq!(
            status_at(WEEK, at(20, 6, 45)),
            Status::Closed { next: Some((Weekday::Tue, hm(8, 0), 0)) }
        );
        assert_eq!(status_label(status_at(WEEK, at(20, 6, 45))), "Fechado · abre hoje às 08h00");
    }

    #[test]
    fn evening_opens_tomorrow() {
        assert_eq!(
            status_label(status_at(WEEK, at(21, 21, 0))),
            "Fechado · abre amanhã às 08h00"
        );
    }

    #[test]
    fn saturday_afternoon_skips_sunday() {
        // 2026-10-24 is a Saturday.
        assert_eq!(
            status_at(WEEK, at(24, 14, 0)),
            Status::Closed { next: Some((Weekday::Mon, hm(8, 0), 2)) }
        );
        assert_eq!(status_label(status_at(WEEK, at(24, 14, 0))), "Fechado · abre segunda às 08h00");
    }

    #[test]
    fn sunday_is_closed() {
        assert!(!is_open_at(WEEK, at(25, 11, 0)));
        assert_eq!(status_label(status_at(WEEK, at(25, 11, 0))), "Fechado · abre amanhã às 08h00");
    }

    #[test]
    fn empty_schedule_never_opens() {
        assert_eq!(status_at(&[], at(19, 10, 0)), Status::Closed { next: None });
        assert_eq!(status_label(Status::Closed { next: None }), "Fechado");
    }

    #[test]
    fn open_label_and_schedule_lines() {
        assert_eq!(status_label(Status::Open { closes: hm(13, 0) }), "Aberto agora · fecha às 13h00");
        let lines = schedule_lines(WEEK);
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "segunda: 08h00 – 20h00");
        assert_eq!(lines[5], "sábado: 08h00 – 13h00");
    }
}
