//! Month-grid calendar over the event collection. The month cursor is UI
//! state independent of the route: prev/next move it, navigating home
//! resets it to today.

use chrono::{Datelike, Months, NaiveDate};

use crate::constants::limits::UPCOMING_EVENTS;
use crate::db::Snapshot;
use super::views::{CalendarDay, CalendarView, UpcomingEvent};

#[derive(Debug, Clone, Copy)]
pub struct CalendarState {
    cursor: NaiveDate,
}

impl CalendarState {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self { cursor: today }
    }

    pub fn reset(&mut self, today: NaiveDate) {
        self.cursor = today;
    }

    pub fn prev_month(&mut self) {
        self.cursor = self
            .cursor
            .checked_sub_months(Months::new(1))
            .unwrap_or(self.cursor);
    }

    pub fn next_month(&mut self) {
        self.cursor = self
            .cursor
            .checked_add_months(Months::new(1))
            .unwrap_or(self.cursor);
    }

    /// Builds the grid for the cursor's month: Sunday-first leading blanks,
    /// one cell per day, days with at least one event highlighted (exact
    /// date-string match), plus the soonest events sorted by date ascending.
    #[must_use]
    pub fn view(&self, snapshot: &Snapshot) -> CalendarView {
        let year = self.cursor.year();
        let month = self.cursor.month();
        let first = self.cursor.with_day(1).unwrap_or(self.cursor);
        let leading_blanks = first.weekday().num_days_from_sunday();

        let days = (1..=days_in_month(year, month))
            .map(|day| {
                let date_str = format!("{year:04}-{month:02}-{day:02}");
                let event_ids: Vec<String> = snapshot
                    .events
                    .iter()
                    .filter(|e| e.date == date_str)
                    .map(|e| e.id.clone())
                    .collect();
                CalendarDay {
                    day,
                    highlighted: !event_ids.is_empty(),
                    event_ids,
                }
            })
            .collect();

        let mut upcoming: Vec<&crate::models::Event> = snapshot.events.iter().collect();
        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        let upcoming = upcoming
            .into_iter()
            .take(UPCOMING_EVENTS)
            .map(|e| UpcomingEvent {
                id: e.id.clone(),
                title: e.title.clone(),
                date: e.date.clone(),
                time: e.time.clone(),
                image: e
                    .items
                    .first()
                    .and_then(|id| snapshot.artwork_by_id(id))
                    .map(|a| a.image.clone()),
            })
            .collect();

        CalendarView {
            month_title: first.format("%B %Y").to_string(),
            leading_blanks,
            days,
            upcoming,
        }
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    next.and_then(|d| d.pred_opt()).map_or(30, |d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 11), 30);
        assert_eq!(days_in_month(2025, 12), 31);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
    }

    #[test]
    fn test_month_navigation() {
        let mut cal = CalendarState::new(NaiveDate::from_ymd_opt(2025, 11, 13).unwrap());
        cal.next_month();
        assert_eq!(cal.cursor.month(), 12);
        cal.prev_month();
        cal.prev_month();
        assert_eq!(cal.cursor.month(), 10);
        cal.reset(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        assert_eq!((cal.cursor.year(), cal.cursor.month()), (2026, 1));
    }

    #[test]
    fn test_leading_blanks_sunday_first() {
        // 2025-11-01 is a Saturday.
        let cal = CalendarState::new(NaiveDate::from_ymd_opt(2025, 11, 13).unwrap());
        let view = cal.view(&crate::db::Snapshot::default());
        assert_eq!(view.leading_blanks, 6);
        assert_eq!(view.days.len(), 30);
        assert_eq!(view.month_title, "November 2025");
    }
}
