//! Calendar widget semantics against the seed events.

use chrono::NaiveDate;
use galleria::db::seed;
use galleria::models::{Event, EventCurator};
use galleria::ui::CalendarState;

fn event(id: &str, date: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {id}"),
        venue: "Hall".to_string(),
        date: date.to_string(),
        time: "5:00 PM".to_string(),
        curator: EventCurator {
            name: "C".to_string(),
            photo: String::new(),
        },
        items: Vec::new(),
    }
}

#[test]
fn event_days_are_highlighted_in_their_month() {
    let snapshot = seed::snapshot();
    let cal = CalendarState::new(NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid date"));
    let view = cal.view(&snapshot);

    assert_eq!(view.month_title, "November 2025");
    let highlighted: Vec<u32> = view
        .days
        .iter()
        .filter(|d| d.highlighted)
        .map(|d| d.day)
        .collect();
    assert_eq!(highlighted, vec![13, 29]);

    let day13 = &view.days[12];
    assert_eq!(day13.event_ids, vec!["e1".to_string()]);
}

#[test]
fn other_months_have_no_highlights() {
    let snapshot = seed::snapshot();
    let cal = CalendarState::new(NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date"));
    let view = cal.view(&snapshot);
    assert!(view.days.iter().all(|d| !d.highlighted));
}

#[test]
fn upcoming_lists_four_soonest_ascending() {
    let mut snapshot = seed::snapshot();
    snapshot.events.clear();
    for (id, date) in [
        ("e_c", "2025-11-20"),
        ("e_a", "2025-11-02"),
        ("e_e", "2026-01-01"),
        ("e_b", "2025-11-05"),
        ("e_d", "2025-12-25"),
    ] {
        snapshot.events.push(event(id, date));
    }

    let cal = CalendarState::new(NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid date"));
    let view = cal.view(&snapshot);
    let ids: Vec<&str> = view.upcoming.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["e_a", "e_b", "e_c", "e_d"]);
}

#[test]
fn upcoming_resolves_first_item_image() {
    let snapshot = seed::snapshot();
    let cal = CalendarState::new(NaiveDate::from_ymd_opt(2025, 11, 1).expect("valid date"));
    let view = cal.view(&snapshot);
    // e1's first item is art1.
    let e1 = view.upcoming.iter().find(|e| e.id == "e1").expect("e1 upcoming");
    assert!(e1.image.as_deref().is_some_and(|img| img.contains("JedHenry")));
}
