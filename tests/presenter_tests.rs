use chrono::{Duration, TimeZone, Utc};
use ragenda::core::presenter::{
    Accent, Badge, DriverLink, EventView, FilterCriteria, Highlight, TemporalClass, classify,
    present,
};
use ragenda::models::agenda::AgendaFilter;
use ragenda::models::coverage::{Coverage, CoverageSet};
use ragenda::models::event::Event;
use ragenda::models::status::EventStatus;
use ragenda::utils::date::{civil_offset, civil_time_at};
use ragenda::utils::time::format_time_value;

mod common;
use common::{at, d, event};

#[test]
fn test_classification_examples() {
    let ev = event("Briefing", "2024-03-10", "09:00", "10:00");

    assert_eq!(classify(&ev, at("2024-03-10T09:30")), TemporalClass::Ongoing);
    assert_eq!(classify(&ev, at("2024-03-10T08:00")), TemporalClass::Today);
    assert_eq!(classify(&ev, at("2024-03-11T00:00")), TemporalClass::Past);
    assert_eq!(classify(&ev, at("2024-03-09T23:59")), TemporalClass::Future);
}

#[test]
fn test_window_is_inclusive_on_both_ends() {
    let instant = event("Photo op", "2024-03-10", "09:30", "09:30");
    assert_eq!(classify(&instant, at("2024-03-10T09:30")), TemporalClass::Ongoing);

    let ev = event("Briefing", "2024-03-10", "09:00", "10:00");
    assert_eq!(classify(&ev, at("2024-03-10T09:00")), TemporalClass::Ongoing);
    assert_eq!(classify(&ev, at("2024-03-10T10:00")), TemporalClass::Ongoing);
    assert_eq!(classify(&ev, at("2024-03-10T10:01")), TemporalClass::Today);
    assert_eq!(classify(&ev, at("2024-03-10T08:59")), TemporalClass::Today);
}

#[test]
fn test_seconds_are_ignored() {
    let ev = event("Briefing", "2024-03-10", "09:00", "10:00");
    let now = at("2024-03-10T10:00") + Duration::seconds(59);
    assert_eq!(classify(&ev, now), TemporalClass::Ongoing);
}

#[test]
fn test_ongoing_only_on_event_date() {
    let ev = event("All day", "2024-03-10", "00:00", "23:59");
    let start = at("2024-03-08T00:00");

    for step in 0..(5 * 24 * 4) {
        let now = start + Duration::minutes(15 * step);
        let class = classify(&ev, now);
        if class == TemporalClass::Ongoing || class == TemporalClass::Today {
            assert_eq!(now.date(), ev.date);
        }
        if now.date() == ev.date {
            assert_eq!(class, TemporalClass::Ongoing);
        }
    }
}

#[test]
fn test_overnight_window_is_never_ongoing() {
    let ev = event("Night shift", "2024-03-10", "22:00", "02:00");
    assert_eq!(classify(&ev, at("2024-03-10T23:00")), TemporalClass::Today);
    assert_eq!(classify(&ev, at("2024-03-10T01:00")), TemporalClass::Today);
}

#[test]
fn test_civil_clock_is_fixed_utc_minus_three() {
    let offset = civil_offset(-3).expect("offset");

    let instant = Utc.with_ymd_and_hms(2024, 3, 10, 12, 30, 0).unwrap();
    assert_eq!(civil_time_at(instant, offset), at("2024-03-10T09:30"));

    // 02:00 UTC is still the previous civil day
    let late = Utc.with_ymd_and_hms(2024, 3, 11, 2, 0, 0).unwrap();
    assert_eq!(civil_time_at(late, offset), at("2024-03-10T23:00"));

    assert!(civil_offset(99).is_err());
}

#[test]
fn test_huge_offset_is_rejected_not_wrapped() {
    assert!(civil_offset(1_193_047).is_err());
    assert!(civil_offset(i32::MIN).is_err());
    assert!(civil_offset(-12).is_ok());
}

#[test]
fn test_format_time_value_never_fails() {
    assert_eq!(format_time_value("07:05"), "07:05");
    assert_eq!(format_time_value("07:05:33"), "07:05");
    assert_eq!(format_time_value("garbage"), "00:00");
    assert_eq!(format_time_value(""), "00:00");
    assert_eq!(format_time_value("25:00"), "00:00");
}

fn sample_events() -> Vec<Event> {
    let mut a = event("Cabinet", "2024-03-10", "09:00", "10:00");
    a.is_presidential_agenda = true;
    a.responsible_parties = "Fred, Ana".into();

    let mut b = event("Workshop", "2024-03-10", "14:00", "16:00");
    b.responsible_parties = "Bruno".into();

    let mut c = event("Inauguration", "2024-03-12", "10:00", "12:00");
    c.is_presidential_agenda = true;
    c.responsible_parties = "ana maria".into();

    vec![Event::new(1, a), Event::new(2, b), Event::new(3, c)]
}

fn ids(events: &[Event], criteria: &FilterCriteria) -> Vec<i64> {
    present(events, criteria, at("2024-03-10T09:30"))
        .into_iter()
        .map(|(ev, _)| ev.id)
        .collect()
}

#[test]
fn test_filter_by_date_type_and_responsible() {
    let events = sample_events();

    assert_eq!(ids(&events, &FilterCriteria::default()), vec![1, 2, 3]);

    let by_date = FilterCriteria {
        date: Some(d("2024-03-10")),
        ..Default::default()
    };
    assert_eq!(ids(&events, &by_date), vec![1, 2]);

    let presidential = FilterCriteria {
        agenda: AgendaFilter::Presidential,
        ..Default::default()
    };
    assert_eq!(ids(&events, &presidential), vec![1, 3]);

    let other = FilterCriteria {
        agenda: AgendaFilter::Other,
        ..Default::default()
    };
    assert_eq!(ids(&events, &other), vec![2]);

    let ana = FilterCriteria {
        responsible: Some("ANA".into()),
        ..Default::default()
    };
    assert_eq!(ids(&events, &ana), vec![1, 3]);

    let combined = FilterCriteria {
        date: Some(d("2024-03-10")),
        agenda: AgendaFilter::Presidential,
        responsible: Some("fred".into()),
    };
    assert_eq!(ids(&events, &combined), vec![1]);
}

#[test]
fn test_blank_responsible_filter_is_ignored() {
    let events = sample_events();
    let blank = FilterCriteria {
        responsible: Some("  ".into()),
        ..Default::default()
    };
    assert_eq!(ids(&events, &blank), vec![1, 2, 3]);
}

#[test]
fn test_responsible_filter_is_not_trimmed() {
    let events = sample_events();

    // "Fred, Ana" has no "fred " in it; "ana maria" does contain "ana "
    let padded = FilterCriteria {
        responsible: Some("fred ".into()),
        ..Default::default()
    };
    assert!(ids(&events, &padded).is_empty());

    let inner_space = FilterCriteria {
        responsible: Some("ana ".into()),
        ..Default::default()
    };
    assert_eq!(ids(&events, &inner_space), vec![3]);
}

#[test]
fn test_filter_is_idempotent() {
    let events = sample_events();
    let criteria = FilterCriteria {
        responsible: Some("an".into()),
        ..Default::default()
    };
    let now = at("2024-03-10T09:30");

    let first = present(&events, &criteria, now);
    let second = present(&events, &criteria, now);
    assert_eq!(first, second);
    assert_eq!(events.len(), 3);
}

#[test]
fn test_driver_link_digits_only() {
    let mut ev = event("Trip", "2024-03-10", "09:00", "10:00");
    ev.needs_driver = true;
    ev.driver_name = "Carlos".into();
    ev.driver_phone = "(11) 98888-7777".into();

    let link = DriverLink::for_event(&ev).expect("link");
    assert_eq!(link.target, "11988887777");
    assert_eq!(link.label, "(11) 98888-7777");
    assert_eq!(link.url(), "https://wa.me/11988887777");

    ev.needs_driver = false;
    assert!(DriverLink::for_event(&ev).is_none());

    ev.needs_driver = true;
    ev.driver_phone = "   ".into();
    assert!(DriverLink::for_event(&ev).is_none());

    ev.driver_phone = "ask reception".into();
    assert!(DriverLink::for_event(&ev).is_none());
}

#[test]
fn test_highlight_policy() {
    let mut ev = event("Briefing", "2024-03-10", "09:00", "10:00");

    let past = Highlight::for_event(TemporalClass::Past, &ev);
    assert_eq!(past.accent, Accent::Grey);
    assert!(past.dimmed);
    assert_eq!(past.badge, None);

    let today = Highlight::for_event(TemporalClass::Today, &ev);
    assert_eq!((today.accent, today.badge), (Accent::Gold, Some(Badge::Today)));

    let now = Highlight::for_event(TemporalClass::Ongoing, &ev);
    assert_eq!((now.accent, now.badge), (Accent::Red, Some(Badge::Now)));

    assert_eq!(Highlight::for_event(TemporalClass::Future, &ev).accent, Accent::Green);
    ev.is_presidential_agenda = true;
    assert_eq!(Highlight::for_event(TemporalClass::Future, &ev).accent, Accent::Blue);

    assert!(!Highlight::for_event(TemporalClass::Future, &ev).struck_through);
    ev.status = EventStatus::Cancelled;
    assert!(Highlight::for_event(TemporalClass::Future, &ev).struck_through);
}

#[test]
fn test_event_view_labels() {
    let mut fields = event("Briefing", "2024-03-10", "09:00", "10:00");
    fields.coverage = CoverageSet::new([Coverage::Press, Coverage::Photo]);
    let ev = Event::new(5, fields);

    let view = EventView::build(&ev, at("2024-03-10T09:30"));
    assert_eq!(view.id, 5);
    assert_eq!(view.date_label, "10/03/2024");
    assert_eq!(view.start_label, "09:00");
    assert_eq!(view.end_label, "10:00");
    assert_eq!(view.coverage_label, "Photo, Press");
    assert_eq!(view.class, TemporalClass::Ongoing);
    assert!(view.driver_link.is_none());
}

#[test]
fn test_coverage_string_parsing() {
    let set = CoverageSet::from_db_str("Video, social,Unknown, Video");
    assert_eq!(set.tags(), &[Coverage::Social, Coverage::Video]);
    assert_eq!(set.to_db_string(), "Social, Video");
    assert!(CoverageSet::from_db_str("").is_empty());
}

#[test]
fn test_plain_card_has_no_escape_codes() {
    let mut fields = event("Briefing", "2024-03-10", "09:00", "10:00");
    fields.needs_driver = true;
    fields.driver_name = "Carlos".into();
    fields.driver_phone = "(11) 98888-7777".into();
    let ev = Event::new(9, fields);
    let view = EventView::build(&ev, at("2024-03-10T09:30"));

    let card = ragenda::ui::card::render_card(&ev, &view, false);
    assert!(!card.contains('\x1b'));
    assert!(card.contains("#9"));
    assert!(card.contains("[NOW!]"));
    assert!(card.contains("10/03/2024"));
    assert!(card.contains("https://wa.me/11988887777"));
    assert!(card.contains("No notes."));
}
