//! Terminal rendering of event cards.

use crate::core::presenter::{Accent, Badge, EventView};
use crate::models::event::Event;
use crate::utils::colors::{
    BADGE_NOW, BADGE_TODAY, BLUE, DIM, GREEN, GREY, RED, RESET, YELLOW, colorize_optional,
};
use crate::utils::formatting::{bold, or_placeholder, pad_right, strike};

const NOTES_WIDTH: usize = 72;
const TITLE_WIDTH: usize = 56;
const PLACEHOLDER: &str = "--";

fn accent_color(accent: Accent) -> &'static str {
    match accent {
        Accent::Grey => GREY,
        Accent::Gold => YELLOW,
        Accent::Red => RED,
        Accent::Blue => BLUE,
        Accent::Green => GREEN,
    }
}

fn badge(b: Badge, color: bool) -> String {
    if !color {
        return format!("[{}]", b.label());
    }
    let style = match b {
        Badge::Today => BADGE_TODAY,
        Badge::Now => BADGE_NOW,
    };
    format!("{style} {} {RESET}", b.label())
}

fn field(value: &str, color: bool) -> String {
    let v = or_placeholder(value, PLACEHOLDER);
    if color { colorize_optional(&v) } else { v }
}

/// Render one card. With `color == false` no escape sequences are emitted.
pub fn render_card(event: &Event, view: &EventView, color: bool) -> String {
    let f = &event.fields;
    let bar = if color {
        format!("{}▌{RESET} ", accent_color(view.highlight.accent))
    } else {
        "| ".to_string()
    };

    let icon = if view.is_presidential { "👑" } else { "📌" };
    let mut title = format!("#{} {} {}", view.id, icon, view.title);
    if let Some(b) = view.highlight.badge {
        title.push(' ');
        title.push_str(&badge(b, color));
    }
    let status = f.status.to_db_str();
    let mut title_line = format!("{}  {}", pad_right(&title, TITLE_WIDTH), status);
    if color {
        title_line = bold(&title_line);
        if view.highlight.struck_through {
            title_line = strike(&title_line);
        }
    } else if view.highlight.struck_through {
        title_line = format!("{title_line} (cancelled)");
    }

    let mut lines = vec![
        title_line,
        format!(
            "📅 {} | ⏰ {} - {}",
            view.date_label, view.start_label, view.end_label
        ),
        format!("📍 Location: {}", field(&f.location, color)),
        format!("🏠 Address: {}", field(&f.address, color)),
        format!(
            "🎥 Coverage: {} | 👥 Team: {}",
            field(&view.coverage_label, color),
            field(&f.responsible_parties, color)
        ),
        format!("🎒 Equipment: {}", field(&f.equipment, color)),
    ];

    if let Some(link) = &view.driver_link {
        lines.push(format!(
            "🚗 Driver: {} ({} → {})",
            field(&f.driver_name, color),
            link.label,
            link.url()
        ));
    } else if f.needs_driver {
        lines.push(format!("🚗 Driver: {}", field(&f.driver_name, color)));
    }

    let notes = if f.notes.trim().is_empty() {
        "No notes.".to_string()
    } else {
        f.notes.clone()
    };
    let mut wrapped = textwrap::wrap(&notes, NOTES_WIDTH).into_iter();
    if let Some(first) = wrapped.next() {
        lines.push(format!("📝 Notes: {first}"));
    }
    for rest in wrapped {
        lines.push(format!("          {rest}"));
    }

    let mut out = String::new();
    for l in lines {
        if color && view.highlight.dimmed {
            out.push_str(&format!("{bar}{DIM}{l}{RESET}\n"));
        } else {
            out.push_str(&format!("{bar}{l}\n"));
        }
    }
    out
}
