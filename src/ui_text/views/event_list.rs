use std::io::{self, Write};

use crate::models::event::MonthListEvent;
use crate::models::view_month::ViewMonth;

/// The "Events in {Month}" section below the grid.
pub fn render_event_list<W: Write>(
    out: &mut W,
    view: ViewMonth,
    entries: &[MonthListEvent],
) -> io::Result<()> {
    writeln!(out, "Events in {}", view.month_name())?;

    if entries.is_empty() {
        writeln!(out, "  No events scheduled this month.")?;
        return Ok(());
    }

    let label_width = entries
        .iter()
        .map(|e| e.date_label.chars().count())
        .max()
        .unwrap_or(0);
    for entry in entries {
        let padding = label_width - entry.date_label.chars().count();
        writeln!(
            out,
            "  {}{}  {}  ({})",
            entry.date_label,
            " ".repeat(padding),
            entry.title,
            entry.category.label()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::EventCategory;
    use pretty_assertions::assert_eq;

    fn render(entries: &[MonthListEvent]) -> String {
        let mut buf = Vec::new();
        render_event_list(&mut buf, ViewMonth::new(2025, 8), entries).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_empty_month() {
        assert_eq!(
            render(&[]),
            "Events in September\n  No events scheduled this month.\n"
        );
    }

    #[test]
    fn test_labels_are_aligned() {
        let entries = vec![
            MonthListEvent {
                title: "Term 1 starts".into(),
                category: EventCategory::Term,
                date_label: "2025-09-02".into(),
            },
            MonthListEvent {
                title: "Retreat".into(),
                category: EventCategory::Event,
                date_label: "2025-09-18 – 2025-09-19".into(),
            },
        ];
        assert_eq!(
            render(&entries),
            "Events in September\n\
             \x20 2025-09-02               Term 1 starts  (Term)\n\
             \x20 2025-09-18 – 2025-09-19  Retreat  (Event)\n"
        );
    }
}
