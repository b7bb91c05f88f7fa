use crate::models::category::EventCategory;
use crate::models::event::{CalendarData, RawEvent};

/// Demo school year used when no events file is configured.
pub fn sample_calendar(year: i32) -> CalendarData {
    let on = |title: &str, month_day: &str, category: EventCategory| {
        RawEvent::on(title, format!("{year}-{month_day}")).with_category(category)
    };

    CalendarData {
        calendar_name: format!("Sample School Calendar {year}"),
        events: vec![
            // Term 1 (Sep-Dec)
            on("Term 1 starts", "09-02", EventCategory::Term),
            on("Term 1 ends", "12-20", EventCategory::Term),
            // Term 2 (Jan-Mar)
            on("Term 2 starts", "01-06", EventCategory::Term),
            on("Term 2 ends", "03-28", EventCategory::Term),
            on("Fall break", "10-14", EventCategory::Holiday),
            on("Winter break", "12-23", EventCategory::Holiday),
            on("Spring break", "04-07", EventCategory::Holiday),
            on("PD Day (no students)", "11-11", EventCategory::ProfessionalDevelopment),
            on("Exams begin", "12-09", EventCategory::Exam),
            on("Exams end", "12-13", EventCategory::Exam),
        ],
        meta: None,
    }
}
