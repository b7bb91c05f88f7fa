use crate::models::category::EventCategory;

/// Single-character marker drawn in front of an event tag.
pub(crate) fn category_marker(category: EventCategory) -> char {
    match category {
        EventCategory::Term => 'T',
        EventCategory::Holiday => 'H',
        EventCategory::Exam => 'X',
        EventCategory::ProfessionalDevelopment => 'P',
        EventCategory::Event => '*',
    }
}

/// "[T] Term  [H] Holiday  ..."
pub(crate) fn legend_line() -> String {
    EventCategory::ALL
        .iter()
        .map(|category| format!("[{}] {}", category_marker(*category), category.label()))
        .collect::<Vec<_>>()
        .join("  ")
}
