use crate::models::view_month::NavIntent;

/// A line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    Navigate(NavIntent),
    Help,
    Quit,
    Unknown(String),
}

impl AppCommand {
    pub const HELP: &'static str = "Commands: p/prev, n/next, t/today, h/help, q/quit";

    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.to_ascii_lowercase().as_str() {
            "p" | "prev" | "previous" | "<" => Self::Navigate(NavIntent::Previous),
            "n" | "next" | ">" => Self::Navigate(NavIntent::Next),
            "t" | "today" => Self::Navigate(NavIntent::Today),
            "" | "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(input.to_string()),
        }
    }
}
