const SLUG_MAX_LEN: usize = 20;

/// Title reduced to ASCII letters, digits and dashes, capped at 20 characters.
/// Each run of whitespace becomes a single dash.
pub(crate) fn title_slug(title: &str) -> String {
    let mut dashed = String::with_capacity(title.len());
    let mut in_space = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_space {
                dashed.push('-');
            }
            in_space = true;
        } else {
            dashed.push(c);
            in_space = false;
        }
    }

    let mut slug: String = dashed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .take(SLUG_MAX_LEN)
        .collect();

    if slug.is_empty() {
        slug.push('e');
    }
    slug
}

pub(crate) fn event_id(counter: usize, iso: &str, slug: &str) -> String {
    format!("evt-{}-{}-{}", counter, iso, slug)
}
