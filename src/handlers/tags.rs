use crate::models::SelectOption;

/// Split a comma-separated tag list into `multi_select` options.
///
/// Only spaces are trimmed. Empty segments are kept, so `""` yields a single
/// option with an empty name.
pub fn format_tags(raw: &str) -> Vec<SelectOption> {
    raw.split(',')
        .map(|tag| SelectOption {
            name: tag.trim_matches(' ').to_string(),
        })
        .collect()
}
