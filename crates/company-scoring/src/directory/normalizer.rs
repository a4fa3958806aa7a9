/// Folds an export header such as `"Data Completeness "` into `data_completeness`.
pub(crate) fn normalize_header(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    cleaned
        .split(|ch: char| ch.is_whitespace() || ch == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
        .to_ascii_lowercase()
}

/// Splits a multi-valued industry cell on `;` or `|`.
pub(crate) fn split_tags(value: &str) -> Vec<String> {
    value
        .split([';', '|'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_folding_handles_bom_and_spacing() {
        assert_eq!(normalize_header("\u{feff}Company Size"), "company_size");
        assert_eq!(normalize_header(" Last-Updated  At "), "last_updated_at");
        assert_eq!(normalize_header("has_phone"), "has_phone");
    }

    #[test]
    fn tags_split_on_either_separator() {
        assert_eq!(
            split_tags("Logistics; Warehousing | ;Cold Chain"),
            vec!["Logistics", "Warehousing", "Cold Chain"]
        );
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("Yes"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
