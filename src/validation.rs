/// Normalize free-text journal input.
///
/// Returns the trimmed text, or `None` when there is nothing to
/// analyze. Blank input is a silent no-op for the caller, not an
/// error.
pub fn normalize_entry_text(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_text_is_none() {
        assert_eq!(normalize_entry_text(""), None);
        assert_eq!(normalize_entry_text("   \n\t  "), None);
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(normalize_entry_text("  feeling okay  "), Some("feeling okay"));
    }
}
