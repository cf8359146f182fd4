//! Snapshot helpers for usage search results.

/// Format found usage paths one per line for snapshot testing.
///
/// # Example
///
/// ```
/// use graphql_test_utils::assertions::format_usages;
///
/// assert_eq!(format_usages(&["Q.a.b", "Q.c"]), "[1] Q.a.b\n[2] Q.c");
/// assert_eq!(format_usages::<&str>(&[]), "(no usages)");
/// ```
pub fn format_usages<T: std::fmt::Display>(usages: &[T]) -> String {
    if usages.is_empty() {
        return String::from("(no usages)");
    }

    usages
        .iter()
        .enumerate()
        .map(|(i, usage)| format!("[{}] {usage}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usages_numbers_in_order() {
        let formatted = format_usages(&["B.x", "A.x", "B.x"]);
        assert_eq!(formatted, "[1] B.x\n[2] A.x\n[3] B.x");
    }
}
