//! Shared utility functions.

/// Normalizes an item name by collapsing all whitespace runs to single
/// spaces and trimming the ends.
///
/// Multi-word item names arrive as the raw remainder of the command line,
/// so `"wurst   salat "` and `"wurst salat"` must address the same item.
pub fn normalize_name(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_name_collapses_whitespace() {
        assert_eq!(normalize_name("  wurst   salat "), "wurst salat");
        assert_eq!(normalize_name("salat"), "salat");
        assert_eq!(normalize_name("a\tb\nc"), "a b c");
    }

    #[test]
    fn test_normalize_name_empty_input() {
        assert_eq!(normalize_name(""), "");
        assert_eq!(normalize_name("   "), "");
    }
}
