/// Canonical form used for both dictionary words and queries.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use crate::alphabet::normalize;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize("  Hello "), "hello");
        assert_eq!(normalize("A_Cover"), "a_cover");
        assert_eq!(normalize("ÉCOLE"), "école");
    }
}
