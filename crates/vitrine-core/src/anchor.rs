// crates/vitrine-core/src/anchor.rs
// Same-page fragment links

/// Element id targeted by a same-page link, e.g. "#pricing" -> "pricing".
///
/// A bare "#" (or anything not starting with '#') targets nothing.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        return None;
    }
    Some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#pricing"), Some("pricing"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/about#team"), None);
    }
}
