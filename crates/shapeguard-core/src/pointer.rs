//! JSON Pointer (RFC 6901) construction for schema and mismatch locations.

/// Append one reference token to `base`, escaping `~` and `/`.
pub fn child(base: &str, token: &str) -> String {
    let escaped = token.replace('~', "~0").replace('/', "~1");
    format!("{base}/{escaped}")
}

/// Append an array index to `base`.
pub fn index(base: &str, i: usize) -> String {
    format!("{base}/{i}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_escapes_reserved_characters() {
        assert_eq!(child("", "a/b"), "/a~1b");
        assert_eq!(child("/x", "m~n"), "/x/m~0n");
        assert_eq!(child("/x", ""), "/x/");
    }

    #[test]
    fn test_index() {
        assert_eq!(index("/hobbies", 1), "/hobbies/1");
        assert_eq!(index("", 0), "/0");
    }
}
