/// Cut the fragment (`#hash`) off a URL string.
/// Returns (`rest`, `fragment_without_hash`); the fragment spans to the
/// end of the input, so this cut happens before any other.
pub fn prune_fragment(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'#', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

/// Cut the query (`?query`) off a fragment-free URL string.
/// Returns (`rest`, `query_without_question_mark`).
pub fn prune_query(input: &str) -> (&str, Option<&str>) {
    memchr::memchr(b'?', input.as_bytes()).map_or((input, None), |pos| {
        (&input[..pos], Some(&input[pos + 1..]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_fragment() {
        assert_eq!(prune_fragment("a#b"), ("a", Some("b")));
        assert_eq!(prune_fragment("a#b#c"), ("a", Some("b#c")));
        assert_eq!(prune_fragment("a"), ("a", None));
        assert_eq!(prune_fragment("#"), ("", Some("")));
    }

    #[test]
    fn test_prune_query() {
        assert_eq!(prune_query("a?q=1"), ("a", Some("q=1")));
        assert_eq!(prune_query("a?q=1?x"), ("a", Some("q=1?x")));
        assert_eq!(prune_query("a"), ("a", None));
    }

    #[test]
    fn test_prune_order_keeps_query_marks_in_fragment() {
        let (rest, fragment) = prune_fragment("a?q=1#frag?not-a-query");
        assert_eq!(fragment, Some("frag?not-a-query"));
        assert_eq!(prune_query(rest), ("a", Some("q=1")));
    }
}
