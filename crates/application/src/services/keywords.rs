use aho_corasick::AhoCorasick;

/// Substring keywords that mark well-known throwaway providers. Matched
/// case-insensitively against `local_part@domain`.
const KEYWORDS: [&str; 7] = [
    "temp",
    "10min",
    "throwaway",
    "disposable",
    "guerrilla",
    "mailinator",
    "trash",
];

/// Compiled multi-pattern matcher over the fixed keyword set.
pub struct KeywordMatcher {
    automaton: AhoCorasick,
}

impl KeywordMatcher {
    pub fn new() -> Self {
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(KEYWORDS)
            .expect("keyword set is a valid pattern list");
        Self { automaton }
    }

    pub fn matches(&self, local_part: &str, domain: &str) -> bool {
        let haystack = format!("{local_part}@{domain}");
        self.automaton.is_match(&haystack)
    }
}

impl Default for KeywordMatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::KeywordMatcher;

    #[test]
    fn matches_keyword_in_local_part() {
        let matcher = KeywordMatcher::new();
        assert!(matcher.matches("throwaway123", "tempdomain.com"));
        assert!(matcher.matches("my.trash.box", "example.com"));
    }

    #[test]
    fn matches_keyword_in_domain() {
        let matcher = KeywordMatcher::new();
        assert!(matcher.matches("alice", "mailinator.com"));
        assert!(matcher.matches("bob", "10minutemail.org"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let matcher = KeywordMatcher::new();
        assert!(matcher.matches("ThrowAway", "Example.com"));
        assert!(matcher.matches("user", "GUERRILLAMAIL.COM"));
    }

    #[test]
    fn clean_address_does_not_match() {
        let matcher = KeywordMatcher::new();
        assert!(!matcher.matches("hello", "example.com"));
    }
}
