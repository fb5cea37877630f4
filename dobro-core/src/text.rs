use regex::{Regex, RegexBuilder};

/// Compiles a user-supplied search pattern.
///
/// Patterns always match case-insensitively.
pub fn compile_search_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

pub fn matches_name_or_description(
    pattern: &Regex,
    name: &str,
    description: Option<&str>,
) -> bool {
    pattern.is_match(name) || description.map(|d| pattern.is_match(d)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_patterns_are_case_insensitive() {
        let re = compile_search_pattern("help.*hands").unwrap();
        assert!(re.is_match("Helping Hands"));
        assert!(re.is_match("HELPING HANDS"));
        assert!(!re.is_match("Hands that help"));
    }

    #[test]
    fn invalid_pattern_is_rejected() {
        assert!(compile_search_pattern("he(lp").is_err());
    }

    #[test]
    fn matches_either_field() {
        let re = compile_search_pattern("shelter").unwrap();
        assert!(matches_name_or_description(&re, "Shelter of Hope", None));
        assert!(matches_name_or_description(
            &re,
            "Hope",
            Some("runs an animal shelter")
        ));
        assert!(!matches_name_or_description(&re, "Hope", None));
    }
}
