use crate::error::{Result, SearchError};

/// Directories never worth scanning for definitions.
pub const EXCLUDED_GLOBS: &[&str] = &[
    "!**/__pycache__/**",
    "!**/.venv/**",
    "!**/venv/**",
    "!**/site-packages/**",
    "!**/.pytest_cache/**",
];

/// One regex matching `def`, `async def` and `class` definitions of `name`, at module level or
/// indented inside a class body.
pub fn python_definition_pattern(name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(SearchError::InvalidInput(
            "definition name must not be empty".to_string(),
        ));
    }
    let name = regex::escape(name);
    Ok(format!(
        r"(^def\s+{name}\s*\(|^class\s+{name}\s*[\(:]|^\s+def\s+{name}\s*\(|^async\s+def\s+{name}\s*\(|^\s+async\s+def\s+{name}\s*\()"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    fn compiled(name: &str) -> Regex {
        Regex::new(&python_definition_pattern(name).unwrap()).unwrap()
    }

    #[test]
    fn matches_functions_methods_and_classes() {
        let re = compiled("load");
        assert!(re.is_match("def load(path):"));
        assert!(re.is_match("    def load(self):"));
        assert!(re.is_match("async def load():"));
        assert!(re.is_match("\tasync def load (self):"));
        assert!(compiled("Loader").is_match("class Loader:"));
        assert!(compiled("Loader").is_match("class Loader(Base):"));
    }

    #[test]
    fn ignores_calls_and_prefixes() {
        let re = compiled("load");
        assert!(!re.is_match("result = load(path)"));
        assert!(!re.is_match("def load_all(paths):"));
        assert!(!re.is_match("# def load(path):"));
    }

    #[test]
    fn escapes_regex_metacharacters() {
        let pattern = python_definition_pattern("a.b").unwrap();
        assert!(pattern.contains(r"a\.b"));
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(matches!(
            python_definition_pattern("  "),
            Err(SearchError::InvalidInput(_))
        ));
    }
}
