pub mod api;
pub mod evaluator;
pub mod stack;
pub mod token;

/// Test utilities shared by unit tests and, through the `test-utils`
/// feature, by downstream integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    use crate::token::Token;

    /// Build tokens from a whitespace-separated postfix string.
    ///
    /// `x` is the variable, `~` is unary negation, alphabetic words are
    /// functions, words that start like a number are literals (passed through
    /// unvalidated), and anything else is a binary operator.
    pub fn postfix(source: &str) -> Vec<Token> {
        source
            .split_whitespace()
            .map(|word| {
                let mut chars = word.chars();
                let first = chars.next().unwrap_or(' ');
                let second = chars.next().unwrap_or(' ');
                if word == "x" {
                    Token::variable(word)
                } else if word == "~" {
                    Token::negate()
                } else if first.is_ascii_digit()
                    || (matches!(first, '-' | '.') && second.is_ascii_digit())
                {
                    Token::literal(word)
                } else if word.chars().all(|c| c.is_ascii_alphabetic()) {
                    Token::function(word)
                } else {
                    Token::operator(word)
                }
            })
            .collect()
    }

    /// Initialize tracing subscriber for tests with DEBUG level
    /// Call this at the start of tests where you want to see logging output
    ///
    /// # Example
    /// ```ignore
    /// #[test]
    /// fn test_nested_functions() {
    ///     test_utils::init_test_logging();
    ///     // ... your test code
    /// }
    /// ```
    #[cfg(test)]
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        // Try to initialize, ignore error if already initialized
        let _ = fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_test_writer()
            .try_init();
    }
}
