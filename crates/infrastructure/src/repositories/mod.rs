//! Repository implementations for data persistence.
//!
//! PostgreSQL-backed and in-memory implementations of the question and
//! category ports defined in the application layer.

mod category_repository;
mod memory;
mod question_repository;

pub use category_repository::*;
pub use memory::*;
pub use question_repository::*;

/// Escape `LIKE` wildcards so a search term matches literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("title"), "title");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b\\c"), "a\\_b\\\\c");
    }
}
