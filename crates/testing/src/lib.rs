//! Testing utilities for the trivia API
//!
//! This crate provides:
//! - The fixture data set (six categories, nineteen questions)
//! - Builder patterns for question test data
//! - In-memory and failing implementations of the repository ports
//!
//! # Examples
//!
//! ```
//! use trivia_testing::{builders::*, fixtures::*};
//!
//! let categories = categories();
//! assert_eq!(categories.len(), 6);
//!
//! let question = QuestionBuilder::new()
//!     .with_text("Who discovered penicillin?")
//!     .with_category(1)
//!     .build();
//! assert_eq!(question.category.value(), 1);
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use fake;
pub use proptest;
