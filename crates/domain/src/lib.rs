//! Trivia Domain Types
//!
//! This crate provides the core domain model for the trivia API: questions,
//! categories and their strongly-typed identifiers.
//!
//! ## Usage
//!
//! ```rust
//! use trivia_domain::{Category, CategoryId, NewQuestion, QuestionId};
//!
//! let science = Category::new(1, "Science");
//! let question = NewQuestion {
//!     question: "What is the heaviest organ in the human body?".to_string(),
//!     answer: "The Liver".to_string(),
//!     category: science.id,
//!     difficulty: 4,
//! }
//! .with_id(QuestionId::new(20));
//!
//! assert!(question.in_category(CategoryId::new(1)));
//! assert!(question.matches("heaviest"));
//! ```

#![warn(clippy::all)]

pub mod category;
pub mod identifiers;
pub mod question;

pub use category::{labels, Category, CategoryLabels};
pub use identifiers::{CategoryId, QuestionId};
pub use question::{NewQuestion, Question};
