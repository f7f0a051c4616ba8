//! Shared test fixtures for QueryForge crates.
//!
//! This crate provides index value and constraint value fixtures.
//! It depends on `queryforge-core` only, so encoder tests see the same types
//! as the crate under test.
//!
//! - [`values`] - Typed index values
//! - [`constraints`] - Constraint values in both match modes
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! queryforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```
//! use queryforge_test::constraints::any_texts;
//! use queryforge_test::values::int;
//!
//! let cv = any_texts(&["red", "car"]);
//! assert_eq!(cv.values().len(), 2);
//! assert_eq!(int(1000).lexical_form(), "1000");
//! ```

pub mod constraints;
pub mod values;

pub use constraints::{all_strings, any_strings, any_texts, languages, phrase_texts};
pub use values::{date, double, int, string, text, text_in};
