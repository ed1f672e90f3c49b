//! Text exercises for the kata ecosystem.
//!
//! - **Bob** — [`reply`], the teenager's five canned responses
//! - **Pangram** — [`is_pangram`]
//! - **Luhn** — [`is_valid`] checksum validation
//!
//! # Example
//!
//! ```
//! use kata_text::{is_pangram, is_valid, reply};
//!
//! assert_eq!(reply("How are you?"), "Sure.");
//! assert!(is_pangram("The quick brown fox jumps over the lazy dog."));
//! assert!(is_valid("4539 3195 0343 6467"));
//! ```

pub mod bob;
pub mod luhn;
pub mod pangram;

pub use bob::reply;
pub use luhn::is_valid;
pub use pangram::is_pangram;
