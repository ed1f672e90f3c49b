//! Integer exercises for the kata ecosystem.
//!
//! Each module is a small, self-contained set of pure functions:
//!
//! - **Difference of squares** — [`square_of_sum`], [`sum_of_squares`], [`difference_of_squares`]
//! - **Primes** — [`nth_prime`] via trial division
//! - **Collatz** — [`collatz_steps`]
//! - **Grains** — [`grains_on_square`], [`total_grains`]
//! - **Perfect numbers** — [`classify`] into [`Classification`]
//! - **Leap years** — [`is_leap_year`]
//!
//! # Example
//!
//! ```
//! use kata_num::{difference_of_squares, nth_prime};
//!
//! assert_eq!(difference_of_squares(10), 2640);
//! assert_eq!(nth_prime(6).unwrap(), 13);
//! ```

pub mod collatz;
pub mod grains;
pub mod leap;
pub mod perfect;
pub mod primes;
pub mod squares;

pub use collatz::collatz_steps;
pub use grains::{grains_on_square, total_grains};
pub use leap::is_leap_year;
pub use perfect::{classify, Classification};
pub use primes::nth_prime;
pub use squares::{difference_of_squares, square_of_sum, sum_of_squares};
