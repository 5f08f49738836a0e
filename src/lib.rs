// Copyright 2014-2016 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Arbitrary-precision signed integers.
//!
//! A `BigInt` is a sign plus a magnitude held in a [`DigitStore`]: a
//! sequence of 32-bit words that lives inline while short and in a shared,
//! copy-on-write heap buffer once it grows. Cloning a large `BigInt` is a
//! reference-count bump; the words are copied only when one of the clones
//! is written to.
//!
//! Common numerical operations are overloaded, so we can treat them
//! the same way we treat other numbers. Bitwise operators and shifts act
//! as if the value were stored in infinite two's complement.
//!
//! ## Example
//!
//! ```rust
//! use cowint::BigInt;
//! use num_traits::{One, Zero};
//! use std::mem::replace;
//!
//! // Calculate large fibonacci numbers.
//! fn fib(n: usize) -> BigInt {
//!     let mut f0: BigInt = Zero::zero();
//!     let mut f1: BigInt = One::one();
//!     for _ in 0..n {
//!         let f2 = f0 + &f1;
//!         // This is a low cost way of swapping f0 with f1 and f1 with f2.
//!         f0 = replace(&mut f1, f2);
//!     }
//!     f0
//! }
//!
//! // This is a very large number.
//! println!("fib(1000) = {}", fib(1000));
//!
//! let a: BigInt = "-7".parse().unwrap();
//! let b = BigInt::from(3);
//! assert_eq!(&a / &b, BigInt::from(-2));
//! assert_eq!(&a % &b, BigInt::from(-1));
//! assert_eq!(BigInt::from(-1) & BigInt::from(1), BigInt::from(1));
//! ```
//!
//! Division by zero and negative shift amounts panic through the operators;
//! `try_div`, `try_rem`, `try_shl` and `try_shr` report them as
//! [`ArithmeticError`] instead.

#[macro_use]
mod macros;

mod algorithms;
mod bigint;
mod digits;
mod error;

#[cfg(any(feature = "quickcheck", test))]
mod quickcheck_impls;

pub use crate::bigint::{BigInt, Sign};
pub use crate::digits::{big_digit, BigDigit, DigitStore, DoubleBigDigit, INLINE_CAPACITY};
pub use crate::error::{ArithmeticError, ParseBigIntError};
