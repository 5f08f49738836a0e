// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Failure of an arithmetic operation on `BigInt`.
///
/// The operands of a failed operation are left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Zero right-hand operand to `/` or `%`.
    #[error("attempt to divide by zero")]
    DivideByZero,
    /// Negative amount passed to `<<` or `>>`.
    #[error("attempt to shift by a negative amount ({0})")]
    InvalidShift(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BigIntErrorKind {
    Empty,
    InvalidDigit,
}

impl BigIntErrorKind {
    fn description(self) -> &'static str {
        match self {
            BigIntErrorKind::Empty => "cannot parse integer from empty string",
            BigIntErrorKind::InvalidDigit => "invalid digit found in string",
        }
    }
}

/// Error returned when parsing a `BigInt` from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .kind.description())]
pub struct ParseBigIntError {
    kind: BigIntErrorKind,
}

impl ParseBigIntError {
    pub(crate) fn empty() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::Empty,
        }
    }

    pub(crate) fn invalid() -> Self {
        ParseBigIntError {
            kind: BigIntErrorKind::InvalidDigit,
        }
    }
}
