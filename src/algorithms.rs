// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Word-slice arithmetic shared by the `BigInt` operators.
//!
//! All slices are little-endian base 2^32. Functions in this module work on
//! magnitudes only; signs are applied by the caller.

use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::iter::repeat;

use crate::digits::big_digit;
use crate::digits::{BigDigit, DoubleBigDigit};

/*
 * Generic functions for add/subtract/multiply with carry/borrow:
 */

// Add with carry:
#[inline]
pub fn adc(a: BigDigit, b: BigDigit, carry: &mut BigDigit) -> BigDigit {
    let (hi, lo) = big_digit::from_doublebigdigit(
        (a as DoubleBigDigit) + (b as DoubleBigDigit) + (*carry as DoubleBigDigit),
    );

    *carry = hi;
    lo
}

// Subtract with borrow:
#[inline]
pub fn sbb(a: BigDigit, b: BigDigit, borrow: &mut BigDigit) -> BigDigit {
    let (hi, lo) = big_digit::from_doublebigdigit(
        big_digit::BASE + (a as DoubleBigDigit)
            - (b as DoubleBigDigit)
            - (*borrow as DoubleBigDigit),
    );
    /*
    hi * (base) + lo == 1*(base) + ai - bi - borrow
    => ai - bi - borrow < 0 <=> hi == 0
    */
    *borrow = (hi == 0) as BigDigit;
    lo
}

#[inline]
pub fn mac_with_carry(a: BigDigit, b: BigDigit, c: BigDigit, carry: &mut BigDigit) -> BigDigit {
    let (hi, lo) = big_digit::from_doublebigdigit(
        (a as DoubleBigDigit)
            + (b as DoubleBigDigit) * (c as DoubleBigDigit)
            + (*carry as DoubleBigDigit),
    );
    *carry = hi;
    lo
}

/// Divide a two digit numerator by a one digit divisor, returns quotient and remainder:
///
/// Note: the caller must ensure that both the quotient and remainder will fit into a single digit.
/// This is _not_ true for an arbitrary numerator/denominator.
///
/// (This function also matches what the x86 divide instruction does).
#[inline]
pub fn div_wide(hi: BigDigit, lo: BigDigit, divisor: BigDigit) -> (BigDigit, BigDigit) {
    debug_assert!(hi < divisor);

    let lhs = big_digit::to_doublebigdigit(hi, lo);
    let rhs = divisor as DoubleBigDigit;
    ((lhs / rhs) as BigDigit, (lhs % rhs) as BigDigit)
}

/// Length of `a` without its most significant zero words.
#[inline]
pub fn trimmed_len(a: &[BigDigit]) -> usize {
    a.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

/// Compares two magnitudes, ignoring most significant zero words.
pub fn cmp_slice(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    let a = &a[..trimmed_len(a)];
    let b = &b[..trimmed_len(b)];

    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (&ai, &bi) in a.iter().rev().zip(b.iter().rev()) {
        if ai < bi {
            return Less;
        }
        if ai > bi {
            return Greater;
        }
    }
    Equal
}

/// `a += b`, returning the carry out of `a`'s top word. Requires `a.len() >= b.len()`.
pub fn add2(a: &mut [BigDigit], b: &[BigDigit]) -> BigDigit {
    debug_assert!(a.len() >= b.len());

    let mut carry = 0;
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = adc(*a, *b, &mut carry);
    }

    if carry != 0 {
        for a in a_hi {
            *a = adc(*a, 0, &mut carry);
            if carry == 0 {
                break;
            }
        }
    }

    carry
}

/// `a -= b`. Requires `a >= b` as magnitudes.
pub fn sub2(a: &mut [BigDigit], b: &[BigDigit]) {
    let mut borrow = 0;

    let len = a.len().min(b.len());
    let (a_lo, a_hi) = a.split_at_mut(len);
    let (b_lo, b_hi) = b.split_at(len);

    for (a, b) in a_lo.iter_mut().zip(b_lo) {
        *a = sbb(*a, *b, &mut borrow);
    }

    if borrow != 0 {
        for a in a_hi {
            *a = sbb(*a, 0, &mut borrow);
            if borrow == 0 {
                break;
            }
        }
    }

    // note: we're _required_ to fail on underflow
    assert!(
        borrow == 0 && b_hi.iter().all(|x| *x == 0),
        "Cannot subtract b from a because b is larger than a."
    );
}

/// Schoolbook product of two magnitudes, `a.len() + b.len() + 1` words long.
pub fn mul3(a: &[BigDigit], b: &[BigDigit]) -> Vec<BigDigit> {
    let mut prod: Vec<BigDigit> = vec![0; a.len() + b.len() + 1];

    for (i, &ai) in a.iter().enumerate() {
        if ai == 0 {
            continue;
        }
        let mut carry = 0;
        let (acc_lo, acc_hi) = prod[i..].split_at_mut(b.len());
        for (acc, &bj) in acc_lo.iter_mut().zip(b) {
            *acc = mac_with_carry(*acc, ai, bj, &mut carry);
        }
        let mut rest = acc_hi.iter_mut();
        while carry != 0 {
            match rest.next() {
                Some(acc) => *acc = adc(*acc, 0, &mut carry),
                None => break,
            }
        }
    }

    prod
}

/// Multiplies a magnitude by a single word, `a.len() + 1` words long.
fn mul_digit(a: &[BigDigit], b: BigDigit) -> Vec<BigDigit> {
    let mut carry = 0;
    let mut prod: Vec<BigDigit> = a.iter().map(|&ai| mac_with_carry(0, ai, b, &mut carry)).collect();
    prod.push(carry);
    prod
}

/// Divides a magnitude by a single nonzero word.
pub fn div_rem_digit(a: &[BigDigit], b: BigDigit) -> (Vec<BigDigit>, BigDigit) {
    debug_assert!(b != 0);

    let mut q = vec![0; a.len()];
    let mut rem = 0;

    for (qi, &ai) in q.iter_mut().zip(a).rev() {
        let (d, r) = div_wide(rem, ai, b);
        *qi = d;
        rem = r;
    }

    (q, rem)
}

/// Truncating division of two magnitudes, returning `(quotient, remainder)`.
///
/// `b` must be nonzero. Results are not normalized.
pub fn div_rem(a: &[BigDigit], b: &[BigDigit]) -> (Vec<BigDigit>, Vec<BigDigit>) {
    let a = &a[..trimmed_len(a)];
    let b = &b[..trimmed_len(b)];
    assert!(!b.is_empty(), "attempt to divide by zero");

    if b.len() == 1 {
        let (q, r) = div_rem_digit(a, b[0]);
        return (q, vec![r]);
    }
    if cmp_slice(a, b) == Less {
        return (vec![0], a.to_vec());
    }

    /*
     * This algorithm is from Knuth, TAOCP vol 2 section 4.3, algorithm D.
     *
     * Both operands are first scaled by f = BASE / (b_top + 1). That leaves the
     * divisor's top word at least BASE / 2, which keeps every trial digit formed
     * from the top two words of the window within 2 of the true digit.
     */
    let n = b.len();
    let f = (big_digit::BASE / (b[n - 1] as DoubleBigDigit + 1)) as BigDigit;

    let v = {
        let mut v = mul_digit(b, f);
        debug_assert_eq!(v[n], 0);
        v.truncate(n);
        v
    };
    // one extra word so the first window has room for the scaling overflow
    let mut u = mul_digit(a, f);
    let v_top = v[n - 1];

    let q_len = a.len() - n + 1;
    let mut q = vec![0; q_len];

    for j in (0..q_len).rev() {
        // trial digit from the top two words of the window, clamped to one word
        let (hi, lo) = (u[j + n], u[j + n - 1]);
        let mut qhat = if hi >= v_top {
            BigDigit::MAX
        } else {
            div_wide(hi, lo, v_top).0
        };

        let mut prod = mul_digit(&v, qhat);
        while cmp_slice(&prod, &u[j..j + n + 1]) == Greater {
            qhat -= 1;
            sub2(&mut prod, &v);
        }

        sub2(&mut u[j..j + n + 1], &prod);
        q[j] = qhat;
    }

    // the remainder is still scaled by f
    u.truncate(n);
    let (r, rest) = div_rem_digit(&u, f);
    debug_assert_eq!(rest, 0);

    (q, r)
}

/// Writes `len` words of the infinite two's-complement form of a signed magnitude.
///
/// Positions past `mag` are sign-extended. `len` must exceed `mag.len()` for
/// the top bit of the window to carry the sign.
pub fn to_twos_complement(negative: bool, mag: &[BigDigit], len: usize) -> Vec<BigDigit> {
    let mut words: Vec<BigDigit> = mag.iter().cloned().chain(repeat(0)).take(len).collect();
    if negative {
        let mut carry = 1;
        for w in words.iter_mut() {
            *w = adc(!*w, 0, &mut carry);
        }
    }
    words
}

/// Reads a two's-complement window back into `(negative, magnitude)`.
///
/// The sign is taken from the top bit of the last word.
pub fn from_twos_complement(mut words: Vec<BigDigit>) -> (bool, Vec<BigDigit>) {
    let negative = words.last().map_or(false, |&top| top >> (big_digit::BITS - 1) == 1);
    if negative {
        let mut carry = 1;
        for w in words.iter_mut() {
            *w = adc(!*w, 0, &mut carry);
        }
    }
    (negative, words)
}

#[inline]
fn sign_fill(words: &[BigDigit]) -> BigDigit {
    match words.last() {
        Some(&top) if top >> (big_digit::BITS - 1) == 1 => BigDigit::MAX,
        _ => 0,
    }
}

/// Shifts a two's-complement window left by `bits`, widening it so no bits are lost.
pub fn shl_window(words: &[BigDigit], bits: usize) -> Vec<BigDigit> {
    let digits = bits / big_digit::BITS;
    let shift = bits % big_digit::BITS;
    let fill = sign_fill(words);

    let src = |i: usize| -> BigDigit {
        if i < digits {
            0
        } else {
            words.get(i - digits).cloned().unwrap_or(fill)
        }
    };

    let len = words.len() + digits + 1;
    (0..len)
        .map(|i| {
            if shift == 0 {
                src(i)
            } else {
                let low = if i == 0 { 0 } else { src(i - 1) };
                (src(i) << shift) | (low >> (big_digit::BITS - shift))
            }
        })
        .collect()
}

/// Arithmetic right shift of a two's-complement window by `bits`.
///
/// Vacated positions are filled with the window's sign, so negative values
/// round toward negative infinity.
pub fn shr_window(words: &[BigDigit], bits: usize) -> Vec<BigDigit> {
    let digits = bits / big_digit::BITS;
    let shift = bits % big_digit::BITS;
    let fill = sign_fill(words);

    let src = |i: usize| -> BigDigit {
        i.checked_add(digits)
            .and_then(|j| words.get(j).cloned())
            .unwrap_or(fill)
    };

    (0..words.len())
        .map(|i| {
            if shift == 0 {
                src(i)
            } else {
                (src(i) >> shift) | (src(i + 1) << (big_digit::BITS - shift))
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/algorithms.rs"]
mod algorithms_tests;
