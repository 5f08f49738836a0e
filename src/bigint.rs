// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The signed big integer type.
//!
//! A `BigInt` is a sign flag plus a `DigitStore` magnitude. Bitwise
//! operators and shifts behave as if the value were stored in infinite
//! two's complement.

use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::fmt;
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};
use std::str::{self, FromStr};

use num_integer::Integer;
use num_traits::{
    CheckedAdd, CheckedDiv, CheckedMul, CheckedRem, CheckedSub, FromPrimitive, Num, One, Signed,
    ToPrimitive, Zero,
};

use crate::algorithms::{
    add2, cmp_slice, div_rem, div_rem_digit, from_twos_complement, mac_with_carry, mul3,
    shl_window, shr_window, sub2, to_twos_complement, trimmed_len,
};
use crate::digits::{big_digit, BigDigit, DigitStore};
use crate::error::{ArithmeticError, ParseBigIntError};

use self::Sign::{Minus, NoSign, Plus};

#[cfg(test)]
#[path = "tests/bigint.rs"]
mod bigint_tests;

/// A Sign is a `BigInt`'s composing element.
#[derive(PartialEq, PartialOrd, Eq, Ord, Copy, Clone, Debug, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

impl Neg for Sign {
    type Output = Sign;

    /// Negate Sign value.
    #[inline]
    fn neg(self) -> Sign {
        match self {
            Minus => Plus,
            NoSign => NoSign,
            Plus => Minus,
        }
    }
}

impl Mul<Sign> for Sign {
    type Output = Sign;

    #[inline]
    fn mul(self, other: Sign) -> Sign {
        match (self, other) {
            (NoSign, _) | (_, NoSign) => NoSign,
            (Plus, Plus) | (Minus, Minus) => Plus,
            (Plus, Minus) | (Minus, Plus) => Minus,
        }
    }
}

/// A big signed integer type.
///
/// The magnitude is never stored with most significant zero words (other
/// than the single word of zero itself), and zero is never negative.
#[derive(Clone, Debug, Hash)]
pub struct BigInt {
    negative: bool,
    data: DigitStore,
}

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, other: &BigInt) -> bool {
        self.negative == other.negative && self.data == other.data
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &BigInt) -> Ordering {
        if self.negative != other.negative {
            return if self.negative { Less } else { Greater };
        }

        let mag = cmp_slice(self.data.as_slice(), other.data.as_slice());
        if self.negative {
            mag.reverse()
        } else {
            mag
        }
    }
}

impl Default for BigInt {
    #[inline]
    fn default() -> BigInt {
        Zero::zero()
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &to_str_radix_unsigned(self.magnitude(), 10))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0b", &to_str_radix_unsigned(self.magnitude(), 2))
    }
}

impl fmt::Octal for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0o", &to_str_radix_unsigned(self.magnitude(), 8))
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0x", &to_str_radix_unsigned(self.magnitude(), 16))
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(
            !self.negative,
            "0x",
            &to_str_radix_unsigned(self.magnitude(), 16).to_ascii_uppercase(),
        )
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    #[inline]
    fn from_str(s: &str) -> Result<BigInt, ParseBigIntError> {
        BigInt::from_str_radix(s, 10)
    }
}

impl Num for BigInt {
    type FromStrRadixErr = ParseBigIntError;

    /// Creates and initializes a BigInt.
    ///
    /// Accepts an optional leading `-` followed by at least one digit valid
    /// in `radix`.
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, ParseBigIntError> {
        assert!(
            (2..=36).contains(&radix),
            "The radix must be within 2...36"
        );
        let (negative, digits) = match s.strip_prefix('-') {
            Some(tail) => (true, tail),
            None => (false, s),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::empty());
        }

        let mut v = Vec::with_capacity(digits.len());
        for b in digits.bytes() {
            let d = match b {
                b'0'..=b'9' => b - b'0',
                b'a'..=b'z' => b - b'a' + 10,
                b'A'..=b'Z' => b - b'A' + 10,
                _ => u8::MAX,
            };
            if (d as u32) < radix {
                v.push(d);
            } else {
                return Err(ParseBigIntError::invalid());
            }
        }

        Ok(BigInt::from_parts(negative, from_radix_digits_be(&v, radix)))
    }
}

/// Returns the greatest power of the radix that fits in a `BigDigit`,
/// together with its exponent.
fn get_radix_base(radix: u32) -> (BigDigit, usize) {
    debug_assert!((2..=36).contains(&radix));

    let mut base: BigDigit = radix;
    let mut power = 1;
    while let Some(b) = base.checked_mul(radix) {
        base = b;
        power += 1;
    }
    (base, power)
}

// Fold big-endian digit values into a magnitude, one `BigDigit`-sized chunk at a time.
fn from_radix_digits_be(v: &[u8], radix: u32) -> Vec<BigDigit> {
    let (base, power) = get_radix_base(radix);
    let mut data: Vec<BigDigit> = vec![0];

    let head_len = match v.len() % power {
        0 => power,
        n => n,
    };
    let (head, tail) = v.split_at(head_len.min(v.len()));

    for chunk in Some(head).into_iter().chain(tail.chunks(power)) {
        let n = chunk
            .iter()
            .fold(0, |acc: BigDigit, &d| acc * radix + d as BigDigit);
        let scale = if chunk.len() == power {
            base
        } else {
            radix.pow(chunk.len() as u32)
        };

        // data = data * scale + n
        let mut carry = n;
        for d in data.iter_mut() {
            *d = mac_with_carry(0, *d, scale, &mut carry);
        }
        if carry != 0 {
            data.push(carry);
        }
    }

    data
}

// Decimal (or other radix) digits of a magnitude, most significant first.
fn to_str_radix_unsigned(mag: &[BigDigit], radix: u32) -> String {
    assert!(
        (2..=36).contains(&radix),
        "The radix must be within 2...36"
    );
    const CHARS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let (base, power) = get_radix_base(radix);
    let mut rest = mag[..trimmed_len(mag)].to_vec();
    let mut res: Vec<u8> = Vec::with_capacity(rest.len() * big_digit::BITS / 3 + 1);

    while !rest.is_empty() {
        let (q, mut r) = div_rem_digit(&rest, base);
        rest = q;
        rest.truncate(trimmed_len(&rest));

        if rest.is_empty() {
            while r != 0 {
                res.push(CHARS[(r % radix) as usize]);
                r /= radix;
            }
        } else {
            for _ in 0..power {
                res.push(CHARS[(r % radix) as usize]);
                r /= radix;
            }
        }
    }

    if res.is_empty() {
        res.push(b'0');
    }
    res.reverse();
    // only ASCII digits and letters were pushed
    res.into_iter().map(char::from).collect()
}

impl Zero for BigInt {
    #[inline]
    fn zero() -> BigInt {
        BigInt {
            negative: false,
            data: DigitStore::new(),
        }
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data.len() == 1 && self.data[0] == 0
    }
}

impl One for BigInt {
    #[inline]
    fn one() -> BigInt {
        BigInt::from(1u32)
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        BigInt {
            negative: false,
            data: self.data.clone(),
        }
    }

    #[inline]
    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if *self <= *other {
            Zero::zero()
        } else {
            self - other
        }
    }

    #[inline]
    fn signum(&self) -> BigInt {
        match self.sign() {
            Plus => BigInt::one(),
            Minus => -BigInt::one(),
            NoSign => Zero::zero(),
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        self.sign() == Plus
    }

    #[inline]
    fn is_negative(&self) -> bool {
        self.negative
    }
}

impl<'a> AddAssign<&'a BigInt> for BigInt {
    fn add_assign(&mut self, other: &BigInt) {
        if other.is_zero() {
            return;
        }
        if self.negative != other.negative {
            // a + b == a - (-b)
            *self -= &-other;
            return;
        }

        if self.data.len() < other.data.len() {
            self.data.resize(other.data.len());
        }
        let carry = add2(self.data.as_mut_slice(), other.data.as_slice());
        if carry != 0 {
            self.data.push(carry);
        }
        self.normalize();
    }
}

impl<'a> SubAssign<&'a BigInt> for BigInt {
    fn sub_assign(&mut self, other: &BigInt) {
        // -0 is not negative, so a zero operand must stop here
        if other.is_zero() {
            return;
        }
        if self.negative != other.negative {
            // a - b == a + (-b)
            *self += &-other;
            return;
        }

        match cmp_slice(self.data.as_slice(), other.data.as_slice()) {
            Equal => {
                *self = Zero::zero();
                return;
            }
            Less => {
                let mut diff = other.data.clone();
                sub2(diff.as_mut_slice(), self.data.as_slice());
                self.data = diff;
                self.negative = !self.negative;
            }
            Greater => sub2(self.data.as_mut_slice(), other.data.as_slice()),
        }
        self.normalize();
    }
}

forward_val_assign!(impl AddAssign for BigInt, add_assign);
forward_val_assign!(impl SubAssign for BigInt, sub_assign);

forward_all_binop_to_assign!(impl Add for BigInt, add, add_assign, commutative);
forward_all_binop_to_assign!(impl Sub for BigInt, sub, sub_assign, ordered);

impl<'a, 'b> Mul<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn mul(self, other: &BigInt) -> BigInt {
        BigInt::from_parts(
            self.negative != other.negative,
            mul3(self.data.as_slice(), other.data.as_slice()),
        )
    }
}

forward_all_binop_to_ref_ref!(impl Mul for BigInt, mul);
forward_assign_to_ref_ref!(impl MulAssign for BigInt, mul_assign, *);

impl<'a, 'b> Div<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn div(self, other: &BigInt) -> BigInt {
        self.try_div(other).unwrap_or_else(|e| panic!("{}", e))
    }
}

forward_all_binop_to_ref_ref!(impl Div for BigInt, div);
forward_assign_to_ref_ref!(impl DivAssign for BigInt, div_assign, /);

impl<'a, 'b> Rem<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn rem(self, other: &BigInt) -> BigInt {
        self.try_rem(other).unwrap_or_else(|e| panic!("{}", e))
    }
}

forward_all_binop_to_ref_ref!(impl Rem for BigInt, rem);
forward_assign_to_ref_ref!(impl RemAssign for BigInt, rem_assign, %);

impl<'a, 'b> BitAnd<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn bitand(self, other: &BigInt) -> BigInt {
        self.bitwise(other, |a, b| a & b)
    }
}

impl<'a, 'b> BitOr<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn bitor(self, other: &BigInt) -> BigInt {
        self.bitwise(other, |a, b| a | b)
    }
}

impl<'a, 'b> BitXor<&'b BigInt> for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn bitxor(self, other: &BigInt) -> BigInt {
        self.bitwise(other, |a, b| a ^ b)
    }
}

forward_all_binop_to_ref_ref!(impl BitAnd for BigInt, bitand);
forward_all_binop_to_ref_ref!(impl BitOr for BigInt, bitor);
forward_all_binop_to_ref_ref!(impl BitXor for BigInt, bitxor);
forward_assign_to_ref_ref!(impl BitAndAssign for BigInt, bitand_assign, &);
forward_assign_to_ref_ref!(impl BitOrAssign for BigInt, bitor_assign, |);
forward_assign_to_ref_ref!(impl BitXorAssign for BigInt, bitxor_assign, ^);

// Unsigned amounts past `usize::MAX` cannot address any bit and panic.
fn shift_amount<T>(rhs: T) -> usize
where
    T: Copy + fmt::Display,
    usize: TryFrom<T>,
{
    usize::try_from(rhs)
        .unwrap_or_else(|_| panic!("attempt to shift by an amount too large for usize ({})", rhs))
}

macro_rules! impl_shift_unsigned {
    ($($t:ty)*) => {$(
        impl<'a> Shl<$t> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, rhs: $t) -> BigInt {
                self.shl_bits(shift_amount(rhs))
            }
        }

        impl Shl<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, rhs: $t) -> BigInt {
                (&self) << rhs
            }
        }

        impl ShlAssign<$t> for BigInt {
            #[inline]
            fn shl_assign(&mut self, rhs: $t) {
                *self = &*self << rhs;
            }
        }

        impl<'a> Shr<$t> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, rhs: $t) -> BigInt {
                self.shr_bits(shift_amount(rhs))
            }
        }

        impl Shr<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, rhs: $t) -> BigInt {
                (&self) >> rhs
            }
        }

        impl ShrAssign<$t> for BigInt {
            #[inline]
            fn shr_assign(&mut self, rhs: $t) {
                *self = &*self >> rhs;
            }
        }
    )*};
}

// Negative amounts panic with `ArithmeticError::InvalidShift`.
macro_rules! impl_shift_signed {
    ($($t:ty)*) => {$(
        impl<'a> Shl<$t> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, rhs: $t) -> BigInt {
                self.try_shl(rhs as i64).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl Shl<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shl(self, rhs: $t) -> BigInt {
                (&self) << rhs
            }
        }

        impl ShlAssign<$t> for BigInt {
            #[inline]
            fn shl_assign(&mut self, rhs: $t) {
                *self = &*self << rhs;
            }
        }

        impl<'a> Shr<$t> for &'a BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, rhs: $t) -> BigInt {
                self.try_shr(rhs as i64).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl Shr<$t> for BigInt {
            type Output = BigInt;

            #[inline]
            fn shr(self, rhs: $t) -> BigInt {
                (&self) >> rhs
            }
        }

        impl ShrAssign<$t> for BigInt {
            #[inline]
            fn shr_assign(&mut self, rhs: $t) {
                *self = &*self >> rhs;
            }
        }
    )*};
}

impl_shift_unsigned!(u8 u16 u32 u64 usize);
impl_shift_signed!(i8 i16 i32 i64 isize);

impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        self.negative = !self.negative;
        self.normalize();
        self
    }
}

impl<'a> Neg for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}

impl Not for BigInt {
    type Output = BigInt;

    /// `!a == -a - 1`, the bitwise complement in two's complement.
    #[inline]
    fn not(self) -> BigInt {
        -self - BigInt::one()
    }
}

impl<'a> Not for &'a BigInt {
    type Output = BigInt;

    #[inline]
    fn not(self) -> BigInt {
        !self.clone()
    }
}

impl CheckedAdd for BigInt {
    #[inline]
    fn checked_add(&self, v: &BigInt) -> Option<BigInt> {
        Some(self + v)
    }
}

impl CheckedSub for BigInt {
    #[inline]
    fn checked_sub(&self, v: &BigInt) -> Option<BigInt> {
        Some(self - v)
    }
}

impl CheckedMul for BigInt {
    #[inline]
    fn checked_mul(&self, v: &BigInt) -> Option<BigInt> {
        Some(self * v)
    }
}

impl CheckedDiv for BigInt {
    #[inline]
    fn checked_div(&self, v: &BigInt) -> Option<BigInt> {
        self.try_div(v).ok()
    }
}

impl CheckedRem for BigInt {
    #[inline]
    fn checked_rem(&self, v: &BigInt) -> Option<BigInt> {
        self.try_rem(v).ok()
    }
}

impl Integer for BigInt {
    /// Truncating division; the remainder takes the sign of `self`.
    #[inline]
    fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        self.try_div_rem(other).unwrap_or_else(|e| panic!("{}", e))
    }

    #[inline]
    fn div_floor(&self, other: &BigInt) -> BigInt {
        let (d, _) = self.div_mod_floor(other);
        d
    }

    #[inline]
    fn mod_floor(&self, other: &BigInt) -> BigInt {
        let (_, m) = self.div_mod_floor(other);
        m
    }

    fn div_mod_floor(&self, other: &BigInt) -> (BigInt, BigInt) {
        let (d, m) = self.div_rem(other);
        if !m.is_zero() && m.negative != other.negative {
            (d - BigInt::one(), m + other)
        } else {
            (d, m)
        }
    }

    /// Calculates the Greatest Common Divisor (GCD) of the number and `other`.
    ///
    /// The result is always positive.
    fn gcd(&self, other: &BigInt) -> BigInt {
        // Use Euclid's algorithm
        let mut m = self.abs();
        let mut n = other.abs();
        while !m.is_zero() {
            let temp = m;
            m = &n % &temp;
            n = temp;
        }
        n
    }

    /// Calculates the Lowest Common Multiple (LCM) of the number and `other`.
    fn lcm(&self, other: &BigInt) -> BigInt {
        if self.is_zero() || other.is_zero() {
            return Zero::zero();
        }
        (self / self.gcd(other) * other).abs()
    }

    /// Deprecated, use `is_multiple_of` instead.
    #[inline]
    fn divides(&self, other: &BigInt) -> bool {
        self.is_multiple_of(other)
    }

    /// Returns `true` if the number is a multiple of `other`.
    #[inline]
    fn is_multiple_of(&self, other: &BigInt) -> bool {
        if other.is_zero() {
            return self.is_zero();
        }
        (self % other).is_zero()
    }

    #[inline]
    fn is_even(&self) -> bool {
        self.data[0] & 1 == 0
    }

    #[inline]
    fn is_odd(&self) -> bool {
        !self.is_even()
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        let m = self.magnitude_u64()?;
        if !self.negative {
            i64::try_from(m).ok()
        } else if m <= 1 << 63 {
            Some((m as i64).wrapping_neg())
        } else {
            None
        }
    }

    fn to_u64(&self) -> Option<u64> {
        if self.negative {
            return None;
        }
        self.magnitude_u64()
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }

    #[inline]
    fn from_u64(n: u64) -> Option<BigInt> {
        Some(BigInt::from(n))
    }
}

impl From<u64> for BigInt {
    fn from(n: u64) -> Self {
        let (hi, lo) = big_digit::from_doublebigdigit(n);
        BigInt::from_parts(false, vec![lo, hi])
    }
}

impl From<i64> for BigInt {
    fn from(n: i64) -> Self {
        let mut res = BigInt::from(n.unsigned_abs());
        if n < 0 {
            res.negative = true;
        }
        res
    }
}

macro_rules! impl_bigint_from_uint {
    ($T:ty) => {
        impl From<$T> for BigInt {
            #[inline]
            fn from(n: $T) -> Self {
                BigInt::from(n as u64)
            }
        }
    };
}

macro_rules! impl_bigint_from_int {
    ($T:ty) => {
        impl From<$T> for BigInt {
            #[inline]
            fn from(n: $T) -> Self {
                BigInt::from(n as i64)
            }
        }
    };
}

impl_bigint_from_uint!(u8);
impl_bigint_from_uint!(u16);
impl_bigint_from_uint!(u32);
impl_bigint_from_uint!(usize);

impl_bigint_from_int!(i8);
impl_bigint_from_int!(i16);
impl_bigint_from_int!(i32);
impl_bigint_from_int!(isize);

impl BigInt {
    /// Creates and initializes a BigInt.
    ///
    /// The digits are in little-endian base 2^32. A `NoSign` sign yields zero.
    #[inline]
    pub fn new(sign: Sign, digits: Vec<BigDigit>) -> BigInt {
        match sign {
            NoSign => Zero::zero(),
            _ => BigInt::from_parts(sign == Minus, digits),
        }
    }

    /// Creates and initializes a `BigInt`.
    ///
    /// The digits are in little-endian base 2^32.
    #[inline]
    pub fn from_slice(sign: Sign, slice: &[BigDigit]) -> BigInt {
        BigInt::new(sign, slice.to_vec())
    }

    /// Creates and initializes a `BigInt`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowint::BigInt;
    ///
    /// assert_eq!(BigInt::parse_bytes(b"-1234", 10), Some(BigInt::from(-1234)));
    /// assert_eq!(BigInt::parse_bytes(b"ABCD", 16), Some(BigInt::from(0xABCD)));
    /// assert_eq!(BigInt::parse_bytes(b"G", 16), None);
    /// ```
    #[inline]
    pub fn parse_bytes(buf: &[u8], radix: u32) -> Option<BigInt> {
        str::from_utf8(buf)
            .ok()
            .and_then(|s| BigInt::from_str_radix(s, radix).ok())
    }

    fn from_parts(negative: bool, digits: Vec<BigDigit>) -> BigInt {
        let mut res = BigInt {
            negative,
            data: DigitStore::from_vec(digits),
        };
        res.normalize();
        res
    }

    /// Strips most significant zero words, keeping at least one, and clears
    /// the sign of zero.
    fn normalize(&mut self) {
        let len = trimmed_len(self.data.as_slice());
        if len == 0 {
            self.data.resize(1);
            self.negative = false;
        } else {
            self.data.truncate(len);
        }
    }

    /// Returns the sign of the `BigInt`.
    #[inline]
    pub fn sign(&self) -> Sign {
        if self.is_zero() {
            NoSign
        } else if self.negative {
            Minus
        } else {
            Plus
        }
    }

    /// The magnitude words, least significant first.
    #[inline]
    pub fn magnitude(&self) -> &[BigDigit] {
        self.data.as_slice()
    }

    /// The backing store of the magnitude.
    #[inline]
    pub fn digits(&self) -> &DigitStore {
        &self.data
    }

    /// Determines the fewest bits necessary to express the magnitude.
    pub fn bits(&self) -> usize {
        if self.is_zero() {
            return 0;
        }
        let zeros = self.data.last().map_or(0, |d| d.leading_zeros());
        self.data.len() * big_digit::BITS - zeros as usize
    }

    /// Returns the integer formatted as a string in the given radix.
    /// `radix` must be in the range `[2, 36]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cowint::BigInt;
    ///
    /// let i = BigInt::parse_bytes(b"-ff", 16).unwrap();
    /// assert_eq!(i.to_str_radix(16), "-ff");
    /// ```
    pub fn to_str_radix(&self, radix: u32) -> String {
        let digits = to_str_radix_unsigned(self.magnitude(), radix);
        if self.negative {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    /// Truncating quotient and remainder, or `DivideByZero`.
    pub fn try_div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt), ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivideByZero);
        }
        let (q, r) = div_rem(self.magnitude(), other.magnitude());
        Ok((
            BigInt::from_parts(self.negative != other.negative, q),
            BigInt::from_parts(self.negative, r),
        ))
    }

    /// Quotient rounded toward zero.
    pub fn try_div(&self, other: &BigInt) -> Result<BigInt, ArithmeticError> {
        self.try_div_rem(other).map(|(q, _)| q)
    }

    /// Remainder with the sign of `self`, so that
    /// `self == (self / other) * other + self % other`.
    pub fn try_rem(&self, other: &BigInt) -> Result<BigInt, ArithmeticError> {
        self.try_div_rem(other).map(|(_, r)| r)
    }

    /// `self * 2^bits`, or `InvalidShift` when `bits` is negative.
    pub fn try_shl(&self, bits: i64) -> Result<BigInt, ArithmeticError> {
        let amount = usize::try_from(bits).map_err(|_| ArithmeticError::InvalidShift(bits))?;
        Ok(self.shl_bits(amount))
    }

    /// `floor(self / 2^bits)`, or `InvalidShift` when `bits` is negative.
    pub fn try_shr(&self, bits: i64) -> Result<BigInt, ArithmeticError> {
        let amount = usize::try_from(bits).map_err(|_| ArithmeticError::InvalidShift(bits))?;
        Ok(self.shr_bits(amount))
    }

    /// Pre-increment: adds one in place.
    pub fn inc(&mut self) -> &mut BigInt {
        *self += &BigInt::one();
        self
    }

    /// Pre-decrement: subtracts one in place.
    pub fn dec(&mut self) -> &mut BigInt {
        *self -= &BigInt::one();
        self
    }

    /// Post-increment: adds one in place and returns the previous value.
    pub fn post_inc(&mut self) -> BigInt {
        let old = self.clone();
        self.inc();
        old
    }

    /// Post-decrement: subtracts one in place and returns the previous value.
    pub fn post_dec(&mut self) -> BigInt {
        let old = self.clone();
        self.dec();
        old
    }

    // One guard word above the longer operand holds the sign bit.
    fn bitwise<F>(&self, other: &BigInt, op: F) -> BigInt
    where
        F: Fn(BigDigit, BigDigit) -> BigDigit,
    {
        let len = self.data.len().max(other.data.len()) + 1;
        let a = to_twos_complement(self.negative, self.magnitude(), len);
        let b = to_twos_complement(other.negative, other.magnitude(), len);

        let words = a.iter().zip(&b).map(|(&x, &y)| op(x, y)).collect();
        let (negative, mag) = from_twos_complement(words);
        BigInt::from_parts(negative, mag)
    }

    fn shl_bits(&self, bits: usize) -> BigInt {
        let window = to_twos_complement(self.negative, self.magnitude(), self.data.len() + 1);
        let (negative, mag) = from_twos_complement(shl_window(&window, bits));
        BigInt::from_parts(negative, mag)
    }

    fn shr_bits(&self, bits: usize) -> BigInt {
        let window = to_twos_complement(self.negative, self.magnitude(), self.data.len() + 1);
        let (negative, mag) = from_twos_complement(shr_window(&window, bits));
        BigInt::from_parts(negative, mag)
    }

    fn magnitude_u64(&self) -> Option<u64> {
        match *self.magnitude() {
            [lo] => Some(lo as u64),
            [lo, hi] => Some(big_digit::to_doublebigdigit(hi, lo)),
            _ => None,
        }
    }
}
