// Copyright 2013-2014 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Value-semantic storage for the words of a big integer.
//!
//! A `DigitStore` keeps up to `INLINE_CAPACITY` words inline. Longer
//! sequences live in a reference-counted heap buffer that is shared between
//! clones until one of them writes, at which point the writer takes a
//! private copy.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, IndexMut};
use std::rc::Rc;
use std::slice;

use tracing::trace;

/// A `BigDigit` is a `BigInt`'s composing element.
pub type BigDigit = u32;

/// A `DoubleBigDigit` is the internal type used to do the computations.  Its
/// size is the double of the size of `BigDigit`.
pub type DoubleBigDigit = u64;

/// Number of words stored without a heap allocation.
pub const INLINE_CAPACITY: usize = 2;

#[allow(non_snake_case)]
pub mod big_digit {
    use super::BigDigit;
    use super::DoubleBigDigit;

    // `DoubleBigDigit` size dependent
    pub const BITS: usize = 32;

    pub const BASE: DoubleBigDigit = 1 << BITS;
    const LO_MASK: DoubleBigDigit = (-1i32 as u32) as DoubleBigDigit;

    #[inline]
    fn get_hi(n: DoubleBigDigit) -> BigDigit {
        (n >> BITS) as BigDigit
    }
    #[inline]
    fn get_lo(n: DoubleBigDigit) -> BigDigit {
        (n & LO_MASK) as BigDigit
    }

    /// Split one `DoubleBigDigit` into two `BigDigit`s.
    #[inline]
    pub fn from_doublebigdigit(n: DoubleBigDigit) -> (BigDigit, BigDigit) {
        (get_hi(n), get_lo(n))
    }

    /// Join two `BigDigit`s into one `DoubleBigDigit`
    #[inline]
    pub fn to_doublebigdigit(hi: BigDigit, lo: BigDigit) -> DoubleBigDigit {
        (lo as DoubleBigDigit) | ((hi as DoubleBigDigit) << BITS)
    }
}

#[derive(Clone)]
enum Storage {
    Inline {
        len: usize,
        words: [BigDigit; INLINE_CAPACITY],
    },
    Shared(Rc<Vec<BigDigit>>),
}

/// An indexable sequence of `BigDigit`s, least significant first.
///
/// Cloning a heap-backed store only bumps a reference count. Every mutating
/// method first makes sure the buffer is not shared with another store.
#[derive(Clone)]
pub struct DigitStore {
    storage: Storage,
}

impl DigitStore {
    /// Creates a store holding the single word `0`.
    #[inline]
    pub fn new() -> DigitStore {
        DigitStore {
            storage: Storage::Inline {
                len: 1,
                words: [0; INLINE_CAPACITY],
            },
        }
    }

    /// Creates a store from the given words, inline when they fit.
    ///
    /// An empty vector yields the single word `0`.
    pub fn from_vec(digits: Vec<BigDigit>) -> DigitStore {
        if digits.len() <= INLINE_CAPACITY {
            DigitStore::from_slice(&digits)
        } else {
            DigitStore {
                storage: Storage::Shared(Rc::new(digits)),
            }
        }
    }

    /// Creates a store from the given words. An empty slice yields the single word `0`.
    pub fn from_slice(slice: &[BigDigit]) -> DigitStore {
        if slice.is_empty() {
            return DigitStore::new();
        }
        if slice.len() <= INLINE_CAPACITY {
            let mut words = [0; INLINE_CAPACITY];
            words[..slice.len()].copy_from_slice(slice);
            DigitStore {
                storage: Storage::Inline {
                    len: slice.len(),
                    words,
                },
            }
        } else {
            DigitStore {
                storage: Storage::Shared(Rc::new(slice.to_vec())),
            }
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        match self.storage {
            Storage::Inline { len, .. } => len,
            Storage::Shared(ref buf) => buf.len(),
        }
    }

    /// Only `pop`, `resize(0)` or `truncate(0)` can leave a store empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` while the words are stored without a heap buffer.
    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self.storage, Storage::Inline { .. })
    }

    /// Returns `true` if the heap buffer is currently shared with another store.
    #[inline]
    pub fn is_shared(&self) -> bool {
        self.ref_count() > 1
    }

    /// Number of stores backed by the same heap buffer, `1` for inline storage.
    #[inline]
    pub fn ref_count(&self) -> usize {
        match self.storage {
            Storage::Inline { .. } => 1,
            Storage::Shared(ref buf) => Rc::strong_count(buf),
        }
    }

    /// Read access to the words. Never clones.
    #[inline]
    pub fn as_slice(&self) -> &[BigDigit] {
        match self.storage {
            Storage::Inline { len, ref words } => &words[..len],
            Storage::Shared(ref buf) => &buf[..],
        }
    }

    /// Write access to the words, taking a private copy of a shared buffer first.
    pub fn as_mut_slice(&mut self) -> &mut [BigDigit] {
        match self.storage {
            Storage::Inline { len, ref mut words } => &mut words[..len],
            Storage::Shared(ref mut buf) => &mut exclusive(buf)[..],
        }
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, BigDigit> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn last(&self) -> Option<&BigDigit> {
        self.as_slice().last()
    }

    /// Mutable access to the most significant word.
    pub fn last_mut(&mut self) -> Option<&mut BigDigit> {
        self.as_mut_slice().last_mut()
    }

    #[inline]
    pub fn set(&mut self, index: usize, digit: BigDigit) {
        self.as_mut_slice()[index] = digit;
    }

    pub fn push(&mut self, digit: BigDigit) {
        match self.storage {
            Storage::Inline {
                ref mut len,
                ref mut words,
            } if *len < INLINE_CAPACITY => {
                words[*len] = digit;
                *len += 1;
            }
            Storage::Inline { .. } => {
                self.promote(INLINE_CAPACITY + 1);
                self.push(digit);
            }
            Storage::Shared(ref mut buf) => exclusive(buf).push(digit),
        }
    }

    pub fn pop(&mut self) -> Option<BigDigit> {
        match self.storage {
            Storage::Inline {
                ref mut len,
                ref words,
            } => {
                if *len == 0 {
                    None
                } else {
                    *len -= 1;
                    Some(words[*len])
                }
            }
            Storage::Shared(ref mut buf) => exclusive(buf).pop(),
        }
    }

    /// Resizes to `new_len` words, filling new positions with zero.
    ///
    /// Shrinking to `INLINE_CAPACITY` or fewer words drops the heap buffer.
    pub fn resize(&mut self, new_len: usize) {
        if new_len <= INLINE_CAPACITY {
            let mut words = [0; INLINE_CAPACITY];
            let keep = new_len.min(self.len());
            words[..keep].copy_from_slice(&self.as_slice()[..keep]);
            self.storage = Storage::Inline {
                len: new_len,
                words,
            };
            return;
        }

        if self.is_inline() {
            self.promote(new_len);
        }
        if let Storage::Shared(ref mut buf) = self.storage {
            exclusive(buf).resize(new_len, 0);
        }
    }

    /// Shortens the store to `new_len` words. Has no effect if it is already shorter.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len() {
            self.resize(new_len);
        }
    }

    fn promote(&mut self, capacity: usize) {
        if let Storage::Inline { len, ref words } = self.storage {
            trace!(len, capacity, "promoting inline digits to a heap buffer");
            let mut buf = Vec::with_capacity(capacity);
            buf.extend_from_slice(&words[..len]);
            self.storage = Storage::Shared(Rc::new(buf));
        }
    }
}

// Clone-on-write: detach from other owners before handing out a mutable buffer.
fn exclusive(buf: &mut Rc<Vec<BigDigit>>) -> &mut Vec<BigDigit> {
    let refs = Rc::strong_count(buf);
    if refs > 1 {
        trace!(len = buf.len(), refs, "cloning shared digit buffer before write");
    }
    Rc::make_mut(buf)
}

impl Default for DigitStore {
    #[inline]
    fn default() -> DigitStore {
        DigitStore::new()
    }
}

impl From<Vec<BigDigit>> for DigitStore {
    #[inline]
    fn from(digits: Vec<BigDigit>) -> DigitStore {
        DigitStore::from_vec(digits)
    }
}

impl Index<usize> for DigitStore {
    type Output = BigDigit;

    #[inline]
    fn index(&self, index: usize) -> &BigDigit {
        &self.as_slice()[index]
    }
}

impl IndexMut<usize> for DigitStore {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut BigDigit {
        &mut self.as_mut_slice()[index]
    }
}

impl PartialEq for DigitStore {
    #[inline]
    fn eq(&self, other: &DigitStore) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DigitStore {}

impl Hash for DigitStore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for DigitStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<'a> IntoIterator for &'a DigitStore {
    type Item = &'a BigDigit;
    type IntoIter = slice::Iter<'a, BigDigit>;

    #[inline]
    fn into_iter(self) -> slice::Iter<'a, BigDigit> {
        self.iter()
    }
}

#[cfg(test)]
#[path = "tests/digits.rs"]
mod digits_tests;
