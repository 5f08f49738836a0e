use crate::bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use quickcheck::{Arbitrary, Gen};

impl Arbitrary for BigInt {
    fn arbitrary(g: &mut Gen) -> Self {
        let sign = if bool::arbitrary(g) {
            Sign::Plus
        } else {
            Sign::Minus
        };
        // mostly short values, with the occasional multi-word one
        let len = usize::arbitrary(g) % 6;
        let digits = (0..len).map(|_| u32::arbitrary(g)).collect();
        Self::new(sign, digits)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        /// Based on the SignedShrinker for primitive types in quickcheck
        /// itself.
        struct Iter(BigInt, BigInt);
        impl Iterator for Iter {
            type Item = BigInt;

            fn next(&mut self) -> Option<BigInt> {
                if (&self.0 - &self.1).abs() < self.0.abs() {
                    let result = Some(&self.0 - &self.1);
                    self.1 /= BigInt::from(2);
                    result
                } else {
                    None
                }
            }
        }

        if self.is_zero() {
            quickcheck::empty_shrinker()
        } else {
            let shrinker = Iter(self.clone(), self / BigInt::from(2));
            let mut items = vec![Self::zero()];
            if shrinker.1.is_negative() {
                items.push(shrinker.0.abs());
            }
            Box::new(items.into_iter().chain(shrinker))
        }
    }
}
