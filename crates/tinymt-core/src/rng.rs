//! `rand_core` integration.
//!
//! Lets a `Tinymt32` drive anything generic over `RngCore`. It does not
//! implement `CryptoRng`.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::generator::Tinymt32;

/// Seed bytes, read as a little-endian `u32`.
pub type Tinymt32Seed = [u8; 4];

impl RngCore for Tinymt32 {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Tinymt32::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        Tinymt32::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Tinymt32 {
    type Seed = Tinymt32Seed;

    fn from_seed(seed: Tinymt32Seed) -> Self {
        Tinymt32::new(u32::from_le_bytes(seed))
    }

    /// Uses the low 32 bits of `state` as the seed.
    fn seed_from_u64(state: u64) -> Self {
        Tinymt32::new(state as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_seed_little_endian() {
        let mut a = Tinymt32::from_seed(1u32.to_le_bytes());
        assert_eq!(RngCore::next_u32(&mut a), 2545341989);
        assert_eq!(Tinymt32::from_seed(0xdead_beefu32.to_le_bytes()), Tinymt32::new(0xdead_beef));
    }

    #[test]
    fn test_seed_from_u64_low_word() {
        assert_eq!(Tinymt32::seed_from_u64(0x1234_5678_0000_0001), Tinymt32::new(1));
    }

    #[test]
    fn test_next_u64_matches_inherent() {
        let mut a = Tinymt32::new(1);
        let mut b = Tinymt32::new(1);
        assert_eq!(RngCore::next_u64(&mut a), b.next_u64());
        assert_eq!(RngCore::next_u64(&mut a), impls::next_u64_via_u32(&mut b));
    }

    #[test]
    fn test_fill_bytes_uses_le_words() {
        let mut a = Tinymt32::new(1);
        let mut buf = [0u8; 6];
        a.fill_bytes(&mut buf);
        let mut b = Tinymt32::new(1);
        let w0 = b.next_u32().to_le_bytes();
        let w1 = b.next_u32().to_le_bytes();
        assert_eq!(buf, [w0[0], w0[1], w0[2], w0[3], w1[0], w1[1]]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_try_fill_bytes_never_fails() {
        let mut rng = Tinymt32::new(8);
        let mut buf = [0u8; 33];
        assert!(rng.try_fill_bytes(&mut buf).is_ok());
    }
}
