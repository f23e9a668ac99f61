//! Arbitrary-precision helpers shared by encode/decode.
//! Numbers are little-endian `u64` limbs (low limb first), sized to the input.
//! Both directions work ten base58 digits at a time: 58^10 fits a `u64`, so one
//! limb pass per ten digits instead of one per digit (`u128` temp for carries).

/// Base58 digits handled per limb pass.
pub(crate) const DIGITS_PER_STEP: usize = 10;

/// `POW58[k]` = 58^k for `k` in `0..=DIGITS_PER_STEP`.
pub(crate) const POW58: [u64; DIGITS_PER_STEP + 1] = {
    let mut table = [1u64; DIGITS_PER_STEP + 1];
    let mut k = 1;
    while k <= DIGITS_PER_STEP {
        table[k] = table[k - 1] * 58;
        k += 1;
    }
    table
};

/// Unsigned big integer. Zero is the empty limb vector.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct Limbs(Vec<u64>);

impl Limbs {
    /// Reads `bytes` as a big-endian base-256 number.
    pub(crate) fn from_be_bytes(bytes: &[u8]) -> Self {
        let mut limbs = Vec::with_capacity(bytes.len().div_ceil(8));
        for chunk in bytes.rchunks(8) {
            let mut word = [0u8; 8];
            word[8 - chunk.len()..].copy_from_slice(chunk);
            limbs.push(u64::from_be_bytes(word));
        }
        let mut num = Self(limbs);
        num.trim();
        num
    }

    /// Big-endian bytes with no leading zero byte. Zero serializes as empty.
    pub(crate) fn to_be_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.0.len() * 8);
        out.extend(
            self.0
                .iter()
                .rev()
                .flat_map(|limb| limb.to_be_bytes())
                .skip_while(|&b| b == 0),
        );
        out
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Divides in place by `divisor`, returning the remainder.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn divmod(&mut self, divisor: u64) -> u64 {
        debug_assert_ne!(divisor, 0);
        let divisor = u128::from(divisor);
        let mut rem = 0u128;
        // Long division runs from the most significant limb down.
        for limb in self.0.iter_mut().rev() {
            let temp = (rem << 64) | u128::from(*limb);
            *limb = (temp / divisor) as u64;
            rem = temp % divisor;
        }
        self.trim();
        rem as u64
    }

    /// `self = self * mul + add` (Horner step).
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn mul_add(&mut self, mul: u64, add: u64) {
        let mul = u128::from(mul);
        let mut carry = u128::from(add);
        for limb in &mut self.0 {
            let temp = u128::from(*limb) * mul + carry;
            *limb = temp as u64;
            carry = temp >> 64;
        }
        if carry != 0 {
            self.0.push(carry as u64);
        }
    }

    fn trim(&mut self) {
        while self.0.last() == Some(&0) {
            self.0.pop();
        }
    }
}

/// Unpacks `rem < 58^10` into exactly `DIGITS_PER_STEP` digit values, least
/// significant first.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn push_digits(mut rem: u64, out: &mut Vec<u8>) {
    for _ in 0..DIGITS_PER_STEP {
        out.push((rem % 58) as u8);
        rem /= 58;
    }
}

/// Horner over at most `DIGITS_PER_STEP` digit values, most significant first.
pub(crate) fn horner(vals: &[u8]) -> u64 {
    debug_assert!(vals.len() <= DIGITS_PER_STEP);
    vals.iter().fold(0u64, |acc, &val| acc * 58 + u64::from(val))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn pow58_table() {
        assert_eq!(POW58[0], 1);
        assert_eq!(POW58[1], 58);
        assert_eq!(POW58[2], 3364);
        assert_eq!(POW58[10], 430_804_206_899_405_824);
        assert!(POW58[10].checked_mul(58).is_none());
    }

    #[test]
    fn byte_packing() {
        assert!(Limbs::from_be_bytes(&[]).is_zero());
        assert!(Limbs::from_be_bytes(&[0, 0, 0]).is_zero());

        let bytes = hex!("0102030405060708090a0b");
        let num = Limbs::from_be_bytes(&bytes);
        assert_eq!(num.0, vec![0x0405_0607_0809_0a0b, 0x0001_0203]);
        assert_eq!(num.to_be_bytes(), bytes.to_vec());
    }

    #[test]
    fn to_be_bytes_is_minimal() {
        let num = Limbs::from_be_bytes(&hex!("0000ff"));
        assert_eq!(num.to_be_bytes(), vec![0xFF]);
        assert!(Limbs::default().to_be_bytes().is_empty());
    }

    #[test]
    fn divmod_exact() {
        let mut num = Limbs::from_be_bytes(&[116]);
        assert_eq!(num.divmod(58), 0);
        assert_eq!(num.to_be_bytes(), vec![2]);

        let mut num = Limbs::from_be_bytes(&[57]);
        assert_eq!(num.divmod(58), 57);
        assert!(num.is_zero());
    }

    #[test]
    fn divmod_crosses_limbs() {
        // 2^64 = 58 * 318047311615681924 + 24
        let mut num = Limbs::from_be_bytes(&hex!("010000000000000000"));
        assert_eq!(num.divmod(58), 24);
        assert_eq!(num.0, vec![318_047_311_615_681_924]);
    }

    #[test]
    fn mul_add_carries_into_new_limb() {
        let mut num = Limbs::from_be_bytes(&hex!("ffffffffffffffff"));
        num.mul_add(2, 3);
        assert_eq!(num.to_be_bytes(), hex!("020000000000000001").to_vec());

        let mut zero = Limbs::default();
        zero.mul_add(58, 0);
        assert!(zero.is_zero());
    }

    #[test]
    fn horner_and_digits_agree() {
        let vals = [1u8, 2, 3, 4];
        assert_eq!(horner(&vals), 4 + 3 * 58 + 2 * 3364 + 195_112);

        let mut digits = Vec::new();
        push_digits(horner(&vals), &mut digits);
        assert_eq!(digits, vec![4, 3, 2, 1, 0, 0, 0, 0, 0, 0]);
    }
}
