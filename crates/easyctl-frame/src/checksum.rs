/// Compute the checksum byte for a message prefix.
///
/// The result `v` satisfies `(sum(bytes) + v) % 256 == 0`: it is the two's
/// complement of the wrapping byte sum. The checksum is appended to a frame,
/// never included in the bytes it covers.
pub fn checksum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |sum, byte| sum.wrapping_add(*byte))
        .wrapping_neg()
}

/// Returns true if a complete frame, checksum included, sums to zero.
pub fn verify(frame: &[u8]) -> bool {
    frame.iter().fold(0u8, |sum, byte| sum.wrapping_add(*byte)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_request_checksum() {
        assert_eq!(checksum(&[0xAA, 0x02, 0x4A]), 0x0A);
    }

    #[test]
    fn send_request_checksum() {
        assert_eq!(checksum(&[0xAA, 0x05, 0x4C, 0x00, 0x00, 0x24]), 0xE1);
    }

    #[test]
    fn empty_message_checksum_is_zero() {
        assert_eq!(checksum(&[]), 0);
    }

    #[test]
    fn appended_checksum_zeroes_the_sum() {
        let mut seed = 0x1234_5678u32;
        for len in 0..64usize {
            let mut message = Vec::with_capacity(len + 1);
            for _ in 0..len {
                seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                message.push((seed >> 16) as u8);
            }
            message.push(checksum(&message));

            let sum: u32 = message.iter().map(|b| u32::from(*b)).sum();
            assert_eq!(sum % 256, 0, "message {message:02X?}");
            assert!(verify(&message));
        }
    }

    #[test]
    fn verify_rejects_corrupted_frame() {
        assert!(verify(&[0xAA, 0x02, 0x4A, 0x0A]));
        assert!(!verify(&[0xAA, 0x02, 0x4A, 0x0B]));
    }
}
