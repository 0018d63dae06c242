//! Receiver channels and learned-channel masks.
//!
//! The receiver has 16 channels. On the wire a channel is a single bit in a
//! 16-bit big-endian mask: channels 1-8 live in the low byte, 9-16 in the
//! high byte.

use std::fmt;

use crate::error::{FrameError, Result};

/// Number of receiver channels.
pub const CHANNEL_COUNT: u8 = 16;

/// A receiver channel, 1 through 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// Create a channel, rejecting numbers outside 1..=16.
    pub fn new(number: u8) -> Result<Self> {
        if (1..=CHANNEL_COUNT).contains(&number) {
            Ok(Self(number))
        } else {
            Err(FrameError::InvalidChannel(number))
        }
    }

    /// The 1-based channel number.
    pub fn number(self) -> u8 {
        self.0
    }

    /// The single mask bit for this channel.
    pub fn bit(self) -> u16 {
        1 << (self.0 - 1)
    }

    /// Mask bytes as sent on the wire: `[high, low]`.
    pub fn mask_bytes(self) -> [u8; 2] {
        self.bit().to_be_bytes()
    }

    /// Recover the channel from wire mask bytes `[high, low]`.
    ///
    /// Returns `None` unless exactly one bit is set.
    pub fn from_mask_bytes(bytes: [u8; 2]) -> Option<Self> {
        let bits = u16::from_be_bytes(bytes);
        if bits.count_ones() == 1 {
            Some(Self(bits.trailing_zeros() as u8 + 1))
        } else {
            None
        }
    }

    /// All 16 channels in ascending order.
    pub fn all() -> impl Iterator<Item = Channel> {
        (1..=CHANNEL_COUNT).map(Channel)
    }
}

impl TryFrom<u8> for Channel {
    type Error = FrameError;

    fn try_from(number: u8) -> Result<Self> {
        Self::new(number)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of learned channels, bit `i` = channel `i + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelMask(u16);

impl ChannelMask {
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns true if `channel` is learned.
    pub fn is_learned(self, channel: Channel) -> bool {
        self.0 & channel.bit() != 0
    }

    /// Learned channels in ascending order.
    pub fn learned(self) -> impl Iterator<Item = Channel> {
        Channel::all().filter(move |channel| self.is_learned(*channel))
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ChannelMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_numbers() {
        assert!(matches!(Channel::new(0), Err(FrameError::InvalidChannel(0))));
        assert!(matches!(
            Channel::try_from(17),
            Err(FrameError::InvalidChannel(17))
        ));
        assert_eq!(Channel::new(16).unwrap().number(), 16);
    }

    #[test]
    fn low_channels_use_low_byte() {
        for number in 1..=8u8 {
            let [high, low] = Channel::new(number).unwrap().mask_bytes();
            assert_eq!(high, 0);
            assert_eq!(low, 1 << (number - 1));
        }
    }

    #[test]
    fn high_channels_use_high_byte() {
        for number in 9..=16u8 {
            let [high, low] = Channel::new(number).unwrap().mask_bytes();
            assert_eq!(high, 1 << (number - 9));
            assert_eq!(low, 0);
        }
    }

    #[test]
    fn mask_bytes_roundtrip() {
        for channel in Channel::all() {
            assert_eq!(Channel::from_mask_bytes(channel.mask_bytes()), Some(channel));
        }
        assert_eq!(Channel::from_mask_bytes([0x00, 0x00]), None);
        assert_eq!(Channel::from_mask_bytes([0x00, 0x03]), None);
    }

    #[test]
    fn is_learned_checks_single_bit() {
        let mask = ChannelMask::from_bits(0x0001);
        assert!(mask.is_learned(Channel::new(1).unwrap()));
        assert!(!mask.is_learned(Channel::new(2).unwrap()));
    }

    #[test]
    fn learned_lists_set_channels() {
        let mask = ChannelMask::from_bits(0x8101);
        let numbers: Vec<u8> = mask.learned().map(Channel::number).collect();
        assert_eq!(numbers, vec![1, 9, 16]);
        assert!(ChannelMask::default().is_empty());
    }
}
