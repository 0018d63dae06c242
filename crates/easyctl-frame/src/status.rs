use std::fmt;

/// Actuator status reported in an Easy_Ack frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    NoInformation,
    TopPositionStop,
    BottomPositionStop,
    IntermediatePositionStop,
    TiltPositionStop,
    Blocking,
    Overheating,
    Timeout,
    StartMoveUp,
    StartMoveDown,
    MovingUp,
    MovingDown,
    StoppedUndefined,
    TopPositionStopTilt,
    BottomPositionStopIntermediate,
    SwitchedOff,
    SwitchedOn,
    /// Any byte without a defined meaning (0x0C and everything above 0x11).
    Unknown(u8),
}

impl DeviceStatus {
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0x00 => DeviceStatus::NoInformation,
            0x01 => DeviceStatus::TopPositionStop,
            0x02 => DeviceStatus::BottomPositionStop,
            0x03 => DeviceStatus::IntermediatePositionStop,
            0x04 => DeviceStatus::TiltPositionStop,
            0x05 => DeviceStatus::Blocking,
            0x06 => DeviceStatus::Overheating,
            0x07 => DeviceStatus::Timeout,
            0x08 => DeviceStatus::StartMoveUp,
            0x09 => DeviceStatus::StartMoveDown,
            0x0A => DeviceStatus::MovingUp,
            0x0B => DeviceStatus::MovingDown,
            0x0D => DeviceStatus::StoppedUndefined,
            0x0E => DeviceStatus::TopPositionStopTilt,
            0x0F => DeviceStatus::BottomPositionStopIntermediate,
            0x10 => DeviceStatus::SwitchedOff,
            0x11 => DeviceStatus::SwitchedOn,
            other => DeviceStatus::Unknown(other),
        }
    }

    /// The raw status byte.
    pub fn code(self) -> u8 {
        match self {
            DeviceStatus::NoInformation => 0x00,
            DeviceStatus::TopPositionStop => 0x01,
            DeviceStatus::BottomPositionStop => 0x02,
            DeviceStatus::IntermediatePositionStop => 0x03,
            DeviceStatus::TiltPositionStop => 0x04,
            DeviceStatus::Blocking => 0x05,
            DeviceStatus::Overheating => 0x06,
            DeviceStatus::Timeout => 0x07,
            DeviceStatus::StartMoveUp => 0x08,
            DeviceStatus::StartMoveDown => 0x09,
            DeviceStatus::MovingUp => 0x0A,
            DeviceStatus::MovingDown => 0x0B,
            DeviceStatus::StoppedUndefined => 0x0D,
            DeviceStatus::TopPositionStopTilt => 0x0E,
            DeviceStatus::BottomPositionStopIntermediate => 0x0F,
            DeviceStatus::SwitchedOff => 0x10,
            DeviceStatus::SwitchedOn => 0x11,
            DeviceStatus::Unknown(byte) => byte,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            DeviceStatus::NoInformation => "No information",
            DeviceStatus::TopPositionStop => "Top position stop",
            DeviceStatus::BottomPositionStop => "Bottom position stop",
            DeviceStatus::IntermediatePositionStop => "Intermediate position stop",
            DeviceStatus::TiltPositionStop => "Tilt/Ventilation position stop",
            DeviceStatus::Blocking => "Blocking",
            DeviceStatus::Overheating => "Overheating",
            DeviceStatus::Timeout => "Timeout",
            DeviceStatus::StartMoveUp => "Start to move up",
            DeviceStatus::StartMoveDown => "Start to move down",
            DeviceStatus::MovingUp => "Moving up",
            DeviceStatus::MovingDown => "Moving down",
            DeviceStatus::StoppedUndefined => "Stopped in undefined position",
            DeviceStatus::TopPositionStopTilt => "Top position stop, tilt position",
            DeviceStatus::BottomPositionStopIntermediate => {
                "Bottom position stop, intermediate position"
            }
            DeviceStatus::SwitchedOff => "Switching device switched off",
            DeviceStatus::SwitchedOn => "Switching device switched on",
            DeviceStatus::Unknown(_) => "Unknown",
        }
    }

    pub fn is_known(self) -> bool {
        !matches!(self, DeviceStatus::Unknown(_))
    }
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Describe a raw status byte. Total: undefined bytes map to "Unknown".
pub fn interpret_status(byte: u8) -> &'static str {
    DeviceStatus::from_byte(byte).description()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_descriptions() {
        assert_eq!(interpret_status(0x00), "No information");
        assert_eq!(interpret_status(0x08), "Start to move up");
        assert_eq!(interpret_status(0x0A), "Moving up");
        assert_eq!(interpret_status(0x10), "Switching device switched off");
        assert_eq!(interpret_status(0x11), "Switching device switched on");
    }

    #[test]
    fn undefined_bytes_are_unknown() {
        assert_eq!(interpret_status(0x0C), "Unknown");
        assert_eq!(interpret_status(0x12), "Unknown");
        assert_eq!(interpret_status(0xFF), "Unknown");
        assert!(!DeviceStatus::from_byte(0x0C).is_known());
    }

    #[test]
    fn defined_range_has_seventeen_statuses() {
        let known = (0x00..=0xFFu8)
            .filter(|b| DeviceStatus::from_byte(*b).is_known())
            .count();
        assert_eq!(known, 17);
    }

    #[test]
    fn code_returns_wire_byte() {
        for byte in 0x00..=0xFFu8 {
            assert_eq!(DeviceStatus::from_byte(byte).code(), byte);
        }
    }
}
