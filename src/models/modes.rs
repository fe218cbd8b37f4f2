use crate::common::error::AppError;
use serde::{Serialize, Serializer};

#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Standard = 0,
    Taiko = 1,
    Catch = 2,
    Mania = 3,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Standard, Mode::Taiko, Mode::Catch, Mode::Mania];

    pub const fn name(&self) -> &'static str {
        match self {
            Mode::Standard => "Standard",
            Mode::Taiko => "Taiko",
            Mode::Catch => "Catch",
            Mode::Mania => "Mania",
        }
    }

    pub const fn as_i8(&self) -> i8 {
        *self as i8
    }

    pub const fn as_i32(&self) -> i32 {
        *self as i32
    }
}

impl TryFrom<i32> for Mode {
    type Error = AppError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Standard),
            1 => Ok(Mode::Taiko),
            2 => Ok(Mode::Catch),
            3 => Ok(Mode::Mania),
            _ => Err(AppError::InvalidMode),
        }
    }
}

impl TryFrom<i8> for Mode {
    type Error = AppError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Mode::try_from(value as i32)
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_enumeration() {
        for (value, mode) in Mode::ALL.iter().enumerate() {
            assert_eq!(Mode::try_from(value as i32), Ok(*mode));
        }
        assert_eq!(Mode::try_from(4), Err(AppError::InvalidMode));
        assert_eq!(Mode::try_from(-1), Err(AppError::InvalidMode));
    }

    #[test]
    fn display_names() {
        assert_eq!(Mode::Standard.name(), "Standard");
        assert_eq!(Mode::Mania.name(), "Mania");
    }
}
