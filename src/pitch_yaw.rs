use core::fmt;

/// An orientation given by two angles in radians, without roll.
///
/// | pitch | yaw | direction |
/// |-------|-----|-----------|
/// | 0     | 0   | +X        |
/// | 0     | π/2 | +Z        |
/// | π/2   | 0   | +Y        |
///
/// This is only a carrier. See [`crate::angle`] for the trigonometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "ufmt", derive(ufmt::derive::uDebug))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PitchYaw<T> {
    /// Counterclockwise rotation around the X axis
    pub pitch: T,
    /// Counterclockwise rotation around the Y axis
    pub yaw: T,
}

impl<T> PitchYaw<T> {
    pub fn new(pitch: T, yaw: T) -> Self {
        Self { pitch, yaw }
    }
}

impl<T: fmt::Display> fmt::Display for PitchYaw<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(pitch: {}, yaw: {})", self.pitch, self.yaw)
    }
}
