//! Stream option word.

use bitflags::bitflags;

bitflags! {
    /// 32-bit option word in the stream header.
    ///
    /// No flags are assigned in format version 1.x, so the only valid
    /// released value is [`OptionFlags::empty()`]. Any set bit belongs to
    /// a format this build does not know and cannot be safely ignored;
    /// decoders reject such streams with
    /// [`UnknownRequiredOption`](crate::SfMeshError::UnknownRequiredOption).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct OptionFlags: u32 {}
}

impl OptionFlags {
    /// Bits set in `raw` that this build does not recognize.
    pub fn unknown_bits(raw: u32) -> u32 {
        raw & !Self::all().bits()
    }
}
