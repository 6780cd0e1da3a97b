/// A single character unit of a hex string.
/// Implemented for raw bytes (ASCII / UTF-8 input), UTF-16 wide units and `char`.
pub trait HexUnit: Copy {
    /// Character code used to index the nibble table
    fn code(self) -> u32;

    /// ASCII uppercase, anything else is returned unchanged
    fn to_ascii_upper(self) -> Self;
}

impl HexUnit for u8 {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }

    #[inline]
    fn to_ascii_upper(self) -> Self {
        self.to_ascii_uppercase()
    }
}

impl HexUnit for u16 {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }

    #[inline]
    fn to_ascii_upper(self) -> Self {
        match u8::try_from(self) {
            Ok(b) => b.to_ascii_uppercase() as u16,
            Err(_) => self,
        }
    }
}

impl HexUnit for char {
    #[inline]
    fn code(self) -> u32 {
        self as u32
    }

    #[inline]
    fn to_ascii_upper(self) -> Self {
        self.to_ascii_uppercase()
    }
}

/// Element type of a decoded buffer.
/// `u8` is the raw byte variant, `u16` the wide variant (one byte per unit).
pub trait DecodedUnit: Copy + Default + From<u8> {}

impl DecodedUnit for u8 {}
impl DecodedUnit for u16 {}
