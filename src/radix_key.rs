/// Fixed-width signed integers that can be sorted one bit at a time.
pub trait RadixKey: Copy + Default + Ord + 'static {
    /// Total width of the type, including the sign bit.
    const BITS: u32;

    /// Highest bit that can be set in a non-negative value.
    const TOP_BIT: u32 = Self::BITS - 2;

    /// Bit `shift` of the value after an arithmetic right shift, either 0 or 1.
    fn selector(self, shift: u32) -> usize;

    fn has_bit(self, bit: u32) -> bool;

    fn is_negative(self) -> bool;

    fn to_i64(self) -> i64;

    fn to_f64(self) -> f64;
}

impl RadixKey for i64 {
    const BITS: u32 = i64::BITS;

    #[inline(always)]
    fn selector(self, shift: u32) -> usize {
        ((self >> shift) & 1) as usize
    }

    #[inline(always)]
    fn has_bit(self, bit: u32) -> bool {
        self & (1 << bit) != 0
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        self < 0
    }

    #[inline(always)]
    fn to_i64(self) -> i64 {
        self
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl RadixKey for i32 {
    const BITS: u32 = i32::BITS;

    #[inline(always)]
    fn selector(self, shift: u32) -> usize {
        ((self >> shift) & 1) as usize
    }

    #[inline(always)]
    fn has_bit(self, bit: u32) -> bool {
        self & (1 << bit) != 0
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        self < 0
    }

    #[inline(always)]
    fn to_i64(self) -> i64 {
        self as i64
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl RadixKey for i16 {
    const BITS: u32 = i16::BITS;

    #[inline(always)]
    fn selector(self, shift: u32) -> usize {
        ((self >> shift) & 1) as usize
    }

    #[inline(always)]
    fn has_bit(self, bit: u32) -> bool {
        self & (1 << bit) != 0
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        self < 0
    }

    #[inline(always)]
    fn to_i64(self) -> i64 {
        self as i64
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl RadixKey for i8 {
    const BITS: u32 = i8::BITS;

    #[inline(always)]
    fn selector(self, shift: u32) -> usize {
        ((self >> shift) & 1) as usize
    }

    #[inline(always)]
    fn has_bit(self, bit: u32) -> bool {
        self & (1 << bit) != 0
    }

    #[inline(always)]
    fn is_negative(self) -> bool {
        self < 0
    }

    #[inline(always)]
    fn to_i64(self) -> i64 {
        self as i64
    }

    #[inline(always)]
    fn to_f64(self) -> f64 {
        self as f64
    }
}
