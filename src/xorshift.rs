//! 32-bit XOR-shift state transition.
//!
//! The generator state is stored as an unsigned 32-bit word, while the
//! mixing transform is defined over the signed interpretation of that word.
//! The helpers below make both conversions explicit and replicate the exact
//! wraparound arithmetic: values above `0x7FFF_FFFF` map to negative numbers
//! by subtracting `0x1_0000_0000`, and negative numbers map back by adding it.

const TWO_POW_32: i64 = 0x1_0000_0000;

/// Reinterprets an unsigned state word as a signed 32-bit integer.
#[inline]
pub fn to_signed(value: u32) -> i32 {
    let wide = i64::from(value);
    let signed = if wide > i64::from(i32::MAX) {
        wide - TWO_POW_32
    } else {
        wide
    };
    signed as i32
}

/// Reinterprets a signed 32-bit integer as an unsigned state word.
#[inline]
pub fn to_unsigned(value: i32) -> u32 {
    let wide = i64::from(value);
    let unsigned = if wide < 0 { wide + TWO_POW_32 } else { wide };
    unsigned as u32
}

/// Applies the three-step XOR-shift transform to a signed word.
///
/// The middle step is a logical (zero-filling) right shift; the outer
/// steps shift left and discard overflowing bits.
#[inline]
pub fn mix(mut x: i32) -> i32 {
    x ^= x << 13;
    x ^= (to_unsigned(x) >> 17) as i32;
    x ^= x << 5;
    x
}

/// Advances `state` in place and returns the signed post-mix value.
///
/// The signed value is what feeds the fraction derivation; the stored state
/// is its unsigned counterpart.
#[inline]
pub fn advance(state: &mut u32) -> i32 {
    let mixed = mix(to_signed(*state));
    *state = to_unsigned(mixed);
    mixed
}
