//! Bit slicing and packed register access.
//!
//! Registers are `width` bits wide and stored back to back in big-endian bit order: register
//! `idx` occupies bits `[idx * width, (idx + 1) * width)` of the buffer, counting from the most
//! significant bit of byte 0. A register therefore spans at most two bytes.

/// Return bits `high..=low` of `word`, right-aligned.
#[inline]
pub(crate) fn slice_bits32(word: u32, high: u8, low: u8) -> u32 {
    (word >> low) & (u32::MAX >> (31 - (high - low)))
}

/// Return bits `high..=low` of `word`, right-aligned.
#[inline]
pub(crate) fn slice_bits64(word: u64, high: u8, low: u8) -> u64 {
    (word >> low) & (u64::MAX >> (63 - (high - low)))
}

/// Position of the first set bit counting from the most significant one, starting at 1.
#[inline]
pub(crate) fn rho(w: u64) -> u8 {
    w.leading_zeros() as u8 + 1
}

/// Get register `idx` of `width` bits from `data`
#[inline]
pub(crate) fn get_register(data: &[u8], width: u8, idx: u32) -> u8 {
    let bit_idx = idx as usize * usize::from(width);
    let byte_idx = bit_idx / 8;
    let end = bit_idx % 8 + usize::from(width);
    let mask = (1u16 << width) - 1;

    if end <= 8 {
        ((u16::from(data[byte_idx]) >> (8 - end)) & mask) as u8
    } else {
        let bits = (u16::from(data[byte_idx]) << 8) | u16::from(data[byte_idx + 1]);
        ((bits >> (16 - end)) & mask) as u8
    }
}

/// Set register `idx` of `width` bits in `data` to `value`
#[inline]
pub(crate) fn set_register(data: &mut [u8], width: u8, idx: u32, value: u8) {
    let bit_idx = idx as usize * usize::from(width);
    let byte_idx = bit_idx / 8;
    let end = bit_idx % 8 + usize::from(width);
    let mask = (1u16 << width) - 1;
    let value = u16::from(value) & mask;

    if end <= 8 {
        let shift = 8 - end;
        let byte = u16::from(data[byte_idx]) & !(mask << shift);
        data[byte_idx] = (byte | (value << shift)) as u8;
    } else {
        let shift = 16 - end;
        let mut bits = (u16::from(data[byte_idx]) << 8) | u16::from(data[byte_idx + 1]);
        bits &= !(mask << shift);
        bits |= value << shift;
        data[byte_idx] = (bits >> 8) as u8;
        data[byte_idx + 1] = bits as u8;
    }
}
