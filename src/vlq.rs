use crate::error::SmfError;

/// Largest value a 4-byte variable-length quantity can hold.
pub const VLQ_MAX: u32 = 0x0FFF_FFFF;

/// Encode `value` as a MIDI variable-length quantity, most-significant group first.
pub fn encode(value: u64) -> Result<Vec<u8>, SmfError> {
    let mut out = Vec::with_capacity(4);
    encode_into(value, &mut out)?;
    Ok(out)
}

/// Append the variable-length encoding of `value` to `buf`.
///
/// Nothing is written when the value is out of range.
pub fn encode_into(value: u64, buf: &mut Vec<u8>) -> Result<(), SmfError> {
    if value > VLQ_MAX as u64 {
        return Err(SmfError::ValueTooLarge { value });
    }

    // Fill from the back so the high groups come out first.
    let mut bytes = [0u8; 4];
    let mut i = 3;
    let mut rest = value as u32;

    bytes[i] = (rest & 0x7F) as u8;
    rest >>= 7;

    while rest > 0 {
        i -= 1;
        bytes[i] = ((rest & 0x7F) as u8) | 0x80;
        rest >>= 7;
    }

    buf.extend_from_slice(&bytes[i..]);
    Ok(())
}

/// Decode a variable-length quantity from the start of `bytes`.
///
/// Returns the value and how many bytes it occupied, or `None` if the input ends
/// mid-quantity or runs past four bytes.
pub fn decode(bytes: &[u8]) -> Option<(u32, usize)> {
    let mut value: u32 = 0;

    for (i, &byte) in bytes.iter().take(4).enumerate() {
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return Some((value, i + 1));
        }
    }

    None
}
