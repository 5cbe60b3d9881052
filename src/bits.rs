//! 字节与位序列之间的转换。每个字节展开为 8 个位，高位在前。

use crate::constants::BITS_PER_BYTE;
use crate::error::{Result, StegoError};

/// 将字节序列展开为位序列 (每个元素为 0 或 1，MSB first)。
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    bytes
        .iter()
        .flat_map(|&byte| (0..BITS_PER_BYTE).rev().map(move |shift| (byte >> shift) & 1))
        .collect()
}

/// 将位序列按 8 位一组重组为字节。
///
/// # Errors
///
/// 位序列长度不是 8 的倍数时返回 [`StegoError::InvalidBitLength`]。
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>> {
    if bits.len() % BITS_PER_BYTE != 0 {
        return Err(StegoError::InvalidBitLength(bits.len()));
    }

    Ok(bits
        .chunks_exact(BITS_PER_BYTE)
        .map(|group| group.iter().fold(0u8, |acc, &bit| (acc << 1) | (bit & 1)))
        .collect())
}
