//! # 位编解码模块
//!
//! 按通道选择模块给出的顺序，在每个可用通道字节的最低有效位中写入或读出 1 bit。
//! 载荷以结束标记 (0x00) 收尾，解码时按字节对齐扫描到它即停止。

use crate::bits::{bits_to_bytes, bytes_to_bits};
use crate::constants::{BITS_PER_BYTE, TERMINATOR};
use crate::error::{Result, StegoError};
use crate::selector::{capacity_bits, eligible_offsets};
use log::debug;

/// 将载荷隐藏到像素缓冲区中，返回实际占用的位数。
///
/// 容量在写入前校验，因此失败时缓冲区保持不变。每个被写入的字节只改变最低位，
/// alpha 字节与非不透明像素不会被触碰。
///
/// # Errors
///
/// * 载荷本身包含结束标记时返回 [`StegoError::TerminatorInPayload`]。
/// * 可用通道字节不足时返回 [`StegoError::CapacityExceeded`]。
pub fn embed(pix: &mut [u8], payload: &[u8]) -> Result<usize> {
    if let Some(position) = payload.iter().position(|&byte| byte == TERMINATOR) {
        return Err(StegoError::TerminatorInPayload { position });
    }

    let mut framed = Vec::with_capacity(payload.len() + 1);
    framed.extend_from_slice(payload);
    framed.push(TERMINATOR);
    let bits = bytes_to_bits(&framed);

    let available = capacity_bits(pix);
    debug!("embedding {} bits into {available} eligible bytes", bits.len());

    if available < bits.len() {
        return Err(StegoError::CapacityExceeded {
            required: bits.len(),
            available,
        });
    }

    // 只取载荷需要的那部分下标，写入时不再借用 pix
    let offsets: Vec<usize> = eligible_offsets(pix).take(bits.len()).collect();
    for (&offset, &bit) in offsets.iter().zip(&bits) {
        pix[offset] = (pix[offset] & !1) | bit;
    }

    Ok(bits.len())
}

/// 从像素缓冲区中读出隐藏的载荷 (不含结束标记)。缓冲区不会被修改。
///
/// # Errors
///
/// 扫描完所有可用通道字节仍未遇到字节对齐的结束标记时返回
/// [`StegoError::NoTerminatorFound`]。
pub fn extract(pix: &[u8]) -> Result<Vec<u8>> {
    let mut bits = Vec::new();
    let mut scanned = 0;

    for offset in eligible_offsets(pix) {
        scanned += 1;
        bits.push(pix[offset] & 1);

        if bits.len() % BITS_PER_BYTE == 0
            && bits[bits.len() - BITS_PER_BYTE..].iter().all(|&bit| bit == 0)
        {
            bits.truncate(bits.len() - BITS_PER_BYTE);
            debug!("terminator found after {} bits", bits.len() + BITS_PER_BYTE);
            return bits_to_bytes(&bits);
        }
    }

    Err(StegoError::NoTerminatorFound { scanned })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque(pixels: usize, fill: u8) -> Vec<u8> {
        [fill, fill, fill, 255].repeat(pixels)
    }

    #[test]
    fn two_pixels_cannot_hold_one_byte() {
        let mut pix = opaque(2, 0x80);
        let before = pix.clone();
        assert_eq!(
            embed(&mut pix, b"A"),
            Err(StegoError::CapacityExceeded {
                required: 16,
                available: 6
            })
        );
        assert_eq!(pix, before, "buffer must be untouched on failure");
    }

    #[test]
    fn ten_pixels_round_trip_one_byte() -> Result<()> {
        let mut pix = opaque(10, 0xAB);
        assert_eq!(embed(&mut pix, &[0x41])?, 16);
        assert_eq!(extract(&pix)?, vec![0x41]);
        Ok(())
    }

    #[test]
    fn writes_only_the_lowest_bit() -> Result<()> {
        let mut pix = opaque(10, 0xFF);
        embed(&mut pix, &[0x41])?;
        // 'A' = 0100_0001 之后紧跟 0x00
        let expected_lsbs = [0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0];
        let offsets: Vec<usize> = eligible_offsets(&pix).collect();
        for (i, &bit) in expected_lsbs.iter().enumerate() {
            assert_eq!(pix[offsets[i]], 0xFE | bit);
        }
        Ok(())
    }

    #[test]
    fn exact_capacity_boundary() -> Result<()> {
        // 16 个不透明像素 = 48 bit = 5 字节载荷 + 结束标记
        let mut pix = opaque(16, 0x33);
        embed(&mut pix, b"hello")?;
        assert_eq!(extract(&pix)?, b"hello".to_vec());

        let mut pix = opaque(16, 0x33);
        assert!(matches!(
            embed(&mut pix, b"hello!"),
            Err(StegoError::CapacityExceeded { required: 56, available: 48 })
        ));
        Ok(())
    }

    #[test]
    fn rejects_embedded_terminator() {
        let mut pix = opaque(64, 0);
        assert_eq!(
            embed(&mut pix, b"ab\0cd"),
            Err(StegoError::TerminatorInPayload { position: 2 })
        );
    }

    #[test]
    fn empty_payload_is_just_the_terminator() -> Result<()> {
        let mut pix = opaque(3, 0xFF);
        assert_eq!(embed(&mut pix, b"")?, 8);
        assert!(extract(&pix)?.is_empty());
        Ok(())
    }

    #[test]
    fn all_ones_carrier_has_no_terminator() {
        let pix = opaque(8, 0x01);
        assert_eq!(
            extract(&pix),
            Err(StegoError::NoTerminatorFound { scanned: 24 })
        );
    }

    #[test]
    fn terminator_must_be_byte_aligned() {
        // 前 4 位为 1，随后 12 位为 0：跨字节的 8 个零不算结束标记，
        // 第二个字节 0000_0000 才算。
        let mut pix = opaque(6, 0);
        let offsets: Vec<usize> = eligible_offsets(&pix).take(4).collect();
        for &o in &offsets {
            pix[o] |= 1;
        }
        assert_eq!(extract(&pix), Ok(vec![0xF0]));
    }
}
