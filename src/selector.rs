//! # 通道选择模块
//!
//! 给定一个扁平的 RGBA 像素缓冲区，按光栅顺序 (从左到右、从上到下、R→G→B)
//! 计算可用于隐写的字节下标。alpha 字节永远不可用；alpha 不等于 255 的像素整体跳过。

use crate::constants::{ALPHA_INDEX, BYTES_PER_PIXEL, COLOR_CHANNELS, OPAQUE_ALPHA};

/// 判断一个像素四元组是否完全不透明。
fn is_opaque(pixel: &[u8]) -> bool {
    pixel[ALPHA_INDEX] == OPAQUE_ALPHA
}

/// 按升序逐个产出缓冲区中可用通道字节的下标。
///
/// 惰性求值，不分配内存。末尾不足 4 字节的残缺像素被忽略。该函数没有失败情况。
pub fn eligible_offsets(pix: &[u8]) -> impl Iterator<Item = usize> + '_ {
    pix.chunks_exact(BYTES_PER_PIXEL)
        .enumerate()
        .filter(|(_, pixel)| is_opaque(pixel))
        .flat_map(|(i, _)| {
            let base = i * BYTES_PER_PIXEL;
            base..base + COLOR_CHANNELS
        })
}

/// 载体可存储的位数，即可用通道字节的数量。
pub fn capacity_bits(pix: &[u8]) -> usize {
    pix.chunks_exact(BYTES_PER_PIXEL)
        .filter(|pixel| is_opaque(pixel))
        .count()
        * COLOR_CHANNELS
}

/// 载体可隐藏的最大载荷字节数 (不含结束标记)。
pub fn capacity_bytes(pix: &[u8]) -> usize {
    (capacity_bits(pix) / 8).saturating_sub(1)
}
