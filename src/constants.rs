/// 每个像素占用的字节数 (R, G, B, A)。
pub const BYTES_PER_PIXEL: usize = 4;

/// 像素四元组中 alpha 通道的下标。
/// alpha 字节本身永远不参与隐写。
pub const ALPHA_INDEX: usize = 3;

/// 每个像素中可承载数据的颜色通道数 (R, G, B)。
pub const COLOR_CHANNELS: usize = 3;

/// 完全不透明的 alpha 值。
/// 只有 alpha 等于该值的像素才会被用于隐写，其余像素整体跳过。
pub const OPAQUE_ALPHA: u8 = u8::MAX;

/// 每个字节的位数。每个可用通道字节只存储 1 bit。
pub const BITS_PER_BYTE: usize = 8;

/// 消息结束标记。编码时追加在载荷末尾，解码时按字节对齐扫描到它即停止。
pub const TERMINATOR: u8 = 0x00;

/// Argon2 盐值长度 (字节)。
pub const SALT_LEN: usize = 16;

/// AES-GCM-SIV nonce 长度 (字节)。
pub const NONCE_LEN: usize = 12;

/// AES-GCM-SIV 认证标签长度 (字节)。
pub const TAG_LEN: usize = 16;

/// 派生出的 AES-256 密钥长度 (字节)。
pub const KEY_LEN: usize = 32;

/// Argon2id 内存开销 (KiB)。
pub const ARGON2_MEMORY_KIB: u32 = 19456;

/// Argon2id 迭代次数。
pub const ARGON2_TIME_COST: u32 = 2;

/// Argon2id 并行度。
pub const ARGON2_LANES: u32 = 1;

/// 可通过环境变量提供密码，避免出现在 shell 历史中。
pub const PASSWORD_ENV: &str = "LSB_CONCEAL_PASSWORD";
