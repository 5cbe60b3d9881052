//! # 错误类型模块
//!
//! 定义隐写核心 (通道选择、位编解码、加解密) 可能产生的全部错误。
//! 这些错误不会被重试：相同输入总会得到相同的失败，由调用方决定如何向用户呈现。

use thiserror::Error;

/// 隐写编码或解码过程中可能出现的错误。
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 载荷 (含结束标记、加密后) 所需的位数超过了载体可用的通道字节数。
    #[error("payload needs {required} bits but the carrier only offers {available} eligible bytes")]
    CapacityExceeded { required: usize, available: usize },

    /// 扫描完所有可用通道字节仍未找到结束标记。
    #[error("no terminator found after scanning {scanned} eligible bytes")]
    NoTerminatorFound { scanned: usize },

    /// 密码错误，或密文被截断、损坏。
    #[error("decryption failed (wrong password or corrupted ciphertext)")]
    DecryptionFailed,

    /// 交给字节重组的位序列长度不是 8 的倍数。属于内部不变量被破坏。
    #[error("bit sequence of length {0} is not a multiple of 8")]
    InvalidBitLength(usize),

    /// 载荷中含有与结束标记相同的字节，解码时会被提前截断。
    #[error("payload contains a terminator byte (0x00) at position {position}")]
    TerminatorInPayload { position: usize },

    /// 无法从密码派生密钥。
    #[error("key derivation failed")]
    KeyDerivation,

    /// 加密原语本身失败。
    #[error("encryption failed")]
    Encryption,
}

pub type Result<T> = std::result::Result<T, StegoError>;
