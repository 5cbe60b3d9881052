//! # lsb_conceal 库
//!
//! 本库包含 LSB 隐写工具的核心逻辑：通道选择、逐位编解码、可选的密码加密，
//! 以及命令行层的图像与文件处理。

pub mod bits;
pub mod cli;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod handler;
pub mod pipeline;
pub mod selector;
pub mod steganography;

pub use crypto::{Cipher, PasswordCipher};
pub use error::{Result, StegoError};
pub use pipeline::{Operation, Outcome, conceal, reveal, run};
