//! # 流程编排模块
//!
//! 把可选的加解密与位编解码串联起来。操作模式 (编码/解码) 由调用方通过
//! [`Operation`] 显式传入，核心本身不保存任何模式状态。

use crate::crypto::Cipher;
use crate::error::Result;
use crate::steganography::{embed, extract};
use log::info;

/// 调用方选择的操作。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// 将给定消息隐藏到载体中。
    Encode(Vec<u8>),
    /// 从载体中恢复消息。
    Decode,
}

/// 一次操作的结果。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// 编码成功，记录占用的可用通道字节数。
    Concealed { bits_used: usize },
    /// 解码得到的明文。
    Revealed(Vec<u8>),
}

/// 空密码视为未提供密码。
fn effective(password: Option<&str>) -> Option<&str> {
    password.filter(|p| !p.is_empty())
}

/// 可选地加密消息，然后隐藏到像素缓冲区中，返回占用的位数。
pub fn conceal<C: Cipher + ?Sized>(
    pix: &mut [u8],
    message: &[u8],
    password: Option<&str>,
    cipher: &C,
) -> Result<usize> {
    let bits_used = match effective(password) {
        Some(password) => embed(pix, &cipher.encrypt(message, password)?)?,
        None => embed(pix, message)?,
    };
    info!("concealed message using {bits_used} bits");
    Ok(bits_used)
}

/// 从像素缓冲区中读出消息，并在提供密码时解密。
pub fn reveal<C: Cipher + ?Sized>(
    pix: &[u8],
    password: Option<&str>,
    cipher: &C,
) -> Result<Vec<u8>> {
    let extracted = extract(pix)?;
    info!("extracted {} payload bytes", extracted.len());
    match effective(password) {
        Some(password) => cipher.decrypt(&extracted, password),
        None => Ok(extracted),
    }
}

/// 按调用方选择的模式执行一次编码或解码。解码时缓冲区只被读取。
pub fn run<C: Cipher + ?Sized>(
    operation: Operation,
    pix: &mut [u8],
    password: Option<&str>,
    cipher: &C,
) -> Result<Outcome> {
    match operation {
        Operation::Encode(message) => conceal(pix, &message, password, cipher)
            .map(|bits_used| Outcome::Concealed { bits_used }),
        Operation::Decode => reveal(pix, password, cipher).map(Outcome::Revealed),
    }
}
