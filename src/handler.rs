//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责图像的解码与编码、文件 I/O、调用隐写流程以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::{BITS_PER_BYTE, BYTES_PER_PIXEL, COLOR_CHANNELS};
use crate::crypto::PasswordCipher;
use crate::error::StegoError;
use crate::pipeline::{conceal, reveal};
use crate::selector::{capacity_bits, capacity_bytes};
use anyhow::{Context, Result};
use colored::Colorize;
use image::RgbaImage;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// 读取图像并统一转换为 RGBA8 像素缓冲区。
fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let picture = image::open(path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                path.to_string_lossy().red().bold()
            )
        })?
        .to_rgba8();

    debug!(
        "loaded {}x{} image from {}",
        picture.width(),
        picture.height(),
        path.display()
    );

    let pixels = picture.len() / BYTES_PER_PIXEL;
    if capacity_bits(&picture) < pixels * COLOR_CHANNELS {
        warn!(
            "{} contains pixels that are not fully opaque; they are skipped",
            path.display()
        );
    }

    Ok(picture)
}

/// 在 `image` 同目录下生成带前缀、替换扩展名的默认输出路径。
fn sibling_path(image: &Path, prefix: &str, extension: &str) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{prefix}{stem}.{extension}"))
}

/// 未指定 `--force` 时拒绝覆盖已存在的文件。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {} \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 将位数换算为可容纳的载荷字节数 (扣除结束标记)。
fn payload_bytes(bits: usize) -> usize {
    (bits / BITS_PER_BYTE).saturating_sub(1)
}

/// 将核心错误转换为面向用户的提示信息。
fn explain(err: StegoError) -> anyhow::Error {
    match err {
        StegoError::CapacityExceeded {
            required,
            available,
        } => anyhow::anyhow!(
            "Not enough space in the image to hide the text. \nRequired: {} bytes, Available: {} bytes",
            payload_bytes(required).to_string().red().bold(),
            payload_bytes(available).to_string().green().bold()
        ),
        StegoError::NoTerminatorFound { .. } => anyhow::Error::new(err)
            .context("The image does not appear to contain a hidden message."),
        StegoError::DecryptionFailed => {
            anyhow::Error::new(err).context("Unable to decrypt the hidden message.")
        }
        StegoError::TerminatorInPayload { .. } => {
            anyhow::Error::new(err).context("The text cannot contain NUL bytes.")
        }
        other => anyhow::Error::new(other),
    }
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、(可选) 加密文本、检查隐写空间是否足够并写入最低位，
/// 最后将结果以无损格式写入目标图像文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、密码等选项的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像，或无法读取文本文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中完全不透明的像素不足以容纳文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, "doctored_", "png"));
    ensure_writable(&dest, args.force)?;

    let mut picture = load_rgba(&args.image)?;

    let text = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let bits_used = conceal(&mut picture, &text, args.password.as_deref(), &PasswordCipher)
        .map_err(explain)?;
    debug!("{bits_used} of {} eligible bits used", capacity_bits(&picture));

    picture.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、按顺序读出最低位直到结束标记、(可选) 解密，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径、密码等选项的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 目标文件已存在且未指定 `--force`。
/// * 图像中找不到结束标记，或密码错误。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let text_path = args
        .text
        .clone()
        .unwrap_or_else(|| sibling_path(&args.image, "recovered_", "txt"));
    ensure_writable(&text_path, args.force)?;

    let picture = load_rgba(&args.image)?;

    let text = reveal(&picture, args.password.as_deref(), &PasswordCipher)
        .map_err(explain)
        .with_context(|| {
            format!(
                "Failed to recover the message from '{}'.",
                args.image.to_string_lossy().red().bold()
            )
        })?;

    fs::write(&text_path, text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            text_path.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {}",
        text_path.to_string_lossy().green().bold()
    );
    Ok(())
}

/// 处理 'Capacity' 命令：报告图像可用的位数以及可隐藏的最大字节数。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = load_rgba(&args.image)?;

    let bits = capacity_bits(&picture);
    let bytes = capacity_bytes(&picture);

    println!(
        "Eligible bits: {}\nMax text bytes: {}\nMax text bytes with password: {}",
        bits.to_string().green().bold(),
        bytes.to_string().green().bold(),
        PasswordCipher::plaintext_capacity(bytes)
            .to_string()
            .green()
            .bold()
    );
    Ok(())
}
