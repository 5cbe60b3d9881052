//! # 加解密模块
//!
//! 隐写核心把密文当作不透明的字节串处理。默认实现 [`PasswordCipher`]：
//!
//! - 用 Argon2id 从密码和随机盐派生 AES-256 密钥；
//! - 用 AES-256-GCM-SIV 加密，随机 nonce；
//! - 输出 `salt || nonce || ciphertext+tag` 的 Base64 文本。
//!
//! Base64 输出保证密文中不会出现 0x00，从而与结束标记约定兼容。

use crate::constants::{
    ARGON2_LANES, ARGON2_MEMORY_KIB, ARGON2_TIME_COST, KEY_LEN, NONCE_LEN, SALT_LEN,
    TAG_LEN,
};
use crate::error::{Result, StegoError};
use aes_gcm_siv::aead::Aead;
use aes_gcm_siv::{Aes256GcmSiv, KeyInit, Nonce};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rand::RngCore;
use zeroize::Zeroizing;

/// 以密码为密钥的对称加解密原语。
pub trait Cipher {
    /// 加密明文，返回不含 0x00 字节的密文。
    fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<Vec<u8>>;

    /// 解密密文。密码错误或数据损坏时返回 [`StegoError::DecryptionFailed`]。
    fn decrypt(&self, ciphertext: &[u8], password: &str) -> Result<Vec<u8>>;
}

/// Argon2id + AES-256-GCM-SIV + Base64 的默认实现。
#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordCipher;

impl PasswordCipher {
    /// 给定可用的密文字节预算，返回加密后仍能放下的最大明文长度。
    pub fn plaintext_capacity(budget: usize) -> usize {
        (budget / 4 * 3).saturating_sub(SALT_LEN + NONCE_LEN + TAG_LEN)
    }

    fn derive_key(password: &str, salt: &[u8]) -> Result<Zeroizing<[u8; KEY_LEN]>> {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_TIME_COST,
            ARGON2_LANES,
            Some(KEY_LEN),
        )
        .map_err(|_| StegoError::KeyDerivation)?;

        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
            .hash_password_into(password.as_bytes(), salt, &mut *key)
            .map_err(|_| StegoError::KeyDerivation)?;
        Ok(key)
    }
}

impl Cipher for PasswordCipher {
    fn encrypt(&self, plaintext: &[u8], password: &str) -> Result<Vec<u8>> {
        let mut rng = rand::rng();
        let mut salt = [0u8; SALT_LEN];
        rng.fill_bytes(&mut salt);
        let mut nonce = [0u8; NONCE_LEN];
        rng.fill_bytes(&mut nonce);

        let key = Self::derive_key(password, &salt)?;
        let cipher =
            Aes256GcmSiv::new_from_slice(&*key).map_err(|_| StegoError::Encryption)?;
        let sealed = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| StegoError::Encryption)?;

        let mut frame = Vec::with_capacity(SALT_LEN + NONCE_LEN + sealed.len());
        frame.extend_from_slice(&salt);
        frame.extend_from_slice(&nonce);
        frame.extend_from_slice(&sealed);

        Ok(STANDARD.encode(frame).into_bytes())
    }

    fn decrypt(&self, ciphertext: &[u8], password: &str) -> Result<Vec<u8>> {
        let frame = STANDARD
            .decode(ciphertext)
            .map_err(|_| StegoError::DecryptionFailed)?;
        if frame.len() < SALT_LEN + NONCE_LEN {
            return Err(StegoError::DecryptionFailed);
        }

        let (salt, rest) = frame.split_at(SALT_LEN);
        let (nonce, sealed) = rest.split_at(NONCE_LEN);

        let key = Self::derive_key(password, salt)?;
        let cipher =
            Aes256GcmSiv::new_from_slice(&*key).map_err(|_| StegoError::DecryptionFailed)?;
        cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| StegoError::DecryptionFailed)
    }
}
