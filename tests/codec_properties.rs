use lsb_conceal::{
    StegoError,
    selector::{capacity_bits, eligible_offsets},
    steganography::{embed, extract},
};
use rand::{Rng, RngCore};

/// 生成随机颜色、给定 alpha 分布的 RGBA 缓冲区
fn random_carrier(pixels: usize, alpha: impl Fn(usize) -> u8) -> Vec<u8> {
    let mut pix = vec![0u8; pixels * 4];
    rand::rng().fill_bytes(&mut pix);
    for (i, pixel) in pix.chunks_exact_mut(4).enumerate() {
        pixel[3] = alpha(i);
    }
    pix
}

/// 生成不含 0x00 的随机载荷
fn random_payload(len: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(1..=u8::MAX)).collect()
}

/// 验证任意不含 0x00 的载荷都能完整往返
#[test]
fn round_trip_random_payloads() -> lsb_conceal::Result<()> {
    for len in [0, 1, 7, 64, 300] {
        let mut pix = random_carrier(1024, |i| if i % 5 == 0 { 17 } else { 255 });
        let payload = random_payload(len);
        embed(&mut pix, &payload)?;
        assert_eq!(extract(&pix)?, payload);
    }
    Ok(())
}

/// 验证解码不会修改缓冲区
#[test]
fn decode_is_non_destructive() -> lsb_conceal::Result<()> {
    let mut pix = random_carrier(256, |_| 255);
    embed(&mut pix, b"look but don't touch")?;
    let snapshot = pix.clone();
    extract(&pix)?;
    assert_eq!(pix, snapshot);
    Ok(())
}

/// 验证编码只改变可用字节的最低位，alpha 字节保持不变
#[test]
fn only_eligible_lsbs_change() -> lsb_conceal::Result<()> {
    let original = random_carrier(512, |i| [255, 254, 0, 255][i % 4]);
    let mut pix = original.clone();
    embed(&mut pix, &random_payload(40))?;

    let eligible: Vec<usize> = eligible_offsets(&original).collect();
    for (i, (&before, &after)) in original.iter().zip(&pix).enumerate() {
        if i % 4 == 3 || eligible.binary_search(&i).is_err() {
            assert_eq!(before, after, "byte {i} must be untouched");
        } else {
            assert_eq!(before & !1, after & !1, "byte {i} high bits changed");
        }
    }
    Ok(())
}

/// 验证容量边界：恰好 N 位成功，N + 1 位失败
#[test]
fn capacity_boundary_is_exact() -> lsb_conceal::Result<()> {
    // 8 个不透明像素 = 24 bit = 2 字节载荷 + 结束标记
    let mut pix = random_carrier(8, |_| 255);
    assert_eq!(capacity_bits(&pix), 24);
    embed(&mut pix, b"ok")?;
    assert_eq!(extract(&pix)?, b"ok".to_vec());

    // 再加一个半透明像素不会增加容量
    let mut pix = random_carrier(9, |i| if i == 8 { 200 } else { 255 });
    let before = pix.clone();
    assert_eq!(
        embed(&mut pix, b"ok!"),
        Err(StegoError::CapacityExceeded {
            required: 32,
            available: 24
        })
    );
    assert_eq!(pix, before);
    Ok(())
}

/// 验证 alpha 全为 254 时没有任何可用字节
#[test]
fn alpha_254_carrier_holds_nothing() {
    let mut pix = random_carrier(100, |_| 254);
    assert_eq!(eligible_offsets(&pix).count(), 0);
    assert!(matches!(
        embed(&mut pix, b"x"),
        Err(StegoError::CapacityExceeded { available: 0, .. })
    ));
    assert_eq!(
        extract(&pix),
        Err(StegoError::NoTerminatorFound { scanned: 0 })
    );
}

/// 2x1 与 10x1 的完全不透明图像
#[test]
fn tiny_image_scenarios() -> lsb_conceal::Result<()> {
    let mut two = random_carrier(2, |_| 255);
    assert!(matches!(
        embed(&mut two, &[0x41]),
        Err(StegoError::CapacityExceeded { required: 16, available: 6 })
    ));

    let mut ten = random_carrier(10, |_| 255);
    embed(&mut ten, &[0x41])?;
    assert_eq!(extract(&ten)?, vec![0x41]);
    Ok(())
}
