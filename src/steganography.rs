use image::RgbImage;

use crate::constants::{BITS_PER_CHAR, NOT_FOUND_MESSAGE, SENTINEL};
use crate::error::StegoError;

/// 解码的结果：识别出隐藏信息，或整幅图像中不存在哨兵标记。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Found(String),
    NotFound,
}

impl Decoded {
    /// 取出解码出的文本；未找到信息时返回固定提示文本。
    pub fn into_message(self) -> String {
        match self {
            Decoded::Found(message) => message,
            Decoded::NotFound => NOT_FOUND_MESSAGE.to_owned(),
        }
    }
}

/// 计算图像最多能隐藏的字符数：`(width * height / 8) - 3`，下限为零。
pub fn capacity(width: u32, height: u32) -> usize {
    let capacity_bits = width as usize * height as usize;
    (capacity_bits / BITS_PER_CHAR).saturating_sub(SENTINEL.len())
}

pub fn encode(image: &RgbImage, message: &str) -> Result<RgbImage, StegoError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(StegoError::InvalidImage { width, height });
    }

    let mut payload = Vec::with_capacity(message.len() + SENTINEL.len());
    for (index, ch) in message.chars().chain(SENTINEL.chars()).enumerate() {
        let code = ch as u32;
        if code > u8::MAX as u32 {
            return Err(StegoError::Encoding { ch, code, index });
        }
        payload.push(code as u8);
    }

    let bits = payload
        .iter()
        .flat_map(|&byte| (0..BITS_PER_CHAR).rev().map(move |shift| (byte >> shift) & 1));

    // 像素按行优先顺序逐个消费比特；比特流耗尽后剩余像素保持原样。
    let mut doctored = image.clone();
    for (pixel, bit) in doctored.pixels_mut().zip(bits) {
        pixel[0] = (pixel[0] & !1) | bit;
    }

    Ok(doctored)
}

pub fn decode(image: &RgbImage) -> Result<Decoded, StegoError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(StegoError::InvalidImage { width, height });
    }

    let bits: Vec<u8> = image.pixels().map(|pixel| pixel[0] & 1).collect();

    let mut recovered = String::new();
    // 不足 8 bits 的尾部分组无法构成完整字符，直接跳过。
    for chunk in bits.chunks_exact(BITS_PER_CHAR) {
        let byte = chunk.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
        recovered.push(char::from(byte));
        if recovered.ends_with(SENTINEL) {
            recovered.truncate(recovered.len() - SENTINEL.len());
            return Ok(Decoded::Found(recovered));
        }
    }

    Ok(Decoded::NotFound)
}
