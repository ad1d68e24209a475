//! # 错误类型模块
//!
//! 定义隐写核心算法的错误分类。超出容量与未找到哨兵不属于错误：
//! 前者产生截断的输出图像，后者返回固定提示文本。

use thiserror::Error;

/// 隐写核心算法返回的错误类型。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StegoError {
    /// 像素网格的宽或高为零，无法承载任何信息。
    #[error("The image has no pixels to carry a message ({width}x{height}).")]
    InvalidImage { width: u32, height: u32 },

    /// 信息中的字符无法放入单个字节 (码点超过 255)。
    #[error(
        "Character '{ch}' (code point U+{code:04X}) at index {index} does not fit in a single byte."
    )]
    Encoding { ch: char, code: u32, index: usize },
}
