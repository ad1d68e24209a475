/// 信息末尾的哨兵标记。
/// 编码时将其原样附加到信息末尾，解码器据此识别信息的结束位置，
/// 而无需预先传递信息的长度。
pub const SENTINEL: &str = "###";

/// 单个字符占用的比特数。
/// 每个字符按 `u8` (8 bits) 处理，而每个像素的红色通道存储 1 bit，
/// 因此隐藏一个字符需要 8 个像素。
pub const BITS_PER_CHAR: usize = 8;

/// 整幅图像中未识别出哨兵时返回的固定提示文本。
pub const NOT_FOUND_MESSAGE: &str = "No hidden message found.";
