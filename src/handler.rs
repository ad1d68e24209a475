//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover` 和 `capacity` 子命令的高级业务逻辑。
//! 本模块负责协调图像文件 I/O、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CapacityArgs, HideArgs, RecoverArgs};
use crate::constants::NOT_FOUND_MESSAGE;
use crate::steganography::{self, Decoded};
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、把图像归一化为 RGB、检查隐藏容量是否足够、
/// 调用核心编码函数嵌入文本，最后将结果图像写入目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖开关的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件，或无法读取文本文件。
/// * 文本文件为空，或图像没有足够的空间来隐藏文本。
/// * 文本中存在码点超过 255 的字符。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let picture = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let text = fs::read_to_string(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    anyhow::ensure!(
        !text.is_empty(),
        "The text file is empty. There is nothing to hide."
    );

    let (width, height) = picture.dimensions();
    let required_space = text.chars().count();
    let available_space = steganography::capacity(width, height);

    anyhow::ensure!(
        available_space >= required_space,
        "Not enough space in the image to hide the text. \nRequired: {}, Available: {}",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    let doctored = steganography::encode(&picture, &text)
        .context("Failed to hide the text in the image.")?;

    let dest = args
        .dest
        .unwrap_or_else(|| default_doctored_path(&args.image));
    ensure_writable(&dest, args.force)?;

    doctored.save(&dest).with_context(|| {
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
/// 负责读取经过隐写的图像文件、调用核心解码函数扫描哨兵标记，
/// 找到信息时将其写入目标文本文件，否则打印固定提示文本。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径与覆盖开关的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取或解码输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let picture = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let decoded = steganography::decode(&picture).with_context(|| {
        format!(
            "Failed to recover text from '{}'.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    match decoded {
        Decoded::Found(message) => {
            let dest = args
                .text
                .unwrap_or_else(|| default_recovered_path(&args.image));
            ensure_writable(&dest, args.force)?;

            fs::write(&dest, &message).with_context(|| {
                format!(
                    "Unable to write to target text file: {}",
                    dest.to_string_lossy().red().bold()
                )
            })?;

            println!(
                "The text has been successfully recovered and saved: {}",
                dest.to_string_lossy().green().bold()
            );
        }
        Decoded::NotFound => {
            println!("{}", NOT_FOUND_MESSAGE.yellow().bold());
        }
    }

    Ok(())
}

/// 处理 'Capacity' 命令的执行逻辑。
///
/// 读取图像并报告其在 1 bit/像素 的嵌入方式下最多能隐藏多少个字符。
///
/// # Errors
///
/// 无法读取或解码输入的图像文件时返回错误。
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let picture = image::open(&args.image)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                args.image.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let (width, height) = picture.dimensions();
    let max_chars = steganography::capacity(width, height);

    println!(
        "The image {} ({}x{}) can carry up to {} characters.",
        args.image.to_string_lossy().cyan(),
        width,
        height,
        max_chars.to_string().green().bold()
    );

    Ok(())
}

/// 构造缺省的隐写输出路径：与输入图像同目录的 `doctored_<文件名>.png`。
fn default_doctored_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    image.with_file_name(format!("doctored_{stem}.png"))
}

/// 构造缺省的恢复文本路径：与输入图像同目录的 `recovered_<文件名>.txt`。
fn default_recovered_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_owned());
    image.with_file_name(format!("recovered_{stem}.txt"))
}

/// 覆盖保护：输出文件已存在且未指定 `--force` 时拒绝写入。
fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}
