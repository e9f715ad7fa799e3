use clap::Parser;
use std::path::PathBuf;

use crate::compare::DEFAULT_CHUNK_SIZE;

/// 二进制文件比较工具
#[derive(Parser)]
#[command(name = "bct")]
#[command(about = "二进制文件比较工具", long_about = None)]
pub struct Cli {
    /// 第一个文件路径
    pub first: PathBuf,

    /// 第二个文件路径
    pub second: PathBuf,

    /// 单次读取的分块大小 (字节)
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_CHUNK_SIZE,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub chunk_size: usize,

    /// 不显示进度条
    #[arg(short, long)]
    pub quiet: bool,
}
