//! # Bin Cmp Tool
//!
//! 二进制文件比较工具库
//!
//! ## 功能
//!
//! - 逐字节比较两个文件，报告首个不同字节的偏移
//! - 分块读取，支持大文件处理，内存占用低
//! - 分块大小可配置，可挂接进度回调
//!
//! ## 使用示例
//!
//! ```no_run
//! use bin_cmp_tool::compare::{CompareOutcome, compare_files};
//! use std::path::Path;
//!
//! // 比较两个文件
//! match compare_files(Path::new("a.bin"), Path::new("b.bin")) {
//!     CompareOutcome::Identical => println!("两个文件完全一致"),
//!     CompareOutcome::ContentMismatch { offset } => {
//!         println!("首个不同字节位于偏移 {}", offset)
//!     }
//!     outcome => println!("{:?}", outcome),
//! }
//! ```

pub mod cli;
pub mod compare;

// 重新导出常用类型
pub use compare::{CompareConfig, CompareOutcome, Comparator, Side};
pub use compare::{ByteSource, FileSource, NoProgress, ProgressObserver, compare_files};
