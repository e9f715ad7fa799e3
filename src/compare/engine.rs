use std::io;
use std::path::Path;

use super::config::CompareConfig;
use super::outcome::{CompareOutcome, Side};
use super::progress::{NoProgress, ProgressObserver};
use super::source::{ByteSource, FileSource};

/// 分块比较器
///
/// 持有配置和一对可复用的读缓冲区，内存占用不超过两个分块大小，
/// 与被比较文件的大小无关。
pub struct Comparator {
    config: CompareConfig,
    first_buf: Vec<u8>,
    second_buf: Vec<u8>,
}

impl Comparator {
    /// 使用默认配置创建比较器
    pub fn new() -> Self {
        Self::with_config(CompareConfig::default())
    }

    /// 使用指定配置创建比较器
    pub fn with_config(config: CompareConfig) -> Self {
        Self {
            config,
            first_buf: Vec::new(),
            second_buf: Vec::new(),
        }
    }

    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// 比较两个文件，返回唯一结论
    pub fn compare_files(&mut self, first: &Path, second: &Path) -> CompareOutcome {
        self.compare_files_with_progress(first, second, &mut NoProgress)
    }

    /// 比较两个文件，每比较完一个分块调用一次进度回调
    pub fn compare_files_with_progress(
        &mut self,
        first: &Path,
        second: &Path,
        progress: &mut dyn ProgressObserver,
    ) -> CompareOutcome {
        // 任何一侧打不开都立即返回，不再碰另一侧
        let mut first_source = match FileSource::open(first) {
            Ok(source) => source,
            Err(err) => {
                return CompareOutcome::OpenError {
                    side: Side::First,
                    reason: err.to_string(),
                };
            }
        };
        let mut second_source = match FileSource::open(second) {
            Ok(source) => source,
            Err(err) => {
                return CompareOutcome::OpenError {
                    side: Side::Second,
                    reason: err.to_string(),
                };
            }
        };

        self.compare_sources(&mut first_source, &mut second_source, progress)
    }

    /// 对两个已打开的字节源执行分块比较
    pub fn compare_sources(
        &mut self,
        first: &mut dyn ByteSource,
        second: &mut dyn ByteSource,
        progress: &mut dyn ProgressObserver,
    ) -> CompareOutcome {
        // 长度不同无需读取任何内容
        let first_len = first.len();
        let second_len = second.len();
        if first_len != second_len {
            return CompareOutcome::SizeMismatch {
                first: first_len,
                second: second_len,
            };
        }

        // 两个空文件视为一致
        let total = first_len;
        if total == 0 {
            return CompareOutcome::Identical;
        }

        let chunk_size = self.config.chunk_size();
        let buf_len = (chunk_size as u64).min(total) as usize;
        self.first_buf.resize(buf_len, 0);
        self.second_buf.resize(buf_len, 0);

        let mut cursor: u64 = 0;
        while cursor < total {
            let want = (total - cursor).min(chunk_size as u64) as usize;

            let read_first = match read_full(first, &mut self.first_buf[..want]) {
                Ok(n) => n,
                Err(err) => {
                    return CompareOutcome::ReadError {
                        side: Side::First,
                        offset: cursor,
                        reason: err.to_string(),
                    };
                }
            };
            let read_second = match read_full(second, &mut self.second_buf[..want]) {
                Ok(n) => n,
                Err(err) => {
                    return CompareOutcome::ReadError {
                        side: Side::Second,
                        offset: cursor,
                        reason: err.to_string(),
                    };
                }
            };

            // 长度在开头已确认相等，两侧每次必须读到同样多的字节
            if read_first != read_second {
                let side = if read_first < read_second {
                    Side::First
                } else {
                    Side::Second
                };
                return CompareOutcome::ReadError {
                    side,
                    offset: cursor,
                    reason: format!(
                        "两侧读取长度不一致: {} 字节 vs {} 字节",
                        read_first, read_second
                    ),
                };
            }

            // 游标未到声明长度却读不到数据，文件比声明的短
            if read_first == 0 {
                return CompareOutcome::ReadError {
                    side: Side::First,
                    offset: cursor,
                    reason: format!("文件提前结束，声明长度为 {} 字节", total),
                };
            }

            let chunk_first = &self.first_buf[..read_first];
            let chunk_second = &self.second_buf[..read_first];
            if chunk_first != chunk_second {
                if let Some(index) = chunk_first
                    .iter()
                    .zip(chunk_second)
                    .position(|(a, b)| a != b)
                {
                    return CompareOutcome::ContentMismatch {
                        offset: cursor + index as u64,
                    };
                }
            }

            cursor += read_first as u64;
            progress.on_chunk(cursor, total);
        }

        CompareOutcome::Identical
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}

/// 使用默认配置比较两个文件
pub fn compare_files(first: &Path, second: &Path) -> CompareOutcome {
    Comparator::new().compare_files(first, second)
}

/// 反复读取直到填满缓冲区或到达数据末尾
fn read_full(source: &mut dyn ByteSource, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match source.read_chunk(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}
