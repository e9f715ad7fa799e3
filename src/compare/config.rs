use anyhow::{Result, bail};

/// 默认分块大小：50 MB
pub const DEFAULT_CHUNK_SIZE: usize = 50_000_000;

/// 分块比较配置
///
/// 分块大小只影响性能和内存占用，任何正值都产生相同的比较结论。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareConfig {
    chunk_size: usize,
}

impl CompareConfig {
    /// 创建配置，分块大小必须为正
    pub fn new(chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            bail!("分块大小必须大于 0");
        }
        Ok(Self { chunk_size })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}
