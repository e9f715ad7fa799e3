/// 标识比较的哪一侧出了问题
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// 根据自身从一对值中选出对应的一个
    pub fn pick<'a, T: ?Sized>(&self, first: &'a T, second: &'a T) -> &'a T {
        match self {
            Side::First => first,
            Side::Second => second,
        }
    }
}

/// 单次比较的唯一结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareOutcome {
    /// 两个文件逐字节完全一致
    Identical,
    /// 两个文件长度不同，未进行字节比较
    SizeMismatch { first: u64, second: u64 },
    /// 首个不同字节的绝对偏移
    ContentMismatch { offset: u64 },
    /// 打开某一侧文件失败
    OpenError { side: Side, reason: String },
    /// 扫描过程中某一侧读取失败，offset 为该次读取开始时的游标位置
    ReadError { side: Side, offset: u64, reason: String },
}

impl CompareOutcome {
    pub fn is_identical(&self) -> bool {
        matches!(self, CompareOutcome::Identical)
    }

    /// 结论是否为 I/O 故障，而非正常的比较结果
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            CompareOutcome::OpenError { .. } | CompareOutcome::ReadError { .. }
        )
    }
}
