/// 进度回调，每比较完一个分块调用一次
///
/// 只用于展示，不影响比较结论。
pub trait ProgressObserver {
    /// processed 为已比较的字节数，total 为文件总长度
    fn on_chunk(&mut self, processed: u64, total: u64);
}

/// 不输出任何进度
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_chunk(&mut self, _processed: u64, _total: u64) {}
}

/// 闭包可以直接作为进度回调使用
impl<F: FnMut(u64, u64)> ProgressObserver for F {
    fn on_chunk(&mut self, processed: u64, total: u64) {
        self(processed, total)
    }
}
