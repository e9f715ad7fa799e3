use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::Path;

/// 长度已知、可顺序读取的字节源
pub trait ByteSource {
    /// 打开时确定的总长度（字节）
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 读取下一段字节到 buf，返回实际读到的数量，0 表示已到末尾
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// 已打开的文件字节源
///
/// 长度在打开时通过元数据查询得到，不需要顺序读完整个文件；
/// 句柄随所有权释放自动关闭。
#[derive(Debug)]
pub struct FileSource {
    file: File,
    len: u64,
}

impl FileSource {
    /// 打开文件并查询其总长度，目录会被拒绝
    pub fn open(path: &Path) -> io::Result<Self> {
        let file = File::open(path)?;
        let metadata = file.metadata()?;
        if metadata.is_dir() {
            return Err(io::Error::new(io::ErrorKind::IsADirectory, "不能比较目录"));
        }
        Ok(Self {
            file,
            len: metadata.len(),
        })
    }
}

impl ByteSource for FileSource {
    fn len(&self) -> u64 {
        self.len
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

/// 内存中的字节源，便于在没有真实文件的情况下测试比较逻辑
impl<T: AsRef<[u8]>> ByteSource for Cursor<T> {
    fn len(&self) -> u64 {
        self.get_ref().as_ref().len() as u64
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(self, buf)
    }
}
