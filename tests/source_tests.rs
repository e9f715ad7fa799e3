use bin_cmp_tool::compare::{
    ByteSource, CompareConfig, CompareOutcome, Comparator, NoProgress, Side,
};
use std::io::{self, Cursor, Read};

fn compare_bytes(first: &[u8], second: &[u8], chunk_size: usize) -> CompareOutcome {
    let mut comparator = Comparator::with_config(CompareConfig::new(chunk_size).unwrap());
    let mut a = Cursor::new(first.to_vec());
    let mut b = Cursor::new(second.to_vec());
    comparator.compare_sources(&mut a, &mut b, &mut NoProgress)
}

/// Declares a length but serves fewer bytes, simulating a file that shrank
/// after its metadata was read.
struct TruncatedSource {
    declared: u64,
    inner: Cursor<Vec<u8>>,
}

impl TruncatedSource {
    fn new(declared: u64, data: &[u8]) -> Self {
        Self {
            declared,
            inner: Cursor::new(data.to_vec()),
        }
    }
}

impl ByteSource for TruncatedSource {
    fn len(&self) -> u64 {
        self.declared
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(&mut self.inner, buf)
    }
}

/// Serves `limit` filler bytes, then fails every further read.
struct FailingSource {
    len: u64,
    limit: u64,
    served: u64,
}

impl FailingSource {
    fn new(len: u64, limit: u64) -> Self {
        Self {
            len,
            limit,
            served: 0,
        }
    }
}

impl ByteSource for FailingSource {
    fn len(&self) -> u64 {
        self.len
    }

    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served >= self.limit {
            return Err(io::Error::other("injected read failure"));
        }
        let n = buf.len().min((self.limit - self.served) as usize);
        buf[..n].fill(b'A');
        self.served += n as u64;
        Ok(n)
    }
}

#[test]
fn in_memory_sources_compare_like_files() {
    assert_eq!(compare_bytes(b"", b"", 8), CompareOutcome::Identical);
    assert_eq!(compare_bytes(b"ABCDE", b"ABCDE", 8), CompareOutcome::Identical);
    assert_eq!(
        compare_bytes(b"ABCDE", b"ABXDE", 8),
        CompareOutcome::ContentMismatch { offset: 2 }
    );
    assert_eq!(
        compare_bytes(b"ABC", b"ABCDE", 8),
        CompareOutcome::SizeMismatch { first: 3, second: 5 }
    );
}

#[test]
fn divergence_position_is_stable_across_chunk_sizes() {
    let base = vec![b'A'; 33];
    for divergence in [0usize, 1, 15, 16, 17, 32] {
        let mut modified = base.clone();
        modified[divergence] = b'B';
        for chunk_size in [1usize, 2, 16, 33, 64] {
            assert_eq!(
                compare_bytes(&base, &modified, chunk_size),
                CompareOutcome::ContentMismatch {
                    offset: divergence as u64
                },
                "divergence={} chunk_size={}",
                divergence,
                chunk_size
            );
        }
    }
}

#[test]
fn single_byte_sources() {
    assert_eq!(compare_bytes(b"A", b"A", 1), CompareOutcome::Identical);
    assert_eq!(
        compare_bytes(b"A", b"B", 1),
        CompareOutcome::ContentMismatch { offset: 0 }
    );
}

#[test]
fn read_failure_reports_the_chunk_start_offset() {
    let mut comparator = Comparator::with_config(CompareConfig::new(4).unwrap());
    // fails partway through the second chunk; the reported offset is the
    // cursor at the start of that chunk, not the failure point
    let mut first = FailingSource::new(10, 6);
    let mut second = Cursor::new(vec![b'A'; 10]);

    match comparator.compare_sources(&mut first, &mut second, &mut NoProgress) {
        CompareOutcome::ReadError { side, offset, .. } => {
            assert_eq!(side, Side::First);
            assert_eq!(offset, 4);
        }
        other => panic!("expected ReadError, got {:?}", other),
    }
}

#[test]
fn read_failure_on_the_second_side() {
    let mut comparator = Comparator::with_config(CompareConfig::new(4).unwrap());
    let mut first = Cursor::new(vec![b'A'; 10]);
    let mut second = FailingSource::new(10, 0);

    match comparator.compare_sources(&mut first, &mut second, &mut NoProgress) {
        CompareOutcome::ReadError { side, offset, .. } => {
            assert_eq!(side, Side::Second);
            assert_eq!(offset, 0);
        }
        other => panic!("expected ReadError, got {:?}", other),
    }
}

#[test]
fn one_side_shorter_than_declared_is_a_read_error_on_that_side() {
    let mut comparator = Comparator::with_config(CompareConfig::new(4).unwrap());
    let mut first = Cursor::new(vec![b'A'; 10]);
    let mut second = TruncatedSource::new(10, &[b'A'; 6]);

    match comparator.compare_sources(&mut first, &mut second, &mut NoProgress) {
        CompareOutcome::ReadError { side, offset, .. } => {
            assert_eq!(side, Side::Second);
            assert_eq!(offset, 4);
        }
        other => panic!("expected ReadError, got {:?}", other),
    }
}

#[test]
fn both_sides_shorter_than_declared_is_an_unexpected_eof() {
    let mut comparator = Comparator::with_config(CompareConfig::new(4).unwrap());
    let mut first = TruncatedSource::new(10, &[b'A'; 6]);
    let mut second = TruncatedSource::new(10, &[b'A'; 6]);

    match comparator.compare_sources(&mut first, &mut second, &mut NoProgress) {
        CompareOutcome::ReadError { side, offset, .. } => {
            // both sides are equally short; attributed to the first
            assert_eq!(side, Side::First);
            assert_eq!(offset, 6);
        }
        other => panic!("expected ReadError, got {:?}", other),
    }
}

#[test]
fn zero_chunk_size_is_rejected() {
    assert!(CompareConfig::new(0).is_err());
    assert!(CompareConfig::new(1).is_ok());
}

#[test]
fn no_observation_on_size_mismatch_or_empty_sources() {
    let mut comparator = Comparator::with_config(CompareConfig::new(4).unwrap());

    let calls = std::cell::Cell::new(0u32);
    let mut observer = |_: u64, _: u64| calls.set(calls.get() + 1);
    let mut a = Cursor::new(b"ABC".to_vec());
    let mut b = Cursor::new(b"ABCDE".to_vec());
    comparator.compare_sources(&mut a, &mut b, &mut observer);
    assert_eq!(calls.get(), 0);

    let mut a = Cursor::new(Vec::new());
    let mut b = Cursor::new(Vec::new());
    comparator.compare_sources(&mut a, &mut b, &mut observer);
    assert_eq!(calls.get(), 0);
}
