use anyhow::Result;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use bin_cmp_tool::cli::Cli;
use bin_cmp_tool::compare::{
    CompareConfig, CompareOutcome, Comparator, NoProgress, ProgressObserver,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CompareConfig::new(cli.chunk_size)?;
    let mut comparator = Comparator::with_config(config);

    let outcome = if cli.quiet {
        comparator.compare_files_with_progress(&cli.first, &cli.second, &mut NoProgress)
    } else {
        let mut progress = BarProgress::new();
        let outcome =
            comparator.compare_files_with_progress(&cli.first, &cli.second, &mut progress);
        progress.finish();
        outcome
    };

    report(&cli, &outcome);

    if !outcome.is_identical() {
        std::process::exit(1);
    }

    Ok(())
}

/// 打印比较结论，错误信息输出到标准错误
fn report(cli: &Cli, outcome: &CompareOutcome) {
    match outcome {
        CompareOutcome::Identical => {
            println!("两个文件完全一致");
        }
        CompareOutcome::SizeMismatch { first, second } => {
            println!("两个文件大小不同: {} 字节 vs {} 字节", first, second);
        }
        CompareOutcome::ContentMismatch { offset } => {
            println!("两个文件内容不同，首个不同字节位于偏移 {}", offset);
        }
        CompareOutcome::OpenError { side, reason } => {
            let path = side.pick(cli.first.as_path(), cli.second.as_path());
            eprintln!("无法打开文件 {:?}: {}", path, reason);
        }
        CompareOutcome::ReadError {
            side,
            offset,
            reason,
        } => {
            let path = side.pick(cli.first.as_path(), cli.second.as_path());
            eprintln!("读取文件 {:?} 在偏移 {} 处失败: {}", path, offset, reason);
        }
    }
}

/// 终端进度条，首次回调时按文件总长度创建
struct BarProgress {
    bar: Option<ProgressBar>,
}

impl BarProgress {
    fn new() -> Self {
        Self { bar: None }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

impl ProgressObserver for BarProgress {
    fn on_chunk(&mut self, processed: u64, total: u64) {
        let bar = self.bar.get_or_insert_with(|| {
            let bar = ProgressBar::new(total);
            bar.set_style(
                ProgressStyle::with_template(
                    "[{bar:40.cyan/blue}] {bytes}/{total_bytes} ({percent}%)",
                )
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
            );
            bar
        });
        bar.set_position(processed);
    }
}
