//! lrform - 세종 말뭉치 어절을 L-R 형식으로 변환
//!
//! ```text
//! lrform [FILE]           # FILE 이 없으면 표준 입력
//! lrform --counts [FILE]  # (어절, L-R) 빈도표 출력
//! ```

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use lrform::config::{config_path, load_options_or_default};
use lrform::corpus::{parse_sentences, read_sentences, LrCounter, Sentence};
use lrform::{to_lr, LrOptions, Result};

#[derive(Parser, Debug)]
#[command(name = "lrform", version, about)]
struct Cli {
    /// 어절별 변환 대신 (어절, L-R) 빈도표를 출력
    #[arg(long)]
    counts: bool,

    /// 세종 말뭉치 파일. 없으면 표준 입력
    file: Option<PathBuf>,
}

fn read_input(path: Option<&Path>) -> Result<Vec<Sentence>> {
    match path {
        Some(path) => read_sentences(path),
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            parse_sentences(&text)
        }
    }
}

/// 어절마다 `eojeol<TAB>L + R` 출력
fn print_lr(sentences: &[Sentence], options: &LrOptions) {
    let (mut converted, mut filtered, mut failed) = (0usize, 0usize, 0usize);

    for (i, sentence) in sentences.iter().enumerate() {
        if i > 0 {
            println!();
        }
        for (eojeol, morphtags) in sentence {
            match to_lr(eojeol, morphtags, options) {
                Ok(results) if results.is_empty() => filtered += 1,
                Ok(results) => {
                    converted += 1;
                    for result in results {
                        println!("{}", result);
                    }
                }
                Err(e) => {
                    failed += 1;
                    log::warn!("{}", e);
                }
            }
        }
    }

    log::info!(
        "문장 {} 개: 변환 {}, 제외 {}, 실패 {}",
        sentences.len(),
        converted,
        filtered,
        failed
    );
}

fn run(cli: &Cli) -> Result<()> {
    let options = load_options_or_default(&config_path());
    log::debug!("옵션: {:?}", options);

    let sentences = read_input(cli.file.as_deref())?;
    if cli.counts {
        let counter = LrCounter::from_sentences(&sentences, &options);
        for line in counter.to_tsv_lines() {
            println!("{}", line);
        }
    } else {
        print_lr(&sentences, &options);
    }
    Ok(())
}

fn main() -> ExitCode {
    // 로깅 초기화 (error/warn만 출력)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("lrform: {}", e);
            ExitCode::FAILURE
        }
    }
}
