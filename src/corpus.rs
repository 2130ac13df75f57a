//! 세종 말뭉치 줄 형식 읽기, 문장 단위 변환, 빈도 집계
//!
//! 입력 형식: 한 줄에 한 어절, 빈 줄이 문장 경계
//!
//! ```text
//! 생각했어요	생각/NNP + 하/XSV + 았/EP + 어요/EF
//! 통해서	통하/VV + ㅕ서/EC
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::config::LrOptions;
use crate::core::morphtag::MorphTag;
use crate::core::tag::is_sejong_tag;
use crate::error::{LrError, Result};
use crate::lr::{to_lr, LrResult};

/// (어절, 형태소열)
pub type Eojeol = (String, Vec<MorphTag>);

/// 한 문장의 어절들
pub type Sentence = Vec<Eojeol>;

/// `+` 로만 구분된 형태소열 나누기. `+/SW` 처럼 형태소가 `+` 인 경우를 되살린다.
fn split_compact(morphs: &str) -> Vec<String> {
    morphs
        .split('+')
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.starts_with('/') {
                format!("+{}", token)
            } else {
                token.to_string()
            }
        })
        .collect()
}

/// `eojeol<TAB>morph/tag + morph/tag` 한 줄 파싱
pub fn parse_eojeol_line(line: &str) -> Result<Eojeol> {
    let (eojeol, morphs) = line
        .trim_end_matches(['\r', '\n'])
        .split_once('\t')
        .ok_or_else(|| LrError::MalformedLine(line.to_string()))?;
    let (eojeol, morphs) = (eojeol.trim(), morphs.trim());
    if eojeol.is_empty() || morphs.is_empty() {
        return Err(LrError::MalformedLine(line.to_string()));
    }

    let tokens: Vec<String> = if morphs.contains(" + ") {
        morphs.split(" + ").map(|t| t.trim().to_string()).collect()
    } else {
        split_compact(morphs)
    };
    let morphtags = tokens
        .iter()
        .map(|token| token.parse::<MorphTag>())
        .collect::<Result<Vec<_>>>()?;
    for mt in morphtags.iter().filter(|mt| !is_sejong_tag(&mt.tag)) {
        log::debug!("세종 태그가 아님: {} ({})", mt, eojeol);
    }
    Ok((eojeol.to_string(), morphtags))
}

/// 빈 줄을 경계로 문장 단위 파싱
pub fn parse_sentences(text: &str) -> Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let mut current = Sentence::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            continue;
        }
        current.push(parse_eojeol_line(line)?);
    }
    if !current.is_empty() {
        sentences.push(current);
    }
    Ok(sentences)
}

/// 말뭉치 파일 읽기
pub fn read_sentences(path: &Path) -> Result<Vec<Sentence>> {
    let text = fs::read_to_string(path)?;
    parse_sentences(&text)
}

/// 문장 전체를 변환. 한 어절이라도 실패하면 문장 전체가 실패한다.
pub fn sentence_to_lr(sentence: &[Eojeol], options: &LrOptions) -> Result<Vec<LrResult>> {
    let mut results = Vec::with_capacity(sentence.len());
    for (eojeol, morphtags) in sentence {
        results.extend(to_lr(eojeol, morphtags, options)?);
    }
    Ok(results)
}

/// (어절, L-R) 빈도 집계
#[derive(Debug, Default)]
pub struct LrCounter {
    counts: HashMap<(String, String), usize>,
    /// 서로 다른 (어절, 형태소열) 쌍의 수
    pairs: usize,
    /// 변환에 실패한 쌍의 수
    exceptions: usize,
    /// 변환에 실패한 쌍의 출현 횟수 합
    exception_occurrences: usize,
    total_occurrences: usize,
}

impl LrCounter {
    /// 문장들을 집계. 같은 (어절, 형태소열) 쌍은 한 번만 변환한다.
    pub fn from_sentences(sentences: &[Sentence], options: &LrOptions) -> Self {
        let mut pair_counts: HashMap<&Eojeol, usize> = HashMap::new();
        for eojeol in sentences.iter().flatten() {
            *pair_counts.entry(eojeol).or_insert(0) += 1;
        }

        let mut counter = LrCounter {
            pairs: pair_counts.len(),
            ..Default::default()
        };
        for ((eojeol, morphtags), count) in pair_counts {
            counter.total_occurrences += count;
            match to_lr(eojeol, morphtags, options) {
                Ok(results) => {
                    for result in results {
                        counter.add(&result, count);
                    }
                }
                Err(e) => {
                    log::warn!("{}", e);
                    counter.exceptions += 1;
                    counter.exception_occurrences += count;
                }
            }
        }

        log::info!(
            "{} 개 (어절, 형태소열) 쌍 중 {} 개 변환 실패 ({:.3} %)",
            counter.pairs,
            counter.exceptions,
            counter.exception_percentage()
        );
        counter
    }

    /// 변환 결과 하나를 `count` 번 더함
    pub fn add(&mut self, result: &LrResult, count: usize) {
        if result.eojeol.is_empty() {
            return;
        }
        let key = (result.eojeol.clone(), result.lr_text());
        *self.counts.entry(key).or_insert(0) += count;
    }

    /// (어절, L-R) 의 빈도
    pub fn get(&self, eojeol: &str, lr_text: &str) -> usize {
        self.counts
            .get(&(eojeol.to_string(), lr_text.to_string()))
            .copied()
            .unwrap_or(0)
    }

    /// 서로 다른 (어절, L-R) 의 수
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn pairs(&self) -> usize {
        self.pairs
    }

    pub fn exceptions(&self) -> usize {
        self.exceptions
    }

    /// 출현 횟수 기준 변환 실패 비율 (%)
    pub fn exception_percentage(&self) -> f64 {
        if self.total_occurrences == 0 {
            return 0.0;
        }
        100.0 * self.exception_occurrences as f64 / self.total_occurrences as f64
    }

    /// `eojeol<TAB>L + R<TAB>count`, 빈도 내림차순 (같으면 어절 순)
    pub fn to_tsv_lines(&self) -> Vec<String> {
        let mut entries: Vec<_> = self.counts.iter().collect();
        entries.sort_by(|((e1, lr1), c1), ((e2, lr2), c2)| {
            c2.cmp(c1).then_with(|| e1.cmp(e2)).then_with(|| lr1.cmp(lr2))
        });
        entries
            .into_iter()
            .map(|((eojeol, lr), count)| format!("{}\t{}\t{}", eojeol, lr, count))
            .collect()
    }

    /// TSV 파일로 저장
    pub fn write_tsv(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut body = self.to_tsv_lines().join("\n");
        body.push('\n');
        fs::write(path, body)?;
        Ok(())
    }
}
