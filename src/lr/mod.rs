//! 어절 -> L-R 변환
//!
//! 세종 말뭉치 형식의 어절(`먹었다`)과 형태소 분석 결과
//! (`먹/VV + 었/EP + 다/EF`) 를 받아 어간 L 과 접미부 R 로 나눈다.
//!
//! ```text
//! 생각했어요  생각/NNP + 하/XSV + 았/EP + 어요/EF  ->  생각/Noun + 했어요/Verb
//! 통해서      통하/VV + ㅕ서/EC                   ->  통하/Verb + 아서/Eomi
//! ```

mod cascade;
mod form;
pub mod lemmatize;
mod preprocess;
pub mod rules;
pub mod verify;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LrOptions;
use crate::core::morphtag::{join_morphtags, LrMorph, MorphTag};
use crate::core::tag::SimpleTag;
use crate::error::{LrError, Result};

use cascade::Input;

/// 한 어절의 변환 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LrResult {
    /// 변환에 쓰인 어절 (전처리 후)
    pub eojeol: String,
    pub l: LrMorph,
    pub r: Option<LrMorph>,
    /// 변환에 쓰인 형태소들
    pub morphtags: Vec<MorphTag>,
    /// L 에 속하는 마지막 형태소 위치. 규칙표로 바로 정해진 경우 `None`
    pub boundary: Option<usize>,
}

impl LrResult {
    /// `L + R` 또는 `L`
    pub fn lr_text(&self) -> String {
        match &self.r {
            Some(r) => format!("{} + {}", self.l, r),
            None => self.l.to_string(),
        }
    }
}

impl fmt::Display for LrResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.eojeol, self.lr_text())
    }
}

/// 어절과 형태소열, 그리고 매처들이 공통으로 보는 단순 태그
#[derive(Debug, Clone)]
pub(crate) struct Sequence {
    pub eojeol: String,
    pub morphtags: Vec<MorphTag>,
    pub simple_tags: Vec<SimpleTag>,
}

impl Sequence {
    pub fn new(eojeol: String, morphtags: Vec<MorphTag>) -> Self {
        let simple_tags = morphtags.iter().map(MorphTag::simple_tag).collect();
        Self {
            eojeol,
            morphtags,
            simple_tags,
        }
    }

    pub fn len(&self) -> usize {
        self.morphtags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.eojeol.is_empty() || self.morphtags.is_empty()
    }

    pub fn morph(&self, i: usize) -> &str {
        &self.morphtags[i].morph
    }

    pub fn tag(&self, i: usize) -> &str {
        &self.morphtags[i].tag
    }

    /// 세분류 태그가 `tag` 인 마지막 위치
    pub fn rposition_tag(&self, tag: &str) -> Option<usize> {
        self.morphtags.iter().rposition(|mt| mt.tag == tag)
    }

    /// 단순 태그가 `tag` 인 마지막 위치
    pub fn rposition_simple(&self, tag: SimpleTag) -> Option<usize> {
        self.simple_tags.iter().rposition(|&t| t == tag)
    }

    pub fn result(&self, l: LrMorph, r: Option<LrMorph>, boundary: Option<usize>) -> LrResult {
        LrResult {
            eojeol: self.eojeol.clone(),
            l,
            r,
            morphtags: self.morphtags.clone(),
            boundary,
        }
    }
}

/// 어절을 L-R 형식으로 변환
///
/// - 결과가 비어 있으면 전처리에서 걸러진 어절 (기호만 있는 어절 등)
/// - `split_derivation_as_root` 로 분리된 경우 두 개의 결과
/// - 어떤 방법으로도 경계를 찾지 못하면 [`LrError::Unconvertible`]
pub fn to_lr(eojeol: &str, morphtags: &[MorphTag], options: &LrOptions) -> Result<Vec<LrResult>> {
    let raw = preprocess::normalize(eojeol, morphtags);
    if raw.is_empty() {
        log::debug!("빈 어절 무시: {:?}", eojeol);
        return Ok(Vec::new());
    }
    let clean = preprocess::clean(&raw);

    let input = Input {
        raw: &raw,
        clean: &clean,
        options: *options,
    };
    if let Some(results) = cascade::run(&input) {
        return Ok(results);
    }

    if clean.is_empty() {
        log::debug!("전처리 후 남은 것 없음: {} ({})", eojeol, join_morphtags(morphtags));
        return Ok(Vec::new());
    }
    Err(LrError::Unconvertible {
        eojeol: eojeol.to_string(),
        morphtags: join_morphtags(morphtags),
    })
}
