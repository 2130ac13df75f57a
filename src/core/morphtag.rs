//! 형태소/품사 쌍

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::tag::{simplify, SimpleTag};
use crate::error::LrError;

/// 세분류 태그가 붙은 형태소 (`먹/VV`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MorphTag {
    pub morph: String,
    pub tag: String,
}

impl MorphTag {
    pub fn new(morph: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            morph: morph.into(),
            tag: tag.into(),
        }
    }

    /// 단순 태그
    pub fn simple_tag(&self) -> SimpleTag {
        simplify(&self.tag)
    }
}

impl fmt::Display for MorphTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.morph, self.tag)
    }
}

/// `morph/tag` 문자열 파싱
///
/// 마지막 `/` 를 기준으로 나누므로 `//SP` 는 형태소 `/` 로 읽힌다.
impl FromStr for MorphTag {
    type Err = LrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (morph, tag) = s
            .rsplit_once('/')
            .ok_or_else(|| LrError::MalformedMorphTag(s.to_string()))?;
        if tag.is_empty() {
            return Err(LrError::MalformedMorphTag(s.to_string()));
        }
        Ok(MorphTag::new(morph, tag))
    }
}

/// L-R 표현의 한쪽 (단순 태그가 붙은 형태소, `먹/Verb`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LrMorph {
    pub morph: String,
    pub tag: SimpleTag,
}

impl LrMorph {
    pub fn new(morph: impl Into<String>, tag: SimpleTag) -> Self {
        Self {
            morph: morph.into(),
            tag,
        }
    }
}

impl fmt::Display for LrMorph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.morph, self.tag)
    }
}

/// 형태소 목록을 `a/NNG + b/JKS` 형식으로 표시
pub fn join_morphtags(morphtags: &[MorphTag]) -> String {
    morphtags
        .iter()
        .map(|mt| mt.to_string())
        .collect::<Vec<_>>()
        .join(" + ")
}
