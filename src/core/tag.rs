//! 세종 품사 태그 단순화
//!
//! 세종 말뭉치의 세분류 태그(약 40개)를 L-R 표현에서 쓰는
//! 13개의 단순 태그로 사상한다.

use std::collections::{HashMap, HashSet};
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// 단순 품사 태그
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SimpleTag {
    Noun,
    Pronoun,
    Numeral,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Josa,
    Eomi,
    Exclamation,
    Symbol,
    Number,
    Unknown,
}

impl SimpleTag {
    /// 태그 이름 (`Noun`, `Eomi`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            SimpleTag::Noun => "Noun",
            SimpleTag::Pronoun => "Pronoun",
            SimpleTag::Numeral => "Numeral",
            SimpleTag::Verb => "Verb",
            SimpleTag::Adjective => "Adjective",
            SimpleTag::Adverb => "Adverb",
            SimpleTag::Determiner => "Determiner",
            SimpleTag::Josa => "Josa",
            SimpleTag::Eomi => "Eomi",
            SimpleTag::Exclamation => "Exclamation",
            SimpleTag::Symbol => "Symbol",
            SimpleTag::Number => "Number",
            SimpleTag::Unknown => "Unknown",
        }
    }

    /// 용언 (동사/형용사)
    pub fn is_predicate(&self) -> bool {
        matches!(self, SimpleTag::Verb | SimpleTag::Adjective)
    }

    /// 체언 (명사/대명사/수사)
    pub fn is_nominal(&self) -> bool {
        matches!(self, SimpleTag::Noun | SimpleTag::Pronoun | SimpleTag::Numeral)
    }

    /// 조사 또는 어미
    pub fn is_suffix(&self) -> bool {
        matches!(self, SimpleTag::Josa | SimpleTag::Eomi)
    }
}

impl fmt::Display for SimpleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

lazy_static! {
    static ref TAG_MAP: HashMap<&'static str, SimpleTag> = {
        use SimpleTag::*;
        let mut map = HashMap::new();
        for tag in ["EC", "EF", "EP", "ETM", "ETN"] {
            map.insert(tag, Eomi);
        }
        for tag in ["JC", "JKB", "JKC", "JKG", "JKO", "JKQ", "JKS", "JKV", "JX"] {
            map.insert(tag, Josa);
        }
        for tag in ["SE", "SF", "SH", "SL", "SO", "SP", "SS", "SW"] {
            map.insert(tag, Symbol);
        }
        // XR: 강렬, 간편, 비슷 (XR + XSV/XSA 는 용언이 됨)
        // XSN: 반영구+적, 대만+산 (명사 뒤 접미사)
        for tag in ["NNB", "NNG", "NNP", "XR", "XSN"] {
            map.insert(tag, Noun);
        }
        // VX: 해왔다 -> 하/VX + 아/EC + 오/VX + 았/EP + 다/EF
        for tag in ["VV", "VX", "XSV"] {
            map.insert(tag, Verb);
        }
        // VCN: 아니, VCP: 이, XSA: 같, 답, 되, 하
        for tag in ["VA", "VCN", "VCP", "XSA"] {
            map.insert(tag, Adjective);
        }
        // XPN: 과/XPN + 부가, 폐/XPN + 휴지
        for tag in ["MM", "XPN"] {
            map.insert(tag, Determiner);
        }
        map.insert("MAG", Adverb);
        map.insert("MAJ", Adverb);
        map.insert("IC", Exclamation);
        map.insert("NP", Pronoun);
        map.insert("NR", Numeral);
        map.insert("SN", Number);
        map.insert("NA", Unknown);
        map
    };

    /// 세종 말뭉치 태그 집합
    pub static ref SEJONG_TAGSET: HashSet<&'static str> = [
        "NNB", "NNG", "NNP", "XR", "XSN", "NR", "NP", "MM", "XPN", "MAG",
        "MAJ", "JC", "JKB", "JKC", "JKG", "JKO", "JKQ", "JKS", "JKV", "JX",
        "IC", "VA", "VCN", "VCP", "XSA", "VV", "VX", "XSV", "EC", "EF",
        "EP", "ETM", "ETN", "NA", "SE", "SF", "SH", "SL", "SN", "SO",
        "SP", "SS", "SW",
    ]
    .into_iter()
    .collect();
}

/// 세분류 태그를 단순 태그로 변환 (매핑 없으면 `Unknown`)
pub fn simplify(tag: &str) -> SimpleTag {
    TAG_MAP.get(tag).copied().unwrap_or(SimpleTag::Unknown)
}

/// 세종 태그 집합에 속하는 태그인지 확인
pub fn is_sejong_tag(tag: &str) -> bool {
    SEJONG_TAGSET.contains(tag)
}
