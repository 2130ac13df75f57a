//! 어절 전처리
//!
//! - [`normalize`]: 빈 형태소 제거, 자모 정규화, 대명사 표기 정리
//! - [`clean`]: 기호/복원 형태소 제거와 어절 문자 정리

use crate::core::morphtag::MorphTag;
use crate::core::unicode::{is_hangul_syllable, is_jamo, normalize_jamo};

use super::Sequence;

/// 정규화 단계 (모든 매처보다 먼저)
pub(crate) fn normalize(eojeol: &str, morphtags: &[MorphTag]) -> Sequence {
    let eojeol = normalize_jamo(eojeol);
    let mut morphtags: Vec<MorphTag> = morphtags
        .iter()
        .filter(|mt| !mt.morph.is_empty())
        .map(|mt| MorphTag::new(normalize_jamo(&mt.morph), mt.tag.clone()))
        .collect();

    let first = eojeol.chars().next();

    // 뭘로 = 무엇/NP + 으로/JKB -> 뭐/NP + 으로/JKB
    if matches!(first, Some('뭐' | '뭔' | '뭡' | '뭘'))
        && morphtags.first().is_some_and(|mt| mt.morph == "무엇")
    {
        for mt in morphtags.iter_mut().filter(|mt| mt.morph == "무엇") {
            mt.morph = "뭐".to_string();
        }
    }

    // 네것을 = 너/NP + 의/JKG + 것/NNB + 을/JKO -> 네/NP + 것/NNB + 을/JKO
    if let Some(c @ ('네' | '내' | '제')) = first {
        let possessive = morphtags.first().is_some_and(|mt| mt.tag == "NP")
            && morphtags.get(1).is_some_and(|mt| mt.tag == "JKG");
        if possessive {
            morphtags.remove(1);
            morphtags[0] = MorphTag::new(c.to_string(), "NP");
        }
    }

    Sequence::new(eojeol, morphtags)
}

/// 복원된 형태소(`(이)`)와 SN 이외의 기호 형태소
fn is_useless(mt: &MorphTag) -> bool {
    mt.morph.contains('(')
        || mt.morph.contains(')')
        || (mt.tag.starts_with('S') && mt.tag != "SN")
}

fn is_kept_char(c: char) -> bool {
    is_hangul_syllable(c) || is_jamo(c) || c.is_ascii_alphanumeric() || c == '·'
}

/// 정리 단계 (기호/외국어 매처 다음)
///
/// 결과가 비어 있으면 변환 대상이 아니다.
pub(crate) fn clean(seq: &Sequence) -> Sequence {
    let mut eojeol = seq.eojeol.clone();
    let mut morphtags = Vec::with_capacity(seq.morphtags.len());

    for mt in &seq.morphtags {
        if is_useless(mt) {
            eojeol = eojeol.replacen(mt.morph.as_str(), "", 1);
        } else {
            morphtags.push(mt.clone());
        }
    }

    let eojeol: String = eojeol.chars().filter(|&c| is_kept_char(c)).collect();
    Sequence::new(eojeol, morphtags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mts(pairs: &[(&str, &str)]) -> Vec<MorphTag> {
        pairs.iter().map(|(m, t)| MorphTag::new(*m, *t)).collect()
    }

    #[test]
    fn test_drop_empty_morphs() {
        let seq = normalize("먹었다", &mts(&[("먹", "VV"), ("", "EP"), ("었다", "EF")]));
        assert_eq!(seq.morphtags, mts(&[("먹", "VV"), ("었다", "EF")]));
    }

    #[test]
    fn test_conjoining_jamo_normalized() {
        // U+11AB (종성 ㄴ) -> U+3134
        let seq = normalize("간다", &mts(&[("가", "VV"), ("\u{11AB}다", "EF")]));
        assert_eq!(seq.morphtags[1].morph, "ㄴ다");
    }

    #[test]
    fn test_mueot_rewritten() {
        let seq = normalize("뭘로", &mts(&[("무엇", "NP"), ("으로", "JKB")]));
        assert_eq!(seq.morphtags, mts(&[("뭐", "NP"), ("으로", "JKB")]));

        let seq = normalize("무엇을", &mts(&[("무엇", "NP"), ("을", "JKO")]));
        assert_eq!(seq.morphtags[0].morph, "무엇");
    }

    #[test]
    fn test_possessive_pronoun_collapsed() {
        let seq = normalize(
            "네것을",
            &mts(&[("너", "NP"), ("의", "JKG"), ("것", "NNB"), ("을", "JKO")]),
        );
        assert_eq!(seq.morphtags, mts(&[("네", "NP"), ("것", "NNB"), ("을", "JKO")]));

        // 주격 조사는 그대로
        let seq = normalize("제가", &mts(&[("저", "NP"), ("가", "JKS")]));
        assert_eq!(seq.morphtags, mts(&[("저", "NP"), ("가", "JKS")]));
    }

    #[test]
    fn test_clean_removes_symbols() {
        let raw = normalize(
            "거야.",
            &mts(&[("거", "NNB"), ("(이)", "VCP"), ("야", "EF"), (".", "SF")]),
        );
        let seq = clean(&raw);
        assert_eq!(seq.eojeol, "거야");
        assert_eq!(seq.morphtags, mts(&[("거", "NNB"), ("야", "EF")]));
    }

    #[test]
    fn test_clean_keeps_sn_and_foreign_chars() {
        let raw = normalize("6.25의", &mts(&[("6", "SN"), (".", "SF"), ("25", "SN"), ("의", "JKG")]));
        let seq = clean(&raw);
        assert_eq!(seq.eojeol, "625의");
        assert_eq!(seq.morphtags.len(), 3);
    }

    #[test]
    fn test_clean_to_empty() {
        let raw = normalize("...", &mts(&[("...", "SE")]));
        assert!(clean(&raw).is_empty());
    }
}
