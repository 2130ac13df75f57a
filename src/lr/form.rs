//! 경계 위치로부터 (L, R) 구성
//!
//! 형태소 경계 `i` (L 에 속하는 마지막 형태소) 가 정해지면 어절의 표층 분리점을
//! 계산하고, L 은 원형 어간으로, R 은 [`lemmatize_r`] 로 복원한다. 결과가
//! 검증을 통과하지 못하면 복합 용언에 한해 분리점을 한 글자씩 옮겨 다시 시도한다.

use crate::core::morphtag::LrMorph;
use crate::core::tag::SimpleTag;
use crate::core::unicode::{is_jaum, strip_jamo};

use super::lemmatize::{lemmatize_r, Split};
use super::verify::check_lr_transformation;
use super::Sequence;

type Tags = (Option<SimpleTag>, Option<SimpleTag>);

fn surface_len(morph: &str) -> usize {
    strip_jamo(morph).chars().count()
}

/// 표층 분리점 (L 에 속하는 글자 수)
///
/// `i` 앞에 용언이 있으면 (복합 용언) R 의 길이로부터 거꾸로 잡는다.
fn split_point(seq: &Sequence, eojeol: &[char], i: usize, anchored: bool, shift: usize) -> Option<usize> {
    if anchored {
        let r_len: usize = seq.morphtags[i + 1..].iter().map(|mt| surface_len(&mt.morph)).sum();
        return eojeol.len().checked_sub(r_len).map(|b| b + shift);
    }

    let mut b: usize = seq.morphtags[..=i].iter().map(|mt| surface_len(&mt.morph)).sum();
    // 학생다 = 학생 + 이 + 다: 생략된 서술격 조사
    if seq.morph(i) == "이" && seq.tag(i) == "VCP" && b > 0 {
        let next_first = seq.morph(i + 1).chars().next();
        if eojeol.get(b - 1).copied() == next_first {
            b -= 1;
        }
    }
    Some(b)
}

/// 서술격 조사 뒤의 R 은 조사로 본다
fn default_tag_r(seq: &Sequence, i: usize, surface_r: &[char]) -> SimpleTag {
    let tag = seq.simple_tags[i + 1];
    if seq.tag(i + 1) != "VCP" {
        return tag;
    }
    let (Some(first), Some(next)) = (surface_r.first(), seq.morphtags.get(i + 2)) else {
        return tag;
    };
    let next: Vec<char> = next.morph.chars().collect();
    let starts_same = next.first() == Some(first);
    let after_jaum = next.first().is_some_and(|&c| is_jaum(c)) && next.get(1) == Some(first);
    if starts_same || after_jaum {
        SimpleTag::Josa
    } else {
        tag
    }
}

/// 표층 L 의 마지막 글자가 생략된 `이/VCP` 앞 형태소와 같으면 L 은 표층 그대로
fn is_dropped_copula(seq: &Sequence, i: usize, surface_l: &[char]) -> bool {
    i > 0
        && seq.morph(i) == "이"
        && seq.tag(i) == "VCP"
        && seq.morph(i - 1).chars().last() == surface_l.last().copied()
}

/// 표층 L 로부터 원형 L 복원
fn lemmatize_l(seq: &Sequence, i: usize, surface_l: &[char]) -> String {
    let mut l = surface_l.to_vec();
    if let (Some(last), Some(canon)) = (l.last_mut(), seq.morph(i).chars().last()) {
        *last = canon;
    }

    // 어째서 = 어찌 + 하 + 아서
    if i > 0 && seq.morph(i) == "하" && seq.tag(i).starts_with("XS") && l.len() >= 2 {
        if let Some(prev) = seq.morph(i - 1).chars().last() {
            let at = l.len() - 2;
            l[at] = prev;
        }
    }

    // 용케 = 용하 + 게, 사용토록 = 사용하 + 도록
    if seq.simple_tags[i].is_predicate() && matches!(surface_l.last(), Some('케' | '토')) {
        l = surface_l.to_vec();
        if let Some(last) = l.last_mut() {
            *last = '하';
        }
    }

    match l.last_mut() {
        Some(c) if *c == 'ㅎ' => *c = '하',
        Some(c) if *c == 'ㄱ' => *c = '가',
        _ => {}
    }
    l.into_iter().collect()
}

/// 분리점 `b` 에서 (L, R) 구성. 확정된 태그도 함께 돌려준다.
fn form_at(seq: &Sequence, eojeol: &[char], i: usize, b: usize, tags: Tags) -> (LrMorph, Option<LrMorph>, Tags) {
    let (surface_l, surface_r) = eojeol.split_at(b);
    let mut tag_l = tags.0.unwrap_or(seq.simple_tags[i]);
    let mut tag_r = tags.1.unwrap_or_else(|| default_tag_r(seq, i, surface_r));

    let morph_l = if is_dropped_copula(seq, i, surface_l) {
        tag_l = SimpleTag::Noun;
        tag_r = SimpleTag::Josa;
        surface_l.iter().collect()
    } else {
        lemmatize_l(seq, i, surface_l)
    };

    let surface_l: String = surface_l.iter().collect();
    let surface_r: String = surface_r.iter().collect();
    let morph_r = if tag_l.is_predicate() || tag_l.is_nominal() {
        let suffix_morphs: Vec<&str> = seq.morphtags[i + 1..].iter().map(|mt| mt.morph.as_str()).collect();
        lemmatize_r(&Split {
            surface_l: &surface_l,
            surface_r: &surface_r,
            morph_l: &morph_l,
            tag_l,
            tag_r,
            suffix_morphs: &suffix_morphs,
        })
    } else {
        surface_r
    };

    let l = LrMorph::new(morph_l, tag_l);
    let r = (!morph_r.is_empty()).then(|| LrMorph::new(morph_r, tag_r));
    (l, r, (Some(tag_l), Some(tag_r)))
}

/// 형태소 경계 `i` 에서 어절을 (L, R) 로 분리
///
/// `i` 가 마지막 형태소면 어절 전체가 L 이다. 검증을 통과한 결과가 없으면 `None`.
pub(crate) fn lr_form(
    seq: &Sequence,
    i: usize,
    tag_l: Option<SimpleTag>,
    tag_r: Option<SimpleTag>,
) -> Option<(LrMorph, Option<LrMorph>)> {
    let n = seq.len();
    if i >= n {
        return None;
    }
    if i + 1 == n {
        let tag = tag_l.unwrap_or(seq.simple_tags[i]);
        return Some((LrMorph::new(seq.eojeol.clone(), tag), None));
    }

    let eojeol: Vec<char> = seq.eojeol.chars().collect();
    let anchored = seq.simple_tags[..i].iter().any(SimpleTag::is_predicate);
    let mut tags = (tag_l, tag_r);
    let mut shift = 0;

    loop {
        let b = split_point(seq, &eojeol, i, anchored, shift)?;
        if b == 0 || b > eojeol.len() {
            return None;
        }

        let (l, r, resolved) = form_at(seq, &eojeol, i, b, tags);
        if check_lr_transformation(&seq.eojeol, &l, r.as_ref()) {
            return Some((l, r));
        }
        log::trace!("검증 실패: {} -> {} (shift = {})", seq.eojeol, l, shift);

        if !anchored || b >= eojeol.len() {
            return None;
        }
        tags = resolved;
        shift += 1;
    }
}
