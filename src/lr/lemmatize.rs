//! R (조사/어미) 원형 복원
//!
//! 활용 과정에서 축약/탈락/동화된 표층 R 로부터 원형 R 의 표기를 되살린다.
//! 규칙은 위에서부터 처음 일치하는 것 하나만 적용하고, 결과는 항상
//! [`postprocess`] 를 거친다.

use crate::core::tag::SimpleTag;
use crate::core::unicode::{compose, decompose, is_hangul_syllable, is_jaum, is_moum};

/// L-R 경계에서 잘린 어절의 양쪽
#[derive(Debug, Clone)]
pub struct Split<'a> {
    /// L 의 표층형
    pub surface_l: &'a str,
    /// R 의 표층형
    pub surface_r: &'a str,
    /// L 의 원형
    pub morph_l: &'a str,
    pub tag_l: SimpleTag,
    pub tag_r: SimpleTag,
    /// 경계 다음부터의 원형 형태소들
    pub suffix_morphs: &'a [&'a str],
}

fn jong_of(c: Option<char>) -> Option<char> {
    c.and_then(decompose).and_then(|j| j.jong)
}

fn collect(head: impl IntoIterator<Item = char>, tail: &[char]) -> String {
    head.into_iter().chain(tail.iter().copied()).collect()
}

/// `하` + `아/았/여/였...` 을 `해/했...` 로 다시 축약
fn contract_hada(concat: &[char]) -> Option<String> {
    let (&first, &second) = (concat.first()?, concat.get(1)?);
    if first != '하' {
        return None;
    }
    let jamo = decompose(second)?;
    if jamo.cho != Some('ㅇ') || !matches!(jamo.jung, Some('ㅏ') | Some('ㅕ')) {
        return None;
    }
    let fused = compose('ㅎ', 'ㅐ', jamo.jong)?;
    Some(collect([fused], &concat[2..]))
}

/// 표층 R 로부터 원형 R 복원
pub fn lemmatize_r(split: &Split<'_>) -> String {
    let Some(w0) = split.suffix_morphs.first() else {
        return postprocess(split.surface_r);
    };
    let c0 = w0.chars().next();
    let concat: Vec<char> = split.suffix_morphs.concat().chars().collect();
    let surf: Vec<char> = split.surface_r.chars().collect();
    let surf_tail: &[char] = surf.get(1..).unwrap_or(&[]);
    let surf_l_last = split.surface_l.chars().last();
    let morph_l_last = split.morph_l.chars().last();
    let is_predicate = split.tag_l.is_predicate();

    // 체언 + 조사
    if split.tag_l.is_nominal() && split.tag_r == SimpleTag::Josa {
        if let Some(c) = c0.filter(|&c| is_jaum(c)) {
            return postprocess(&collect([c], &surf));
        }
        let copula_ahead = concat.len() >= 3 && c0 == Some('이') && is_jaum(concat[1]);
        if !copula_ahead {
            // 뭘로 = 무엇(뭐) + ㄹ로: 표층 L 에만 있는 받침을 R 로 넘김
            let mut morph_r = surf.clone();
            if jong_of(morph_l_last).is_none() {
                if let Some(jong) = jong_of(surf_l_last) {
                    if morph_r.first() != Some(&jong) {
                        morph_r.insert(0, jong);
                    }
                }
            }
            return postprocess(&morph_r.into_iter().collect::<String>());
        }
    }

    // 어절에 원형에 없는 글자가 섞인 경우
    if concat.len() + 2 <= surf.len() {
        return String::new();
    }

    let morph_r: String = if surf.is_empty() && !matches!(surf_l_last, Some('케') | Some('토')) {
        // 다해 = 다하 + 아: R 전체가 L 에 흡수됨
        w0.to_string()
    } else if is_predicate && surf_l_last == Some('케') {
        // 용케 = 용하 + 게
        collect(['게'], &surf)
    } else if is_predicate && surf_l_last == Some('토') {
        // 사용토록 = 사용하 + 도록
        collect(['도'], &surf)
    } else if split.tag_l == SimpleTag::Noun
        && split.tag_r.is_predicate()
        && surf.first() == Some(&'케')
        && *w0 == "하"
    {
        // 생각케 = 생각 + 하게
        collect(['하', '게'], surf_tail)
    } else if split.tag_l == SimpleTag::Noun
        && split.tag_r.is_predicate()
        && surf.first() == Some(&'토')
        && *w0 == "하"
    {
        collect(['하', '도'], surf_tail)
    } else if morph_l_last == Some('하') && matches!(c0, Some('여' | 'ㅕ' | '어' | 'ㅓ')) {
        // 통해서 = 통하 + ㅕ서 -> 통하 + 아서
        collect(['아'], &surf)
    } else if !concat.is_empty() && surf[..] == concat[1..] {
        // 느꼈으니 = 느끼 + 었 + 으니
        collect(c0, &surf)
    } else if c0.is_some_and(is_jaum) {
        // 예외적인 = 예외 + 적 + 이 + ㄴ
        collect(c0, &surf)
    } else if jong_of(morph_l_last) == Some('ㅂ')
        && jong_of(surf_l_last).is_none()
        && surf.first() == Some(&'우')
        && surf_tail == &concat[..]
    {
        // 반가우면서도 = 반갑 + 면서도: ㅂ 불규칙의 '우' 는 어간 몫
        concat.iter().collect()
    } else if !surf.is_empty() && surf_tail == &concat[..] {
        collect([surf[0]], &concat)
    } else if !surf.is_empty() && surf_tail == concat.get(2..).unwrap_or(&[]) {
        // 거셨을 = 걸 + 시 + 었 + 을, 했어요 = 하 + 았 + 어요
        contract_hada(&concat).unwrap_or_else(|| concat.iter().collect())
    } else if concat.starts_with(&['어', 'ㅆ']) || concat.starts_with(&['ㅓ', 'ㅆ']) {
        // 세웠다 = 세우 + 어 + ㅆ다
        collect(['었'], &surf)
    } else if concat.starts_with(&['ㅏ', 'ㅆ']) {
        // 봤는데 = 보 + ㅏㅆ + 는데
        collect(['았'], &surf)
    } else if let Some(copula) = copula_with_final(&concat, &surf) {
        // 건지도 = 것 + 이 + ㄴ지 + 도
        collect([copula], &surf)
    } else {
        collect(c0, surf_tail)
    };

    postprocess(&morph_r)
}

/// `이` + 자음 어미가 표층에서 사라진 경우의 `인/입/...` 음절
fn copula_with_final(concat: &[char], surf: &[char]) -> Option<char> {
    if concat.len() < 3 || concat[0] != '이' || !is_jaum(concat[1]) {
        return None;
    }
    if surf.first() != Some(&concat[2]) {
        return None;
    }
    compose('ㅇ', 'ㅣ', Some(concat[1]))
}

/// 복원된 R 의 낱자모 정리
///
/// - 첫 글자가 모음 낱자면 `ㅇ` 초성을 붙여 음절로
/// - 둘째 글자가 자음 낱자면 첫 음절의 받침으로
/// - 둘째 글자가 모음 낱자면 `ㅇ` 초성을 붙여 음절로
/// - 첫 음절이 `ㅣ` 로 끝나고 둘째 글자가 `이`/`ㅣ` 면 둘째 글자 제거
pub fn postprocess(morph_r: &str) -> String {
    let mut chars: Vec<char> = morph_r.chars().collect();

    if let Some(&first) = chars.first() {
        if is_moum(first) {
            if let Some(syllable) = compose('ㅇ', first, None) {
                chars[0] = syllable;
            }
        }
    }

    if chars.len() > 1 && is_hangul_syllable(chars[0]) {
        let Some(head) = decompose(chars[0]) else {
            return chars.into_iter().collect();
        };
        let (Some(cho), Some(jung)) = (head.cho, head.jung) else {
            return chars.into_iter().collect();
        };

        if is_jaum(chars[1]) {
            if let Some(syllable) = compose(cho, jung, Some(chars[1])) {
                chars[0] = syllable;
                chars.remove(1);
            }
        }
        if chars.len() > 1 && is_moum(chars[1]) {
            if let Some(syllable) = compose('ㅇ', chars[1], None) {
                chars[1] = syllable;
            }
        }
        if chars.len() > 1 && matches!(chars[1], '이' | 'ㅣ') && jung == 'ㅣ' && head.is_open() {
            chars.remove(1);
        }
    }

    chars.into_iter().collect()
}
