//! L-R 변환 결과 검증
//!
//! 만들어진 (L, R) 이 원래 어절의 표층형으로 실현될 수 있는지 확인한다.
//! L 의 마지막 원형 음절과 같은 위치의 표층 음절은 활용으로 모음이나 받침이
//! 바뀌어도 초성은 대개 유지된다. 초성까지 바뀌는 축약은 아래
//! `DIVERGENCES` 에 열거된 경우만 허용한다.

use crate::core::morphtag::LrMorph;
use crate::core::unicode::decompose;

/// 초성이 달라지는 알려진 축약 유형
/// 인자: (L 원형 글자들, 어절 글자들, L 마지막 글자 위치)
type Divergence = fn(&[char], &[char], usize) -> bool;

const DIVERGENCES: [(&str, Divergence); 5] = [
    ("하 + 게/도/지 -> 케/토/치", aspirated_hada),
    ("어찌하 + 아서 -> 어째서", fused_hada),
    ("퍼지르 + 어 -> 퍼질러", consonant_final_stem),
    ("이루어지 -> 이뤄지", diphthong_contraction),
    ("세우 + 어 + 지 -> 세워지", compound_vowel_alternation),
];

fn cho(c: char) -> Option<char> {
    decompose(c).and_then(|j| j.cho)
}

fn jung(c: char) -> Option<char> {
    decompose(c).and_then(|j| j.jung)
}

fn jong(c: char) -> Option<char> {
    decompose(c).and_then(|j| j.jong)
}

/// 두 글자의 초성이 같은지 (분해할 수 없는 문자는 글자 자체를 비교)
fn same_initial(a: char, b: char) -> bool {
    match (decompose(a), decompose(b)) {
        (Some(x), Some(y)) => x.cho.is_some() && x.cho == y.cho,
        (None, None) => a == b,
        _ => false,
    }
}

fn aspirated_hada(l: &[char], e: &[char], at: usize) -> bool {
    l[at] == '하' && e.get(at).and_then(|&c| cho(c)).is_some_and(|c| matches!(c, 'ㅋ' | 'ㅊ' | 'ㅌ'))
}

fn fused_hada(l: &[char], e: &[char], at: usize) -> bool {
    if at == 0 || l[at] != '하' {
        return false;
    }
    match e.get(at - 1) {
        Some(&s) => {
            same_initial(s, l[at - 1]) && jung(s).is_some_and(|v| matches!(v, 'ㅐ' | 'ㅓ' | 'ㅕ'))
        }
        None => false,
    }
}

fn consonant_final_stem(l: &[char], e: &[char], at: usize) -> bool {
    if at == 0 {
        return false;
    }
    match e.get(at - 1) {
        Some(&s) => same_initial(s, l[at - 1]) && jong(s).is_some() && jong(s) == cho(l[at]),
        None => false,
    }
}

fn diphthong_contraction(l: &[char], e: &[char], at: usize) -> bool {
    at >= e.len() && e.last().is_some_and(|&s| same_initial(s, l[at]))
}

fn compound_vowel_alternation(l: &[char], e: &[char], at: usize) -> bool {
    if at == 0 {
        return false;
    }
    let (Some(&prev), Some(&cur)) = (e.get(at - 1), e.get(at)) else {
        return false;
    };
    same_initial(prev, l[at - 1])
        && jung(prev) != jung(l[at - 1])
        && cho(cur) == Some('ㅇ')
        && jung(l[at]).is_some_and(|v| matches!(v, 'ㅣ' | 'ㅜ' | 'ㅗ' | 'ㅡ'))
}

fn concat_eq(eojeol: &str, l: &str, r: Option<&str>) -> bool {
    let r = r.unwrap_or("");
    eojeol.len() == l.len() + r.len() && eojeol.starts_with(l) && eojeol.ends_with(r)
}

/// (L, R) 이 어절의 표층형과 음운적으로 일치하는지 검증
pub fn check_lr_transformation(eojeol: &str, l: &LrMorph, r: Option<&LrMorph>) -> bool {
    if concat_eq(eojeol, &l.morph, r.map(|r| r.morph.as_str())) {
        return true;
    }
    let l_chars: Vec<char> = l.morph.chars().collect();
    let e_chars: Vec<char> = eojeol.chars().collect();
    let Some(at) = l_chars.len().checked_sub(1) else {
        return false;
    };

    if let Some(&surface) = e_chars.get(at) {
        if same_initial(l_chars[at], surface) {
            return true;
        }
    }

    for (name, divergence) in DIVERGENCES.iter() {
        if divergence(&l_chars, &e_chars, at) {
            log::trace!("검증 예외 유형 일치: {} ({} -> {})", name, eojeol, l.morph);
            return true;
        }
    }
    false
}

/// 매처 결과를 받아들이기 전의 간이 검사
///
/// 어절의 경계 음절(L 길이 위치, 어절 길이로 제한)의 초성과 L 의 마지막 원형
/// 음절의 초성을 비교한다. `하` 로 끝나는 L 은 뒤 음절과 융합되는 일이 잦아
/// 통과시킨다.
pub fn check_lemmatization(eojeol: &str, l: &LrMorph, r: Option<&LrMorph>) -> bool {
    let Some(r) = r else {
        return true;
    };
    if concat_eq(eojeol, &l.morph, Some(&r.morph)) {
        return true;
    }
    let Some(canon) = l.morph.chars().last() else {
        return false;
    };
    let boundary = l.morph.chars().count().min(eojeol.chars().count());
    let Some(surface) = boundary.checked_sub(1).and_then(|i| eojeol.chars().nth(i)) else {
        return false;
    };
    canon == '하' || same_initial(canon, surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tag::SimpleTag;

    fn lr(morph: &str, tag: SimpleTag) -> LrMorph {
        LrMorph::new(morph, tag)
    }

    #[test]
    fn test_exact_reconstruction() {
        let l = lr("생각", SimpleTag::Noun);
        let r = lr("했어요", SimpleTag::Verb);
        assert!(check_lr_transformation("생각했어요", &l, Some(&r)));
        assert!(check_lr_transformation("생각", &l, None));
    }

    #[test]
    fn test_same_initial_accepts() {
        // 다하 + 아 -> 다해
        let l = lr("다하", SimpleTag::Verb);
        let r = lr("아", SimpleTag::Eomi);
        assert!(check_lr_transformation("다해", &l, Some(&r)));
        // 반갑 + 면서도 -> 반가우면서도
        let l = lr("반갑", SimpleTag::Adjective);
        let r = lr("면서도", SimpleTag::Eomi);
        assert!(check_lr_transformation("반가우면서도", &l, Some(&r)));
    }

    #[test]
    fn test_initial_mismatch_rejects() {
        // 세워져 를 세지 + 어 로 자르면 안 됨
        let l = lr("세지", SimpleTag::Verb);
        let r = lr("어", SimpleTag::Eomi);
        assert!(!check_lr_transformation("세워져", &l, Some(&r)));
    }

    #[test]
    fn test_aspirated_hada() {
        let l = lr("생각하", SimpleTag::Verb);
        let r = lr("게", SimpleTag::Eomi);
        assert!(check_lr_transformation("생각케", &l, Some(&r)));
        let l = lr("사용하", SimpleTag::Verb);
        let r = lr("도록", SimpleTag::Eomi);
        assert!(check_lr_transformation("사용토록", &l, Some(&r)));
    }

    #[test]
    fn test_fused_hada() {
        let l = lr("어찌하", SimpleTag::Verb);
        let r = lr("아서", SimpleTag::Eomi);
        assert!(check_lr_transformation("어째서", &l, Some(&r)));
    }

    #[test]
    fn test_consonant_final_stem() {
        let l = lr("퍼지르", SimpleTag::Verb);
        let r = lr("었다", SimpleTag::Eomi);
        assert!(check_lr_transformation("퍼질렀다", &l, Some(&r)));
    }

    #[test]
    fn test_diphthong_contraction() {
        let l = lr("이루어지", SimpleTag::Verb);
        let r = lr("어", SimpleTag::Eomi);
        assert!(check_lr_transformation("이뤄져", &l, Some(&r)));
    }

    #[test]
    fn test_check_lemmatization() {
        let l = lr("통하", SimpleTag::Verb);
        let r = lr("아서", SimpleTag::Eomi);
        assert!(check_lemmatization("통해서", &l, Some(&r)));
        assert!(check_lemmatization("통해서", &l, None));

        let l = lr("먹", SimpleTag::Verb);
        let r = lr("어", SimpleTag::Eomi);
        assert!(!check_lemmatization("잡아", &l, Some(&r)));
    }
}
