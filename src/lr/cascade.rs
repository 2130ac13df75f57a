//! 경계 탐색 매처
//!
//! 매처를 우선순위대로 시도해서, 처음으로 후보를 내고 간이 검사
//! ([`check_lemmatization`]) 를 통과한 결과를 쓴다. 규칙표 결과는 검사하지 않는다.
//!
//! 기호/숫자와 외국어 매처는 정리 전 어절을 보므로 규칙표보다 먼저 온다.

use crate::config::LrOptions;
use crate::core::morphtag::LrMorph;
use crate::core::tag::SimpleTag::{self, *};
use crate::core::unicode::strip_jamo;

use super::form::lr_form;
use super::rules;
use super::verify::check_lemmatization;
use super::{to_lr, LrResult, Sequence};

/// 매처 입력
pub(crate) struct Input<'a> {
    /// 정규화만 거친 어절
    pub raw: &'a Sequence,
    /// 기호 등을 정리한 어절
    pub clean: &'a Sequence,
    pub options: LrOptions,
}

/// 매처가 내놓는 후보
#[derive(Debug)]
pub(crate) enum Candidate {
    Single(LrResult),
    /// 파생접미사 기준으로 나뉜 두 어절
    Split(LrResult, LrResult),
}

type Matcher = fn(&Input<'_>) -> Option<Candidate>;

/// (이름, 매처, 간이 검사 여부)
const CASCADE: [(&str, Matcher, bool); 9] = [
    ("symbol_number", symbol_number, true),
    ("foreign", foreign, true),
    ("rule_table", rule_table, false),
    ("derivation_split", derivation_split, true),
    ("short", short, true),
    ("derivation_merge", derivation_merge, true),
    ("generic", generic, true),
    ("exceptional", exceptional, true),
    ("all_suffix", all_suffix, true),
];

const DERIVATION_TAGS: [&str; 4] = ["XSV", "XSA", "VCP", "VCN"];

/// 매처를 차례로 적용. 모두 실패하면 `None`.
pub(crate) fn run(input: &Input<'_>) -> Option<Vec<LrResult>> {
    for (name, matcher, gated) in CASCADE.iter() {
        let Some(candidate) = matcher(input) else {
            continue;
        };
        match candidate {
            Candidate::Single(result) => {
                if *gated && !check_lemmatization(&result.eojeol, &result.l, result.r.as_ref()) {
                    log::debug!("[{}] 간이 검사 실패: {} -> {}", name, result.eojeol, result.lr_text());
                    continue;
                }
                log::debug!("[{}] {} -> {}", name, result.eojeol, result.lr_text());
                return Some(vec![result]);
            }
            Candidate::Split(first, second) => {
                log::debug!(
                    "[{}] {} -> {} | {}",
                    name,
                    input.clean.eojeol,
                    first.lr_text(),
                    second.lr_text()
                );
                return Some(vec![first, second]);
            }
        }
    }
    None
}

fn single(seq: &Sequence, l: LrMorph, r: Option<LrMorph>, boundary: Option<usize>) -> Option<Candidate> {
    Some(Candidate::Single(seq.result(l, r, boundary)))
}

fn formed(seq: &Sequence, i: usize, tag_l: Option<SimpleTag>, tag_r: Option<SimpleTag>) -> Option<Candidate> {
    let (l, r) = lr_form(seq, i, tag_l, tag_r)?;
    single(seq, l, r, Some(i))
}

/// 불규칙 어절 규칙표, 마지막 형태소가 명사인 어절
fn rule_table(input: &Input<'_>) -> Option<Candidate> {
    let seq = input.clean;
    if seq.is_empty() {
        return None;
    }
    if let Some((l, r)) = rules::lookup(&seq.eojeol) {
        return single(seq, l, r, None);
    }
    if seq.simple_tags.last() == Some(&Noun) {
        let l = LrMorph::new(seq.eojeol.clone(), Noun);
        return single(seq, l, None, Some(seq.len() - 1));
    }
    None
}

/// 6.25의 = 6/SN + ./SF + 25/SN + 의/JKG -> 6.25/Noun + 의/Josa
fn symbol_number(input: &Input<'_>) -> Option<Candidate> {
    let seq = input.raw;
    let i = seq.simple_tags.iter().rposition(|t| matches!(t, Number | Symbol))?;
    if i == 0 || seq.simple_tags[i] != Number {
        return None;
    }
    if !seq.simple_tags[..=i].iter().all(|t| matches!(t, Number | Symbol)) {
        return None;
    }

    let morph_l: String = seq.morphtags[..=i].iter().map(|mt| mt.morph.as_str()).collect();
    let morph_r: String = seq.eojeol.chars().skip(morph_l.chars().count()).collect();
    let r = if morph_r.is_empty() {
        None
    } else {
        Some(LrMorph::new(morph_r, *seq.simple_tags.get(i + 1)?))
    };
    single(seq, LrMorph::new(morph_l, Noun), r, Some(i))
}

/// IBM에서는 = IBM/SL + 에서/JKB + 는/JX -> IBM/Noun + 에서는/Josa
fn foreign(input: &Input<'_>) -> Option<Candidate> {
    let seq = input.raw;
    let first = seq.morphtags.first()?;
    if first.tag != "SL" && first.tag != "SH" {
        return None;
    }
    let l = LrMorph::new(first.morph.clone(), Noun);
    if seq.len() == 1 {
        return single(seq, l, None, Some(0));
    }
    if seq.simple_tags[1] == Symbol {
        return None;
    }
    let morph_r: String = seq.eojeol.chars().skip(first.morph.chars().count()).collect();
    let r = (!morph_r.is_empty()).then(|| LrMorph::new(morph_r, seq.simple_tags[1]));
    single(seq, l, r, Some(0))
}

/// 생각했어요 -> 생각 | 했어요
fn derivation_split(input: &Input<'_>) -> Option<Candidate> {
    let options = input.options;
    if !options.split_derivation_as_root || options.treat_derivation_as_verb {
        return None;
    }
    let seq = input.clean;
    if seq.is_empty() {
        return None;
    }

    for target in DERIVATION_TAGS {
        let Some(i) = seq.rposition_tag(target) else {
            continue;
        };
        if i == 0 || !matches!(seq.simple_tags[i - 1], Noun | Adverb) {
            continue;
        }

        let len_0: usize = seq.morphtags[..i].iter().map(|mt| strip_jamo(&mt.morph).chars().count()).sum();
        let eojeol_0: String = seq.eojeol.chars().take(len_0).collect();
        let eojeol_1: String = seq.eojeol.chars().skip(len_0).collect();
        let (morphtags_0, morphtags_1) = seq.morphtags.split_at(i);

        // 문화다 = 문화 + 이 + 다: 파생접미사가 표층에 남지 않음
        let head = eojeol_1.chars().next();
        if let Some(next) = morphtags_1.get(1) {
            let mut next = next.morph.chars();
            let (n0, n1) = (next.next(), next.next());
            if head.is_some() && (head == n0 || head == n1) {
                continue;
            }
        }
        if eojeol_0.is_empty() || eojeol_1.is_empty() {
            return None;
        }

        let halves = LrOptions::default();
        let first = to_lr(&eojeol_0, morphtags_0, &halves).ok()?.into_iter().next()?;
        let second = to_lr(&eojeol_1, morphtags_1, &halves).ok()?.into_iter().next()?;
        return Some(Candidate::Split(first, second));
    }
    None
}

/// 형태소가 한두 개인 어절
fn short(input: &Input<'_>) -> Option<Candidate> {
    let seq = input.clean;
    match seq.len() {
        1 => {
            let l = LrMorph::new(seq.morph(0), seq.simple_tags[0]);
            single(seq, l, None, Some(0))
        }
        2 => {
            let first = seq.simple_tags[0];
            if matches!(first, Eomi | Josa | Adverb | Unknown | Exclamation | Number | Determiner) {
                return None;
            }
            let tag_r = first.is_nominal().then_some(Josa);
            formed(seq, 0, None, tag_r)
        }
        _ => None,
    }
}

/// 체언/부사 + 파생접미사(XSV/XSA/VCP/VCN)
fn derivation_merge(input: &Input<'_>) -> Option<Candidate> {
    let seq = input.clean;
    let options = input.options;

    for target in DERIVATION_TAGS {
        let Some(i) = seq.rposition_tag(target) else {
            continue;
        };
        if i == 0 || !matches!(seq.simple_tags[i - 1], Noun | Pronoun | Numeral | Adverb) {
            continue;
        }

        let at = if options.treat_derivation_as_verb { i } else { i - 1 };
        let (l, mut r) = lr_form(seq, at, None, None)?;
        // 될텐데 = 되 + ㄹ + 터 + 이 + ㄴ데 -> 터 뒤는 조사로
        let derivation_mode = options.treat_derivation_as_verb || options.split_derivation_as_root;
        if derivation_mode && l.tag == Noun {
            if let Some(r) = r.as_mut().filter(|r| r.tag.is_predicate()) {
                r.tag = Josa;
            }
        }
        return single(seq, l, r, Some(at));
    }
    None
}

/// 가장 오른쪽의 체언 또는 용언에서 분리
fn generic(input: &Input<'_>) -> Option<Candidate> {
    let seq = input.clean;
    let i = [Noun, Pronoun, Numeral, Verb, Adjective]
        .into_iter()
        .find_map(|target| seq.rposition_simple(target))?;
    formed(seq, i, None, None)
}

/// 체언/용언이 없는 어절: 부사, 감탄사, 숫자, 관형사 등
fn exceptional(input: &Input<'_>) -> Option<Candidate> {
    let seq = input.clean;
    let last = seq.len().checked_sub(1)?;

    for target in [Adverb, Unknown, Exclamation, Number, Determiner] {
        let Some(i) = seq.rposition_simple(target) else {
            continue;
        };
        if target == Number {
            let tag_l = if i == 0 { Number } else { Noun };
            return formed(seq, i, Some(tag_l), None);
        }
        if i == last {
            return formed(seq, i, None, None);
        }

        let next = seq.simple_tags[i + 1];
        let ends_with_eomi = seq.simple_tags[last] == Eomi;
        if next == Josa {
            return formed(seq, i, Some(Noun), Some(Josa));
        }
        if target == Adverb && next == Eomi && ends_with_eomi {
            // 진짜야 = 진짜/MAG + 야/EF
            return single(seq, LrMorph::new(seq.eojeol.clone(), Adverb), None, Some(i));
        }
        if target == Exclamation && next == Eomi && ends_with_eomi {
            return formed(seq, i, Some(Exclamation), Some(Josa));
        }
    }
    None
}

/// 조사/어미만으로 된 어절
fn all_suffix(input: &Input<'_>) -> Option<Candidate> {
    let seq = input.clean;
    let first = *seq.simple_tags.first()?;
    if !seq.simple_tags.iter().all(SimpleTag::is_suffix) {
        return None;
    }
    single(seq, LrMorph::new(seq.eojeol.clone(), first), None, Some(seq.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::morphtag::MorphTag;

    fn seq(eojeol: &str, pairs: &[(&str, &str)]) -> Sequence {
        let morphtags = pairs.iter().map(|(m, t)| MorphTag::new(*m, *t)).collect();
        Sequence::new(eojeol.to_string(), morphtags)
    }

    fn input<'a>(s: &'a Sequence, options: LrOptions) -> Input<'a> {
        Input {
            raw: s,
            clean: s,
            options,
        }
    }

    fn single_result(candidate: Option<Candidate>) -> LrResult {
        match candidate {
            Some(Candidate::Single(result)) => result,
            other => panic!("unexpected candidate: {:?}", other),
        }
    }

    #[test]
    fn test_rule_table_catch_all() {
        let s = seq("일년", &[("일", "NR"), ("년", "NNB")]);
        let result = single_result(rule_table(&input(&s, LrOptions::default())));
        assert_eq!(result.l, LrMorph::new("일년", Noun));
        assert_eq!(result.r, None);
        assert_eq!(result.boundary, Some(1));
    }

    #[test]
    fn test_rule_table_irregular() {
        let s = seq("그런지는", &[("그렇", "VA"), ("ㄴ지", "EC"), ("는", "JX")]);
        let result = single_result(rule_table(&input(&s, LrOptions::default())));
        assert_eq!(result.l, LrMorph::new("그렇", Adjective));
        assert_eq!(result.boundary, None);
    }

    #[test]
    fn test_symbol_number() {
        let s = seq("6.25의", &[("6", "SN"), (".", "SF"), ("25", "SN"), ("의", "JKG")]);
        let result = single_result(symbol_number(&input(&s, LrOptions::default())));
        assert_eq!(result.l, LrMorph::new("6.25", Noun));
        assert_eq!(result.r, Some(LrMorph::new("의", Josa)));
        assert_eq!(result.boundary, Some(2));

        // 숫자 하나로 시작하는 어절은 대상 아님
        let s = seq("3개", &[("3", "SN"), ("개", "NNB")]);
        assert!(symbol_number(&input(&s, LrOptions::default())).is_none());
    }

    #[test]
    fn test_foreign() {
        let s = seq("IBM에서는", &[("IBM", "SL"), ("에서", "JKB"), ("는", "JX")]);
        let result = single_result(foreign(&input(&s, LrOptions::default())));
        assert_eq!(result.l, LrMorph::new("IBM", Noun));
        assert_eq!(result.r, Some(LrMorph::new("에서는", Josa)));

        let s = seq("IBM.", &[("IBM", "SL"), (".", "SF")]);
        assert!(foreign(&input(&s, LrOptions::default())).is_none());
    }

    #[test]
    fn test_derivation_split() {
        let s = seq("생각했어요", &[("생각", "NNP"), ("하", "XSV"), ("았", "EP"), ("어요", "EF")]);
        let options = LrOptions::new().with_split_derivation(true);
        match derivation_split(&input(&s, options)) {
            Some(Candidate::Split(first, second)) => {
                assert_eq!(first.eojeol, "생각");
                assert_eq!(first.l, LrMorph::new("생각", Noun));
                assert_eq!(second.eojeol, "했어요");
                assert_eq!(second.l, LrMorph::new("하", Verb));
                assert_eq!(second.r, Some(LrMorph::new("았어요", Eomi)));
            }
            other => panic!("unexpected candidate: {:?}", other),
        }

        // 옵션이 꺼져 있으면 분리하지 않음
        assert!(derivation_split(&input(&s, LrOptions::default())).is_none());
    }

    #[test]
    fn test_derivation_split_skips_dropped_copula() {
        let s = seq("문화다", &[("문화", "NNG"), ("이", "VCP"), ("다", "EF")]);
        let options = LrOptions::new().with_split_derivation(true);
        assert!(derivation_split(&input(&s, options)).is_none());
    }

    #[test]
    fn test_derivation_merge() {
        let s = seq("생각했어요", &[("생각", "NNP"), ("하", "XSV"), ("았", "EP"), ("어요", "EF")]);
        let result = single_result(derivation_merge(&input(&s, LrOptions::default())));
        assert_eq!(result.l, LrMorph::new("생각", Noun));
        assert_eq!(result.r, Some(LrMorph::new("했어요", Verb)));
        assert_eq!(result.boundary, Some(0));

        let options = LrOptions::new().with_derivation_as_verb(true);
        let result = single_result(derivation_merge(&input(&s, options)));
        assert_eq!(result.l, LrMorph::new("생각하", Verb));
        assert_eq!(result.r, Some(LrMorph::new("았어요", Eomi)));
        assert_eq!(result.boundary, Some(1));
    }

    #[test]
    fn test_exceptional_adverb() {
        let s = seq("진짜야", &[("진짜", "MAG"), ("야", "EF")]);
        let result = single_result(exceptional(&input(&s, LrOptions::default())));
        assert_eq!(result.l, LrMorph::new("진짜야", Adverb));
        assert_eq!(result.r, None);

        let s = seq("지금도", &[("지금", "MAG"), ("도", "JX")]);
        let result = single_result(exceptional(&input(&s, LrOptions::default())));
        assert_eq!(result.l, LrMorph::new("지금", Noun));
        assert_eq!(result.r, Some(LrMorph::new("도", Josa)));
    }

    #[test]
    fn test_all_suffix() {
        let s = seq("이며", &[("이", "VCP"), ("며", "EC")]);
        assert!(all_suffix(&input(&s, LrOptions::default())).is_none());

        let s = seq("은요", &[("은", "JX"), ("요", "JX")]);
        let result = single_result(all_suffix(&input(&s, LrOptions::default())));
        assert_eq!(result.l, LrMorph::new("은요", Josa));
        assert_eq!(result.boundary, Some(1));
    }

    #[test]
    fn test_run_first_match_wins() {
        let s = seq("통해서", &[("통하", "VV"), ("ㅕ서", "EC")]);
        let results = run(&input(&s, LrOptions::default())).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].l, LrMorph::new("통하", Verb));
        assert_eq!(results[0].r, Some(LrMorph::new("아서", Eomi)));
    }

    #[test]
    fn test_run_keeps_foreign_before_noun_catch_all() {
        let s = seq("IBM사", &[("IBM", "SL"), ("사", "NNG")]);
        let results = run(&input(&s, LrOptions::default())).unwrap();
        assert_eq!(results[0].l, LrMorph::new("IBM", Noun));
        assert_eq!(results[0].r, Some(LrMorph::new("사", Noun)));

        let s = seq("6.25년", &[("6", "SN"), (".", "SF"), ("25", "SN"), ("년", "NNB")]);
        let results = run(&input(&s, LrOptions::default())).unwrap();
        assert_eq!(results[0].eojeol, "6.25년");
        assert_eq!(results[0].l, LrMorph::new("6.25", Noun));
        assert_eq!(results[0].r, Some(LrMorph::new("년", Noun)));
    }
}
