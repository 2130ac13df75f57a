//! 불규칙 어절 규칙표
//!
//! 일반 규칙으로 경계를 찾을 수 없는 어절을 (L, R) 로 직접 지정한다.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::core::morphtag::LrMorph;
use crate::core::tag::SimpleTag::{self, *};

/// 규칙 한 항목: (L 형태소, L 태그), R 이 없으면 `None`
pub type Rule = ((&'static str, SimpleTag), Option<(&'static str, SimpleTag)>);

lazy_static! {
    /// 어절 전체가 일치해야 하는 규칙
    pub static ref IRREGULAR_EOJEOLS: HashMap<&'static str, Rule> = {
        let mut map = HashMap::new();
        // 못/MAG + 하/XSA + 지/EC
        map.insert("못지", (("못지", Adverb), None));
        map.insert("그런지는", (("그렇", Adjective), Some(("ㄴ지는", Eomi))));
        map.insert("어떤질", (("어떠하", Adjective), Some(("ㄴ질", Eomi))));
        map.insert("짝짝짝두", (("짝짝짝", Noun), Some(("두", Josa))));
        map
    };
}

/// 어절 앞부분이 일치하면 나머지를 R 로 붙이는 규칙
/// (접두어, L 형태소, L 태그, R 앞에 붙일 원형, R 태그)
const IRREGULAR_PREFIXES: [(&str, &str, SimpleTag, &str, SimpleTag); 4] = [
    ("어쨌", "어찌하", Verb, "았", Eomi),
    ("어쩔", "어찌하", Verb, "알", Eomi),
    ("제것", "제것", Noun, "", Josa),
    ("이뤄졌", "이뤄지", Verb, "", Eomi),
];

/// 규칙표에서 어절을 찾아 (L, R) 반환
///
/// 접두어 규칙을 먼저 보고, 그 다음 어절 전체 규칙을 본다.
pub fn lookup(eojeol: &str) -> Option<(LrMorph, Option<LrMorph>)> {
    for (prefix, l_morph, l_tag, r_head, r_tag) in IRREGULAR_PREFIXES.iter() {
        if let Some(rest) = eojeol.strip_prefix(*prefix) {
            let r_morph = format!("{}{}", r_head, rest);
            let r = (!r_morph.is_empty()).then(|| LrMorph::new(r_morph, *r_tag));
            return Some((LrMorph::new(*l_morph, *l_tag), r));
        }
    }

    let ((l_morph, l_tag), r) = IRREGULAR_EOJEOLS.get(eojeol)?;
    Some((
        LrMorph::new(*l_morph, *l_tag),
        r.map(|(morph, tag)| LrMorph::new(morph, tag)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_rule() {
        let (l, r) = lookup("그런지는").unwrap();
        assert_eq!(l, LrMorph::new("그렇", Adjective));
        assert_eq!(r, Some(LrMorph::new("ㄴ지는", Eomi)));

        let (l, r) = lookup("못지").unwrap();
        assert_eq!(l, LrMorph::new("못지", Adverb));
        assert_eq!(r, None);
    }

    #[test]
    fn test_prefix_rule() {
        let (l, r) = lookup("어쨌든").unwrap();
        assert_eq!(l, LrMorph::new("어찌하", Verb));
        assert_eq!(r, Some(LrMorph::new("았든", Eomi)));

        let (l, r) = lookup("이뤄졌다").unwrap();
        assert_eq!(l, LrMorph::new("이뤄지", Verb));
        assert_eq!(r, Some(LrMorph::new("다", Eomi)));

        // 나머지가 없으면 R 없음
        let (l, r) = lookup("제것").unwrap();
        assert_eq!(l, LrMorph::new("제것", Noun));
        assert_eq!(r, None);
    }

    #[test]
    fn test_no_rule() {
        assert!(lookup("먹었다").is_none());
        assert!(lookup("").is_none());
    }
}
