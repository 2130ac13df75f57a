//! 유니코드 한글 조합/분해 유틸리티

/// 한글 음절 시작 코드포인트 (가)
const HANGUL_SYLLABLE_BASE: u32 = 0xAC00;
/// 한글 음절 마지막 코드포인트 (힣)
const HANGUL_SYLLABLE_LAST: u32 = 0xD7A3;

/// 초성 개수
const CHOSEONG_COUNT: u32 = 19;
/// 중성 개수
const JUNGSEONG_COUNT: u32 = 21;
/// 종성 개수 (종성 없음 포함)
const JONGSEONG_COUNT: u32 = 28;

/// 호환용 자음 범위 (ㄱ ~ ㅎ)
const COMPAT_CONSONANT_FIRST: u32 = 0x3131;
const COMPAT_CONSONANT_LAST: u32 = 0x314E;
/// 호환용 모음 범위 (ㅏ ~ ㅣ)
const COMPAT_VOWEL_FIRST: u32 = 0x314F;
const COMPAT_VOWEL_LAST: u32 = 0x3163;

/// 초성 테이블 (인덱스 순서)
#[rustfmt::skip]
const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ',
    'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 중성 테이블 (인덱스 순서)
#[rustfmt::skip]
const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ',
    'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ', 'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// 종성 테이블 (인덱스 1부터, 0 = 종성 없음)
#[rustfmt::skip]
const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ',
    'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ',
    'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// 초성/중성/종성 인덱스로 완성된 한글 유니코드 생성
/// - choseong: 초성 인덱스 (0~18)
/// - jungseong: 중성 인덱스 (0~20)
/// - jongseong: 종성 인덱스 (0~27, 0 = 종성 없음)
pub fn compose_syllable(choseong: u32, jungseong: u32, jongseong: u32) -> Option<char> {
    if choseong >= CHOSEONG_COUNT || jungseong >= JUNGSEONG_COUNT || jongseong >= JONGSEONG_COUNT {
        return None;
    }
    let code = HANGUL_SYLLABLE_BASE
        + (choseong * JUNGSEONG_COUNT + jungseong) * JONGSEONG_COUNT
        + jongseong;
    char::from_u32(code)
}

/// 완성형 한글을 초성/중성/종성 인덱스로 분해
/// 반환: (초성 인덱스, 중성 인덱스, 종성 인덱스)
pub fn decompose_syllable(c: char) -> Option<(u32, u32, u32)> {
    let code = c as u32;
    if !(HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&code) {
        return None;
    }
    let offset = code - HANGUL_SYLLABLE_BASE;
    let jongseong = offset % JONGSEONG_COUNT;
    let jungseong = (offset / JONGSEONG_COUNT) % JUNGSEONG_COUNT;
    let choseong = offset / (JUNGSEONG_COUNT * JONGSEONG_COUNT);
    Some((choseong, jungseong, jongseong))
}

/// 완성형 한글 음절인지 확인 (가-힣)
pub fn is_hangul_syllable(c: char) -> bool {
    (HANGUL_SYLLABLE_BASE..=HANGUL_SYLLABLE_LAST).contains(&(c as u32))
}

/// 호환용 자음 낱자인지 확인 (ㄱ-ㅎ)
pub fn is_jaum(c: char) -> bool {
    (COMPAT_CONSONANT_FIRST..=COMPAT_CONSONANT_LAST).contains(&(c as u32))
}

/// 호환용 모음 낱자인지 확인 (ㅏ-ㅣ)
pub fn is_moum(c: char) -> bool {
    (COMPAT_VOWEL_FIRST..=COMPAT_VOWEL_LAST).contains(&(c as u32))
}

/// 낱자모(자음 또는 모음)인지 확인
pub fn is_jamo(c: char) -> bool {
    is_jaum(c) || is_moum(c)
}

/// 문자열에서 낱자모를 제거
///
/// 형태소 `ㅕ서` 처럼 앞 음절에 흡수된 자모는 표층 길이에 기여하지 않으므로
/// 경계 위치 계산 전에 제거한다.
pub fn strip_jamo(text: &str) -> String {
    text.chars().filter(|&c| !is_jamo(c)).collect()
}

/// 초성만 있을 때 해당 자모 문자 반환 (호환용 자모)
pub fn choseong_to_jamo_char(cho: u32) -> Option<char> {
    CHOSEONG.get(cho as usize).copied()
}

/// 중성만 있을 때 해당 모음 문자 반환 (호환용 자모)
pub fn jungseong_to_jamo_char(jung: u32) -> Option<char> {
    JUNGSEONG.get(jung as usize).copied()
}

/// 종성 인덱스의 자모 문자 반환 (0 = 종성 없음 → None)
pub fn jongseong_to_jamo_char(jong: u32) -> Option<char> {
    if jong == 0 {
        return None;
    }
    JONGSEONG.get(jong as usize - 1).copied()
}

fn choseong_index(c: char) -> Option<u32> {
    CHOSEONG.iter().position(|&x| x == c).map(|i| i as u32)
}

fn jungseong_index(c: char) -> Option<u32> {
    JUNGSEONG.iter().position(|&x| x == c).map(|i| i as u32)
}

fn jongseong_index(c: char) -> Option<u32> {
    JONGSEONG.iter().position(|&x| x == c).map(|i| i as u32 + 1)
}

/// 자모 단위로 분해된 한 글자
///
/// 빈 자리는 `None` 으로 표현한다. 완성형 음절은 초성과 중성이 항상 채워져 있고,
/// 자음 낱자는 초성 자리에만, 모음 낱자는 중성 자리에만 값이 있다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jamo {
    pub cho: Option<char>,
    pub jung: Option<char>,
    pub jong: Option<char>,
}

impl Jamo {
    /// 종성이 없는지 확인
    pub fn is_open(&self) -> bool {
        self.jong.is_none()
    }
}

/// 한 글자를 (초성, 중성, 종성) 으로 분해
///
/// - 완성형 음절: 세 성분 (종성 없으면 `None`)
/// - 자음 낱자: `(자음, 없음, 없음)`
/// - 모음 낱자: `(없음, 모음, 없음)`
/// - 그 외 문자: 분해 불가 (`None`)
pub fn decompose(c: char) -> Option<Jamo> {
    if is_jaum(c) {
        return Some(Jamo { cho: Some(c), jung: None, jong: None });
    }
    if is_moum(c) {
        return Some(Jamo { cho: None, jung: Some(c), jong: None });
    }
    let (cho, jung, jong) = decompose_syllable(c)?;
    Some(Jamo {
        cho: choseong_to_jamo_char(cho),
        jung: jungseong_to_jamo_char(jung),
        jong: jongseong_to_jamo_char(jong),
    })
}

/// (초성, 중성, 종성) 자모 문자로 완성형 음절 조합
///
/// 각 성분이 해당 테이블(19/21/27)에 없으면 `None`.
/// 예: `compose('ㅎ', 'ㅐ', Some('ㅆ')) == Some('했')`
pub fn compose(cho: char, jung: char, jong: Option<char>) -> Option<char> {
    let cho = choseong_index(cho)?;
    let jung = jungseong_index(jung)?;
    let jong = match jong {
        Some(c) => jongseong_index(c)?,
        None => 0,
    };
    compose_syllable(cho, jung, jong)
}

/// 조합형 자모(U+1100 블록)를 호환용 자모로 변환
///
/// 세종 말뭉치에는 `ᆫ/ETM` 처럼 조합형 종성 자모로 적힌 형태소가 섞여 있다.
/// 초성(U+1100~U+1112), 중성(U+1161~U+1175), 종성(U+11A8~U+11C2) 자모가
/// 대상이며 나머지 문자는 그대로 반환한다.
pub fn to_compat_jamo(c: char) -> char {
    let code = c as u32;
    match code {
        0x1100..=0x1112 => CHOSEONG[(code - 0x1100) as usize],
        0x1161..=0x1175 => JUNGSEONG[(code - 0x1161) as usize],
        0x11A8..=0x11C2 => JONGSEONG[(code - 0x11A8) as usize],
        _ => c,
    }
}

/// 문자열 전체의 조합형 자모를 호환용 자모로 변환
pub fn normalize_jamo(text: &str) -> String {
    text.chars().map(to_compat_jamo).collect()
}
