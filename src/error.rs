//! 에러 타입

use thiserror::Error;

/// L-R 변환 및 주변 입출력 에러
#[derive(Error, Debug)]
pub enum LrError {
    /// 모든 매처가 실패했거나 검증을 통과한 후보가 없음
    #[error("L-R 변환 불가: eojeol = {eojeol}, morphtags = {morphtags}")]
    Unconvertible { eojeol: String, morphtags: String },

    /// `morph/tag` 형식이 아닌 형태소 표기
    #[error("잘못된 형태소 표기: {0}")]
    MalformedMorphTag(String),

    /// `eojeol<TAB>morph/tag + ...` 형식이 아닌 줄
    #[error("잘못된 어절 줄: {0}")]
    MalformedLine(String),

    /// 설정 JSON 파싱/직렬화 실패
    #[error("설정 JSON 오류: {0}")]
    Config(#[from] serde_json::Error),

    /// 파일 읽기/쓰기 실패
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LrError>;
