//! L-R 변환 옵션 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// L-R 변환 옵션
///
/// `생각/NNG + 하/XSV + 았/EP + 어요/EF` 에 대해
/// - 기본값: `생각/Noun + 했어요/Verb`
/// - `treat_derivation_as_verb`: `생각하/Verb + 았어요/Eomi`
/// - `split_derivation_as_root`: `생각/Noun`, `하/Verb + 았어요/Eomi` 두 어절로 분리
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LrOptions {
    /// 명사 + 파생접미사(XSV/XSA/VCP/VCN) 를 하나의 용언 어간으로 취급
    #[serde(default = "default_treat_derivation_as_verb")]
    pub treat_derivation_as_verb: bool,
    /// 파생접미사를 독립된 어간으로 보고 어절을 둘로 분리
    /// (`treat_derivation_as_verb` 가 꺼져 있을 때만 동작)
    #[serde(default = "default_split_derivation_as_root")]
    pub split_derivation_as_root: bool,
}

fn default_treat_derivation_as_verb() -> bool {
    false
}

fn default_split_derivation_as_root() -> bool {
    false
}

impl Default for LrOptions {
    fn default() -> Self {
        Self {
            treat_derivation_as_verb: default_treat_derivation_as_verb(),
            split_derivation_as_root: default_split_derivation_as_root(),
        }
    }
}

impl LrOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 파생접미사를 용언 어간으로 취급
    pub fn with_derivation_as_verb(mut self, on: bool) -> Self {
        self.treat_derivation_as_verb = on;
        self
    }

    /// 파생접미사 기준 어절 분리
    pub fn with_split_derivation(mut self, on: bool) -> Self {
        self.split_derivation_as_root = on;
        self
    }
}

/// 기본 설정 파일 경로: ~/.config/lrform/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config").join("lrform").join("config.json")
}

/// 설정 파일 로드
pub fn load_options(path: &Path) -> Result<LrOptions> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_options_or_default(path: &Path) -> LrOptions {
    match load_options(path) {
        Ok(options) => options,
        Err(e) => {
            log::debug!("설정 로드 실패, 기본값 사용: {}", e);
            LrOptions::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_options(options: &LrOptions, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(options)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = LrOptions::default();
        assert!(!options.treat_derivation_as_verb);
        assert!(!options.split_derivation_as_root);
    }

    #[test]
    fn test_builder_pattern() {
        let options = LrOptions::new()
            .with_derivation_as_verb(true)
            .with_split_derivation(true);
        assert!(options.treat_derivation_as_verb);
        assert!(options.split_derivation_as_root);
    }

    #[test]
    fn test_serialize_deserialize() {
        let options = LrOptions::new().with_split_derivation(true);
        let json = serde_json::to_string(&options).unwrap();
        let parsed: LrOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_field_uses_default() {
        let json = r#"{"treat_derivation_as_verb": true}"#;
        let options: LrOptions = serde_json::from_str(json).unwrap();
        assert!(options.treat_derivation_as_verb);
        assert!(!options.split_derivation_as_root);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        // 없는 상위 디렉토리도 만든다
        let path = dir.path().join("lrform").join("config.json");
        let options = LrOptions::new().with_derivation_as_verb(true);
        save_options(&options, &path).unwrap();
        assert_eq!(load_options(&path).unwrap(), options);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let path = Path::new("/nonexistent/lrform/config.json");
        assert!(load_options(path).is_err());
        assert_eq!(load_options_or_default(path), LrOptions::default());
    }
}
