//! 프로필 수정 요청 DTO
//!
//! 부분 수정 시맨틱: 존재하는 필드만 갱신되며, 생략된 필드는 건드리지 않습니다.
use serde::Deserialize;
use validator::Validate;

/// 프로필 부분 수정 요청
///
/// 이름/성만 수정 가능하며 역할과 코인 잔액은 이 경로로 변경할 수 없습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Nome deve ter entre 1 e 100 caracteres"
    ))]
    pub first_name: Option<String>,

    #[validate(length(
        min = 1,
        max = 100,
        message = "Sobrenome deve ter entre 1 e 100 caracteres"
    ))]
    pub last_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_is_valid() {
        assert!(UpdateProfileRequest::default().validate().is_ok());
    }

    #[test]
    fn test_present_field_is_validated() {
        let request = UpdateProfileRequest {
            first_name: Some("x".repeat(101)),
            last_name: None,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }
}
