//! 회원가입 요청 DTO
//!
//! 새로운 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 유스케이스 호출 전에 어댑터 경계에서 스키마 검증이 수행됩니다.
use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이메일 주소 (중복 불가, 대소문자 무관)
    #[validate(email(message = "Email inválido"))]
    pub email: String,

    /// 계정 비밀번호 (평문, 최소 6자)
    #[validate(length(min = 6, message = "Senha deve ter no mínimo 6 caracteres"))]
    pub password: String,

    /// 이름 (최대 100자)
    #[validate(length(
        min = 1,
        max = 100,
        message = "Nome deve ter entre 1 e 100 caracteres"
    ))]
    pub first_name: String,

    /// 성 (최대 100자)
    #[validate(length(
        min = 1,
        max = 100,
        message = "Sobrenome deve ter entre 1 e 100 caracteres"
    ))]
    pub last_name: String,
}
