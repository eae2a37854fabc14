//! 비밀번호 해싱 포트와 bcrypt 구현체
//!
//! 유스케이스가 해싱 알고리즘에 직접 의존하지 않도록 trait 포트를 두고,
//! bcrypt 기반 구현체를 기본으로 제공합니다.

use crate::core::errors::AppResult;

/// 비밀번호 해싱 포트
///
/// 평문 비밀번호의 해싱과 검증을 담당합니다. 구현체는 생성자 주입으로
/// 유스케이스에 전달되며, 테스트에서는 낮은 cost로 교체할 수 있습니다.
pub trait HashProvider: Send + Sync {
    /// 평문 비밀번호를 해싱합니다.
    fn hash(&self, plain: &str) -> AppResult<String>;

    /// 평문 비밀번호가 저장된 해시와 일치하는지 검증합니다.
    fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool>;
}

/// bcrypt 기반 해싱 구현체
///
/// 환경별 cost 설정을 지원합니다. 운영 환경에서는 12 이상,
/// 테스트에서는 4를 사용하여 실행 시간을 줄입니다.
///
/// # Security
///
/// - 솔트 자동 생성으로 레인보우 테이블 공격 방지
/// - cost가 높을수록 무차별 대입 공격에 강하지만 처리 시간 증가
pub struct BcryptHashProvider {
    cost: u32,
}

impl BcryptHashProvider {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

impl HashProvider for BcryptHashProvider {
    fn hash(&self, plain: &str) -> AppResult<String> {
        let hash_start = std::time::Instant::now();
        let hashed = bcrypt::hash(plain, self.cost)?;
        log::debug!("Password hashing took: {:?}", hash_start.elapsed());

        Ok(hashed)
    }

    fn verify(&self, plain: &str, hashed: &str) -> AppResult<bool> {
        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(plain, hashed)?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        Ok(is_valid)
    }
}
