//! 애플리케이션 상태 (컴포지션 루트)
//!
//! 포트 구현체들을 생성자 주입으로 조립하여 서비스 계층을 구성합니다.
//! 런타임 레지스트리 없이 `Arc<dyn Trait>` 기반의 명시적 의존성 주입을
//! 사용하며, `web::Data<AppState>`로 모든 핸들러에 공유됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::state::AppState;
//!
//! let state = AppState::new(
//!     Arc::new(MongoUserStore::new(&database)),
//!     Arc::new(BcryptHashProvider::new(PasswordConfig::bcrypt_cost())),
//!     Arc::new(JwtTokenProvider::new(jwt_config.secret, jwt_config.expiration_hours)),
//! );
//! let app = App::new().app_data(web::Data::new(state));
//! ```

use std::sync::Arc;

use crate::repositories::users::UserStore;
use crate::services::auth::{AuthService, HashProvider, TokenProvider};
use crate::services::users::ProfileService;

/// 핸들러 계층에 공유되는 애플리케이션 상태
///
/// 유스케이스 서비스와 인가 가드가 사용하는 토큰 프로바이더를 보관합니다.
/// 내부는 모두 `Arc`이므로 복제 비용이 없습니다.
#[derive(Clone)]
pub struct AppState {
    /// 회원가입/로그인 유스케이스
    pub auth_service: AuthService,
    /// 프로필 조회/수정 유스케이스
    pub profile_service: ProfileService,
    /// 인가 가드가 사용하는 토큰 검증 포트
    pub token_provider: Arc<dyn TokenProvider>,
}

impl AppState {
    /// 포트 구현체들로부터 애플리케이션 상태를 조립합니다.
    pub fn new(
        user_store: Arc<dyn UserStore>,
        hash_provider: Arc<dyn HashProvider>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        let auth_service = AuthService::new(
            Arc::clone(&user_store),
            Arc::clone(&hash_provider),
            Arc::clone(&token_provider),
        );
        let profile_service = ProfileService::new(Arc::clone(&user_store));

        Self {
            auth_service,
            profile_service,
            token_provider,
        }
    }
}
