//! # Core Framework Module
//!
//! 계정 서비스의 핵심 기반 기능을 제공하는 모듈입니다.
//! 전역 에러 시스템과 명시적 의존성 주입을 위한 컴포지션 루트를 담당합니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **DomainError**: 유스케이스의 닫힌 도메인 에러 집합 (409/404/401)
//! - **AppError**: 검증/인프라 장애를 포함한 전역 에러 타입
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//!
//! ### [`state`] - 애플리케이션 상태
//! - **AppState**: 포트 구현체를 생성자 주입으로 조립하는 컴포지션 루트
//! - **공유 방식**: `web::Data<AppState>` 기반, 런타임 레지스트리 없음
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 |
//! |--------|-----------|
//! | `@ExceptionHandler` | `AppError::error_response()` |
//! | `ApplicationContext` | `AppState::new()` (명시적 조립) |
//! | `@Autowired` | 생성자 매개변수 `Arc<dyn Trait>` |

pub mod errors;
pub mod state;

pub use errors::*;
pub use state::*;
