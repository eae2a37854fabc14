//! 사용자 프로필 서비스 모듈
//!
//! 인증된 사용자의 프로필 조회/수정 유스케이스를 제공합니다.

pub mod profile_service;

pub use profile_service::*;
