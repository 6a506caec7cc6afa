//! # Service Layer
//!
//! 비즈니스 로직을 담당하는 서비스 계층 모듈입니다.
//! 핸들러(웹 계층)와 리포지토리(데이터 계층) 사이에서 검증과
//! 도메인 규칙을 수행합니다.

pub mod users;

pub use users::AccountService;
