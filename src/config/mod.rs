//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(`SECRET_KEY`, `MONGODB_URI`)는 환경 변수로만 제공
//! - 기본값은 개발 환경에서만 안전
//! - 환경별(개발/테스트/스테이징/프로덕션) 설정 분리

pub mod data_config;

pub use data_config::*;
