//! 사용자 계정 관련 서비스

pub mod account_service;

pub use account_service::AccountService;
