//! # Middleware Module
//!
//! 요청 파이프라인에 끼워 넣는 미들웨어들입니다.
//!
//! - [`auth_middleware`] - 보호된 라우트용 로그인 가드

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::RequireLogin;
