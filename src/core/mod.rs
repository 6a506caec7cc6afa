//! 애플리케이션 핵심 구성 요소

pub mod context;

pub use context::AppContext;
