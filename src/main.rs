//! Sips 카페 리뷰 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다. MongoDB 연결과
//! 애플리케이션 컨텍스트를 초기화하고, 세션 쿠키 기반의 서버 렌더링
//! 웹 애플리케이션을 제공합니다.

use std::sync::Arc;

use actix_session::{storage::CookieSessionStore, SessionMiddleware};
use actix_web::cookie::SameSite;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use sips_backend::config::{ServerConfig, SessionConfig};
use sips_backend::core::AppContext;
use sips_backend::db::Database;
use sips_backend::repositories::UserRepository;
use sips_backend::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Sips 카페 리뷰 서비스 시작중...");

    // 데이터 스토어 초기화
    let database = initialize_database().await;

    // 유니크 인덱스 생성 (이메일/사용자 이름 중복 방지)
    let user_repository = UserRepository::new(database.clone());
    if let Err(e) = user_repository.create_indexes().await {
        error!("사용자 인덱스 생성 실패: {}", e);
    }

    // 애플리케이션 컨텍스트 구성
    let context = web::Data::new(AppContext::with_mongo(database));

    info!("✅ 애플리케이션 컨텍스트 구성 완료");

    // HTTP 서버 시작
    start_http_server(context).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 요청 로깅, 경로 정규화, 세션 쿠키 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(context: web::Data<AppContext>) -> std::io::Result<()> {
    let host = ServerConfig::host();
    let port = ServerConfig::port();

    let cookie_key = SessionConfig::cookie_key();
    let cookie_secure = SessionConfig::cookie_secure();

    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);
    info!("📍 Health check: http://{}:{}/health", host, port);

    HttpServer::new(move || {
        // 세션은 서명된 쿠키 하나에 저장된다 (~4KB 한도)
        let session = SessionMiddleware::builder(CookieSessionStore::default(), cookie_key.clone())
            .cookie_name("session".to_string())
            .cookie_path("/".to_string())
            .cookie_secure(cookie_secure)
            .cookie_http_only(true)
            .cookie_same_site(SameSite::Lax)
            .build();

        App::new()
            .app_data(context.clone())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .wrap(session)
            .configure(configure_all_routes)
    })
    .bind((host.as_str(), port))?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결을 초기화합니다
///
/// # Panics
///
/// * MongoDB 연결 실패 시
async fn initialize_database() -> Arc<Database> {
    info!("📡 데이터베이스 연결 중...");

    Arc::new(Database::new().await.expect("데이터베이스 연결 실패"))
}
