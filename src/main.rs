//! Google OAuth 게이트웨이 메인 애플리케이션
//!
//! 단계적 부트스트랩으로 컴포넌트를 조립한 뒤 Actix-web 기반의
//! HTTP 서버를 구동합니다. 설정 구성이 라우트 등록보다, 라우트 등록이
//! 리스너 시작보다 항상 먼저 수행됩니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use google_auth_gateway::bootstrap::{self, AppComponents};
use google_auth_gateway::middlewares::internal_error_masker;
use google_auth_gateway::routes::configure_all_routes;
use google_auth_gateway::utils::display_terminal::{
    print_boxed_title, print_component, print_route, print_section,
};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Google OAuth 게이트웨이 시작중...");

    // 단계적 부트스트랩: 설정 → 저장소 → 서비스
    let components = match bootstrap::build().await {
        Ok(components) => components,
        Err(e) => {
            // 필수 설정 누락은 치명적이며 리스닝 상태에 도달하지 않음
            error!("💥 부트스트랩 실패: {}", e);
            std::process::exit(1);
        }
    };

    print_startup_banner(&components);

    // 라우트 등록 후 리스너 시작
    start_http_server(components).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화, 내부 에러 마스킹
/// 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(components: AppComponents) -> std::io::Result<()> {
    let bind_address = components.server_config.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .unwrap();

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            // 내부 에러 마스킹은 가장 바깥에서 모든 500 응답을 거름
            .wrap(internal_error_masker())
            .configure(|cfg| configure_all_routes(cfg, &components))
    })
    .bind(&bind_address)?
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
            Err(_) => {
                // 개발 프로필 파일이 없으면 기본 .env로 폴백
                dotenv().ok();
            }
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// 환경변수 RUST_LOG를 기반으로 로깅 레벨을 설정합니다.
/// 기본값은 info 레벨이며, actix_web은 debug 레벨로 설정됩니다.
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
///
/// 데모 프론트엔드와의 통신을 위한 CORS 설정입니다.
/// 개발환경에서 로컬호스트 간 통신을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}

/// 시작 배너를 출력합니다
///
/// 운영자가 바로 확인할 수 있도록 페이지, 인증 라우트, 보호된 API
/// 주소와 선택된 구성 요소를 나열합니다.
fn print_startup_banner(components: &AppComponents) {
    let base = format!("http://{}", components.server_config.bind_address());
    let mount = &components.server_config.auth_mount_path;

    println!();
    print_boxed_title("🔐 GOOGLE AUTH GATEWAY");
    println!();

    print_section("📍 Pages:");
    print_route("Login", &format!("{}/login", base));
    print_route("Signup", &format!("{}/signup", base));
    print_route("Dashboard", &format!("{}/dashboard.html", base));
    println!();

    print_section("🔐 Google Auth:");
    print_route("Start", &format!("{}{}/login", base, mount));
    print_route("Callback", &format!("{}{}/callback", base, mount));
    println!();

    print_section("🛡️ Protected APIs:");
    print_route("Profile", &format!("{}/profile", base));
    print_route("Dashboard", &format!("{}/dashboard", base));
    println!();

    print_section("🧩 Components:");
    print_component("UserStore", components.google.store_backend());
    print_component("Tokens", "JWT (HS256)");
    println!();
}
