//! Authentication HTTP Handlers
//!
//! 스플래시, 가입, 역할 선택, 로그인, 로그아웃 엔드포인트를 처리하는
//! 핸들러 함수들입니다. 인증 상태는 전부 세션 쿠키에 실립니다.

use actix_session::Session;
use actix_web::{get, post, web, HttpResponse};
use askama::Template;

use crate::core::AppContext;
use crate::domain::forms::{LoginForm, NextQuery, RoleForm, SignupForm};
use crate::errors::AppError;
use crate::handlers::{redirect, render};
use crate::identity::{self, flash, flash::Flash, CurrentUser};

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "signup.html")]
struct SignupTemplate {
    flashes: Vec<Flash>,
    username: String,
    email: String,
}

#[derive(Template)]
#[template(path = "select_role.html")]
struct SelectRoleTemplate {
    flashes: Vec<Flash>,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    flashes: Vec<Flash>,
    email: String,
    action: String,
}

/// 이미 로그인한 방문자인지 확인
///
/// 스플래시/가입/로그인 페이지는 로그인 상태면 홈으로 보냅니다.
async fn already_authenticated(context: &AppContext, session: &Session) -> bool {
    identity::current_identity(session, context.users.as_ref())
        .await
        .is_some()
}

/// `next` 복귀 대상을 유지한 로그인 폼 action 경로
fn login_action(next: &str) -> String {
    if next.is_empty() {
        "/login".to_string()
    } else {
        format!("/login?next={}", urlencoding::encode(next))
    }
}

/// 스플래시 화면
///
/// # Endpoint
/// `GET /`
#[get("/")]
pub async fn index(
    context: web::Data<AppContext>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if already_authenticated(&context, &session).await {
        return Ok(redirect("/home"));
    }

    render(&IndexTemplate {
        flashes: flash::take(&session),
    })
}

/// 가입 폼
///
/// # Endpoint
/// `GET /signup`
#[get("/signup")]
pub async fn signup_page(
    context: web::Data<AppContext>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    if already_authenticated(&context, &session).await {
        return Ok(redirect("/home"));
    }

    render(&SignupTemplate {
        flashes: flash::take(&session),
        username: String::new(),
        email: String::new(),
    })
}

/// 가입 처리
///
/// 검증 순서와 메시지는 계정 서비스가 결정합니다. 실패 시 입력한
/// 사용자 이름/이메일은 유지하되 비밀번호는 유지하지 않습니다.
/// 성공 시 바로 로그인되어 역할 선택 단계로 이동합니다.
///
/// # Endpoint
/// `POST /signup`
#[post("/signup")]
pub async fn signup(
    context: web::Data<AppContext>,
    session: Session,
    form: web::Form<SignupForm>,
) -> Result<HttpResponse, AppError> {
    if already_authenticated(&context, &session).await {
        return Ok(redirect("/home"));
    }

    match context.accounts.signup(&form).await {
        Ok(user) => {
            identity::login(&session, &user)?;
            flash::success(&session, &format!("Welcome to Sips, {}!", user.username));
            Ok(redirect("/select-role"))
        }
        Err(AppError::ValidationError(message)) | Err(AppError::ConflictError(message)) => {
            flash::error(&session, &message);
            render(&SignupTemplate {
                flashes: flash::take(&session),
                username: form.normalized_username(),
                email: form.normalized_email(),
            })
        }
        Err(e) => Err(e),
    }
}

/// 역할 선택 폼
///
/// # Endpoint
/// `GET /select-role`
#[get("/select-role")]
pub async fn select_role_page(
    _user: CurrentUser,
    session: Session,
) -> Result<HttpResponse, AppError> {
    render(&SelectRoleTemplate {
        flashes: flash::take(&session),
    })
}

/// 역할 선택 처리
///
/// 허용되지 않은 값은 오류 없이 같은 폼을 다시 보여줍니다.
///
/// # Endpoint
/// `POST /select-role`
#[post("/select-role")]
pub async fn select_role(
    context: web::Data<AppContext>,
    user: CurrentUser,
    session: Session,
    form: web::Form<RoleForm>,
) -> Result<HttpResponse, AppError> {
    match context
        .accounts
        .select_role(&user.id_string(), &form.role)
        .await?
    {
        Some(role) => {
            flash::success(&session, &format!("Account set up as {}!", role.label()));
            Ok(redirect("/home"))
        }
        None => render(&SelectRoleTemplate {
            flashes: flash::take(&session),
        }),
    }
}

/// 로그인 폼
///
/// # Endpoint
/// `GET /login`
#[get("/login")]
pub async fn login_page(
    context: web::Data<AppContext>,
    session: Session,
    query: web::Query<NextQuery>,
) -> Result<HttpResponse, AppError> {
    if already_authenticated(&context, &session).await {
        return Ok(redirect("/home"));
    }

    render(&LoginTemplate {
        flashes: flash::take(&session),
        email: String::new(),
        action: login_action(query.next.as_deref().unwrap_or_default()),
    })
}

/// 로그인 처리
///
/// 실패 원인(없는 이메일/틀린 비밀번호)은 응답으로 구분되지 않습니다.
/// 성공 시 `next` 쿼리가 있으면 그 경로로, 없으면 홈으로 보냅니다.
///
/// # Endpoint
/// `POST /login`
#[post("/login")]
pub async fn login(
    context: web::Data<AppContext>,
    session: Session,
    query: web::Query<NextQuery>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    if already_authenticated(&context, &session).await {
        return Ok(redirect("/home"));
    }

    match context.accounts.authenticate(&form).await {
        Ok(user) => {
            identity::login(&session, &user)?;
            flash::success(&session, &format!("Welcome back, {}!", user.username));

            let target = match query.next.as_deref() {
                Some(next) if !next.is_empty() => next.to_string(),
                _ => "/home".to_string(),
            };
            Ok(redirect(&target))
        }
        Err(AppError::AuthenticationError(message)) => {
            flash::error(&session, &message);
            render(&LoginTemplate {
                flashes: flash::take(&session),
                email: form.normalized_email(),
                action: login_action(query.next.as_deref().unwrap_or_default()),
            })
        }
        Err(e) => Err(e),
    }
}

/// 로그아웃
///
/// # Endpoint
/// `GET /logout`
#[get("/logout")]
pub async fn logout(_user: CurrentUser, session: Session) -> Result<HttpResponse, AppError> {
    identity::logout(&session);
    flash::info(&session, "You've been logged out.");
    Ok(redirect("/"))
}
