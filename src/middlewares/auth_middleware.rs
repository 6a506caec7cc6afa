//! 로그인 필수 미들웨어
//!
//! 보호된 라우트 스코프에 감싸는 인증 가드입니다. 세션의 신원을
//! 해석해 요청에 부착하고, 익명 요청은 로그인 페이지로 돌려보냅니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::RequireLoginService;

/// 로그인 필수 미들웨어
///
/// JSON 401 대신 `/login?next=<원래 경로>`로의 리다이렉트와 안내
/// 플래시 메시지를 사용합니다. 서버 렌더링 애플리케이션의 가드입니다.
pub struct RequireLogin;

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RequireLogin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireLoginService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireLoginService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::middlewares::auth_inner::login_redirect_target;

    #[test]
    fn test_login_redirect_target_encodes_path() {
        assert_eq!(login_redirect_target("/home"), "/login?next=%2Fhome");
        assert_eq!(
            login_redirect_target("/cafe/507f1f77bcf86cd799439011"),
            "/login?next=%2Fcafe%2F507f1f77bcf86cd799439011"
        );
    }
}
