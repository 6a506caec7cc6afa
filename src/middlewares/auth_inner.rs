//! RequireLogin 인증 로직의 핵심적인 기능

use std::rc::Rc;

use actix_session::SessionExt;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::{web, Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::core::AppContext;
use crate::identity::{self, flash, LOGIN_REQUIRED_MESSAGE};

/// 실제 인증 로직을 수행하는 서비스
pub struct RequireLoginService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireLoginService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            let session = req.get_session();
            let context = req.app_data::<web::Data<AppContext>>().cloned();

            let current = match context {
                Some(context) => {
                    identity::current_identity(&session, context.users.as_ref()).await
                }
                None => None,
            };

            match current {
                Some(current) => {
                    log::debug!("인증 성공: 사용자 {}", current.user.username);
                    req.extensions_mut().insert(current);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                None => {
                    // 익명 요청: 안내 메시지를 남기고 로그인 페이지로
                    flash::info(&session, LOGIN_REQUIRED_MESSAGE);

                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, login_redirect_target(req.path())))
                        .finish();

                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
            }
        })
    }
}

/// 로그인 후 복귀할 수 있도록 원래 경로를 실어 보냅니다.
pub(crate) fn login_redirect_target(path: &str) -> String {
    format!("/login?next={}", urlencoding::encode(path))
}
