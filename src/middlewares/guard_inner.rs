//! RouteGuard 판정을 실제 요청 파이프라인에 적용하는 서비스
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::http::header;
use actix_web::{Error, HttpResponse, web};
use futures_util::future::LocalBoxFuture;

use crate::middlewares::route_guard::{GuardDecision, GuardMode};
use crate::services::auth::SessionState;

/// 실제 가드 로직을 수행하는 서비스
pub struct RouteGuardService<S> {
    pub service: Rc<S>,
    pub mode: GuardMode,
}

impl<S, B> Service<ServiceRequest> for RouteGuardService<S>
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
        let mode = self.mode;

        Box::pin(async move {
            let requested = req
                .uri()
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| req.path().to_string());

            let session = req.app_data::<web::Data<SessionState>>().cloned();
            if session.is_none() && mode.is_enabled() {
                log::error!("SessionState가 등록되지 않았습니다. 모든 보호 라우트를 차단합니다");
            }

            match mode.decide(session.as_ref().map(|data| data.get_ref()), &requested) {
                GuardDecision::Redirect { location } => {
                    log::info!("인증 필요 - {} → {}", requested, location);
                    let response = HttpResponse::Found()
                        .insert_header((header::LOCATION, location))
                        .finish();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
                GuardDecision::Allow => {
                    if !mode.is_enabled() {
                        log::debug!("가드 비활성화 - 검사 없이 통과: {}", requested);
                    }
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
