//! 관리 콘솔 화면 핸들러
//!
//! 라우트 가드 뒤에 등록되며, 인증된 요청만 여기까지 도달합니다.
//! 화면 자체는 별도 서비스가 그리므로 여기서는 화면 식별자와 사용자 정보만 돌려줍니다.
use actix_web::http::header;
use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::services::auth::SessionState;

/// 콘솔 섹션 (경로, 제목)
pub const CONSOLE_SECTIONS: [(&str, &str); 10] = [
    ("youtube", "YouTube"),
    ("ai-characters", "AI Characters"),
    ("base-instructer", "Base Instructer"),
    ("lernen-ai", "Lernen AI"),
    ("token-kullanim", "Token Kullanım"),
    ("abonelikler", "Abonelikler"),
    ("token-rate-config", "Token Rate Config"),
    ("versions", "Versions"),
    ("voice-ai-config", "Voice AI Config"),
    ("aws-video-images", "AWS Video Images"),
];

pub fn section_title(section: &str) -> Option<&'static str> {
    CONSOLE_SECTIONS
        .iter()
        .find(|(path, _)| *path == section)
        .map(|(_, title)| *title)
}

/// 콘솔 홈
#[get("/")]
pub async fn console_home(session: web::Data<SessionState>) -> HttpResponse {
    let sections: Vec<_> = CONSOLE_SECTIONS
        .iter()
        .map(|(path, title)| json!({ "path": format!("/{}", path), "title": title }))
        .collect();

    HttpResponse::Ok().json(json!({
        "view": "home",
        "user": session.current_user(),
        "sections": sections,
    }))
}

/// 콘솔 섹션 화면
///
/// 알 수 없는 섹션은 콘솔 홈으로 보냅니다.
#[get("/{section}")]
pub async fn console_section(
    session: web::Data<SessionState>,
    section: web::Path<String>,
) -> HttpResponse {
    let section = section.into_inner();

    match section_title(&section) {
        Some(title) => HttpResponse::Ok().json(json!({
            "view": section,
            "title": title,
            "user": session.current_user(),
        })),
        None => redirect_home().await,
    }
}

/// 등록되지 않은 보호 경로는 홈으로
pub async fn redirect_home() -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
