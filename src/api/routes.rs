use actix_web::{get, post, web, HttpRequest, HttpResponse, Result as WebResult};

use crate::analysis;
use crate::api::models::{CreateMoodRequest, SaveMoodResponse};
use crate::api::session::SessionId;
use crate::config::AppConfig;
use crate::kb::EmotionKb;
use crate::store::StoreHandle;

#[post("/mood")]
pub async fn save_mood(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    store: web::Data<StoreHandle>,
    payload: web::Json<CreateMoodRequest>,
) -> WebResult<HttpResponse> {
    let session = SessionId::resolve(&req, &config.session);
    let payload = payload.into_inner();

    let entry = {
        let mut store = store.lock().unwrap();
        store.append(
            session.id(),
            &payload.mood,
            payload.emotions,
            payload.intensity,
            &payload.notes,
        )
    };

    let mut resp = HttpResponse::Ok();
    if let Some(cookie) = session.issue_cookie(&config.session) {
        resp.cookie(cookie);
    }
    Ok(resp.json(SaveMoodResponse {
        success: true,
        id: entry.id,
    }))
}

#[get("/moods")]
pub async fn get_moods(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    store: web::Data<StoreHandle>,
) -> WebResult<HttpResponse> {
    let session = SessionId::resolve(&req, &config.session);
    let entries = store.lock().unwrap().list_by_session(session.id());

    let mut resp = HttpResponse::Ok();
    if let Some(cookie) = session.issue_cookie(&config.session) {
        resp.cookie(cookie);
    }
    Ok(resp.json(entries))
}

#[get("/solutions/{emotions}")]
pub async fn get_solutions(
    kb: web::Data<EmotionKb>,
    path: web::Path<String>,
) -> WebResult<HttpResponse> {
    let raw = path.into_inner();
    let labels: Vec<&str> = raw.split(',').collect();

    Ok(HttpResponse::Ok().json(kb.compose(&labels)))
}

#[get("/insights")]
pub async fn get_insights(
    req: HttpRequest,
    config: web::Data<AppConfig>,
    store: web::Data<StoreHandle>,
) -> WebResult<HttpResponse> {
    let session = SessionId::resolve(&req, &config.session);
    let entries = store.lock().unwrap().list_by_session(session.id());
    let pattern = analysis::analyze(&entries);

    let mut resp = HttpResponse::Ok();
    if let Some(cookie) = session.issue_cookie(&config.session) {
        resp.cookie(cookie);
    }
    Ok(resp.json(pattern))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(save_mood)
            .service(get_moods)
            .service(get_solutions)
            .service(get_insights),
    );
}
