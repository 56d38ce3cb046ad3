use actix_web::cookie::Cookie;
use actix_web::HttpRequest;
use uuid::Uuid;

use crate::config::SessionConfig;

/// Anonymous per-browser identity, carried in a cookie. No authentication;
/// the id only partitions mood entries.
pub struct SessionId {
    id: Uuid,
    fresh: bool,
}

impl SessionId {
    /// Returns the id from the session cookie when present and well-formed,
    /// otherwise mints a new one. A cookie value that is not a UUID counts
    /// as absent.
    pub fn resolve(req: &HttpRequest, config: &SessionConfig) -> Self {
        if let Some(cookie) = req.cookie(&config.cookie_name) {
            if let Ok(id) = cookie.value().parse::<Uuid>() {
                return Self { id, fresh: false };
            }
        }

        Self {
            id: Uuid::new_v4(),
            fresh: true,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Cookie to attach to the response. `None` unless the id was minted for
    /// this request; established sessions round-trip unchanged.
    pub fn issue_cookie(&self, config: &SessionConfig) -> Option<Cookie<'static>> {
        if !self.fresh {
            return None;
        }

        Some(
            Cookie::build(config.cookie_name.clone(), self.id.to_string())
                .path("/")
                .http_only(true)
                .secure(config.cookie_secure)
                .finish(),
        )
    }
}
