//! Session cookie handling.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "philologic_session";

/// Session id carried by the request, if any.
pub fn current(jar: &CookieJar) -> Option<Uuid> {
    jar.get(SESSION_COOKIE)
        .and_then(|c| Uuid::parse_str(c.value()).ok())
}

/// Return the request's session id, issuing a fresh cookie when the visitor
/// has none. No server-side state is stored until flashcards are generated.
pub fn ensure(jar: CookieJar) -> (CookieJar, Uuid) {
    match current(&jar) {
        Some(id) => (jar, id),
        None => {
            let id = Uuid::new_v4();
            let cookie = Cookie::build((SESSION_COOKIE, id.to_string()))
                .path("/")
                .http_only(true)
                .same_site(SameSite::Lax)
                .build();
            (jar.add(cookie), id)
        }
    }
}

/// Remove the session cookie.
pub fn clear(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/").build())
}
