//! One-shot flash messages carried in a private (encrypted) cookie jar.
//!
//! A mutation writes an `error` or `success` cookie; the next rendered page
//! takes both out of the jar, so each message displays exactly once.

use axum_extra::extract::cookie::{Cookie, Key, PrivateCookieJar, SameSite};
use std::sync::LazyLock;
use time::Duration;

pub const ERROR_COOKIE: &str = "flash_error";
pub const SUCCESS_COOKIE: &str = "flash_success";

/// Global cookie signing/encryption key for PrivateCookieJar.
static COOKIE_KEY: LazyLock<Key> = LazyLock::new(Key::generate);

pub fn cookie_key() -> Key {
    COOKIE_KEY.clone()
}

/// Messages pending display on the next rendered page.
#[derive(Debug, Clone, Default)]
pub struct FlashMessages {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Take pending flash messages out of the jar, removing their cookies.
pub fn take_flash(jar: PrivateCookieJar) -> (PrivateCookieJar, FlashMessages) {
    let error = jar.get(ERROR_COOKIE).map(|c| c.value().to_string());
    let success = jar.get(SUCCESS_COOKIE).map(|c| c.value().to_string());

    let jar = jar
        .remove(Cookie::from(ERROR_COOKIE))
        .remove(Cookie::from(SUCCESS_COOKIE));

    (jar, FlashMessages { error, success })
}

pub fn add_error(jar: PrivateCookieJar, message: &str) -> PrivateCookieJar {
    jar.add(build_cookie(ERROR_COOKIE, message.to_string()))
}

pub fn add_success(jar: PrivateCookieJar, message: &str) -> PrivateCookieJar {
    jar.add(build_cookie(SUCCESS_COOKIE, message.to_string()))
}

fn build_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::minutes(15))
        .build()
}
