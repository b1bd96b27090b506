//! Cookie Management Infrastructure
//!
//! Session cookie read/write helpers shared by HTTP handlers.

use axum::http::{HeaderMap, header};

/// SameSite policy for cookies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    Strict,
    #[default]
    Lax,
    None,
}

impl SameSite {
    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::Strict => "Strict",
            SameSite::Lax => "Lax",
            SameSite::None => "None",
        }
    }
}

/// Session cookie settings
///
/// Always HttpOnly: the token must never be readable from page scripts.
#[derive(Debug, Clone)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
    pub same_site: SameSite,
    pub max_age_secs: i64,
}

impl SessionCookie {
    /// Build a Set-Cookie header value carrying `token`
    pub fn set(&self, token: &str) -> String {
        let mut value = format!("{}={}; HttpOnly; Path=/", self.name, token);
        if self.secure {
            value.push_str("; Secure");
        }
        value.push_str("; SameSite=");
        value.push_str(self.same_site.as_str());
        value.push_str(&format!("; Max-Age={}", self.max_age_secs));
        value
    }

    /// Build a Set-Cookie header value that deletes the cookie
    pub fn clear(&self) -> String {
        format!("{}=; HttpOnly; Path=/; Max-Age=0", self.name)
    }

    /// Read this cookie's value from request headers
    pub fn read(&self, headers: &HeaderMap) -> Option<String> {
        let raw = headers.get(header::COOKIE)?.to_str().ok()?;
        raw.split(';').find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == self.name).then(|| value.to_string())
        })
    }
}
