//! Application Configuration
//!
//! The route table, wishlist content and session settings. Built once
//! at startup, immutable afterwards.

use crate::domain::entities::Route;
use crate::domain::value_objects::RouteName;
use std::time::Duration;

/// Re-export SameSite from platform
pub use platform::cookie::SameSite;

/// Default upstream location of the route sheets
pub const DEFAULT_MAP_BASE_URL: &str =
    "https://raw.githubusercontent.com/FPWRasmussen/JuleTur2024/main/maps";

/// Hunt application configuration
#[derive(Debug, Clone)]
pub struct HuntConfig {
    /// The fixed routes with their expected sequences
    pub routes: Vec<Route>,
    /// Wishlist items revealed on solve
    pub wishlist: Vec<String>,
    /// Base URL of the map host serving the route sheets
    pub map_base_url: String,
    /// Session TTL
    pub session_ttl: Duration,
    /// Cookie name for session
    pub session_cookie_name: String,
    /// Session secret key for HMAC signing (32 bytes)
    pub session_secret: [u8; 32],
    /// Whether to require Secure cookie
    pub cookie_secure: bool,
    /// SameSite policy
    pub cookie_same_site: SameSite,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            routes: vec![
                Route::new(
                    RouteName::Middelfart,
                    vec![17, 18, 19, 21, 14, 8, 10, 12, 13],
                ),
                Route::new(RouteName::Aarhus, vec![9, 4, 12, 6, 8, 11, 3, 5, 7, 10, 2]),
            ],
            wishlist: default_wishlist(),
            map_base_url: DEFAULT_MAP_BASE_URL.to_string(),
            session_ttl: Duration::from_secs(24 * 3600),
            session_cookie_name: "hunt_session".to_string(),
            session_secret: [0u8; 32],
            cookie_secure: true,
            cookie_same_site: SameSite::Lax,
        }
    }
}

impl HuntConfig {
    /// Create config with a random session secret (for development)
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = [0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self {
            session_secret: secret,
            ..Default::default()
        }
    }

    /// Create config for development (insecure cookie)
    pub fn development() -> Self {
        Self {
            cookie_secure: false,
            ..Self::with_random_secret()
        }
    }

    /// Look up a route by name
    pub fn route(&self, name: RouteName) -> Option<&Route> {
        self.routes.iter().find(|route| route.name == name)
    }

    pub fn session_ttl_ms(&self) -> i64 {
        self.session_ttl.as_millis() as i64
    }

    /// Cookie settings for the session token
    pub fn session_cookie(&self) -> platform::cookie::SessionCookie {
        platform::cookie::SessionCookie {
            name: self.session_cookie_name.clone(),
            secure: self.cookie_secure,
            same_site: self.cookie_same_site,
            max_age_secs: self.session_ttl.as_secs() as i64,
        }
    }
}

fn default_wishlist() -> Vec<String> {
    [
        "Natbukser (M)",
        "Kuffert (~70L)",
        "Sokker med mønster/symboler (43)",
        "Skærebræt af træ",
        "Bagekogebog",
        "Blender",
        "Badehåndklæder",
        "Hvid t-shirt (M, rund udskæring)",
        "Fleecetrøje (M, mørk)",
        "Genopladelige AA batterier + oplader",
        "Margrethe skål med låg",
        "Gymnastikringe",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}
