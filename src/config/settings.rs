use std::env;
use std::net::SocketAddr;

use tracing::warn;

#[derive(Clone)]
pub struct Settings {
    pub port: u16,
    pub addr: SocketAddr,
    /// Connection string for the hosted profile store. When absent the store
    /// client never initializes and every data operation degrades to an
    /// empty no-op.
    pub database_url: Option<String>,
    /// Secret the session provider signs its tokens with. When absent no
    /// identity can be resolved and every protected page routes to /auth.
    pub jwt_secret: Option<String>,
}

impl Settings {
    pub fn new() -> Self {
        let port: u16 = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3000);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let database_url = env::var("DATABASE_URL").ok();
        if database_url.is_none() {
            warn!("DATABASE_URL not set; profile store client not initialized");
        }

        let jwt_secret = env::var("JWT_SECRET").ok();
        if jwt_secret.is_none() {
            warn!("JWT_SECRET not set; session tokens cannot be verified");
        }

        Self {
            port,
            addr,
            database_url,
            jwt_secret,
        }
    }
}
