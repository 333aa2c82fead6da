mod rate_limit;
mod session;

pub use self::rate_limit::RateLimiter;
pub use self::session::SessionStore;
