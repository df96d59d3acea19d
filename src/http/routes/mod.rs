mod ping;
pub use ping::ping_handler;

mod prometheus;
pub use prometheus::prometheus_handler;

mod visits;
pub use visits::visits_handler;
