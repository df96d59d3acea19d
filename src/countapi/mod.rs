mod client;
pub use client::CountApi;

mod models;
pub use models::HitResponse;
