mod server;
pub use server::Server;

pub mod response;
pub use response::Response;

mod rejection;

pub mod routes;
