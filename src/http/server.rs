use super::routes;
use crate::countapi::CountApi;
use crate::{Config, Error};
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;
use tracing::info;

pub struct Server {
    pub config: Arc<Config>,
    pub counter: CountApi,
}

impl Server {
    pub fn new(config: Arc<Config>, counter: CountApi) -> Server {
        Server { config, counter }
    }

    pub async fn start(self) -> Result<(), Error> {
        let server = Arc::new(self);

        let app = Router::new()
            .route("/visits", get(routes::visits_handler))
            .route("/ping", get(routes::ping_handler))
            .route("/metrics", get(routes::prometheus_handler))
            .layer(Extension(server.clone()));

        let addr = server.config.server_addr.parse()?;

        info!("Starting server on {addr}");

        hyper::Server::bind(&addr)
            .serve(app.into_make_service())
            .await?;

        Ok(())
    }
}
