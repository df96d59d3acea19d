use super::HitResponse;
use crate::{Config, Error, Result};

use std::sync::Arc;

use tracing::{debug, error};

pub struct CountApi {
    config: Arc<Config>,
    http_client: reqwest::Client,
}

impl CountApi {
    pub fn new(config: Arc<Config>) -> CountApi {
        let http_client = reqwest::ClientBuilder::new()
            .use_rustls_tls()
            .build()
            .expect("Failed to build HTTP client");

        CountApi::new_with_client(config, http_client)
    }

    pub fn new_with_client(config: Arc<Config>, http_client: reqwest::Client) -> CountApi {
        CountApi {
            config,
            http_client,
        }
    }

    // One GET per call: hitting the endpoint increments the upstream counter
    pub async fn hit(&self) -> Result<usize> {
        let url = format!(
            "{}/hit/{}/{}",
            self.config.counter_base_url, self.config.counter_namespace, self.config.counter_key
        );

        debug!("Hitting {}", url);

        let res = self.http_client.get(&url).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Error::UpstreamStatus(status).into();
        }

        let body = res.bytes().await?;

        let parsed = serde_json::from_slice::<HitResponse>(&body[..]).map_err(Error::JsonError);
        let parsed = match parsed {
            Ok(v) => v,
            Err(e) => {
                error!(
                    "Error deserialising hit response: {}\nFull body: {:?}",
                    e,
                    std::str::from_utf8(&body[..])
                );
                return Err(e);
            }
        };

        Ok(parsed.normalized())
    }
}
