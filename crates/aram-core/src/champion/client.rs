//! Data Dragon HTTP client.
//!
//! Status handling lives in `request_once`; `champions` only sees decoded
//! data or an [`AramError`].

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use super::{sort_by_name, Champion, ChampionSource};
use crate::config::DataSourceConfig;
use crate::error::{AramError, AramResult};

const USER_AGENT_VALUE: &str = concat!("aram-core/", env!("CARGO_PKG_VERSION"));

/// Ceiling for a single retry backoff.
const MAX_BACKOFF: Duration = Duration::from_secs(8);

#[derive(Debug, Deserialize)]
struct ChampionResponse {
    data: BTreeMap<String, Champion>,
}

/// Fetches the full champion list for one patch and locale.
#[derive(Debug, Clone)]
pub struct DataDragonClient {
    client: reqwest::Client,
    endpoint: String,
    max_retries: u32,
}

impl DataDragonClient {
    pub fn new(config: &DataSourceConfig) -> AramResult<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(default_headers)
            .build()
            .map_err(|e| AramError::Config {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            endpoint: config.champion_endpoint(),
            max_retries: config.max_retries,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn request(&self) -> AramResult<ChampionResponse> {
        let mut retries = 0;

        loop {
            match self.request_once().await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && retries < self.max_retries => {
                    retries += 1;

                    let base = Duration::from_millis(250u64 << retries.min(8)).min(MAX_BACKOFF);
                    let jittered_ms = rand::thread_rng().gen_range(0..=base.as_millis() as u64);
                    let backoff = Duration::from_millis(jittered_ms.max(10));

                    warn!(
                        error = %e,
                        retry = retries,
                        max_retries = self.max_retries,
                        backoff_ms = backoff.as_millis(),
                        "retrying champion fetch"
                    );

                    tokio::time::sleep(backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn request_once(&self) -> AramResult<ChampionResponse> {
        debug!(url = %self.endpoint, "fetching champion data");
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();

        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AramError::Network {
                message: format!("{} returned {}", self.endpoint, status),
            });
        }
        if !status.is_success() {
            return Err(AramError::InvalidResponse {
                message: format!("{} returned {}", self.endpoint, status),
            });
        }

        response.json::<ChampionResponse>().await.map_err(|e| {
            if e.is_decode() {
                AramError::InvalidResponse {
                    message: format!("failed to decode champion data: {}", e),
                }
            } else {
                AramError::from(e)
            }
        })
    }
}

#[async_trait]
impl ChampionSource for DataDragonClient {
    async fn champions(&self) -> AramResult<Arc<Vec<Champion>>> {
        let response = self.request().await?;
        let mut champions: Vec<Champion> = response.data.into_values().collect();
        if champions.is_empty() {
            return Err(AramError::InvalidResponse {
                message: "champion list is empty".to_string(),
            });
        }
        sort_by_name(&mut champions);
        debug!(count = champions.len(), "champion data fetched");
        Ok(Arc::new(champions))
    }

    fn name(&self) -> &'static str {
        "data-dragon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const CHAMPION_PATH: &str = "/cdn/13.19.1/data/en_US/champion.json";

    fn body() -> serde_json::Value {
        serde_json::json!({
            "type": "champion",
            "format": "standAloneComplex",
            "version": "13.19.1",
            "data": {
                "Zed": {
                    "id": "Zed", "key": "238", "name": "Zed", "title": "the Master of Shadows",
                    "info": {"attack": 9, "defense": 2, "magic": 1, "difficulty": 7},
                    "image": {"full": "Zed.png"}, "tags": ["Assassin"]
                },
                "Ahri": {
                    "id": "Ahri", "key": "103", "name": "Ahri", "title": "the Nine-Tailed Fox",
                    "info": {"attack": 3, "defense": 4, "magic": 8, "difficulty": 5},
                    "image": {"full": "Ahri.png"}, "tags": ["Mage", "Assassin"]
                },
                "MissFortune": {
                    "id": "MissFortune", "key": "21", "name": "Miss Fortune", "title": "the Bounty Hunter",
                    "info": {"attack": 8, "defense": 2, "magic": 5, "difficulty": 1},
                    "image": {"full": "MissFortune.png"}, "tags": ["Marksman"]
                }
            }
        })
    }

    fn client_for(server: &MockServer, retries: u32) -> DataDragonClient {
        let cfg = DataSourceConfig::default()
            .with_base_url(server.uri())
            .with_max_retries(retries);
        DataDragonClient::new(&cfg).unwrap()
    }

    #[tokio::test]
    async fn fetches_and_sorts_by_name() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CHAMPION_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body()))
            .expect(1)
            .mount(&server)
            .await;

        let champions = client_for(&server, 0).champions().await.unwrap();
        let names: Vec<_> = champions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Ahri", "Miss Fortune", "Zed"]);
    }

    #[tokio::test]
    async fn retries_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(CHAMPION_PATH))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(CHAMPION_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body()))
            .mount(&server)
            .await;

        let champions = client_for(&server, 2).champions().await.unwrap();
        assert_eq!(champions.len(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(2)
            .mount(&server)
            .await;

        let err = client_for(&server, 1).champions().await.unwrap_err();
        assert!(matches!(err, AramError::Network { .. }), "{err}");
    }

    #[tokio::test]
    async fn not_found_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server, 3).champions().await.unwrap_err();
        assert!(matches!(err, AramError::InvalidResponse { .. }), "{err}");
    }

    #[tokio::test]
    async fn undecodable_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server, 0).champions().await.unwrap_err();
        assert!(matches!(err, AramError::InvalidResponse { .. }), "{err}");
    }

    #[tokio::test]
    async fn empty_list_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {}})))
            .mount(&server)
            .await;

        let err = client_for(&server, 0).champions().await.unwrap_err();
        assert!(matches!(err, AramError::InvalidResponse { .. }), "{err}");
    }
}
