use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tmdb::TmdbClient;

use crate::config::Config;
use crate::poster::PosterService;
use crate::settings::SettingsService;

/// Connection timeout used by the original client.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);
/// Upper bound for a whole request, body included.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
    pub tmdb: Arc<TmdbClient>,
    pub settings: Arc<SettingsService>,
    pub posters: Arc<PosterService>,
}

impl AppState {
    pub async fn new(config: Config) -> crate::Result<Self> {
        let http_client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        let tmdb = TmdbClient::with_client(http_client.clone(), &config.api_key);
        let settings = SettingsService::new(&config).await?;
        let posters = PosterService::new(http_client.clone(), config.posters_path());

        Ok(Self {
            config: Arc::new(config),
            http_client,
            tmdb: Arc::new(tmdb),
            settings: Arc::new(settings),
            posters: Arc::new(posters),
        })
    }
}
