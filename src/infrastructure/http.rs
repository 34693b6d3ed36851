use crate::domain::catalog::{Catalog, Item, Vehicle};
use crate::domain::offer::{OfferReceipt, OfferRequest};
use crate::domain::ports::{CatalogSource, OfferGateway};
use crate::error::{ConfiguratorError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

pub const VEHICLES_PATH: &str = "/api/catalog/vehicles";
pub const COLORS_PATH: &str = "/api/catalog/colors";
pub const UPHOLSTERIES_PATH: &str = "/api/catalog/upholsteries";
pub const FACTORY_OPTIONS_PATH: &str = "/api/catalog/factory-options";
pub const ACCESSORIES_PATH: &str = "/api/catalog/accessories";
pub const OFFERS_PATH: &str = "/api/offers";

/// Backend adapter speaking the catalog/offer HTTP API.
///
/// `Clone` shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

/// Error body returned by the offer endpoint. `detail` is usually a string but
/// validation failures may carry structured JSON.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let url = self.url(path);
        debug!(%url, "Fetching catalog section");
        let items = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(items)
    }
}

#[async_trait]
impl CatalogSource for HttpBackend {
    /// Fetches all five catalog sections concurrently. The first failure fails the whole load.
    async fn fetch_catalog(&self) -> Result<Catalog> {
        let (vehicles, colors, upholsteries, factory_options, accessories) = tokio::try_join!(
            self.fetch_list::<Vehicle>(VEHICLES_PATH),
            self.fetch_list::<Item>(COLORS_PATH),
            self.fetch_list::<Item>(UPHOLSTERIES_PATH),
            self.fetch_list::<Item>(FACTORY_OPTIONS_PATH),
            self.fetch_list::<Item>(ACCESSORIES_PATH),
        )?;

        Ok(Catalog {
            vehicles,
            colors,
            upholsteries,
            factory_options,
            accessories,
        })
    }
}

#[async_trait]
impl OfferGateway for HttpBackend {
    async fn create_offer(&self, request: &OfferRequest) -> Result<OfferReceipt> {
        let url = self.url(OFFERS_PATH);
        debug!(%url, vehicle_id = %request.configuration.vehicle_id, "Submitting offer");

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.detail)
                .map(render_detail);
            warn!(status = status.as_u16(), ?detail, "Offer endpoint rejected the request");
            return Err(ConfiguratorError::OfferRejected {
                status: status.as_u16(),
                detail,
            });
        }

        Ok(response.json().await?)
    }
}

fn render_detail(detail: serde_json::Value) -> String {
    match detail {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}
