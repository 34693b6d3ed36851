use crate::domain::catalog::Catalog;
use crate::domain::offer::{OfferId, OfferReceipt, OfferRequest};
use crate::domain::ports::{CatalogSource, OfferGateway};
use crate::error::{ConfiguratorError, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-process backend serving a fixed catalog.
///
/// Records every accepted offer request and issues sequential numeric offer ids.
/// It can be switched into a rejecting mode to exercise failed submissions.
/// Ideal for testing or offline demos where no backend service is running.
#[derive(Default, Clone)]
pub struct InMemoryBackend {
    catalog: Catalog,
    offers: Arc<RwLock<Vec<OfferRequest>>>,
    rejection: Arc<RwLock<Option<(u16, Option<String>)>>>,
}

impl InMemoryBackend {
    /// Creates a backend that serves `catalog` and accepts every offer.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Makes subsequent submissions fail with the given status and detail.
    pub async fn reject_with(&self, status: u16, detail: Option<String>) {
        *self.rejection.write().await = Some((status, detail));
    }

    /// Accepts submissions again.
    pub async fn accept(&self) {
        *self.rejection.write().await = None;
    }

    /// All offer requests accepted so far, in submission order.
    pub async fn submitted(&self) -> Vec<OfferRequest> {
        self.offers.read().await.clone()
    }
}

#[async_trait]
impl CatalogSource for InMemoryBackend {
    async fn fetch_catalog(&self) -> Result<Catalog> {
        Ok(self.catalog.clone())
    }
}

#[async_trait]
impl OfferGateway for InMemoryBackend {
    async fn create_offer(&self, request: &OfferRequest) -> Result<OfferReceipt> {
        if let Some((status, detail)) = self.rejection.read().await.clone() {
            return Err(ConfiguratorError::OfferRejected { status, detail });
        }

        let mut offers = self.offers.write().await;
        offers.push(request.clone());
        Ok(OfferReceipt {
            offer_id: OfferId::Number(offers.len() as u64),
            total_price: request.configuration.total_price,
        })
    }
}
