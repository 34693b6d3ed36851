use super::catalog::Catalog;
use super::offer::{OfferReceipt, OfferRequest};
use crate::error::Result;
use async_trait::async_trait;

/// Supplies the complete catalog in one call.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_catalog(&self) -> Result<Catalog>;
}

/// Creates offers from submitted configurations.
#[async_trait]
pub trait OfferGateway: Send + Sync {
    async fn create_offer(&self, request: &OfferRequest) -> Result<OfferReceipt>;
}

pub type CatalogSourceBox = Box<dyn CatalogSource>;
pub type OfferGatewayBox = Box<dyn OfferGateway>;
