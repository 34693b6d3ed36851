use super::catalog::{Catalog, ItemKind, Price};
use super::pricing::total_price;
use super::selection::{Customer, Selection};
use crate::error::{ConfiguratorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /api/offers`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferRequest {
    pub configuration: OfferConfiguration,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OfferConfiguration {
    pub vehicle_id: String,
    pub vehicle_name: String,
    pub color_code: String,
    pub color_name: String,
    pub upholstery_code: String,
    pub upholstery_name: String,
    pub factory_options: Vec<String>,
    pub accessories: Vec<String>,
    pub special_agreement: Option<String>,
    pub customer: Customer,
    pub total_price: Price,
}

impl OfferRequest {
    /// Builds the payload for the given selection.
    ///
    /// Vehicle, color and upholstery must be selected. Names of entries that
    /// cannot be found in the catalog are sent as empty strings.
    pub fn build(catalog: &Catalog, selection: &Selection) -> Result<Self> {
        let vehicle_id = required(&selection.vehicle_id, ItemKind::Vehicle)?;
        let color_code = required(&selection.color_code, ItemKind::Color)?;
        let upholstery_code = required(&selection.upholstery_code, ItemKind::Upholstery)?;

        let configuration = OfferConfiguration {
            vehicle_name: catalog
                .vehicle(vehicle_id)
                .map(|v| v.name.clone())
                .unwrap_or_default(),
            color_name: catalog
                .color(color_code)
                .map(|c| c.name.clone())
                .unwrap_or_default(),
            upholstery_name: catalog
                .upholstery(upholstery_code)
                .map(|u| u.name.clone())
                .unwrap_or_default(),
            vehicle_id: vehicle_id.to_string(),
            color_code: color_code.to_string(),
            upholstery_code: upholstery_code.to_string(),
            factory_options: selection.factory_options.clone(),
            accessories: selection.accessories.clone(),
            special_agreement: selection.special_agreement().map(str::to_string),
            customer: selection.customer.clone(),
            total_price: total_price(catalog, selection),
        };

        Ok(Self { configuration })
    }
}

fn required(value: &Option<String>, kind: ItemKind) -> Result<&str> {
    value.as_deref().ok_or(ConfiguratorError::Incomplete(kind))
}

/// Server-issued offer identifier.
///
/// Backends usually hand out unsigned numbers or strings. Any other JSON value is
/// kept as is so that a created offer is never reported as a failed submission.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OfferId {
    Number(u64),
    Text(String),
    Other(serde_json::Value),
}

impl fmt::Display for OfferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OfferId::Number(n) => write!(f, "{n}"),
            OfferId::Text(s) => f.write_str(s),
            OfferId::Other(value) => write!(f, "{value}"),
        }
    }
}

/// Successful response of `POST /api/offers`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OfferReceipt {
    pub offer_id: OfferId,
    pub total_price: Price,
}
