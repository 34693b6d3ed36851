use crate::domain::catalog::{Catalog, ItemKind, Price};
use crate::domain::offer::{OfferReceipt, OfferRequest};
use crate::domain::ports::{CatalogSource, OfferGateway};
use crate::domain::pricing::total_price;
use crate::domain::selection::{Customer, Selection, toggle};
use crate::domain::step::{Step, StepStatus};
use crate::error::{ConfiguratorError, Result};
use tracing::{debug, info, warn};

/// State manager for one configuration session.
///
/// `Configurator` owns the catalog (loaded once), the user's selection and the
/// current step. Selections are validated against the catalog, forward
/// navigation is gated per step, and the last step submits the offer.
/// Once an offer has been created the session is closed.
pub struct Configurator {
    catalog: Catalog,
    selection: Selection,
    step: Step,
    receipt: Option<OfferReceipt>,
}

impl Configurator {
    /// Creates a session over an already loaded catalog, starting at the first step.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: Selection::default(),
            step: Step::default(),
            receipt: None,
        }
    }

    /// Loads the catalog from `source` and starts a session.
    ///
    /// A failed load is not retried; the error is returned as is.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let catalog = source.fetch_catalog().await?;
        info!(
            vehicles = catalog.vehicles.len(),
            colors = catalog.colors.len(),
            upholsteries = catalog.upholsteries.len(),
            factory_options = catalog.factory_options.len(),
            accessories = catalog.accessories.len(),
            "Catalog loaded"
        );
        Ok(Self::new(catalog))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// The created offer, once the session has been submitted.
    pub fn receipt(&self) -> Option<&OfferReceipt> {
        self.receipt.as_ref()
    }

    /// Current total, recomputed from catalog and selection on every call.
    pub fn total_price(&self) -> Price {
        total_price(&self.catalog, &self.selection)
    }

    /// Every step with its progress relative to the current one.
    pub fn progress(&self) -> impl Iterator<Item = (Step, StepStatus)> + '_ {
        let current = self.step;
        Step::ALL.into_iter().map(move |s| (s, s.status(current)))
    }

    pub fn select_vehicle(&mut self, id: &str) -> Result<()> {
        self.ensure_open()?;
        self.ensure_known(ItemKind::Vehicle, id)?;
        self.selection.vehicle_id = Some(id.to_string());
        Ok(())
    }

    pub fn select_color(&mut self, code: &str) -> Result<()> {
        self.ensure_open()?;
        self.ensure_known(ItemKind::Color, code)?;
        self.selection.color_code = Some(code.to_string());
        Ok(())
    }

    pub fn select_upholstery(&mut self, code: &str) -> Result<()> {
        self.ensure_open()?;
        self.ensure_known(ItemKind::Upholstery, code)?;
        self.selection.upholstery_code = Some(code.to_string());
        Ok(())
    }

    /// Toggles a factory option. Returns whether it is selected afterwards.
    pub fn toggle_factory_option(&mut self, code: &str) -> Result<bool> {
        self.ensure_open()?;
        self.ensure_known(ItemKind::FactoryOption, code)?;
        Ok(toggle(&mut self.selection.factory_options, code))
    }

    /// Toggles an accessory. Returns whether it is selected afterwards.
    pub fn toggle_accessory(&mut self, code: &str) -> Result<bool> {
        self.ensure_open()?;
        self.ensure_known(ItemKind::Accessory, code)?;
        Ok(toggle(&mut self.selection.accessories, code))
    }

    pub fn set_special_agreement(&mut self, text: impl Into<String>) -> Result<()> {
        self.ensure_open()?;
        self.selection.special_agreement = text.into();
        Ok(())
    }

    pub fn set_customer(&mut self, customer: Customer) -> Result<()> {
        self.ensure_open()?;
        self.selection.customer = customer;
        Ok(())
    }

    /// Whether `advance` would succeed from the current step.
    pub fn can_advance(&self) -> bool {
        self.blocker().is_ok()
    }

    /// Moves to the next step if the current step's precondition holds.
    pub fn advance(&mut self) -> Result<Step> {
        self.blocker()?;
        // blocker() rejects the last two steps, so a next step exists
        if let Some(next) = self.step.next() {
            debug!(from = %self.step, to = %next, "Advancing");
            self.step = next;
        }
        Ok(self.step)
    }

    /// Moves one step back. Always allowed before submission; a no-op on the first step.
    pub fn back(&mut self) -> Result<Step> {
        self.ensure_open()?;
        if let Some(previous) = self.step.previous() {
            debug!(from = %self.step, to = %previous, "Going back");
            self.step = previous;
        }
        Ok(self.step)
    }

    /// The payload that `submit` would send for the current selection.
    pub fn offer_request(&self) -> Result<OfferRequest> {
        OfferRequest::build(&self.catalog, &self.selection)
    }

    /// Submits the configuration from the last step.
    ///
    /// On success the session moves to [`Step::Submitted`] and keeps the
    /// receipt. On failure nothing changes, so the user can fix the input and
    /// submit again.
    pub async fn submit(&mut self, gateway: &dyn OfferGateway) -> Result<&OfferReceipt> {
        match self.step {
            Step::CustomerDetails => {}
            Step::Submitted => return Err(ConfiguratorError::AlreadySubmitted),
            other => return Err(ConfiguratorError::NotReadyToSubmit(other)),
        }

        let request = self.offer_request()?;
        match gateway.create_offer(&request).await {
            Ok(receipt) => {
                info!(
                    offer_id = %receipt.offer_id,
                    total_price = %receipt.total_price,
                    "Offer created"
                );
                self.step = Step::Submitted;
                Ok(&*self.receipt.insert(receipt))
            }
            Err(e) => {
                warn!(error = %e, "Offer submission failed");
                Err(e)
            }
        }
    }

    fn blocker(&self) -> Result<()> {
        match self.step {
            Step::Vehicle if self.selection.vehicle_id.is_none() => {
                Err(ConfiguratorError::StepBlocked {
                    step: self.step,
                    reason: "select a vehicle",
                })
            }
            Step::ColorAndUpholstery
                if self.selection.color_code.is_none()
                    || self.selection.upholstery_code.is_none() =>
            {
                Err(ConfiguratorError::StepBlocked {
                    step: self.step,
                    reason: "select a color and an upholstery",
                })
            }
            Step::CustomerDetails => Err(ConfiguratorError::SubmissionRequired),
            Step::Submitted => Err(ConfiguratorError::AlreadySubmitted),
            _ => Ok(()),
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.step.is_terminal() {
            Err(ConfiguratorError::AlreadySubmitted)
        } else {
            Ok(())
        }
    }

    fn ensure_known(&self, kind: ItemKind, key: &str) -> Result<()> {
        if self.catalog.contains(kind, key) {
            Ok(())
        } else {
            Err(ConfiguratorError::UnknownItem {
                kind,
                code: key.to_string(),
            })
        }
    }
}
