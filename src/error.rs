use crate::domain::catalog::ItemKind;
use crate::domain::step::Step;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfiguratorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Unknown {kind} '{code}'")]
    UnknownItem { kind: ItemKind, code: String },
    #[error("Cannot leave step '{step}': {reason}")]
    StepBlocked { step: Step, reason: &'static str },
    #[error("The last step submits the offer instead of advancing")]
    SubmissionRequired,
    #[error("Offers can only be submitted from the last step (currently at '{0}')")]
    NotReadyToSubmit(Step),
    #[error("Configuration has already been submitted")]
    AlreadySubmitted,
    #[error("Incomplete configuration: no {0} selected")]
    Incomplete(ItemKind),
    #[error("Offer rejected: {status}{}", .detail.as_deref().map(|d| format!(" {d}")).unwrap_or_default())]
    OfferRejected { status: u16, detail: Option<String> },
}

pub type Result<T> = std::result::Result<T, ConfiguratorError>;
