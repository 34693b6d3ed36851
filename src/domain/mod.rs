//! Domain model of the configurator: catalog entries, the user's selection,
//! pricing, the step sequence and the offer payloads, plus the ports through
//! which catalog and offers are reached.

pub mod catalog;
pub mod offer;
pub mod ports;
pub mod pricing;
pub mod selection;
pub mod step;
