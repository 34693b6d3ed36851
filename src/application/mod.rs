//! Application layer orchestrating a configuration session.
//!
//! This module defines the `Configurator`, which owns the catalog and the
//! user's selection, gates step navigation and submits the finished offer
//! through an `OfferGateway` port.

pub mod configurator;
