//! Error types.

use thiserror::Error;

use crate::models::ClusterKind;

/// A rejected clustering configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("depot coordinate ({lat}, {lon}) is not a valid latitude/longitude")]
    InvalidDepot { lat: f64, lon: f64 },

    #[error("circuity factor must be finite and positive, got {0}")]
    InvalidCircuityFactor(f64),

    #[error("cost for {kind} clusters must be finite and non-negative, got {value}")]
    InvalidCost { kind: ClusterKind, value: f64 },

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// A clustering run that could not start because its input is malformed.
#[derive(Debug, Error)]
pub enum ClusteringError {
    #[error("society {id} has invalid coordinates ({lat}, {lon})")]
    InvalidCoordinate { id: u64, lat: f64, lon: f64 },

    #[error("society id {0} appears more than once")]
    DuplicateSociety(u64),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
