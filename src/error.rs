// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Failure types.
//!
//! `ArtifactError` covers everything that can go wrong fetching a pre-built
//! file. The core never hands one to its callers: the loader, the preview
//! controller and the random navigator log it and degrade. It is public so
//! `ArtifactSource` implementations can produce it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    /// The host answered, but not with success.
    #[error("fetch of {path} failed with status {status}")]
    Status { path: String, status: u16 },

    /// The request never produced a response.
    #[error("fetch of {path} failed: {reason}")]
    Network { path: String, reason: String },

    /// The body arrived but is not the shape we expect.
    #[error("artifact {path} is malformed: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ArtifactError {
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        Self::Status {
            path: path.into(),
            status,
        }
    }

    pub fn network(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Network {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn parse(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Path of the artifact that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::Status { path, .. } | Self::Network { path, .. } | Self::Parse { path, .. } => {
                path
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
