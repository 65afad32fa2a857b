//! Cluster client backends for the shp CLI.
//!
//! Provides [`BuildRunClient`] implementations:
//! - Kubernetes API server (via kubeconfig or in-cluster config)

pub mod kubernetes;

pub use kubernetes::{ConnectOptions, KubernetesBuildRunClient};
pub use shp_core::client::BuildRunClient;
