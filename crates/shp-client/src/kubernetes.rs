//! Kubernetes BuildRun client.

use async_trait::async_trait;
use kube::api::{Api, ListParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};
use shp_core::client::BuildRunClient;
use shp_core::{BuildRun, Error, Result};
use std::path::PathBuf;
use tracing::{debug, info};

/// How to locate the cluster.
#[derive(Debug, Clone, Default)]
pub struct ConnectOptions {
    /// Kubeconfig file. When unset, the config is inferred from `$KUBECONFIG`,
    /// `~/.kube/config` or the in-cluster service account.
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of the current one.
    pub context: Option<String>,
}

/// BuildRun client backed by the Kubernetes API server.
pub struct KubernetesBuildRunClient {
    client: Client,
}

impl KubernetesBuildRunClient {
    pub async fn new(options: &ConnectOptions) -> Result<Self> {
        let config = load_config(options).await?;
        info!(cluster = %config.cluster_url, namespace = %config.default_namespace, "connecting to cluster");
        let client = Client::try_from(config).map_err(|e| Error::Config(e.to_string()))?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Namespace of the selected kubeconfig context, or `default`.
    pub fn default_namespace(&self) -> &str {
        self.client.default_namespace()
    }
}

async fn load_config(options: &ConnectOptions) -> Result<Config> {
    if options.kubeconfig.is_none() && options.context.is_none() {
        return Config::infer()
            .await
            .map_err(|e| Error::Config(e.to_string()));
    }

    let kube_options = KubeConfigOptions {
        context: options.context.clone(),
        ..Default::default()
    };
    match &options.kubeconfig {
        Some(path) => {
            let kubeconfig = Kubeconfig::read_from(path)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
            Config::from_custom_kubeconfig(kubeconfig, &kube_options)
                .await
                .map_err(|e| Error::Config(e.to_string()))
        }
        None => Config::from_kubeconfig(&kube_options)
            .await
            .map_err(|e| Error::Config(e.to_string())),
    }
}

#[async_trait]
impl BuildRunClient for KubernetesBuildRunClient {
    fn name(&self) -> &'static str {
        "kubernetes"
    }

    async fn list(&self, namespace: &str) -> Result<Vec<BuildRun>> {
        let api: Api<BuildRun> = Api::namespaced(self.client.clone(), namespace);
        let list = api
            .list(&ListParams::default())
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;
        debug!(namespace, count = list.items.len(), "listed buildruns");
        Ok(list.items)
    }
}
