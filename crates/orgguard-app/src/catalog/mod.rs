//! The catalog policy: every repository carries a `catalog-info.yaml` descriptor.

use crate::error::CheckError;
use crate::policy::Policy;
use crate::ports::{EnablementOracle, GraphqlClient};
use crate::query;
use async_trait::async_trait;
use orgguard_domain::{CatalogLookup, evaluate_catalog};
use orgguard_settings::{ConfigLayers, ConfigSource};
use orgguard_types::{CatalogDetails, PolicyResult, ids};
use tracing::{debug, warn};

/// Checks for the catalog descriptor using injected collaborators.
#[derive(Clone, Debug)]
pub struct CatalogPolicy<S, E, Q> {
    config: S,
    enablement: E,
    client: Q,
}

impl<S, E, Q> CatalogPolicy<S, E, Q>
where
    S: ConfigSource,
    E: EnablementOracle,
    Q: GraphqlClient,
{
    pub fn new(config: S, enablement: E, client: Q) -> Self {
        Self {
            config,
            enablement,
            client,
        }
    }

    /// Fetch the org, org-repo and repo layers of `catalog.toml`.
    pub async fn layers(&self, owner: &str, repo: &str) -> Result<ConfigLayers, CheckError> {
        ConfigLayers::load(&self.config, owner, repo, ids::CONFIG_FILE_CATALOG)
            .await
            .map_err(CheckError::Config)
    }

    async fn lookup_descriptor(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<CatalogLookup, CheckError> {
        let request = query::blob_text_request(owner, repo, ids::CATALOG_DESCRIPTOR_PATH);
        let data = self
            .client
            .query(&request)
            .await
            .map_err(CheckError::Lookup)?;
        let text = query::decode_blob_text(data).map_err(CheckError::Lookup)?;
        Ok(CatalogLookup::from_blob_text(&text))
    }
}

#[async_trait]
impl<S, E, Q> Policy for CatalogPolicy<S, E, Q>
where
    S: ConfigSource,
    E: EnablementOracle,
    Q: GraphqlClient,
{
    type Details = CatalogDetails;

    fn name(&self) -> &'static str {
        ids::POLICY_CATALOG
    }

    async fn check(
        &self,
        owner: &str,
        repo: &str,
    ) -> Result<PolicyResult<CatalogDetails>, CheckError> {
        let layers = self.layers(owner, repo).await?;

        let enabled = self
            .enablement
            .is_enabled(
                &layers.org.opt_config,
                &layers.org_repo.opt_config,
                &layers.repo.opt_config,
                owner,
                repo,
            )
            .await
            .map_err(CheckError::Enablement)?;
        debug!(owner, repo, enabled, "catalog policy enablement");

        let lookup = if enabled {
            self.lookup_descriptor(owner, repo).await?
        } else {
            CatalogLookup::Skipped
        };
        debug!(owner, repo, ?lookup, "catalog descriptor lookup");

        Ok(evaluate_catalog(lookup, &layers))
    }

    async fn fix(&self, owner: &str, repo: &str) -> Result<(), CheckError> {
        warn!(
            owner,
            repo,
            area = ids::POLICY_CATALOG,
            "action fix is configured, but not implemented"
        );
        Ok(())
    }

    async fn get_action(&self, owner: &str, repo: &str) -> Result<String, CheckError> {
        let merged = self.layers(owner, repo).await?.merge();
        Ok(merged.action)
    }
}
