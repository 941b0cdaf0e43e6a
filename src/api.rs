use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Coordinates, RouteSummary, ServiceTier};
use crate::error::Error;

#[async_trait]
pub trait TierCatalogAPI {
    async fn find_tier(&self, id: Uuid) -> Result<ServiceTier, Error>;
    async fn list_tiers(&self) -> Result<Vec<ServiceTier>, Error>;
}

#[async_trait]
pub trait RouteProviderAPI {
    async fn find_route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
    ) -> Result<RouteSummary, Error>;
}

pub type DynTierCatalog = Arc<dyn TierCatalogAPI + Send + Sync>;
pub type DynRouteProvider = Arc<dyn RouteProviderAPI + Send + Sync>;
