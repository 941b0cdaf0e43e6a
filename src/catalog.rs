use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    api::TierCatalogAPI,
    entities::ServiceTier,
    error::{invalid_input_error, Error},
};

// Tier configuration held in memory. Rate cards are read fresh on every
// call, so replacing the catalog is all an admin edit needs.
pub struct StaticCatalog {
    tiers: Vec<ServiceTier>,
}

impl StaticCatalog {
    pub fn new(tiers: Vec<ServiceTier>) -> Self {
        Self { tiers }
    }
}

#[async_trait]
impl TierCatalogAPI for StaticCatalog {
    #[tracing::instrument(skip(self))]
    async fn find_tier(&self, id: Uuid) -> Result<ServiceTier, Error> {
        self.tiers
            .iter()
            .find(|tier| tier.id == id)
            .cloned()
            .ok_or_else(|| invalid_input_error())
    }

    #[tracing::instrument(skip(self))]
    async fn list_tiers(&self) -> Result<Vec<ServiceTier>, Error> {
        Ok(self.tiers.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        api::{DynRouteProvider, DynTierCatalog, RouteProviderAPI},
        entities::{Coordinates, RateCard, RouteSummary, SurchargeTable},
        pricing,
    };
    use std::sync::Arc;

    fn catalog() -> StaticCatalog {
        StaticCatalog::new(vec![
            ServiceTier::new("Berline".into(), RateCard::new(5.0, 1.5, 0.3, 2.0, 10.0)),
            ServiceTier::new("Van".into(), RateCard::new(9.0, 2.2, 0.5, 3.0, 20.0)),
        ])
    }

    struct StubProvider;

    #[async_trait]
    impl RouteProviderAPI for StubProvider {
        async fn find_route(
            &self,
            _origin: Coordinates,
            _destination: Coordinates,
        ) -> Result<RouteSummary, Error> {
            Ok(RouteSummary::new(
                Some("10 km".into()),
                Some("15 min".into()),
            ))
        }
    }

    #[tokio::test]
    async fn finds_tiers_by_id() {
        let catalog = catalog();
        let tiers = catalog.list_tiers().await.unwrap();

        let tier = catalog.find_tier(tiers[1].id).await.unwrap();

        assert_eq!(tier.name, "Van");
    }

    #[tokio::test]
    async fn missing_tiers_are_invalid_input() {
        let catalog = catalog();

        let result = catalog.find_tier(Uuid::new_v4()).await;

        assert_eq!(result.unwrap_err().code, 101);
    }

    #[test]
    fn prices_every_listed_tier_against_one_route() {
        let catalog: DynTierCatalog = Arc::new(catalog());
        let provider: DynRouteProvider = Arc::new(StubProvider);

        let quotes = tokio_test::block_on(async {
            let origin = Coordinates {
                latitude: 48.8708,
                longitude: 2.3317,
            };
            let destination = Coordinates {
                latitude: 49.0097,
                longitude: 2.5479,
            };

            let summary = provider.find_route(origin, destination).await.unwrap();
            let measure = pricing::measure(&summary);
            let tiers = catalog.list_tiers().await.unwrap();

            pricing::rank_tiers(&tiers, &measure, 0, &[], &SurchargeTable::default())
        })
        .unwrap();

        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].tier_name, "Berline");
        assert_eq!(quotes[0].amount, 24.5);
    }
}
