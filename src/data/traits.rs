//! Trait abstraction for the platform client to enable mocking in tests

use crate::state::{
    ActivityEntry, Donation, IncomingDonation, Need, Ngo, Role, Stat, SurplusItem,
};
use anyhow::Result;
use async_trait::async_trait;

/// Operations against the donation platform.
///
/// The shipped implementation is an in-memory sample store; the trait keeps
/// the seam in place for tests and for a real backend later.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Recent donations of the signed-in donor
    async fn list_recent_donations(&mut self) -> Result<Vec<Donation>>;

    /// NGOs near the signed-in donor
    async fn list_nearby_ngos(&mut self) -> Result<Vec<Ngo>>;

    /// Needs posted by the signed-in NGO
    async fn list_needs(&mut self) -> Result<Vec<Need>>;

    /// Donations inbound to the signed-in NGO
    async fn list_incoming_donations(&mut self) -> Result<Vec<IncomingDonation>>;

    /// Surplus listings of the signed-in restaurant
    async fn list_surplus_items(&mut self) -> Result<Vec<SurplusItem>>;

    /// Activity feed of the signed-in restaurant
    async fn list_activity(&mut self) -> Result<Vec<ActivityEntry>>;

    /// Dashboard stat cards for a role
    async fn stats_for(&mut self, role: Role) -> Result<Vec<Stat>>;

    /// Simulated sign-in / sign-up; always succeeds
    async fn authenticate(&mut self, role: Role) -> Result<()>;

    /// Create a donation, returning its id
    #[allow(clippy::too_many_arguments)]
    async fn create_donation(
        &mut self,
        item_type: &str,
        category: &str,
        quantity: &str,
        description: &str,
        delivery_method: &str,
        address: &str,
        preferred_date: &str,
        preferred_time: &str,
    ) -> Result<String>;

    /// Post a need, returning its id
    async fn post_need(
        &mut self,
        category: &str,
        quantity: &str,
        urgency: &str,
        description: &str,
    ) -> Result<String>;

    /// Upload a surplus listing, returning its id
    async fn upload_surplus(
        &mut self,
        category: &str,
        quantity: &str,
        expires_in: &str,
        description: &str,
        pickup_instructions: &str,
    ) -> Result<String>;

    /// Accept a pending incoming donation
    async fn accept_donation(&mut self, id: &str) -> Result<()>;

    /// Mark an accepted incoming donation as received
    async fn mark_received(&mut self, id: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trait_is_mockable() {
        let mut mock = MockPlatformClient::new();
        mock.expect_stats_for().returning(|_| Ok(vec![]));
        mock.expect_authenticate().returning(|_| Ok(()));

        assert!(mock.stats_for(Role::Donor).await.unwrap().is_empty());
        assert!(mock.authenticate(Role::Ngo).await.is_ok());
    }
}
