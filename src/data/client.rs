//! In-memory sample client
//!
//! Stands in for a real backend: reads serve the seed tables, writes append
//! to them for the lifetime of the process. Nothing touches disk or network.

use super::sample;
use super::traits::PlatformClient;
use crate::catalog::{self, ESSENTIALS_CATEGORIES, FOOD_CATEGORIES, NEED_CATEGORIES, SURPLUS_CATEGORIES};
use crate::state::{
    ActivityEntry, Donation, DonationStatus, IncomingDonation, IncomingStatus, Need, Ngo, Role,
    Stat, SurplusItem, SurplusStatus, Urgency,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use uuid::Uuid;

/// Errors the sample store can produce
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("no record with id {0}")]
    NotFound(String),
    #[error("cannot {action} a donation in state {state}")]
    InvalidTransition { action: &'static str, state: String },
}

/// Client backed by the in-memory sample store
pub struct SampleClient {
    donations: Vec<Donation>,
    ngos: Vec<Ngo>,
    needs: Vec<Need>,
    incoming: Vec<IncomingDonation>,
    surplus: Vec<SurplusItem>,
    activity: Vec<ActivityEntry>,
}

impl SampleClient {
    pub fn new() -> Self {
        Self {
            donations: sample::donations(),
            ngos: sample::ngos(),
            needs: sample::needs(),
            incoming: sample::incoming_donations(),
            surplus: sample::surplus_items(),
            activity: sample::activity(),
        }
    }
}

impl Default for SampleClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlatformClient for SampleClient {
    async fn list_recent_donations(&mut self) -> Result<Vec<Donation>> {
        Ok(self.donations.clone())
    }

    async fn list_nearby_ngos(&mut self) -> Result<Vec<Ngo>> {
        Ok(self.ngos.clone())
    }

    async fn list_needs(&mut self) -> Result<Vec<Need>> {
        Ok(self.needs.clone())
    }

    async fn list_incoming_donations(&mut self) -> Result<Vec<IncomingDonation>> {
        Ok(self.incoming.clone())
    }

    async fn list_surplus_items(&mut self) -> Result<Vec<SurplusItem>> {
        Ok(self.surplus.clone())
    }

    async fn list_activity(&mut self) -> Result<Vec<ActivityEntry>> {
        Ok(self.activity.clone())
    }

    async fn stats_for(&mut self, role: Role) -> Result<Vec<Stat>> {
        Ok(match role {
            Role::Donor => sample::donor_stats(),
            Role::Ngo => sample::ngo_stats(),
            Role::Restaurant => sample::restaurant_stats(),
        })
    }

    async fn authenticate(&mut self, role: Role) -> Result<()> {
        tracing::info!(role = role.title(), "simulated authentication");
        Ok(())
    }

    async fn create_donation(
        &mut self,
        item_type: &str,
        category: &str,
        quantity: &str,
        description: &str,
        delivery_method: &str,
        address: &str,
        _preferred_date: &str,
        _preferred_time: &str,
    ) -> Result<String> {
        let table = if item_type == "food" {
            FOOD_CATEGORIES
        } else {
            ESSENTIALS_CATEGORIES
        };
        let id = Uuid::new_v4().to_string();
        self.donations.insert(
            0,
            Donation {
                id: id.clone(),
                item: catalog::category_label(table, category).to_string(),
                quantity: quantity.to_string(),
                status: DonationStatus::Pending,
                ngo: "Pending match".to_string(),
                created_at: Utc::now(),
            },
        );
        tracing::info!(%id, category, delivery_method, address, description, "donation created");
        Ok(id)
    }

    async fn post_need(
        &mut self,
        category: &str,
        quantity: &str,
        urgency: &str,
        description: &str,
    ) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        self.needs.insert(
            0,
            Need {
                id: id.clone(),
                item: catalog::category_label(NEED_CATEGORIES, category).to_string(),
                quantity: quantity.to_string(),
                urgency: Urgency::parse(urgency).unwrap_or_default(),
                fulfilled_pct: 0,
            },
        );
        tracing::info!(%id, category, description, "need posted");
        Ok(id)
    }

    async fn upload_surplus(
        &mut self,
        category: &str,
        quantity: &str,
        expires_in: &str,
        description: &str,
        _pickup_instructions: &str,
    ) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        let item = catalog::category_label(SURPLUS_CATEGORIES, category).to_string();
        self.surplus.insert(
            0,
            SurplusItem {
                id: id.clone(),
                item: item.clone(),
                quantity: quantity.to_string(),
                expires_in_hours: expires_in.parse().unwrap_or(24),
                status: SurplusStatus::Available,
            },
        );
        self.activity.insert(
            0,
            ActivityEntry {
                id: Uuid::new_v4().to_string(),
                action: "Food uploaded".to_string(),
                details: format!("{quantity} of {item} added"),
                time_ago: "Just now".to_string(),
            },
        );
        tracing::info!(%id, category, description, "surplus uploaded");
        Ok(id)
    }

    async fn accept_donation(&mut self, id: &str) -> Result<()> {
        let donation = self
            .incoming
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
        if donation.status != IncomingStatus::Pending {
            return Err(ClientError::InvalidTransition {
                action: "accept",
                state: donation.status.label().to_string(),
            }
            .into());
        }
        donation.status = IncomingStatus::Accepted;
        Ok(())
    }

    async fn mark_received(&mut self, id: &str) -> Result<()> {
        let donation = self
            .incoming
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| ClientError::NotFound(id.to_string()))?;
        if donation.status != IncomingStatus::Accepted {
            return Err(ClientError::InvalidTransition {
                action: "receive",
                state: donation.status.label().to_string(),
            }
            .into());
        }
        donation.status = IncomingStatus::Received;
        donation.eta = "Completed".to_string();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_seed_tables_are_served() {
        let mut client = SampleClient::new();
        assert_eq!(client.list_recent_donations().await.unwrap().len(), 3);
        assert_eq!(client.list_nearby_ngos().await.unwrap().len(), 3);
        assert_eq!(client.list_needs().await.unwrap().len(), 3);
        assert_eq!(client.list_incoming_donations().await.unwrap().len(), 3);
        assert_eq!(client.list_surplus_items().await.unwrap().len(), 3);
        assert_eq!(client.list_activity().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_stats_differ_per_role() {
        let mut client = SampleClient::new();
        let donor = client.stats_for(Role::Donor).await.unwrap();
        let ngo = client.stats_for(Role::Ngo).await.unwrap();
        assert_eq!(donor.len(), 4);
        assert_eq!(ngo.len(), 4);
        assert_ne!(donor[0].label, ngo[0].label);
    }

    #[tokio::test]
    async fn test_create_donation_prepends_pending_record() {
        let mut client = SampleClient::new();
        let id = client
            .create_donation(
                "food",
                "vegetables",
                "10 kg",
                "",
                "pickup",
                "12 Main St",
                "",
                "",
            )
            .await
            .unwrap();
        let donations = client.list_recent_donations().await.unwrap();
        assert_eq!(donations.len(), 4);
        assert_eq!(donations[0].id, id);
        assert_eq!(donations[0].item, "Fresh Vegetables");
        assert_eq!(donations[0].status, DonationStatus::Pending);
        assert_eq!(donations[0].ngo, "Pending match");
    }

    #[tokio::test]
    async fn test_post_need_starts_unfulfilled() {
        let mut client = SampleClient::new();
        let id = client
            .post_need("grains", "50 kg", "high", "")
            .await
            .unwrap();
        let needs = client.list_needs().await.unwrap();
        assert_eq!(needs[0].id, id);
        assert_eq!(needs[0].item, "Rice & Grains");
        assert_eq!(needs[0].urgency, Urgency::High);
        assert_eq!(needs[0].fulfilled_pct, 0);
    }

    #[tokio::test]
    async fn test_upload_surplus_records_activity() {
        let mut client = SampleClient::new();
        client
            .upload_surplus("bread", "30 loaves", "4", "", "")
            .await
            .unwrap();
        let surplus = client.list_surplus_items().await.unwrap();
        assert_eq!(surplus[0].item, "Bread & Bakery");
        assert_eq!(surplus[0].expires_in_hours, 4);
        assert_eq!(surplus[0].status, SurplusStatus::Available);

        let activity = client.list_activity().await.unwrap();
        assert_eq!(activity[0].action, "Food uploaded");
        assert_eq!(activity[0].time_ago, "Just now");
    }

    #[tokio::test]
    async fn test_accept_then_receive_flow() {
        let mut client = SampleClient::new();
        client.accept_donation("in-1").await.unwrap();
        let incoming = client.list_incoming_donations().await.unwrap();
        assert_eq!(incoming[0].status, IncomingStatus::Accepted);

        client.mark_received("in-1").await.unwrap();
        let incoming = client.list_incoming_donations().await.unwrap();
        assert_eq!(incoming[0].status, IncomingStatus::Received);
        assert_eq!(incoming[0].eta, "Completed");
    }

    #[tokio::test]
    async fn test_accept_unknown_id_fails() {
        let mut client = SampleClient::new();
        let err = client.accept_donation("missing").await.unwrap_err();
        assert!(err.to_string().contains("missing"));
    }

    #[tokio::test]
    async fn test_accept_rejects_non_pending() {
        let mut client = SampleClient::new();
        // in-2 is already accepted in the seed data
        let err = client.accept_donation("in-2").await.unwrap_err();
        assert!(err.to_string().contains("Accepted"));
    }

    #[tokio::test]
    async fn test_receive_requires_acceptance() {
        let mut client = SampleClient::new();
        let err = client.mark_received("in-1").await.unwrap_err();
        assert!(err.to_string().contains("Pending"));
    }
}
