use async_trait::async_trait;

use crate::database::MemoryCampaignStore;
use crate::error::Error;

use super::{Campaign, CampaignId};

#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Fails with `CampaignAlreadyExists` if the title is already taken.
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error>;

    async fn fetch_campaign_by_id(&self, campaign_id: CampaignId)
        -> Result<Option<Campaign>, Error>;

    async fn fetch_campaign_by_title(&self, title: &str) -> Result<Option<Campaign>, Error>;
}

#[async_trait]
impl CampaignStore for MemoryCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        let mut campaigns = self.write().await;

        if campaigns.iter().any(|c| c.title == campaign.title) {
            return Err(Error::CampaignAlreadyExists {
                title: campaign.title.clone(),
            });
        }
        if campaigns.iter().any(|c| c.id == campaign.id) {
            return Err(Error::ExistentialState(format!(
                "campaign {} inserted twice",
                campaign.id
            )));
        }

        campaigns.push(campaign.clone());

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        let campaign = self
            .read()
            .await
            .iter()
            .find(|c| c.id == campaign_id)
            .cloned();

        Ok(campaign)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaign_by_title(&self, title: &str) -> Result<Option<Campaign>, Error> {
        let campaign = self
            .read()
            .await
            .iter()
            .find(|c| c.title == title)
            .cloned();

        Ok(campaign)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn campaign(title: &str) -> Campaign {
        Campaign {
            id: CampaignId::new(),
            title: title.into(),
            start_date: NaiveDate::from_ymd_opt(2023, 5, 23).unwrap(),
            end_date: None,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn insert_rejects_taken_title() {
        let store = MemoryCampaignStore::default();
        store.insert_campaign(&campaign("Free Shipping")).await.unwrap();

        let result = store.insert_campaign(&campaign("Free Shipping")).await;

        assert_eq!(
            result.unwrap_err(),
            Error::CampaignAlreadyExists {
                title: "Free Shipping".into()
            }
        );
        assert_eq!(store.read().await.len(), 1);
    }

    #[tokio::test]
    async fn title_lookup_is_case_sensitive() {
        let store = MemoryCampaignStore::default();
        let stored = campaign("Free Shipping");
        store.insert_campaign(&stored).await.unwrap();

        assert_eq!(
            store.fetch_campaign_by_title("Free Shipping").await.unwrap(),
            Some(stored)
        );
        assert_eq!(
            store.fetch_campaign_by_title("free shipping").await.unwrap(),
            None
        );
    }
}
