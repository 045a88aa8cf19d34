use chrono::Utc;
use tracing::info;

use crate::codes;
use crate::database::Database;
use crate::error::Error;
use crate::settings::Settings;
use crate::voucher::Voucher;

use super::{Campaign, CampaignId, NewCampaign};

#[tracing::instrument(skip(db))]
pub async fn create_campaign(db: &dyn Database, new_campaign: NewCampaign) -> Result<Campaign, Error> {
    let existing = db
        .campaigns()
        .fetch_campaign_by_title(&new_campaign.title)
        .await?;
    if existing.is_some() {
        return Err(Error::CampaignAlreadyExists {
            title: new_campaign.title,
        });
    }

    let campaign = Campaign {
        id: CampaignId::new(),
        title: new_campaign.title,
        start_date: new_campaign.start_date,
        end_date: new_campaign.end_date,
        created_at: Utc::now(),
    };

    db.campaigns().insert_campaign(&campaign).await?;

    info!(campaign_id = %campaign.id, "created campaign");

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db
        .campaigns()
        .fetch_campaign_by_id(campaign_id)
        .await?
        .ok_or(Error::CampaignNotFound { campaign_id })?;

    Ok(campaign)
}

/// Issues `count` vouchers for the campaign as a single batch. The limit is
/// checked before the campaign is looked up.
#[tracing::instrument(skip(db))]
pub async fn issue_vouchers(
    db: &dyn Database,
    settings: &Settings,
    campaign_id: CampaignId,
    count: usize,
) -> Result<Vec<Voucher>, Error> {
    if count > settings.voucher_creation_limit {
        return Err(Error::IssuanceLimitExceeded {
            requested: count,
            limit: settings.voucher_creation_limit,
        });
    }

    let campaign = get_campaign_by_id(db, campaign_id).await?;

    let now = Utc::now();
    let vouchers: Vec<Voucher> = codes::generate_codes(count)
        .into_iter()
        .map(|code| Voucher::issue(&campaign, code, now))
        .collect();

    db.vouchers().insert_vouchers(&vouchers).await?;

    info!(%campaign_id, count, "issued vouchers");

    Ok(vouchers)
}
