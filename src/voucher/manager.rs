use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::campaign::manager::get_campaign_by_id;
use crate::campaign::CampaignId;
use crate::database::Database;
use crate::error::Error;

use super::{Voucher, VoucherId, VoucherStatus};

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Checks, in order, that the voucher exists, that its campaign has started,
/// that its campaign has not ended, and that it has not been redeemed. The
/// first failed check decides the error.
pub fn validate_voucher(voucher: Option<Voucher>, today: NaiveDate) -> Result<Voucher, Error> {
    let voucher = voucher.ok_or(Error::VoucherNotValid)?;

    if !voucher.campaign.has_started(today) {
        return Err(Error::VoucherNotValid);
    }

    if voucher.campaign.has_ended(today) {
        return Err(Error::VoucherExpired);
    }

    if voucher.status == VoucherStatus::Redeemed {
        return Err(Error::VoucherAlreadyRedeemed);
    }

    Ok(voucher)
}

/// Looks up a voucher by code and reports whether it could be redeemed
/// today. Never modifies the voucher.
#[tracing::instrument(skip(db))]
pub async fn check_voucher(db: &dyn Database, code: Uuid) -> Result<Voucher, Error> {
    let voucher = db.vouchers().fetch_voucher_by_code(code).await?;

    validate_voucher(voucher, today())
}

#[tracing::instrument(skip(db))]
pub async fn redeem_voucher(db: &dyn Database, voucher_id: VoucherId) -> Result<Voucher, Error> {
    let voucher = db
        .vouchers()
        .fetch_voucher_by_id(voucher_id)
        .await?
        .ok_or(Error::VoucherNotFound { voucher_id })?;

    let voucher = validate_voucher(Some(voucher), today())?;

    match db
        .vouchers()
        .update_voucher_status(voucher, VoucherStatus::Redeemed)
        .await
    {
        Ok(_) => {}
        Err(Error::ConcurrentModificationDetected) => {
            // the only transition out of issued is to redeemed
            warn!(%voucher_id, "voucher was redeemed concurrently");
            return Err(Error::VoucherAlreadyRedeemed);
        }
        Err(err) => return Err(err),
    }

    let voucher = db
        .vouchers()
        .fetch_voucher_by_id(voucher_id)
        .await?
        .ok_or_else(|| {
            Error::ExistentialState(format!("voucher {} vanished after redemption", voucher_id))
        })?;

    info!(%voucher_id, campaign_id = %voucher.campaign.id, "redeemed voucher");

    Ok(voucher)
}

/// Picks an issued voucher from the campaign for handing out. The voucher is
/// not reserved, so concurrent callers may receive the same one; redemption
/// is where exclusivity is enforced.
#[tracing::instrument(skip(db))]
pub async fn allocate_voucher(db: &dyn Database, campaign_id: CampaignId) -> Result<Voucher, Error> {
    let campaign = get_campaign_by_id(db, campaign_id).await?;

    // unlike validation, a campaign that has not started yet is still served
    if campaign.has_ended(today()) {
        return Err(Error::CampaignExpired { campaign_id });
    }

    let voucher = db
        .vouchers()
        .fetch_first_voucher_by_campaign_and_status(campaign.id, VoucherStatus::Issued)
        .await?
        .ok_or(Error::NoValidVouchersAvailable { campaign_id })?;

    debug!(%campaign_id, voucher_id = %voucher.id, "allocated voucher");

    Ok(voucher)
}
