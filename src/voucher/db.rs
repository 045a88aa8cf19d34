use std::collections::HashSet;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::campaign::CampaignId;
use crate::database::MemoryVoucherStore;
use crate::error::Error;

use super::{Voucher, VoucherId, VoucherStatus};

#[async_trait]
pub trait VoucherStore: Send + Sync {
    /// Stores every voucher or none of them. Fails with
    /// `VoucherCodeAlreadyExists` if any code is already taken.
    async fn insert_vouchers(&self, vouchers: &[Voucher]) -> Result<(), Error>;

    async fn fetch_voucher_by_id(&self, voucher_id: VoucherId) -> Result<Option<Voucher>, Error>;

    async fn fetch_voucher_by_code(&self, code: Uuid) -> Result<Option<Voucher>, Error>;

    /// The first match in store order, stable for a fixed set of vouchers.
    async fn fetch_first_voucher_by_campaign_and_status(
        &self,
        campaign_id: CampaignId,
        status: VoucherStatus,
    ) -> Result<Option<Voucher>, Error>;

    /// Sets the status only while the stored voucher still has the status of
    /// `voucher`, otherwise fails with `ConcurrentModificationDetected`.
    async fn update_voucher_status(
        &self,
        voucher: Voucher,
        status: VoucherStatus,
    ) -> Result<Voucher, Error>;
}

#[async_trait]
impl VoucherStore for MemoryVoucherStore {
    #[tracing::instrument(skip(self, vouchers), fields(count = vouchers.len()))]
    async fn insert_vouchers(&self, vouchers: &[Voucher]) -> Result<(), Error> {
        let mut stored = self.write().await;

        let mut codes: HashSet<Uuid> = stored.iter().map(|v| v.code).collect();
        for voucher in vouchers {
            if !codes.insert(voucher.code) {
                return Err(Error::VoucherCodeAlreadyExists { code: voucher.code });
            }
        }

        stored.extend_from_slice(vouchers);

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_voucher_by_id(&self, voucher_id: VoucherId) -> Result<Option<Voucher>, Error> {
        let voucher = self
            .read()
            .await
            .iter()
            .find(|v| v.id == voucher_id)
            .cloned();

        Ok(voucher)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_voucher_by_code(&self, code: Uuid) -> Result<Option<Voucher>, Error> {
        let voucher = self.read().await.iter().find(|v| v.code == code).cloned();

        Ok(voucher)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_first_voucher_by_campaign_and_status(
        &self,
        campaign_id: CampaignId,
        status: VoucherStatus,
    ) -> Result<Option<Voucher>, Error> {
        let voucher = self
            .read()
            .await
            .iter()
            .find(|v| v.campaign.id == campaign_id && v.status == status)
            .cloned();

        Ok(voucher)
    }

    #[tracing::instrument(skip(self))]
    async fn update_voucher_status(
        &self,
        mut voucher: Voucher,
        status: VoucherStatus,
    ) -> Result<Voucher, Error> {
        let now = Utc::now();
        let mut stored = self.write().await;

        let entry = stored
            .iter_mut()
            .find(|v| v.id == voucher.id && v.status == voucher.status)
            .ok_or(Error::ConcurrentModificationDetected)?;

        entry.status = status;
        entry.modified_at = now;

        voucher.status = status;
        voucher.modified_at = now;

        Ok(voucher)
    }
}
