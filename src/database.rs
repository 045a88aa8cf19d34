use tokio::sync::RwLock;

use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;
use crate::voucher::db::VoucherStore;
use crate::voucher::Voucher;

/// Campaigns in insertion order.
pub type MemoryCampaignStore = RwLock<Vec<Campaign>>;
/// Vouchers in insertion order, which is the order "first voucher" lookups
/// walk.
pub type MemoryVoucherStore = RwLock<Vec<Voucher>>;

pub trait Database: Send + Sync {
    fn campaigns(&self) -> &dyn CampaignStore;
    fn vouchers(&self) -> &dyn VoucherStore;
}

#[derive(Debug, Default)]
pub struct MemoryDatabase {
    campaigns: MemoryCampaignStore,
    vouchers: MemoryVoucherStore,
}

impl MemoryDatabase {
    pub fn new() -> MemoryDatabase {
        MemoryDatabase::default()
    }
}

impl Database for MemoryDatabase {
    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }

    fn vouchers(&self) -> &dyn VoucherStore {
        &self.vouchers
    }
}
