use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::campaign::Campaign;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod manager;

pub type VoucherId = TypedId<Voucher>;

/// Campaigns never change after creation, so each voucher carries a copy of
/// the campaign it was issued under.
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Voucher {
    pub id: VoucherId,
    pub code: Uuid,
    pub campaign: Campaign,
    pub status: VoucherStatus,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Voucher {
    pub fn issue(campaign: &Campaign, code: Uuid, now: DateTime<Utc>) -> Voucher {
        Voucher {
            id: VoucherId::new(),
            code,
            campaign: campaign.clone(),
            status: VoucherStatus::Issued,
            created_at: now,
            modified_at: now,
        }
    }
}

impl TypedIdMarker for Voucher {
    fn tag() -> &'static str {
        "VCH"
    }
}

/// `Issued` moves to `Redeemed` once and never back.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherStatus {
    Issued,
    Redeemed,
}

impl VoucherStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherStatus::Issued => "ISSUED",
            VoucherStatus::Redeemed => "REDEEMED",
        }
    }
}

impl Display for VoucherStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        f.write_str(self.as_str())
    }
}
