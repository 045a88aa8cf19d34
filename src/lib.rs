//! Issuing, checking, allocating, and redeeming single-use vouchers for
//! time-bounded marketing campaigns.
//!
//! Operations live in the `manager` modules and work against any
//! [`Database`], with [`MemoryDatabase`] as the in-process store.

pub mod campaign;
pub mod codes;
pub mod database;
pub mod error;
pub mod settings;
pub mod typedid;
pub mod violations;
pub mod voucher;

pub use campaign::{Campaign, CampaignId, NewCampaign};
pub use database::{Database, MemoryDatabase};
pub use error::Error;
pub use settings::Settings;
pub use voucher::{Voucher, VoucherId, VoucherStatus};
