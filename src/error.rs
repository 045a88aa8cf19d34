use std::fmt::{Debug, Display};

use config::ConfigError;
use derivative::Derivative;
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::campaign::CampaignId;
use crate::violations::Violation;
use crate::voucher::VoucherId;

#[derive(Debug, Serialize, Derivative)]
#[derivative(PartialEq, Eq)]
#[serde(untagged)]
pub enum Error {
    // rejected
    CampaignViolatesRules {
        violations: Vec<Violation>,
    },
    IssuanceLimitExceeded {
        requested: usize,
        limit: usize,
    },
    VoucherExpired,
    VoucherAlreadyRedeemed,
    CampaignExpired {
        campaign_id: CampaignId,
    },

    // missing
    CampaignNotFound {
        campaign_id: CampaignId,
    },
    VoucherNotFound {
        voucher_id: VoucherId,
    },
    VoucherNotValid,
    NoValidVouchersAvailable {
        campaign_id: CampaignId,
    },

    // conflicting
    CampaignAlreadyExists {
        title: String,
    },
    VoucherCodeAlreadyExists {
        code: Uuid,
    },
    ConcurrentModificationDetected,

    // internal
    ExistentialState(String),
    #[serde(serialize_with = "display")]
    InvalidSettings(#[derivative(PartialEq = "ignore")] ConfigError),
}

impl Error {
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::CampaignViolatesRules { .. } => "E4001000",
            Error::IssuanceLimitExceeded { .. } => "E4001001",
            Error::VoucherExpired => "E4001002",
            Error::VoucherAlreadyRedeemed => "E4001003",
            Error::CampaignExpired { .. } => "E4001004",
            Error::CampaignNotFound { .. } => "E4041000",
            Error::VoucherNotFound { .. } => "E4041001",
            Error::VoucherNotValid => "E4041002",
            Error::NoValidVouchersAvailable { .. } => "E4041003",
            Error::CampaignAlreadyExists { .. } => "E4091000",
            Error::VoucherCodeAlreadyExists { .. } => "E4091001",
            Error::ConcurrentModificationDetected => "E4091002",
            Error::ExistentialState(_) => "E5001000",
            Error::InvalidSettings(_) => "E5001001",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Error::CampaignViolatesRules { .. } => "The requested campaign violates the rules",
            Error::IssuanceLimitExceeded { .. } => {
                "Limit of possible vouchers created at once exceeded."
            }
            Error::VoucherExpired => "Voucher is expired.",
            Error::VoucherAlreadyRedeemed => "Voucher is already redeemed.",
            Error::CampaignExpired { .. } => "Campaign has already expired.",
            Error::CampaignNotFound { .. } => "The requested campaign was not found",
            Error::VoucherNotFound { .. } => "The requested voucher was not found",
            Error::VoucherNotValid => "Voucher not valid.",
            Error::NoValidVouchersAvailable { .. } => {
                "There are no available vouchers available for this campaign."
            }
            Error::CampaignAlreadyExists { .. } => {
                "Marketing campaign with the requested name already exists"
            }
            Error::VoucherCodeAlreadyExists { .. } => "A voucher with the same code already exists",
            Error::ConcurrentModificationDetected => {
                "The store detected a concurrent modification"
            }
            Error::ExistentialState(_) => "The store returned an invalid state",
            Error::InvalidSettings(_) => "The settings could not be loaded",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Error::IssuanceLimitExceeded { limit, .. } => write!(
                f,
                "{} Should be no more than {}",
                self.error_message(),
                limit
            ),
            Error::CampaignNotFound { campaign_id } => {
                write!(f, "There is no campaign with ID={}", campaign_id)
            }
            Error::VoucherNotFound { voucher_id } => {
                write!(f, "There is no voucher with ID={}", voucher_id)
            }
            Error::CampaignAlreadyExists { title } => {
                write!(f, "Marketing campaign with '{}' name already exists", title)
            }
            Error::VoucherCodeAlreadyExists { code } => {
                write!(f, "{}: {}", self.error_message(), code)
            }
            Error::ExistentialState(details) => write!(f, "{}: {}", self.error_message(), details),
            Error::InvalidSettings(err) => write!(f, "{}: {}", self.error_message(), err),
            _ => f.write_str(self.error_message()),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(error: ConfigError) -> Error {
        Error::InvalidSettings(error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidSettings(err) => Some(err),
            _ => None,
        }
    }
}

fn display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}
