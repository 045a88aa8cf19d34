use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::typedid::{TypedId, TypedIdMarker};
use crate::violations::Violation;

pub mod db;
pub mod manager;

pub type CampaignId = TypedId<Campaign>;

pub const TITLE_MIN_LENGTH: usize = 5;
pub const TITLE_MAX_LENGTH: usize = 50;

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Campaign {
    /// A campaign without an end date never ends.
    pub fn has_ended(&self, today: NaiveDate) -> bool {
        match self.end_date {
            Some(end_date) => today > end_date,
            None => false,
        }
    }

    pub fn has_started(&self, today: NaiveDate) -> bool {
        today >= self.start_date
    }
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CPN"
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewCampaign {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

impl NewCampaign {
    /// Checks the rules a campaign must meet before it is handed to
    /// `manager::create_campaign`, which itself only enforces title
    /// uniqueness.
    pub fn validate(&self, today: NaiveDate) -> Result<(), Error> {
        let mut violations = vec![];

        let length = self.title.chars().count();
        if length < TITLE_MIN_LENGTH || length > TITLE_MAX_LENGTH {
            violations.push(Violation::TitleLengthOutOfRange {
                length,
                minimum: TITLE_MIN_LENGTH,
                maximum: TITLE_MAX_LENGTH,
            });
        }

        if let Some(end_date) = self.end_date {
            if end_date <= today {
                violations.push(Violation::EndDateNotInFuture { end_date, today });
            }
        }

        if !violations.is_empty() {
            return Err(Error::CampaignViolatesRules { violations });
        }

        Ok(())
    }
}
