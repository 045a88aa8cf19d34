use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING-KEBAB-CASE")]
pub enum Violation {
    TitleLengthOutOfRange {
        length: usize,
        minimum: usize,
        maximum: usize,
    },
    EndDateNotInFuture {
        end_date: NaiveDate,
        today: NaiveDate,
    },
}
