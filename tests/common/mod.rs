use chrono::{Duration, NaiveDate, Utc};
use vouchers::campaign::manager::create_campaign;
use vouchers::{Campaign, Database, NewCampaign};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

pub fn days_from_today(days: i64) -> NaiveDate {
    today() + Duration::days(days)
}

pub async fn campaign(
    db: &dyn Database,
    title: &str,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
) -> Campaign {
    create_campaign(
        db,
        NewCampaign {
            title: title.to_string(),
            start_date,
            end_date,
        },
    )
    .await
    .unwrap()
}
