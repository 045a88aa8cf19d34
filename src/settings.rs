use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_VOUCHER_CREATION_LIMIT: usize = 500;

const CONFIG_FILE: &str = "vouchers";
const ENV_PREFIX: &str = "VOUCHERS";

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    /// The most vouchers a single issuance request may create.
    pub voucher_creation_limit: usize,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            voucher_creation_limit: DEFAULT_VOUCHER_CREATION_LIMIT,
        }
    }
}

impl Settings {
    /// Loads settings from the defaults, an optional `vouchers.toml` in the
    /// working directory, and `VOUCHERS_*` environment variables, later
    /// sources overriding earlier ones.
    #[tracing::instrument]
    pub fn load() -> Result<Settings, Error> {
        Settings::load_from(Environment::with_prefix(ENV_PREFIX))
    }

    fn load_from(environment: Environment) -> Result<Settings, Error> {
        let settings: Settings = Config::builder()
            .set_default(
                "voucher_creation_limit",
                DEFAULT_VOUCHER_CREATION_LIMIT as u64,
            )?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        tracing::debug!(
            voucher_creation_limit = settings.voucher_creation_limit,
            "loaded settings"
        );

        Ok(settings)
    }
}
