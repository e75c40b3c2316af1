use std::str::FromStr;

use shared::PricingConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub timezone: String,
    pub log_level: log::LevelFilter,
    pub pricing: PricingConfig,
    pub reserve_delay_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: "Europe/Belgrade".to_string(),
            log_level: log::LevelFilter::Info,
            pricing: PricingConfig::default(),
            reserve_delay_ms: 1500,
        }
    }
}

impl Config {
    /// Configuration baked in at build time through `NEXORA_*` variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                "NEXORA_TIMEZONE" => option_env!("NEXORA_TIMEZONE"),
                "NEXORA_LOG_LEVEL" => option_env!("NEXORA_LOG_LEVEL"),
                "NEXORA_BASE_GUESTS" => option_env!("NEXORA_BASE_GUESTS"),
                "NEXORA_EXTRA_GUEST_FEE" => option_env!("NEXORA_EXTRA_GUEST_FEE"),
                "NEXORA_CLEANING_FEE_PERCENT" => option_env!("NEXORA_CLEANING_FEE_PERCENT"),
                "NEXORA_SERVICE_FEE_PERCENT" => option_env!("NEXORA_SERVICE_FEE_PERCENT"),
                "NEXORA_RESERVE_DELAY_MS" => option_env!("NEXORA_RESERVE_DELAY_MS"),
                _ => None,
            }
            .map(str::to_string)
        })
    }

    /// Builds a configuration from `lookup`, keeping the default for every
    /// missing or unparseable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            timezone: lookup("NEXORA_TIMEZONE")
                .filter(|tz| tz.parse::<chrono_tz::Tz>().is_ok())
                .unwrap_or(defaults.timezone),
            log_level: parse_or(&lookup, "NEXORA_LOG_LEVEL", defaults.log_level),
            pricing: PricingConfig {
                base_guests: parse_or(&lookup, "NEXORA_BASE_GUESTS", defaults.pricing.base_guests),
                extra_guest_fee: parse_or(
                    &lookup,
                    "NEXORA_EXTRA_GUEST_FEE",
                    defaults.pricing.extra_guest_fee,
                ),
                cleaning_fee_percent: parse_or(
                    &lookup,
                    "NEXORA_CLEANING_FEE_PERCENT",
                    defaults.pricing.cleaning_fee_percent,
                ),
                service_fee_percent: parse_or(
                    &lookup,
                    "NEXORA_SERVICE_FEE_PERCENT",
                    defaults.pricing.service_fee_percent,
                ),
            },
            reserve_delay_ms: parse_or(&lookup, "NEXORA_RESERVE_DELAY_MS", defaults.reserve_delay_ms),
        }
    }
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("{} has invalid value {:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
