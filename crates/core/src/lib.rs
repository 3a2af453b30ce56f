pub mod config;
pub mod error;
pub mod threshold;
pub mod types;

pub use config::{AppConfig, SortKey};
pub use error::{RoasError, RoasResult};
pub use threshold::{SignalStatus, SignalThreshold};
pub use types::{
    AttributionLink, ChannelAccount, ChannelType, DailySpendRecord, DateRange,
    RawAttributionLink, RawDailySpend,
};
