use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{RoasError, RoasResult};
use crate::threshold::SignalThreshold;

// ─── Channels ───────────────────────────────────────────────────────────────

/// Ad platform a channel account belongs to.
///
/// Only used for display grouping and creative-enrichment eligibility, never in
/// arithmetic. Unrecognised platform tags map to `Unknown`.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ChannelType {
    Meta,
    Google,
    Naver,
    Kakao,
    Coupang,
    #[serde(rename = "tiktok")]
    TikTok,
    #[default]
    Unknown,
}

impl ChannelType {
    /// Resolve a platform tag as sent by the channel connectors.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "meta" | "facebook" | "instagram" | "meta_ads" => ChannelType::Meta,
            "google" | "google_ads" | "youtube" => ChannelType::Google,
            "naver" | "naver_search_ad" | "naver_gfa" => ChannelType::Naver,
            "kakao" | "kakao_moment" => ChannelType::Kakao,
            "coupang" | "coupang_ads" => ChannelType::Coupang,
            "tiktok" | "tik_tok" | "tiktok_ads" => ChannelType::TikTok,
            _ => ChannelType::Unknown,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ChannelType::Meta => "Meta Ads",
            ChannelType::Google => "Google Ads",
            ChannelType::Naver => "Naver Search Ads",
            ChannelType::Kakao => "Kakao Moment",
            ChannelType::Coupang => "Coupang Ads",
            ChannelType::TikTok => "TikTok Ads",
            ChannelType::Unknown => "Other",
        }
    }

    /// Whether the platform exposes creative thumbnails we can attach to a campaign.
    pub fn supports_creative_preview(&self) -> bool {
        matches!(
            self,
            ChannelType::Meta | ChannelType::Google | ChannelType::TikTok
        )
    }
}

impl From<String> for ChannelType {
    fn from(tag: String) -> Self {
        ChannelType::from_tag(&tag)
    }
}

/// A connected ad account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelAccount {
    pub id: String,
    #[serde(default)]
    pub channel_type: ChannelType,
    /// Seller-given account name; falls back to the platform label when absent.
    #[serde(default)]
    pub name: Option<String>,
}

impl ChannelAccount {
    /// Account name, or the label of `platform` when the account is unnamed.
    /// `platform` is the resolved channel type, which may come from the records
    /// when the account carries no tag.
    pub fn label(&self, platform: ChannelType) -> String {
        match &self.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => platform.display_name().to_string(),
        }
    }
}

// ─── Daily Spend ────────────────────────────────────────────────────────────

/// One channel/campaign/day row as delivered by the collectors. Any numeric
/// field may be missing or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDailySpend {
    pub channel_id: String,
    #[serde(default)]
    pub channel_type: Option<ChannelType>,
    pub campaign_id: String,
    #[serde(default)]
    pub campaign_name: Option<String>,
    pub date: NaiveDate,
    #[serde(default)]
    pub spend: Option<f64>,
    #[serde(default)]
    pub impressions: Option<f64>,
    #[serde(default)]
    pub clicks: Option<f64>,
    #[serde(default)]
    pub conversions: Option<f64>,
    #[serde(default)]
    pub conversion_value: Option<f64>,
}

/// Canonical daily record: every numeric field is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySpendRecord {
    pub channel_id: String,
    pub channel_type: ChannelType,
    pub campaign_id: String,
    pub campaign_name: String,
    pub date: NaiveDate,
    pub spend: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub conversion_value: f64,
}

// ─── Attribution Links ──────────────────────────────────────────────────────

/// A manually created tracking link as stored by the link service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAttributionLink {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub clicks: Option<f64>,
    #[serde(default)]
    pub conversions: Option<f64>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub ad_spend: Option<f64>,
    #[serde(default)]
    pub green_threshold: Option<f64>,
    #[serde(default)]
    pub yellow_threshold: Option<f64>,
}

/// Normalized attribution link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributionLink {
    pub id: String,
    pub name: String,
    pub clicks: f64,
    pub conversions: f64,
    pub revenue: f64,
    pub ad_spend: f64,
    /// Per-link classification override. Components the link did not set are
    /// filled from the global pair when the link is classified.
    #[serde(default)]
    pub green_threshold: Option<f64>,
    #[serde(default)]
    pub yellow_threshold: Option<f64>,
}

impl AttributionLink {
    pub fn has_threshold_override(&self) -> bool {
        self.green_threshold.is_some() || self.yellow_threshold.is_some()
    }

    /// Thresholds this link is classified with, given the global pair.
    pub fn effective_threshold(&self, global: &SignalThreshold) -> SignalThreshold {
        SignalThreshold::with_overrides(global, self.green_threshold, self.yellow_threshold)
    }
}

// ─── Date Range ─────────────────────────────────────────────────────────────

/// Inclusive calendar range used to pre-filter daily records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> RoasResult<Self> {
        if start > end {
            return Err(RoasError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Records dated inside the range, in input order.
    pub fn filter_by_range(&self, records: &[RawDailySpend]) -> Vec<RawDailySpend> {
        records
            .iter()
            .filter(|r| self.contains(r.date))
            .cloned()
            .collect()
    }
}
