//! Null-coalescing of collector rows into canonical records.

use roas_core::{AttributionLink, DailySpendRecord, RawAttributionLink, RawDailySpend};

/// Map a possibly-missing counter to a number. `None`, NaN and infinities
/// become `0`; negative values are kept as-is.
pub fn coalesce(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

fn override_value(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn name_or_id(name: &Option<String>, id: &str) -> String {
    match name {
        Some(name) if !name.trim().is_empty() => name.clone(),
        _ => id.to_string(),
    }
}

pub fn normalize_record(raw: &RawDailySpend) -> DailySpendRecord {
    DailySpendRecord {
        channel_id: raw.channel_id.clone(),
        channel_type: raw.channel_type.unwrap_or_default(),
        campaign_id: raw.campaign_id.clone(),
        campaign_name: name_or_id(&raw.campaign_name, &raw.campaign_id),
        date: raw.date,
        spend: coalesce(raw.spend),
        impressions: coalesce(raw.impressions),
        clicks: coalesce(raw.clicks),
        conversions: coalesce(raw.conversions),
        conversion_value: coalesce(raw.conversion_value),
    }
}

pub fn normalize_records(raw: &[RawDailySpend]) -> Vec<DailySpendRecord> {
    raw.iter().map(normalize_record).collect()
}

pub fn normalize_link(raw: &RawAttributionLink) -> AttributionLink {
    AttributionLink {
        id: raw.id.clone(),
        name: name_or_id(&raw.name, &raw.id),
        clicks: coalesce(raw.clicks),
        conversions: coalesce(raw.conversions),
        revenue: coalesce(raw.revenue),
        ad_spend: coalesce(raw.ad_spend),
        green_threshold: override_value(raw.green_threshold),
        yellow_threshold: override_value(raw.yellow_threshold),
    }
}

pub fn normalize_links(raw: &[RawAttributionLink]) -> Vec<AttributionLink> {
    raw.iter().map(normalize_link).collect()
}
