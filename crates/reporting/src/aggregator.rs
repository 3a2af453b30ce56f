//! Campaign aggregation: folds daily records into one aggregate per
//! `(channel_id, campaign_id)`.
//!
//! Aggregation is split in two steps so partial results can be reduced
//! independently: [`fold_records`] builds a [`CampaignTotals`] map, two maps
//! combine with [`CampaignTotals::merge`], and [`CampaignTotals::finish`]
//! derives rates and statuses.

use std::collections::BTreeMap;

use roas_core::{
    ChannelAccount, ChannelType, DailySpendRecord, SignalStatus, SignalThreshold, SortKey,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::creative::CreativeType;
use crate::metrics::{DerivedMetrics, MetricTotals};
use crate::signal::classify_with;

/// `(channel_id, campaign_id)`; campaign ids are only unique within a channel.
pub type CampaignKey = (String, String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignAggregate {
    pub channel_id: String,
    pub channel_type: ChannelType,
    /// Account name, or the platform label when the account is unnamed or unknown.
    pub channel_label: String,
    pub campaign_id: String,
    pub campaign_name: String,
    #[serde(flatten)]
    pub totals: MetricTotals,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub status: SignalStatus,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub creative_type: Option<CreativeType>,
}

impl CampaignAggregate {
    pub fn key(&self) -> CampaignKey {
        (self.channel_id.clone(), self.campaign_id.clone())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct CampaignAccumulator {
    channel_type: ChannelType,
    campaign_name: String,
    totals: MetricTotals,
}

impl CampaignAccumulator {
    fn from_record(record: &DailySpendRecord) -> Self {
        Self {
            channel_type: record.channel_type,
            campaign_name: record.campaign_name.clone(),
            totals: MetricTotals::from_record(record),
        }
    }

    /// `self` holds earlier records than `later`: its name wins, and its
    /// channel type wins unless it is `Unknown`.
    fn merge(self, later: Self) -> Self {
        let channel_type = if self.channel_type == ChannelType::Unknown {
            later.channel_type
        } else {
            self.channel_type
        };
        Self {
            channel_type,
            campaign_name: self.campaign_name,
            totals: self.totals + later.totals,
        }
    }
}

/// Per-campaign running sums, ordered by key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CampaignTotals {
    campaigns: BTreeMap<CampaignKey, CampaignAccumulator>,
}

impl CampaignTotals {
    fn absorb(mut self, record: &DailySpendRecord) -> Self {
        let key = (record.channel_id.clone(), record.campaign_id.clone());
        let incoming = CampaignAccumulator::from_record(record);
        let merged = match self.campaigns.remove(&key) {
            Some(existing) => existing.merge(incoming),
            None => incoming,
        };
        self.campaigns.insert(key, merged);
        self
    }

    /// Combine with the totals of records that come after this batch.
    pub fn merge(mut self, later: Self) -> Self {
        for (key, acc) in later.campaigns {
            let merged = match self.campaigns.remove(&key) {
                Some(existing) => existing.merge(acc),
                None => acc,
            };
            self.campaigns.insert(key, merged);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.campaigns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.campaigns.is_empty()
    }

    pub fn totals_for(&self, channel_id: &str, campaign_id: &str) -> Option<MetricTotals> {
        self.campaigns
            .get(&(channel_id.to_string(), campaign_id.to_string()))
            .map(|acc| acc.totals)
    }

    /// Derive rates and classify every campaign against `threshold`.
    pub fn finish(
        self,
        channels: &[ChannelAccount],
        threshold: &SignalThreshold,
    ) -> Vec<CampaignAggregate> {
        self.campaigns
            .into_iter()
            .map(|((channel_id, campaign_id), acc)| {
                let account = channels.iter().find(|c| c.id == channel_id);
                // An account without a platform tag must not hide the record's tag
                let channel_type = match account {
                    Some(a) if a.channel_type != ChannelType::Unknown => a.channel_type,
                    _ => acc.channel_type,
                };
                let channel_label = account.map_or_else(
                    || channel_type.display_name().to_string(),
                    |a| a.label(channel_type),
                );
                let DerivedMetrics { ctr, cpc, roas } = acc.totals.derived();

                CampaignAggregate {
                    channel_id,
                    channel_type,
                    channel_label,
                    campaign_id,
                    campaign_name: acc.campaign_name,
                    totals: acc.totals,
                    ctr,
                    cpc,
                    roas,
                    status: classify_with(roas, threshold),
                    thumbnail_url: None,
                    creative_type: None,
                }
            })
            .collect()
    }
}

/// Fold normalized records into per-campaign sums.
pub fn fold_records(records: &[DailySpendRecord]) -> CampaignTotals {
    records
        .iter()
        .fold(CampaignTotals::default(), CampaignTotals::absorb)
}

/// Aggregate records per campaign, classified with the default thresholds.
pub fn aggregate_campaigns(
    records: &[DailySpendRecord],
    channels: &[ChannelAccount],
) -> Vec<CampaignAggregate> {
    aggregate_campaigns_with(records, channels, &SignalThreshold::default())
}

/// Aggregate records per campaign, classified with `threshold`.
pub fn aggregate_campaigns_with(
    records: &[DailySpendRecord],
    channels: &[ChannelAccount],
    threshold: &SignalThreshold,
) -> Vec<CampaignAggregate> {
    let totals = fold_records(records);
    debug!(
        records = records.len(),
        campaigns = totals.len(),
        "Aggregated daily spend records"
    );
    totals.finish(channels, threshold)
}

/// Order aggregates by `key`, highest first. Ties fall back to the campaign key
/// so the order is stable across calls.
pub fn sort_aggregates(aggregates: &mut [CampaignAggregate], key: SortKey) {
    let value = |a: &CampaignAggregate| match key {
        SortKey::Spend => a.totals.spend,
        SortKey::Roas => a.roas,
        SortKey::Revenue => a.totals.conversion_value,
        SortKey::Clicks => a.totals.clicks,
    };
    aggregates.sort_by(|a, b| {
        value(b)
            .total_cmp(&value(a))
            .then_with(|| a.channel_id.cmp(&b.channel_id))
            .then_with(|| a.campaign_id.cmp(&b.campaign_id))
    });
}
