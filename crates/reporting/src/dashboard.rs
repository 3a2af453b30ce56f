//! Per-channel breakdown of campaign aggregates.

use std::collections::BTreeMap;

use roas_core::{ChannelType, SignalStatus, SignalThreshold};
use serde::{Deserialize, Serialize};

use crate::aggregator::CampaignAggregate;
use crate::metrics::{DerivedMetrics, MetricTotals};
use crate::signal::classify_with;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelBreakdown {
    pub channel_id: String,
    pub channel_type: ChannelType,
    pub channel_label: String,
    pub campaign_count: usize,
    #[serde(flatten)]
    pub totals: MetricTotals,
    pub ctr: f64,
    pub cpc: f64,
    pub roas: f64,
    pub status: SignalStatus,
}

/// Sum campaign aggregates per channel account, ordered by channel id.
pub fn channel_breakdown(
    aggregates: &[CampaignAggregate],
    threshold: &SignalThreshold,
) -> Vec<ChannelBreakdown> {
    let mut channels: BTreeMap<&str, (&CampaignAggregate, usize, MetricTotals)> = BTreeMap::new();
    for aggregate in aggregates {
        let entry = channels
            .entry(aggregate.channel_id.as_str())
            .or_insert((aggregate, 0, MetricTotals::default()));
        entry.1 += 1;
        entry.2 += aggregate.totals;
    }

    channels
        .into_iter()
        .map(|(channel_id, (first, campaign_count, totals))| {
            let DerivedMetrics { ctr, cpc, roas } = totals.derived();
            ChannelBreakdown {
                channel_id: channel_id.to_string(),
                channel_type: first.channel_type,
                channel_label: first.channel_label.clone(),
                campaign_count,
                totals,
                ctr,
                cpc,
                roas,
                status: classify_with(roas, threshold),
            }
        })
        .collect()
}
