//! Attribution links: manually tracked URLs whose clicks, conversions and
//! revenue are recorded outside the ad platforms.
//!
//! Each link is scored like a single-row campaign and may carry its own
//! threshold override.

use roas_core::{AttributionLink, SignalStatus, SignalThreshold};
use serde::{Deserialize, Serialize};

use crate::metrics::{cpc, roas};
use crate::signal::classify_with;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPerformance {
    pub link_id: String,
    pub name: String,
    pub clicks: f64,
    pub conversions: f64,
    pub revenue: f64,
    pub ad_spend: f64,
    pub cpc: f64,
    pub roas: f64,
    pub status: SignalStatus,
    /// Thresholds the status was computed with.
    pub threshold: SignalThreshold,
    pub custom_threshold: bool,
}

/// Score one link against its override, falling back to `global` per component.
pub fn evaluate_link(link: &AttributionLink, global: &SignalThreshold) -> LinkPerformance {
    let threshold = link.effective_threshold(global);
    let link_roas = roas(link.revenue, link.ad_spend);

    LinkPerformance {
        link_id: link.id.clone(),
        name: link.name.clone(),
        clicks: link.clicks,
        conversions: link.conversions,
        revenue: link.revenue,
        ad_spend: link.ad_spend,
        cpc: cpc(link.ad_spend, link.clicks),
        roas: link_roas,
        status: classify_with(link_roas, &threshold),
        threshold,
        custom_threshold: link.has_threshold_override(),
    }
}

pub fn evaluate_links(
    links: &[AttributionLink],
    global: &SignalThreshold,
) -> Vec<LinkPerformance> {
    links.iter().map(|link| evaluate_link(link, global)).collect()
}
