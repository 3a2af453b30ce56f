//! Portfolio totals across platform campaigns and attribution links.

use roas_core::{AttributionLink, SignalStatus, SignalThreshold};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregator::CampaignAggregate;
use crate::metrics::roas;
use crate::signal::classify_with;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioTotal {
    pub total_spend: f64,
    /// Platform campaigns only; links carry no impressions.
    pub total_impressions: f64,
    pub total_clicks: f64,
    pub total_conversions: f64,
    pub total_revenue: f64,
    pub overall_roas: f64,
    pub overall_status: SignalStatus,
    pub campaign_count: usize,
    pub link_count: usize,
}

/// Campaign aggregates and links reduced to one additive shape.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Contribution {
    spend: f64,
    impressions: f64,
    clicks: f64,
    conversions: f64,
    revenue: f64,
}

impl Contribution {
    fn add(self, other: Self) -> Self {
        Self {
            spend: self.spend + other.spend,
            impressions: self.impressions + other.impressions,
            clicks: self.clicks + other.clicks,
            conversions: self.conversions + other.conversions,
            revenue: self.revenue + other.revenue,
        }
    }
}

impl From<&CampaignAggregate> for Contribution {
    fn from(a: &CampaignAggregate) -> Self {
        Self {
            spend: a.totals.spend,
            impressions: a.totals.impressions,
            clicks: a.totals.clicks,
            conversions: a.totals.conversions,
            revenue: a.totals.conversion_value,
        }
    }
}

impl From<&AttributionLink> for Contribution {
    fn from(link: &AttributionLink) -> Self {
        Self {
            spend: link.ad_spend,
            impressions: 0.0,
            clicks: link.clicks,
            conversions: link.conversions,
            revenue: link.revenue,
        }
    }
}

/// Summarize the portfolio, classified with the default 300/150 thresholds.
///
/// Per-link threshold overrides never apply at this level.
pub fn summarize_portfolio(
    campaigns: &[CampaignAggregate],
    links: &[AttributionLink],
) -> PortfolioTotal {
    summarize_portfolio_with(campaigns, links, &SignalThreshold::default())
}

/// Summarize the portfolio, classified with the global `threshold`.
pub fn summarize_portfolio_with(
    campaigns: &[CampaignAggregate],
    links: &[AttributionLink],
    threshold: &SignalThreshold,
) -> PortfolioTotal {
    let total = campaigns
        .iter()
        .map(Contribution::from)
        .chain(links.iter().map(Contribution::from))
        .fold(Contribution::default(), Contribution::add);

    let overall_roas = roas(total.revenue, total.spend);
    debug!(
        campaigns = campaigns.len(),
        links = links.len(),
        overall_roas = overall_roas,
        "Portfolio summarized"
    );

    PortfolioTotal {
        total_spend: total.spend,
        total_impressions: total.impressions,
        total_clicks: total.clicks,
        total_conversions: total.conversions,
        total_revenue: total.revenue,
        overall_roas,
        overall_status: classify_with(overall_roas, threshold),
        campaign_count: campaigns.len(),
        link_count: links.len(),
    }
}
