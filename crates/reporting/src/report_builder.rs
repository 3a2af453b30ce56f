//! Dashboard report assembly: runs normalization, aggregation, link scoring,
//! channel breakdown and portfolio summary over one input snapshot.

use chrono::{DateTime, Utc};
use roas_core::config::ReportConfig;
use roas_core::{
    AppConfig, ChannelAccount, DateRange, RawAttributionLink, RawDailySpend, RoasResult,
    SignalThreshold,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::aggregator::{aggregate_campaigns_with, sort_aggregates, CampaignAggregate};
use crate::attribution::{evaluate_links, LinkPerformance};
use crate::creative::{enrich_creatives, CreativeLookup};
use crate::dashboard::{channel_breakdown, ChannelBreakdown};
use crate::normalizer::{normalize_links, normalize_records};
use crate::portfolio::{summarize_portfolio_with, PortfolioTotal};

/// Everything the query layer hands over for one dashboard view.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    #[serde(default)]
    pub records: Vec<RawDailySpend>,
    #[serde(default)]
    pub channels: Vec<ChannelAccount>,
    #[serde(default)]
    pub links: Vec<RawAttributionLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub range: Option<DateRange>,
    pub currency: String,
    pub threshold: SignalThreshold,
    pub campaigns: Vec<CampaignAggregate>,
    pub links: Vec<LinkPerformance>,
    pub channels: Vec<ChannelBreakdown>,
    pub portfolio: PortfolioTotal,
}

pub struct ReportBuilder {
    threshold: SignalThreshold,
    config: ReportConfig,
}

impl ReportBuilder {
    pub fn new(threshold: SignalThreshold, config: ReportConfig) -> Self {
        Self { threshold, config }
    }

    /// Builder using the configured global thresholds; fails if they are invalid.
    pub fn from_config(config: &AppConfig) -> RoasResult<Self> {
        Ok(Self::new(config.signal_threshold()?, config.report.clone()))
    }

    pub fn threshold(&self) -> &SignalThreshold {
        &self.threshold
    }

    pub fn build(&self, input: &ReportInput, range: Option<DateRange>) -> DashboardReport {
        self.assemble(input, range, None)
    }

    pub fn build_with_creatives(
        &self,
        input: &ReportInput,
        range: Option<DateRange>,
        creatives: &dyn CreativeLookup,
    ) -> DashboardReport {
        self.assemble(input, range, Some(creatives))
    }

    fn assemble(
        &self,
        input: &ReportInput,
        range: Option<DateRange>,
        creatives: Option<&dyn CreativeLookup>,
    ) -> DashboardReport {
        let in_range = match range {
            Some(range) => range.filter_by_range(&input.records),
            None => input.records.clone(),
        };
        let records = normalize_records(&in_range);
        let links = normalize_links(&input.links);

        let aggregates = aggregate_campaigns_with(&records, &input.channels, &self.threshold);
        let portfolio = summarize_portfolio_with(&aggregates, &links, &self.threshold);
        let channels = channel_breakdown(&aggregates, &self.threshold);

        let mut campaigns = match creatives {
            Some(lookup) => enrich_creatives(aggregates, lookup),
            None => aggregates,
        };
        if !self.config.include_idle_campaigns {
            campaigns.retain(|c| !c.totals.is_idle());
        }
        sort_aggregates(&mut campaigns, self.config.sort_by);

        info!(
            records = records.len(),
            skipped = input.records.len() - in_range.len(),
            campaigns = campaigns.len(),
            links = links.len(),
            overall_roas = portfolio.overall_roas,
            overall_status = portfolio.overall_status.display_name(),
            "Dashboard report built"
        );

        DashboardReport {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            range,
            currency: self.config.currency.clone(),
            threshold: self.threshold,
            campaigns,
            links: evaluate_links(&links, &self.threshold),
            channels,
            portfolio,
        }
    }
}

impl Default for ReportBuilder {
    fn default() -> Self {
        Self::new(SignalThreshold::default(), ReportConfig::default())
    }
}
