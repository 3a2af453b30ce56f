//! Campaign performance reporting: normalization, per-campaign aggregation,
//! ROAS classification, attribution links, and portfolio summaries.

pub mod aggregator;
pub mod attribution;
pub mod creative;
pub mod dashboard;
pub mod metrics;
pub mod normalizer;
pub mod portfolio;
pub mod report_builder;
pub mod signal;

pub use aggregator::{aggregate_campaigns, aggregate_campaigns_with, CampaignAggregate};
pub use attribution::LinkPerformance;
pub use creative::{CreativeCache, CreativeLookup};
pub use portfolio::{summarize_portfolio, summarize_portfolio_with, PortfolioTotal};
pub use report_builder::{DashboardReport, ReportBuilder, ReportInput};
pub use signal::classify;
