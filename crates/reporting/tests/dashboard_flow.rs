//! End-to-end flow from collector JSON to a dashboard report.

use roas_core::{AppConfig, SignalStatus};
use roas_reporting::normalizer::{normalize_links, normalize_records};
use roas_reporting::{
    aggregate_campaigns, classify, summarize_portfolio, ReportBuilder, ReportInput,
};

const INPUT: &str = r#"{
    "channels": [
        {"id": "c1", "channelType": "facebook", "name": "Main Meta account"},
        {"id": "c2", "channelType": "naver_search_ad"}
    ],
    "records": [
        {"channelId": "c1", "campaignId": "camp1", "campaignName": "Spring sale",
         "date": "2024-03-01", "spend": 1000, "clicks": 10, "impressions": 500,
         "conversions": 1, "conversionValue": 2000},
        {"channelId": "c1", "campaignId": "camp1", "campaignName": "Renamed later",
         "date": "2024-03-02", "spend": 500, "clicks": 5, "impressions": 300,
         "conversions": 0, "conversionValue": 0},
        {"channelId": "c2", "campaignId": "camp1", "date": "2024-03-02",
         "spend": null, "impressions": 40}
    ],
    "links": [
        {"id": "l1", "name": "Newsletter", "clicks": 12, "adSpend": 500, "revenue": 1000,
         "greenThreshold": 150}
    ]
}"#;

fn input() -> ReportInput {
    serde_json::from_str(INPUT).unwrap()
}

#[test]
fn test_engine_scenarios_from_json() {
    let input = input();
    let records = normalize_records(&input.records);
    let aggregates = aggregate_campaigns(&records, &input.channels);
    assert_eq!(aggregates.len(), 2);

    let camp1 = &aggregates[0];
    assert_eq!(camp1.channel_id, "c1");
    assert_eq!(camp1.campaign_name, "Spring sale");
    assert_eq!(camp1.channel_label, "Main Meta account");
    assert!((camp1.ctr - 1.875).abs() < 1e-12);
    assert_eq!(camp1.cpc, 100.0);
    assert_eq!(camp1.roas, 133.0);
    assert_eq!(camp1.status, SignalStatus::Critical);

    let naver = &aggregates[1];
    assert_eq!(naver.campaign_name, "camp1");
    assert_eq!(naver.channel_label, "Naver Search Ads");
    assert_eq!(naver.totals.spend, 0.0);
    assert_eq!(naver.roas, 0.0);
    assert_eq!(naver.ctr, 0.0);

    let links = normalize_links(&input.links);
    let portfolio = summarize_portfolio(&aggregates, &links);
    assert!((portfolio.total_spend - 2_000.0).abs() < f64::EPSILON);
    assert!((portfolio.total_revenue - 3_000.0).abs() < f64::EPSILON);
    assert_eq!(portfolio.overall_roas, 150.0);
    assert_eq!(portfolio.overall_status, SignalStatus::Warning);
    assert_eq!(
        classify(portfolio.overall_roas, 300.0, 150.0),
        portfolio.overall_status
    );
}

#[test]
fn test_report_matches_engine_output() {
    let builder = ReportBuilder::from_config(&AppConfig::default()).unwrap();
    let report = builder.build(&input(), None);

    assert_eq!(report.campaigns.len(), 2);
    // sorted by spend, highest first
    assert_eq!(report.campaigns[0].campaign_id, "camp1");
    assert_eq!(report.campaigns[0].channel_id, "c1");
    assert_eq!(report.portfolio.overall_roas, 150.0);

    // link override (green 150) makes the link Good on its own
    assert_eq!(report.links[0].roas, 200.0);
    assert_eq!(report.links[0].status, SignalStatus::Good);
    assert!(report.links[0].custom_threshold);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["portfolio"]["overallStatus"], "warning");
    assert_eq!(json["campaigns"][0]["channelType"], "meta");
}

#[test]
fn test_reports_are_structurally_stable() {
    let builder = ReportBuilder::default();
    let first = builder.build(&input(), None);
    let second = builder.build(&input(), None);
    assert_eq!(first.campaigns, second.campaigns);
    assert_eq!(first.links, second.links);
    assert_eq!(first.portfolio, second.portfolio);
    assert_ne!(first.report_id, second.report_id);
}
