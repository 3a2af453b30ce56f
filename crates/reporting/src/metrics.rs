//! Summed campaign counters and the rates derived from them.

use std::iter::Sum;
use std::ops::{Add, AddAssign};

use roas_core::DailySpendRecord;
use serde::{Deserialize, Serialize};

/// Additive base counters of one or more daily records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricTotals {
    pub spend: f64,
    pub impressions: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub conversion_value: f64,
}

impl MetricTotals {
    pub fn from_record(record: &DailySpendRecord) -> Self {
        Self {
            spend: record.spend,
            impressions: record.impressions,
            clicks: record.clicks,
            conversions: record.conversions,
            conversion_value: record.conversion_value,
        }
    }

    pub fn derived(&self) -> DerivedMetrics {
        DerivedMetrics::compute(self)
    }

    /// True when the counters carry neither spend nor reach.
    pub fn is_idle(&self) -> bool {
        self.spend == 0.0 && self.impressions == 0.0
    }
}

impl Add for MetricTotals {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            spend: self.spend + other.spend,
            impressions: self.impressions + other.impressions,
            clicks: self.clicks + other.clicks,
            conversions: self.conversions + other.conversions,
            conversion_value: self.conversion_value + other.conversion_value,
        }
    }
}

impl AddAssign for MetricTotals {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sum for MetricTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, t| acc + t)
    }
}

/// Rates computed from [`MetricTotals`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DerivedMetrics {
    /// Click-through rate in percent, unrounded.
    pub ctr: f64,
    /// Cost per click in whole currency units.
    pub cpc: f64,
    /// Return on ad spend in whole percent.
    pub roas: f64,
}

impl DerivedMetrics {
    pub fn compute(totals: &MetricTotals) -> Self {
        Self {
            ctr: ctr(totals.clicks, totals.impressions),
            cpc: cpc(totals.spend, totals.clicks),
            roas: roas(totals.conversion_value, totals.spend),
        }
    }
}

/// `clicks / impressions * 100`, or `0` without impressions.
pub fn ctr(clicks: f64, impressions: f64) -> f64 {
    if impressions > 0.0 {
        clicks / impressions * 100.0
    } else {
        0.0
    }
}

/// `spend / clicks` rounded half away from zero, or `0` without clicks.
pub fn cpc(spend: f64, clicks: f64) -> f64 {
    if clicks > 0.0 {
        (spend / clicks).round()
    } else {
        0.0
    }
}

/// `revenue / spend * 100` rounded half away from zero, or `0` without spend.
///
/// A campaign that spent but earned nothing reads as `0`, the floor.
pub fn roas(revenue: f64, spend: f64) -> f64 {
    if spend > 0.0 {
        (revenue / spend * 100.0).round()
    } else {
        0.0
    }
}
