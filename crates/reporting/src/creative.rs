//! Creative enrichment: attaches thumbnails and creative formats to campaign
//! aggregates after aggregation.
//!
//! Fetching creatives is network-bound and lives with the channel connectors.
//! They fill a [`CreativeCache`] in the background; report building only reads
//! from a [`CreativeLookup`] and never waits on a fetch.

use dashmap::DashMap;
use roas_core::RoasResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aggregator::CampaignAggregate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreativeType {
    Image,
    Video,
    Carousel,
    Collection,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeInfo {
    pub thumbnail_url: Option<String>,
    pub creative_type: Option<CreativeType>,
}

/// A creative entry keyed by campaign, as exported by the connectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeEntry {
    pub channel_id: String,
    pub campaign_id: String,
    #[serde(flatten)]
    pub info: CreativeInfo,
}

/// Source of creative metadata for a campaign.
pub trait CreativeLookup {
    /// `Ok(None)` when nothing is known for the campaign.
    fn lookup(&self, aggregate: &CampaignAggregate) -> RoasResult<Option<CreativeInfo>>;
}

/// Concurrent in-memory creative store.
pub struct CreativeCache {
    entries: DashMap<(String, String), CreativeInfo>,
}

impl CreativeCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    pub fn from_entries(entries: impl IntoIterator<Item = CreativeEntry>) -> Self {
        let cache = Self::new();
        for entry in entries {
            cache.insert(&entry.channel_id, &entry.campaign_id, entry.info);
        }
        cache
    }

    /// Parse a JSON array of [`CreativeEntry`].
    pub fn from_json(json: &str) -> RoasResult<Self> {
        let entries: Vec<CreativeEntry> = serde_json::from_str(json)?;
        Ok(Self::from_entries(entries))
    }

    pub fn insert(&self, channel_id: &str, campaign_id: &str, info: CreativeInfo) {
        self.entries
            .insert((channel_id.to_string(), campaign_id.to_string()), info);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CreativeCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CreativeLookup for CreativeCache {
    fn lookup(&self, aggregate: &CampaignAggregate) -> RoasResult<Option<CreativeInfo>> {
        let key = (aggregate.channel_id.clone(), aggregate.campaign_id.clone());
        Ok(self.entries.get(&key).map(|e| e.value().clone()))
    }
}

/// Fill `thumbnail_url` / `creative_type` on every eligible aggregate.
///
/// Only channel types with creative previews are looked up. A failing lookup is
/// logged and the aggregate is returned undecorated.
pub fn enrich_creatives<L>(
    aggregates: Vec<CampaignAggregate>,
    lookup: &L,
) -> Vec<CampaignAggregate>
where
    L: CreativeLookup + ?Sized,
{
    let mut attached = 0usize;
    let enriched: Vec<CampaignAggregate> = aggregates
        .into_iter()
        .map(|mut aggregate| {
            if !aggregate.channel_type.supports_creative_preview() {
                return aggregate;
            }
            match lookup.lookup(&aggregate) {
                Ok(Some(info)) => {
                    aggregate.thumbnail_url = info.thumbnail_url;
                    aggregate.creative_type = info.creative_type;
                    attached += 1;
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        error = %e,
                        channel_id = %aggregate.channel_id,
                        campaign_id = %aggregate.campaign_id,
                        "Creative lookup failed, leaving campaign undecorated"
                    );
                }
            }
            aggregate
        })
        .collect();

    debug!(attached = attached, total = enriched.len(), "Creative enrichment done");
    enriched
}
