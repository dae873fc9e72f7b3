// Ranking feed ingestion and normalization.
//
// Five feeds ship the same information in five column layouts. One generic
// parser does the work, driven by a per-source `SourceSpec` (field offsets,
// minimum width, tier derivation); the rejection rules are identical across
// all of them: no name, no recognizable offensive position, or no finite ADP
// means no record.

pub mod mock;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::FeedsConfig;
use crate::draft::player::{tier_from_index, tier_from_rank, Player, Position};

// ---------------------------------------------------------------------------
// Sources
// ---------------------------------------------------------------------------

/// The supported ranking feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    FantasyPros,
    Sleeper,
    Espn,
    EspnTop300,
    RotoViz,
}

/// All sources in display order.
pub const ALL_SOURCES: [Source; 5] = [
    Source::FantasyPros,
    Source::Sleeper,
    Source::Espn,
    Source::EspnTop300,
    Source::RotoViz,
];

impl Source {
    /// The label used for display and for row ids (`"<label>-<index>"`).
    pub fn label(&self) -> &'static str {
        match self {
            Source::FantasyPros => "FantasyPros",
            Source::Sleeper => "Sleeper",
            Source::Espn => "ESPN",
            Source::EspnTop300 => "ESPNTop300",
            Source::RotoViz => "RotoViz",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ---------------------------------------------------------------------------
// Parser configuration
// ---------------------------------------------------------------------------

/// Where a record's tier comes from.
#[derive(Debug, Clone, Copy)]
pub enum TierSource {
    /// Derived from the 0-based data-row index.
    RowIndex,
    /// An explicit 1-based overall-rank column, row index as fallback.
    RankColumn(usize),
    /// An explicit tier column, row index as fallback.
    TierColumn(usize),
}

/// Column layout for one feed format.
#[derive(Debug, Clone)]
pub struct SourceSpec {
    pub delimiter: u8,
    /// Records narrower than this produce no player.
    pub min_fields: usize,
    pub name: usize,
    pub team: usize,
    /// Feeds without bye-week data leave this unset.
    pub bye: Option<usize>,
    pub position: usize,
    pub adp: usize,
    pub tier: TierSource,
}

/// The column layout for a source.
pub fn spec_for(source: Source) -> SourceSpec {
    match source {
        Source::FantasyPros => SourceSpec {
            delimiter: b',',
            min_fields: 12,
            name: 1,
            team: 2,
            bye: Some(3),
            position: 4,
            adp: 11,
            tier: TierSource::RankColumn(0),
        },
        // Sleeper, ESPN, and the ESPN top-300 export share one layout.
        Source::Sleeper | Source::Espn | Source::EspnTop300 => SourceSpec {
            delimiter: b',',
            min_fields: 6,
            name: 0,
            team: 1,
            bye: Some(2),
            position: 3,
            adp: 5,
            tier: TierSource::RowIndex,
        },
        Source::RotoViz => SourceSpec {
            delimiter: b',',
            min_fields: 8,
            name: 2,
            team: 4,
            bye: None,
            position: 3,
            adp: 6,
            tier: TierSource::TierColumn(7),
        },
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse raw delimited text into normalized players.
///
/// The header line is skipped. Each remaining data line consumes one row
/// index (ids stay aligned with the feed even when rows are rejected).
/// Malformed rows are dropped; the batch never fails as a whole.
pub fn parse_players(source: Source, spec: &SourceSpec, text: &str) -> Vec<Player> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(spec.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut players = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("{}: skipping unreadable row {}: {}", source, index, e);
                continue;
            }
        };

        if record.len() < spec.min_fields {
            debug!(
                "{}: skipping short row {} ({} fields, need {})",
                source,
                index,
                record.len(),
                spec.min_fields
            );
            continue;
        }

        let field = |i: usize| record.get(i).unwrap_or("").trim();

        let name = field(spec.name);
        if name.is_empty() {
            continue;
        }

        let Some(position) = Position::from_str_pos(field(spec.position)) else {
            // Kickers, team defenses, and anything unrecognizable.
            continue;
        };

        let adp = match field(spec.adp).parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                debug!("{}: skipping row {}: unparseable ADP", source, index);
                continue;
            }
        };

        let tier = match spec.tier {
            TierSource::RowIndex => tier_from_index(index),
            TierSource::RankColumn(col) => field(col)
                .parse::<u32>()
                .ok()
                .map(tier_from_rank)
                .unwrap_or_else(|| tier_from_index(index)),
            TierSource::TierColumn(col) => field(col)
                .parse::<u32>()
                .ok()
                .filter(|&t| t >= 1)
                .unwrap_or_else(|| tier_from_index(index)),
        };

        players.push(Player {
            id: format!("{}-{}", source.label(), index),
            name: name.to_string(),
            team: field(spec.team).to_string(),
            bye: spec.bye.map(|i| field(i).to_string()).unwrap_or_default(),
            position,
            adp,
            tier,
        });
    }

    players
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read feed file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to fetch feed {url}: {source}")]
    Http { url: String, source: reqwest::Error },
}

/// The configured location for a feed, if any.
fn feed_location<'a>(feeds: &'a FeedsConfig, source: Source) -> Option<&'a str> {
    match source {
        Source::FantasyPros => feeds.fantasy_pros.as_deref(),
        Source::Sleeper => feeds.sleeper.as_deref(),
        Source::Espn => feeds.espn.as_deref(),
        Source::EspnTop300 => feeds.espn_top300.as_deref(),
        Source::RotoViz => feeds.rotoviz.as_deref(),
    }
}

/// Read feed text from a local path or an http(s) URL.
async fn fetch_text(location: &str) -> Result<String, SourceError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        let response = reqwest::get(location)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| SourceError::Http {
                url: location.to_string(),
                source: e,
            })?;
        response.text().await.map_err(|e| SourceError::Http {
            url: location.to_string(),
            source: e,
        })
    } else {
        tokio::fs::read_to_string(location)
            .await
            .map_err(|e| SourceError::Io {
                path: location.to_string(),
                source: e,
            })
    }
}

/// Load one source: fetch and parse the configured feed, or generate
/// placeholder data when no feed is configured.
///
/// A transport failure degrades to an empty list; "no data for source" is a
/// normal, displayable state, never a crash.
pub async fn load_source(source: Source, feeds: &FeedsConfig) -> Vec<Player> {
    match feed_location(feeds, source) {
        Some(location) => match fetch_text(location).await {
            Ok(text) => {
                let players = parse_players(source, &spec_for(source), &text);
                info!("{}: loaded {} players from {}", source, players.len(), location);
                players
            }
            Err(e) => {
                warn!("{}: feed unavailable, showing empty list: {}", source, e);
                Vec::new()
            }
        },
        None => {
            info!("{}: no feed configured, generating placeholder data", source);
            mock::generate(source.label())
        }
    }
}

/// Load all five sources concurrently and join before first render.
pub async fn load_all(feeds: &FeedsConfig) -> RankingSet {
    let (fantasy_pros, sleeper, espn, espn_top300, rotoviz) = tokio::join!(
        load_source(Source::FantasyPros, feeds),
        load_source(Source::Sleeper, feeds),
        load_source(Source::Espn, feeds),
        load_source(Source::EspnTop300, feeds),
        load_source(Source::RotoViz, feeds),
    );

    let mut set = RankingSet::default();
    set.insert(Source::FantasyPros, fantasy_pros);
    set.insert(Source::Sleeper, sleeper);
    set.insert(Source::Espn, espn);
    set.insert(Source::EspnTop300, espn_top300);
    set.insert(Source::RotoViz, rotoviz);
    set
}

/// All loaded rankings, keyed by source.
#[derive(Debug, Clone, Default)]
pub struct RankingSet {
    by_source: HashMap<Source, Vec<Player>>,
}

impl RankingSet {
    pub fn insert(&mut self, source: Source, players: Vec<Player>) {
        self.by_source.insert(source, players);
    }

    /// The players for a source, ADP order as shipped by the feed. Empty when
    /// the source failed to load or is not present.
    pub fn players(&self, source: Source) -> &[Player] {
        self.by_source
            .get(&source)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_count(&self) -> usize {
        self.by_source.values().map(Vec::len).sum()
    }
}
