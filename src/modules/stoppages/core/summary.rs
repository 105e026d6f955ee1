// Reduction of stoppages into per-sector report figures.
//
// Responsibilities
// - Count every stoppage started in the period, open ones included.
// - Sum durations of closed stoppages only; the average divides that sum by the full count.
// - List each sector's reasons in start order.

use crate::modules::stoppages::core::sector::Sector;
use crate::modules::stoppages::core::state::Stoppage;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorSummary {
    pub sector: Sector,
    pub count: u64,
    pub active_count: u64,
    pub total_duration_ms: i64,
    pub average_duration_ms: i64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoppageSummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total_count: u64,
    pub total_duration_ms: i64,
    pub by_sector: Vec<SectorSummary>,
}

pub fn summarize<'a>(
    from: NaiveDate,
    to: NaiveDate,
    stoppages: impl IntoIterator<Item = &'a Stoppage>,
) -> StoppageSummary {
    let mut by_sector: Vec<SectorSummary> = Sector::ALL
        .into_iter()
        .map(|sector| SectorSummary {
            sector,
            count: 0,
            active_count: 0,
            total_duration_ms: 0,
            average_duration_ms: 0,
            reasons: Vec::new(),
        })
        .collect();

    let mut in_period: Vec<&Stoppage> = stoppages
        .into_iter()
        .filter(|s| s.start_date >= from && s.start_date <= to)
        .collect();
    in_period.sort_by_key(|s| (s.start_date, s.start_time, s.created_at));

    for stoppage in in_period {
        let Some(entry) = by_sector.iter_mut().find(|s| s.sector == stoppage.sector) else {
            continue;
        };
        entry.count += 1;
        entry.reasons.push(stoppage.reason.clone());
        match stoppage.duration_ms() {
            Some(duration) => {
                entry.total_duration_ms = entry.total_duration_ms.saturating_add(duration)
            }
            None => entry.active_count += 1,
        }
    }

    for entry in &mut by_sector {
        if entry.count > 0 {
            entry.average_duration_ms = entry.total_duration_ms / entry.count as i64;
        }
    }

    StoppageSummary {
        from,
        to,
        total_count: by_sector.iter().map(|s| s.count).sum(),
        total_duration_ms: by_sector
            .iter()
            .fold(0i64, |sum, s| sum.saturating_add(s.total_duration_ms)),
        by_sector,
    }
}
