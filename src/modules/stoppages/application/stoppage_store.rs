// Stoppage store orchestrates the stoppage lifecycle against the record store.
//
// Responsibilities
// - Validate input, call the deciders with the current civil time, persist the outcome.
// - Keep a local view of the collection that is merged only after a write succeeds.
// - Answer date, activity and sector queries from that view.
//
// Boundaries
// - No retries. Every failure is returned to the caller and leaves the view untouched.

use crate::modules::stoppages::adapters::outbound::stoppage_row::StoppageRow;
use crate::modules::stoppages::application::errors::StoppageError;
use crate::modules::stoppages::core::sector::Sector;
use crate::modules::stoppages::core::state::Stoppage;
use crate::modules::stoppages::core::summary::{StoppageSummary, summarize};
use crate::modules::stoppages::use_cases::decision::Decision;
use crate::modules::stoppages::use_cases::end_stoppage::command::EndStoppage;
use crate::modules::stoppages::use_cases::end_stoppage::decide::{decide_end, validate_end_time};
use crate::modules::stoppages::use_cases::start_stoppage::command::StartStoppage;
use crate::modules::stoppages::use_cases::start_stoppage::decide::decide_start;
use crate::shared::core::primitives::TimeProvider;
use crate::shared::infrastructure::record_store::RecordStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

pub struct StoppageStore<TRecords>
where
    TRecords: RecordStore<StoppageRow> + 'static,
{
    records: Arc<TRecords>,
    time: TimeProvider,
    view: RwLock<Vec<Stoppage>>,
}

impl<TRecords> StoppageStore<TRecords>
where
    TRecords: RecordStore<StoppageRow> + 'static,
{
    /// Builds a store with an empty view. Call [`Self::refresh`] before querying.
    pub fn new(records: Arc<TRecords>, time: TimeProvider) -> Self {
        Self {
            records,
            time,
            view: RwLock::new(Vec::new()),
        }
    }

    /// Builds a store and performs the initial full fetch.
    pub async fn load(records: Arc<TRecords>, time: TimeProvider) -> Result<Self, StoppageError> {
        let store = Self::new(records, time);
        store.refresh().await?;
        Ok(store)
    }

    pub fn time(&self) -> &TimeProvider {
        &self.time
    }

    /// Replaces the local view with the record store contents. Returns the number of stoppages.
    pub async fn refresh(&self) -> Result<usize, StoppageError> {
        let rows = self.records.list_all().await?;
        let mut stoppages = Vec::with_capacity(rows.len());
        for row in rows {
            match Stoppage::try_from(row) {
                Ok(stoppage) => stoppages.push(stoppage),
                Err(error) => tracing::warn!(%error, "skipping unreadable stoppage row"),
            }
        }
        let count = stoppages.len();
        *self.view.write().await = stoppages;
        tracing::debug!(count, "stoppage view refreshed");
        Ok(count)
    }

    pub async fn start(&self, command: StartStoppage) -> Result<Stoppage, StoppageError> {
        let created_at = self.time.epoch_millis(&self.time.now());
        let stoppage = match decide_start(command, created_at) {
            Decision::Accepted { stoppage } => stoppage,
            Decision::Rejected { reason } => return Err(reason.into()),
        };

        if !self.query_active_by_sector(stoppage.sector).await.is_empty() {
            tracing::warn!(sector = %stoppage.sector, "sector already has an active stoppage");
        }

        // The insert is committed once it returns; only the generated id is taken back.
        let row = self.records.insert(StoppageRow::from(&stoppage)).await?;
        let stoppage = Stoppage {
            stoppage_id: row.id,
            ..stoppage
        };
        self.view.write().await.insert(0, stoppage.clone());
        tracing::info!(
            stoppage_id = %stoppage.stoppage_id,
            sector = %stoppage.sector,
            "stoppage started"
        );
        Ok(stoppage)
    }

    pub async fn end(&self, command: EndStoppage) -> Result<Stoppage, StoppageError> {
        let end_time = validate_end_time(&command.end_time)?;
        let current = self.locate(&command.stoppage_id).await?;

        let closed = match decide_end(&current, self.time.today(), end_time, &self.time.offset()) {
            Decision::Accepted { stoppage } => stoppage,
            Decision::Rejected { reason } => return Err(reason.into()),
        };
        if closed.duration_ms().is_some_and(|ms| ms < 0) {
            tracing::warn!(
                stoppage_id = %closed.stoppage_id,
                "stoppage closed before its recorded start"
            );
        }

        if let Err(error) = self.records.update(StoppageRow::from(&closed)).await {
            let error = StoppageError::from(error);
            if matches!(error, StoppageError::NotFound(_)) {
                self.forget(&command.stoppage_id).await;
            }
            return Err(error);
        }
        self.replace(closed.clone()).await;
        tracing::info!(
            stoppage_id = %closed.stoppage_id,
            duration_ms = closed.duration_ms().unwrap_or_default(),
            "stoppage ended"
        );
        Ok(closed)
    }

    pub async fn delete(&self, stoppage_id: &str) -> Result<(), StoppageError> {
        let result = self.records.delete(stoppage_id).await.map_err(StoppageError::from);
        match &result {
            Ok(()) | Err(StoppageError::NotFound(_)) => self.forget(stoppage_id).await,
            Err(_) => {}
        }
        if result.is_ok() {
            tracing::info!(stoppage_id, "stoppage deleted");
        }
        result
    }

    /// Stoppages whose start date equals `date`, newest first.
    pub async fn query_by_date(&self, date: NaiveDate) -> Vec<Stoppage> {
        self.filter(|s| s.start_date == date).await
    }

    pub async fn query_active(&self) -> Vec<Stoppage> {
        self.filter(Stoppage::is_active).await
    }

    pub async fn query_active_by_sector(&self, sector: Sector) -> Vec<Stoppage> {
        self.filter(|s| s.is_active() && s.sector == sector).await
    }

    /// Stoppages started within `from..=to`, optionally for one sector.
    pub async fn query_range(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        sector: Option<Sector>,
    ) -> Result<Vec<Stoppage>, StoppageError> {
        ensure_ordered(from, to)?;
        Ok(self
            .filter(|s| {
                s.start_date >= from
                    && s.start_date <= to
                    && sector.is_none_or(|sector| s.sector == sector)
            })
            .await)
    }

    pub async fn summarize(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<StoppageSummary, StoppageError> {
        ensure_ordered(from, to)?;
        let view = self.view.read().await;
        Ok(summarize(from, to, view.iter()))
    }

    /// Duration of a closed stoppage, or the time elapsed so far for an active one.
    pub fn elapsed_ms(&self, stoppage: &Stoppage) -> i64 {
        stoppage.duration_ms().unwrap_or_else(|| {
            self.time
                .instant_of(stoppage.start_date, stoppage.start_time)
                .map(|started| (self.time.now() - started).num_milliseconds())
                .unwrap_or_default()
        })
    }

    async fn locate(&self, stoppage_id: &str) -> Result<Stoppage, StoppageError> {
        if let Some(found) = self.find(stoppage_id).await {
            return Ok(found);
        }
        // The record may have been created by another session since the last fetch.
        self.refresh().await?;
        self.find(stoppage_id)
            .await
            .ok_or_else(|| StoppageError::NotFound(stoppage_id.to_string()))
    }

    async fn find(&self, stoppage_id: &str) -> Option<Stoppage> {
        self.view
            .read()
            .await
            .iter()
            .find(|s| s.stoppage_id == stoppage_id)
            .cloned()
    }

    async fn filter(&self, predicate: impl Fn(&Stoppage) -> bool) -> Vec<Stoppage> {
        self.view
            .read()
            .await
            .iter()
            .filter(|s| predicate(*s))
            .cloned()
            .collect()
    }

    async fn replace(&self, stoppage: Stoppage) {
        let mut view = self.view.write().await;
        match view.iter_mut().find(|s| s.stoppage_id == stoppage.stoppage_id) {
            Some(existing) => *existing = stoppage,
            None => view.insert(0, stoppage),
        }
    }

    async fn forget(&self, stoppage_id: &str) {
        self.view
            .write()
            .await
            .retain(|s| s.stoppage_id != stoppage_id);
    }
}

fn ensure_ordered(from: NaiveDate, to: NaiveDate) -> Result<(), StoppageError> {
    if from > to {
        return Err(StoppageError::Validation(format!(
            "period start {from} is after period end {to}"
        )));
    }
    Ok(())
}
