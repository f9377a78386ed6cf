//! Series storage with one writer per series.
//!
//! Each series sits behind its own `RwLock` inside a `DashMap`. The map guard is
//! released before the series lock is taken, so a slow mutation on one series never
//! blocks lookups of another.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::domain::series::{Series, SeriesId};
use crate::domain::snapshot::SeriesSummary;
use crate::errors::domain::DomainError;

pub struct SeriesStore {
    series: DashMap<SeriesId, Arc<RwLock<Series>>>,
    next_id: AtomicI64,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self {
            series: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn entry(&self, id: SeriesId) -> Result<Arc<RwLock<Series>>, DomainError> {
        self.series
            .get(&id)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| DomainError::series_not_found(id))
    }

    /// Insert a fresh IDLE series with the next sequential id.
    pub fn create(&self, created_at: OffsetDateTime) -> Series {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let series = Series::new(id, created_at);
        self.series
            .insert(id, Arc::new(RwLock::new(series.clone())));
        series
    }

    /// Run `f` against a consistent read snapshot.
    pub fn read<R>(&self, id: SeriesId, f: impl FnOnce(&Series) -> R) -> Result<R, DomainError> {
        let entry = self.entry(id)?;
        let guard = entry.read();
        Ok(f(&*guard))
    }

    pub fn get(&self, id: SeriesId) -> Result<Series, DomainError> {
        self.read(id, Series::clone)
    }

    /// Apply `f` under the series write lock.
    ///
    /// `f` works on a copy that replaces the stored series only when it returns `Ok`;
    /// readers never see a half-applied event.
    pub fn update<R>(
        &self,
        id: SeriesId,
        f: impl FnOnce(&mut Series) -> Result<R, DomainError>,
    ) -> Result<R, DomainError> {
        let entry = self.entry(id)?;
        let mut guard = entry.write();
        let mut draft = (*guard).clone();
        let out = f(&mut draft)?;
        *guard = draft;
        Ok(out)
    }

    pub fn remove(&self, id: SeriesId) -> Result<(), DomainError> {
        self.series
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::series_not_found(id))
    }

    /// Summaries, newest first.
    pub fn list(&self) -> Vec<SeriesSummary> {
        let entries: Vec<Arc<RwLock<Series>>> =
            self.series.iter().map(|e| Arc::clone(e.value())).collect();
        let mut out: Vec<SeriesSummary> = entries
            .iter()
            .map(|entry| SeriesSummary::of(&entry.read()))
            .collect();
        out.sort_by(|a, b| b.id.cmp(&a.id));
        out
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total recorded actions across all series.
    pub fn action_count(&self) -> usize {
        let entries: Vec<Arc<RwLock<Series>>> =
            self.series.iter().map(|e| Arc::clone(e.value())).collect();
        entries.iter().map(|e| e.read().actions().len()).sum()
    }
}

impl Default for SeriesStore {
    fn default() -> Self {
        Self::new()
    }
}
