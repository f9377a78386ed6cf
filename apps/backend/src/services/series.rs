//! Series orchestration: store access, catalog loading, optimistic locking and logging.

use std::sync::Arc;

use time::OffsetDateTime;
use tracing::{debug, info};

use crate::catalog::ComboCatalog;
use crate::domain::catalog::Catalog;
use crate::domain::series::{Series, SeriesId};
use crate::domain::snapshot::{SeriesSummary, SeriesView};
use crate::domain::types::{ActionKind, MapId, ModeId, Ruleset, SeriesType};
use crate::domain::validator::ProposedAction;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::repos::SeriesStore;

pub struct SeriesService {
    store: Arc<SeriesStore>,
    catalog: Arc<dyn ComboCatalog>,
}

fn check_version(series: &Series, expected: Option<u32>) -> Result<(), DomainError> {
    match expected {
        Some(v) if v != series.version() => Err(DomainError::conflict(
            ConflictKind::OptimisticLock,
            format!(
                "Series {} was modified (expected version {v}, current {})",
                series.id(),
                series.version()
            ),
        )),
        _ => Ok(()),
    }
}

impl SeriesService {
    pub fn new(store: Arc<SeriesStore>, catalog: Arc<dyn ComboCatalog>) -> Self {
        Self { store, catalog }
    }

    pub fn store(&self) -> &SeriesStore {
        &self.store
    }

    pub fn catalog(&self) -> Result<Arc<Catalog>, DomainError> {
        self.catalog.load()
    }

    pub fn catalog_source(&self) -> String {
        self.catalog.describe()
    }

    pub fn create(&self) -> SeriesView {
        let series = self.store.create(OffsetDateTime::now_utc());
        info!(series_id = series.id(), "Series created");
        SeriesView::of(&series)
    }

    pub fn get(&self, id: SeriesId) -> Result<SeriesView, DomainError> {
        self.store.read(id, SeriesView::of)
    }

    pub fn list(&self) -> Vec<SeriesSummary> {
        self.store.list()
    }

    pub fn delete(&self, id: SeriesId) -> Result<(), DomainError> {
        self.store.remove(id)?;
        info!(series_id = id, "Series deleted");
        Ok(())
    }

    /// Run one event under the series lock and project the result.
    fn mutate(
        &self,
        id: SeriesId,
        event: &'static str,
        expected: Option<u32>,
        f: impl FnOnce(&mut Series) -> Result<(), DomainError>,
    ) -> Result<SeriesView, DomainError> {
        let result = self.store.update(id, |series| {
            check_version(series, expected)?;
            f(series)?;
            Ok(SeriesView::of(series))
        });

        match &result {
            Ok(view) => info!(
                series_id = id,
                event,
                phase = %view.phase,
                actions = view.actions.len(),
                version = view.version,
                "Series updated"
            ),
            Err(err) => debug!(series_id = id, event, error = %err, "Series event rejected"),
        }
        result
    }

    pub fn assign_teams(
        &self,
        id: SeriesId,
        team_a: &str,
        team_b: &str,
        expected: Option<u32>,
    ) -> Result<SeriesView, DomainError> {
        self.mutate(id, "assign_teams", expected, |s| {
            s.assign_teams(team_a, team_b)
        })
    }

    pub fn confirm_series_type(
        &self,
        id: SeriesId,
        series_type: SeriesType,
        ruleset: Option<Ruleset>,
        expected: Option<u32>,
    ) -> Result<SeriesView, DomainError> {
        self.mutate(id, "confirm_series_type", expected, |s| {
            s.confirm_series_type(series_type, ruleset)
        })
    }

    fn act(
        &self,
        id: SeriesId,
        kind: ActionKind,
        team_label: &str,
        map_id: MapId,
        mode_id: Option<ModeId>,
        expected: Option<u32>,
    ) -> Result<SeriesView, DomainError> {
        // Load before locking: an unavailable catalog blocks the event but leaves the
        // series as it was.
        let catalog = self.catalog.load()?;
        let event = match kind {
            ActionKind::Ban => "ban",
            ActionKind::Pick => "pick",
        };
        self.mutate(id, event, expected, |s| {
            let team = s.team_for_label(team_label)?;
            let action = s.apply(
                &catalog,
                &ProposedAction {
                    kind,
                    team,
                    map_id,
                    mode_id,
                },
            )?;
            debug!(
                series_id = id,
                sequence = action.sequence,
                team = %action.team,
                map = %action.map,
                mode = %action.mode,
                "Action recorded"
            );
            Ok(())
        })
    }

    pub fn ban(
        &self,
        id: SeriesId,
        team_label: &str,
        map_id: MapId,
        mode_id: Option<ModeId>,
        expected: Option<u32>,
    ) -> Result<SeriesView, DomainError> {
        self.act(id, ActionKind::Ban, team_label, map_id, mode_id, expected)
    }

    pub fn pick(
        &self,
        id: SeriesId,
        team_label: &str,
        map_id: MapId,
        mode_id: Option<ModeId>,
        expected: Option<u32>,
    ) -> Result<SeriesView, DomainError> {
        self.act(id, ActionKind::Pick, team_label, map_id, mode_id, expected)
    }

    pub fn undo(&self, id: SeriesId, expected: Option<u32>) -> Result<SeriesView, DomainError> {
        self.mutate(id, "undo", expected, |s| {
            let removed = s.undo()?;
            debug!(series_id = id, sequence = removed.sequence, "Action undone");
            Ok(())
        })
    }

    pub fn reset(&self, id: SeriesId, expected: Option<u32>) -> Result<SeriesView, DomainError> {
        self.mutate(id, "reset", expected, Series::reset)
    }
}
