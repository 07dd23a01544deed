//! The bars and beers the signed in user follows

use std::{future::Future, sync::Arc};

use anyhow::Context as _;
use beerscanner_shared::{
    id::DbId,
    model::{Bar, Beer},
    req_args::api::v1::TrackBeerReqArgs,
};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::{
    client::{await_response, no_ui_notify},
    Client,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackedResources {
    pub bars: Vec<Bar>,
    pub beers: Vec<Beer>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrackedSnapshot {
    /// Moved on by [`TrackedStore::clear`] and [`TrackedStore::supersede_pending`]
    /// so refreshes started before either are dropped when they finish
    pub generation: u64,
    pub resources: TrackedResources,
}

/// Cheap to clone, all clones share the same state
#[derive(Debug, Clone)]
pub struct TrackedStore {
    client: Client,
    state: Arc<watch::Sender<TrackedSnapshot>>,
}

impl TrackedStore {
    pub fn new(client: Client) -> Self {
        let (state, _) = watch::channel(TrackedSnapshot::default());
        Self {
            client,
            state: Arc::new(state),
        }
    }

    /// Fetches both lists at the same time. Either both are replaced or, if
    /// either fetch fails, neither is.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> anyhow::Result<()> {
        self.start_refresh().await
    }

    /// Same as [`Self::refresh`] without waiting, failures are only logged
    pub fn refresh_in_background(&self) {
        let refresh = self.start_refresh();
        tokio::spawn(async move {
            if let Err(mishap) = refresh.await {
                warn!(?mishap, "failed to refresh tracked bars and beers");
            }
        });
    }

    // Requests are sent and the generation taken before returning, not on first
    // poll, so a `clear` that happens before the future runs still wins
    fn start_refresh(&self) -> impl Future<Output = anyhow::Result<()>> + Send + 'static {
        let generation = self.generation();
        let bars = await_response(self.client.tracked_bars(no_ui_notify));
        let beers = await_response(self.client.tracked_beers(no_ui_notify));
        let store = self.clone();
        async move {
            let (bars, beers) = futures::try_join!(bars, beers)
                .context("failed to fetch tracked bars and beers")?;
            store.apply_if_current(generation, |resources| {
                resources.bars = bars;
                resources.beers = beers;
            });
            Ok(())
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn refresh_bars(&self) -> anyhow::Result<()> {
        let generation = self.generation();
        let bars = await_response(self.client.tracked_bars(no_ui_notify))
            .await
            .context("failed to fetch tracked bars")?;
        self.apply_if_current(generation, |resources| resources.bars = bars);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn refresh_beers(&self) -> anyhow::Result<()> {
        let generation = self.generation();
        let beers = await_response(self.client.tracked_beers(no_ui_notify))
            .await
            .context("failed to fetch tracked beers")?;
        self.apply_if_current(generation, |resources| resources.beers = beers);
        Ok(())
    }

    /// Keeps both lists but drops every fetch still in flight, used when a
    /// different session starts. Subscribers are not notified.
    pub fn supersede_pending(&self) {
        self.state.send_if_modified(|snapshot| {
            snapshot.generation += 1;
            false
        });
    }

    /// Empties both lists, used when signing out
    pub fn clear(&self) {
        self.state.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.resources = TrackedResources::default();
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<TrackedSnapshot> {
        self.state.subscribe()
    }

    pub fn current(&self) -> TrackedSnapshot {
        self.state.borrow().clone()
    }

    pub fn is_bar_tracked(&self, bar_id: DbId) -> bool {
        self.state
            .borrow()
            .resources
            .bars
            .iter()
            .any(|bar| bar.id == Some(bar_id))
    }

    pub fn is_beer_tracked(&self, beer_id: DbId) -> bool {
        self.state
            .borrow()
            .resources
            .beers
            .iter()
            .any(|beer| beer.id == Some(beer_id))
    }

    #[tracing::instrument(skip(self))]
    pub async fn track_bar(&self, bar_id: DbId) -> anyhow::Result<()> {
        await_response(self.client.track_bar(bar_id, no_ui_notify)).await?;
        self.refresh_bars().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn untrack_bar(&self, bar_id: DbId) -> anyhow::Result<()> {
        await_response(self.client.untrack_bar(bar_id, no_ui_notify)).await?;
        self.refresh_bars().await
    }

    /// Without a bar the user is told when the beer shows up anywhere
    #[tracing::instrument(skip(self))]
    pub async fn track_beer(&self, beer_id: DbId, bar_id: Option<DbId>) -> anyhow::Result<()> {
        let args = TrackBeerReqArgs { bar_id };
        await_response(self.client.track_beer(beer_id, &args, no_ui_notify)).await?;
        self.refresh_beers().await
    }

    #[tracing::instrument(skip(self))]
    pub async fn untrack_beer(&self, beer_id: DbId) -> anyhow::Result<()> {
        await_response(self.client.untrack_beer(beer_id, no_ui_notify)).await?;
        self.refresh_beers().await
    }

    fn generation(&self) -> u64 {
        self.state.borrow().generation
    }

    fn apply_if_current<F>(&self, generation: u64, update: F)
    where
        F: FnOnce(&mut TrackedResources),
    {
        let applied = self.state.send_if_modified(|snapshot| {
            if snapshot.generation != generation {
                return false;
            }
            update(&mut snapshot.resources);
            true
        });
        if !applied {
            debug!(generation, "cleared since the fetch started, discarding");
        }
    }
}
