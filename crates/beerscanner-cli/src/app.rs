//! Runs one command against the server, the way the web client would on a page
//! load followed by a single user action

use std::{io::Write, sync::Arc};

use anyhow::{bail, Context as _};
use beerscanner_client_core::{
    await_response, decode_claims, no_ui_notify, Client, FileStorage, KeyValueStorage,
    LogNavigator, Navigator, NotificationStore, ReqwestTransport, SessionBroadcaster,
    SessionState, SessionStore, TokenStore, TrackedStore, Transport,
};
use beerscanner_shared::{
    errors::NotLoggedInError,
    id::DbId,
    model::{Bar, BeerExtended, Page, Pageable},
    req_args::api::v1::SearchReqArgs,
    token::AuthToken,
};
use beerscanner_time::{format_from_now, format_from_now_local, Timestamp, NEVER};
use secrecy::ExposeSecret as _;
use tracing::{info, warn};

use crate::{cli::Command, configuration::Configuration};

/// Everything a command needs, wired the same way for every command
#[derive(Debug, Clone)]
pub struct App {
    client: Client,
    session: SessionStore,
    tracked: TrackedStore,
    notifications: NotificationStore,
}

impl App {
    pub fn new(configuration: &Configuration) -> anyhow::Result<Self> {
        let transport = ReqwestTransport::new(
            configuration.api.base_url.clone(),
            configuration.api.timeout(),
        )
        .context("failed to create the http client")?;
        let storage = FileStorage::new(configuration.storage.path.clone());
        Ok(Self::from_parts(
            Arc::new(transport),
            Arc::new(storage),
            Arc::new(LogNavigator),
        ))
    }

    pub fn from_parts(
        transport: Arc<dyn Transport>,
        storage: Arc<dyn KeyValueStorage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let tokens = TokenStore::new(storage, SessionBroadcaster::new());
        let client = Client::new(transport, tokens, navigator);
        let tracked = TrackedStore::new(client.clone());
        let session = SessionStore::new(client.clone(), tracked.clone());
        let notifications = NotificationStore::new(client.clone());
        Self {
            client,
            session,
            tracked,
            notifications,
        }
    }

    /// Writes what the user should see to `out`
    #[tracing::instrument(skip(self, out))]
    pub async fn run<W: Write>(&self, command: Command, out: &mut W) -> anyhow::Result<()> {
        self.session.start();
        match command {
            Command::Login { token } => self.login(AuthToken::new(token), out).await,
            Command::Logout => {
                self.session.logout();
                writeln!(out, "Signed out")?;
                Ok(())
            }
            Command::Status => self.status(out),
            Command::Whoami => self.whoami(out).await,
            Command::Tracked => self.tracked(out).await,
            Command::Notifications => self.notifications(out).await,
            Command::Bars { search, page } => self.bars(search, page, out).await,
            Command::Beers { search, page } => self.beers(search, page, out).await,
            Command::TrackBar { id } => {
                self.ensure_logged_in()?;
                self.tracked.track_bar(id).await?;
                writeln!(out, "Tracking bar {id}")?;
                Ok(())
            }
            Command::UntrackBar { id } => {
                self.ensure_logged_in()?;
                self.tracked.untrack_bar(id).await?;
                writeln!(out, "No longer tracking bar {id}")?;
                Ok(())
            }
            Command::TrackBeer { id, bar_id } => {
                self.ensure_logged_in()?;
                self.tracked.track_beer(id, bar_id).await?;
                match bar_id {
                    Some(bar_id) => writeln!(out, "Tracking beer {id} at bar {bar_id}")?,
                    None => writeln!(out, "Tracking beer {id} at any bar")?,
                }
                Ok(())
            }
            Command::UntrackBeer { id } => {
                self.ensure_logged_in()?;
                self.tracked.untrack_beer(id).await?;
                writeln!(out, "No longer tracking beer {id}")?;
                Ok(())
            }
        }
    }

    async fn login<W: Write>(&self, token: AuthToken, out: &mut W) -> anyhow::Result<()> {
        self.session.handle_oauth_callback(token);
        if !self.session.is_logged_in() {
            // Expired tokens are already gone, this catches malformed ones
            self.client.tokens().remove();
            bail!("the token is not a usable session token");
        }
        // A 401 here has already signed the session out
        let user = await_response(self.client.current_user(no_ui_notify))
            .await
            .context("the server did not accept the token")?;
        info!(user_id = %user.id, "login confirmed by the server");
        writeln!(out, "Signed in as {} <{}>", user.name, user.email)?;
        Ok(())
    }

    fn status<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        let snapshot = self.session.current();
        let (Some(name), Some(email)) = (snapshot.state.user_name(), snapshot.state.email())
        else {
            writeln!(out, "Not signed in")?;
            return Ok(());
        };
        let expires = self
            .client
            .tokens()
            .get()
            .and_then(|token| decode_claims(token.expose_secret()).ok())
            .map(|claims| expiry_text(claims.exp))
            .unwrap_or_else(|| NEVER.to_string());
        writeln!(out, "Signed in as {name} <{email}>")?;
        writeln!(out, "Session expires {expires}")?;
        Ok(())
    }

    async fn whoami<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        self.ensure_logged_in()?;
        let user = await_response(self.client.current_user(no_ui_notify))
            .await
            .context("failed to fetch the profile")?;
        writeln!(out, "{} <{}>", user.name, user.email)?;
        writeln!(out, "Id: {}", user.id)?;
        writeln!(
            out,
            "Notifications: {}",
            if user.notification_enabled { "on" } else { "off" }
        )?;
        if user.is_admin {
            writeln!(out, "Administrator")?;
        }
        writeln!(out, "Joined: {}", format_from_now_local(user.created_at))?;
        Ok(())
    }

    async fn tracked<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        self.ensure_logged_in()?;
        self.tracked.refresh().await?;
        let resources = self.tracked.current().resources;
        writeln!(out, "Bars ({}):", resources.bars.len())?;
        for bar in &resources.bars {
            writeln!(out, "  {}", bar_line(bar))?;
        }
        writeln!(out, "Beers ({}):", resources.beers.len())?;
        for beer in &resources.beers {
            writeln!(out, "  {} {}", id_text(beer.id), beer.name)?;
        }
        Ok(())
    }

    async fn notifications<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        self.ensure_logged_in()?;
        self.notifications.init().await;
        let unread = self.notifications.current();
        writeln!(out, "{} unread", unread.count)?;
        for notification in &unread.notifications {
            writeln!(
                out,
                "  [{}] {}: {} ({})",
                notification.notification_type,
                notification.title,
                notification.message,
                format_from_now_local(notification.created_at)
            )?;
        }
        Ok(())
    }

    async fn bars<W: Write>(
        &self,
        search: Option<String>,
        page: u32,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let pageable = Pageable::new(page, Pageable::DEFAULT_SIZE);
        let rx = match search {
            Some(term) => self
                .client
                .search_bars(&SearchReqArgs::new(term, pageable), no_ui_notify),
            None => self.client.all_bars(&pageable, no_ui_notify),
        };
        let bars = await_response(rx).await.context("failed to fetch bars")?;
        self.refresh_tracked_for_markers().await;
        for bar in &bars.content {
            let marker = tracked_marker(bar.id.is_some_and(|id| self.tracked.is_bar_tracked(id)));
            writeln!(out, "{marker} {}", bar_line(bar))?;
        }
        write_page_footer(&bars, out)
    }

    async fn beers<W: Write>(
        &self,
        search: Option<String>,
        page: u32,
        out: &mut W,
    ) -> anyhow::Result<()> {
        let pageable = Pageable::new(page, Pageable::DEFAULT_SIZE);
        let rx = match search {
            Some(term) => self
                .client
                .search_beers(&SearchReqArgs::new(term, pageable), no_ui_notify),
            None => self.client.all_beers(&pageable, no_ui_notify),
        };
        let beers = await_response(rx).await.context("failed to fetch beers")?;
        self.refresh_tracked_for_markers().await;
        for beer in &beers.content {
            let marker =
                tracked_marker(beer.beer.id.is_some_and(|id| self.tracked.is_beer_tracked(id)));
            writeln!(out, "{marker} {}", beer_line(beer))?;
        }
        write_page_footer(&beers, out)
    }

    /// Listing still works without markers if the tracked lists are unavailable
    async fn refresh_tracked_for_markers(&self) {
        if !self.session.is_logged_in() {
            return;
        }
        if let Err(mishap) = self.tracked.refresh().await {
            warn!(?mishap, "tracked lists unavailable, listing without markers");
        }
    }

    fn ensure_logged_in(&self) -> anyhow::Result<()> {
        if self.session.is_logged_in() {
            Ok(())
        } else {
            Err(NotLoggedInError.into())
        }
    }

    pub fn session_state(&self) -> SessionState {
        self.session.current().state
    }
}

fn id_text(id: Option<DbId>) -> String {
    id.map(|id| id.to_string()).unwrap_or_else(|| "-".into())
}

fn tracked_marker(is_tracked: bool) -> char {
    if is_tracked {
        '*'
    } else {
        ' '
    }
}

fn bar_line(bar: &Bar) -> String {
    format!(
        "{} {} ({}), checked {}",
        id_text(bar.id),
        bar.name,
        bar.location,
        format_from_now_local(bar.last_checked_at)
    )
}

fn beer_line(extended: &BeerExtended) -> String {
    let beer = &extended.beer;
    let mut line = format!("{} {}", id_text(beer.id), beer.name);
    if let Some(brewery) = &beer.brewery {
        line.push_str(&format!(" by {brewery}"));
    }
    if let Some(abv) = beer.abv {
        line.push_str(&format!(" {abv:.1}%"));
    }
    line.push_str(&format!(", on tap at {} bars", extended.available_at.len()));
    line
}

fn write_page_footer<T, W: Write>(page: &Page<T>, out: &mut W) -> anyhow::Result<()> {
    writeln!(
        out,
        "Page {} of {} ({} total)",
        page.number + 1,
        page.total_pages.max(1),
        page.total_elements
    )?;
    Ok(())
}

// Claims are in UTC so the comparison is too
fn expiry_text(exp: Timestamp) -> String {
    let date = exp.as_utc_datetime().map(|date| date.naive_utc());
    format_from_now(date, chrono::Utc::now().naive_utc(), NEVER)
}
