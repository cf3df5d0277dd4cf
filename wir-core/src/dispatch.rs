//! One search, start to finish: validate the selection, clear the result
//! pane, fetch, settle. Shared by the web app and the CLI.

use crate::client::WeatherClient;
use crate::config::ServiceConfig;
use crate::error::QueryError;
use crate::labels::LabelTable;
use crate::query::WeatherQuery;
use crate::selection::SelectionState;
use crate::status::QueryStatus;
use log::{debug, info, warn};

/// Where a search records its progress.
///
/// The web app backs this with its signals; the CLI uses a plain
/// [`QueryStatus`].
pub trait SearchSink {
    /// Run `f` against the current result status.
    fn update_status<R>(&mut self, f: impl FnOnce(&mut QueryStatus) -> R) -> R;

    /// Called once the result pane is cleared, right before the request goes out.
    fn dispatched(&mut self, _query: &WeatherQuery) {}
}

impl SearchSink for QueryStatus {
    fn update_status<R>(&mut self, f: impl FnOnce(&mut QueryStatus) -> R) -> R {
        f(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The request ran and the status now holds the rendered result.
    Completed,
    /// Another search was outstanding; nothing was touched.
    Skipped,
}

/// Run one weather search against `sink`.
///
/// An incomplete selection returns [`QueryError::IncompleteSelection`] before
/// the status is touched or any request is made. Otherwise the status goes
/// to `Loading`, exactly one request is sent, and the status settles to
/// `Loaded` or `Failed`; a failure is also returned to the caller.
pub async fn dispatch_search<S: SearchSink>(
    config: &ServiceConfig,
    selection: &SelectionState,
    labels: &LabelTable,
    sink: &mut S,
) -> Result<SearchOutcome, QueryError> {
    if sink.update_status(|status| status.is_loading()) {
        debug!("Search ignored, another query is outstanding");
        return Ok(SearchOutcome::Skipped);
    }

    let query = selection.to_query().inspect_err(|_| {
        warn!("Search requested with incomplete selection");
    })?;

    sink.update_status(QueryStatus::begin);
    sink.dispatched(&query);

    let result = match WeatherClient::new(config.clone()) {
        Ok(client) => client.fetch_summary(&query).await,
        Err(e) => Err(e),
    };
    let outcome = match &result {
        Ok(_) => {
            info!("Weather data received for {}", query.event_date);
            Ok(SearchOutcome::Completed)
        }
        Err(e) => Err(e.clone()),
    };
    sink.update_status(|status| status.complete(result, labels));
    outcome
}
