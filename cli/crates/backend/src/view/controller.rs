use super::{
    render::{render, View},
    state::{RequestToken, ViewState},
    update::{update, Action, Effect},
};
use crate::{
    api::{
        errors::ApiError,
        types::{Auction, AuctionStatus},
        GraphQlClient,
    },
    link::LinkBuilder,
};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Where the controller gets auctions from
#[async_trait]
pub trait AuctionSource: Send + Sync {
    async fn auctions_by_status(&self, status: AuctionStatus) -> Result<Vec<Auction>, ApiError>;
}

#[async_trait]
impl AuctionSource for GraphQlClient {
    async fn auctions_by_status(&self, status: AuctionStatus) -> Result<Vec<Auction>, ApiError> {
        GraphQlClient::auctions_by_status(self, status).await
    }
}

/// Owns a [`ViewState`] and runs the effects its updates ask for.
///
/// At most one fetch is in flight: issuing a new one aborts the previous task,
/// and the previous token no longer matches, so its outcome can never be
/// stored. Needs to be driven from within a tokio runtime.
pub struct Controller {
    state: ViewState,
    source: Arc<dyn AuctionSource>,
    in_flight: Option<(RequestToken, JoinHandle<Action>)>,
}

impl Controller {
    pub fn new(source: Arc<dyn AuctionSource>) -> Self {
        Self::with_state(source, ViewState::default())
    }

    pub fn with_state(source: Arc<dyn AuctionSource>, state: ViewState) -> Self {
        Self {
            state,
            source,
            in_flight: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn mount(&mut self) {
        let effect = self.state.mount();
        self.run(effect);
    }

    pub fn dispatch(&mut self, action: Action) {
        if let Some(effect) = update(&mut self.state, action) {
            self.run(effect);
        }
    }

    fn run(&mut self, effect: Effect) {
        match effect {
            Effect::Fetch { token, status } => {
                if let Some((previous, handle)) = self.in_flight.take() {
                    tracing::debug!(%previous, "aborting superseded fetch");
                    handle.abort();
                }

                tracing::debug!(%token, %status, "starting fetch");

                let source = Arc::clone(&self.source);
                let handle = tokio::spawn(async move {
                    match source.auctions_by_status(status).await {
                        Ok(auctions) => Action::Loaded { token, auctions },
                        Err(error) => Action::Failed { token, error },
                    }
                });

                self.in_flight = Some((token, handle));
            }
        }
    }

    /// Waits for the fetch in flight and applies its outcome. Returns `false`
    /// if there was nothing to wait for.
    pub async fn settle(&mut self) -> bool {
        let Some((token, handle)) = self.in_flight.take() else {
            return false;
        };

        let action = match handle.await {
            Ok(action) => action,
            Err(error) => Action::Failed {
                token,
                error: ApiError::RequestError(format!("the fetch task did not complete: {error}")),
            },
        };

        self.dispatch(action);
        true
    }

    pub async fn wait_until_loaded(&mut self) {
        while self.state.is_loading() {
            if !self.settle().await {
                break;
            }
        }
    }

    pub fn render(&self, links: &LinkBuilder) -> View {
        render(&self.state, links)
    }
}
