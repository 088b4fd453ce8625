//! Root store: form value, prediction, fetch flag and error flag
//!
//! State only changes through [`Store::dispatch`]. The asynchronous
//! `post_params` intent runs the request on a tokio task and feeds its
//! outcome back through a channel that the event loop drains, so actions
//! are always applied on the UI thread in the order they arrive.

use crate::predictor::PredictorClientTrait;
use crate::state::FormValue;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Opaque payload returned by the prediction service
pub type Prediction = serde_json::Value;

/// State read by the form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootState {
    pub value: FormValue,
    pub prediction: Option<Prediction>,
    pub fetching: bool,
    pub error: bool,
}

/// State transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetValue(FormValue),
    ResetValue,
    PostParamsPending,
    PostParamsFulfilled(Prediction),
    PostParamsRejected,
}

impl RootState {
    /// Apply a single action
    pub fn reduce(&mut self, action: Action) {
        match action {
            Action::SetValue(value) => self.value = value,
            Action::ResetValue => self.value = FormValue::default(),
            Action::PostParamsPending => {
                self.fetching = true;
                self.error = false;
            }
            Action::PostParamsFulfilled(prediction) => {
                self.fetching = false;
                self.prediction = Some(prediction);
            }
            Action::PostParamsRejected => {
                self.fetching = false;
                self.error = true;
            }
        }
    }
}

/// Single owner of [`RootState`]
pub struct Store {
    state: RootState,
    tx: UnboundedSender<Action>,
    rx: UnboundedReceiver<Action>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state: RootState::default(),
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &RootState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatch");
        self.state.reduce(action);
    }

    /// Replace the whole form value
    pub fn set_value(&mut self, value: FormValue) {
        self.dispatch(Action::SetValue(value));
    }

    /// Clear every field
    pub fn reset_value(&mut self) {
        self.dispatch(Action::ResetValue);
    }

    /// Submit `value` for prediction; the outcome arrives via [`Store::try_next`]
    pub fn post_params(&mut self, client: Arc<dyn PredictorClientTrait>, value: FormValue) {
        self.dispatch(Action::PostParamsPending);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let action = match client.predict(&value).await {
                Ok(prediction) => Action::PostParamsFulfilled(prediction),
                Err(err) => {
                    tracing::warn!("Prediction failed: {err}");
                    Action::PostParamsRejected
                }
            };
            // Receiver only goes away on shutdown
            let _ = tx.send(action);
        });
    }

    /// Next settled action from a background request, if any
    pub fn try_next(&mut self) -> Option<Action> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next settled action and apply it
    #[cfg(test)]
    pub async fn settle(&mut self) -> Option<Action> {
        let action = self.rx.recv().await?;
        self.dispatch(action.clone());
        Some(action)
    }
}
