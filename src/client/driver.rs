use tokio::sync::mpsc;

use crate::client::form::{Effect, FormModel, Msg, Notice};
use crate::client::relay::{RelayClient, SubmitOutcome};

/// Runs a [`FormModel`] on tokio: dispatched messages go through the
/// machine, and the resulting effects are launched as tasks whose outcomes
/// feed back into the same queue.
#[derive(Debug)]
pub struct FormDriver {
    model: FormModel,
    client: RelayClient,
    tx: mpsc::UnboundedSender<Msg>,
    rx: mpsc::UnboundedReceiver<Msg>,
}

impl FormDriver {
    #[must_use]
    pub fn new(client: RelayClient) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { model: FormModel::new(), client, tx, rx }
    }

    #[must_use]
    pub const fn model(&self) -> &FormModel {
        &self.model
    }

    /// A handle for feeding messages in from outside (UI events).
    #[must_use]
    pub fn handle(&self) -> mpsc::UnboundedSender<Msg> {
        self.tx.clone()
    }

    /// Feeds one message through the machine and launches its effects.
    pub fn dispatch(&mut self, msg: Msg) {
        for effect in self.model.update(msg) {
            self.run_effect(effect);
        }
    }

    fn run_effect(&self, effect: Effect) {
        match effect {
            Effect::Submit(submission) => {
                let client = self.client.clone();
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    let msg = match client.submit(&submission).await {
                        SubmitOutcome::Delivered => Msg::Delivered,
                        SubmitOutcome::Failed => Msg::Failed,
                    };
                    let _ = tx.send(msg);
                });
            }
            Effect::ScheduleDismiss { generation, after } => {
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(after).await;
                    let _ = tx.send(Msg::DismissElapsed(generation));
                });
            }
        }
    }

    /// Pumps queued messages until a notice is showing. One-shot embedders
    /// (like the CLI) call this right after dispatching a submit.
    pub async fn run_until_notice(&mut self) -> Option<Notice> {
        while self.model.notice().is_none() {
            let msg = self.rx.recv().await?;
            self.dispatch(msg);
        }
        self.model.notice().cloned()
    }
}
