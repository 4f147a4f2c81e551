use crate::client::LedgerClient;
use crate::error::{ClientError, Result};
use crate::sync::Synchronizer;
use crate::types::{BlockAck, BlockForm};
use crate::view::ViewModel;
use tracing::debug;

/// What happened to the follow-up refresh after an accepted submission.
#[derive(Debug)]
pub enum ResyncOutcome {
    /// The chain was refetched and a fresh view is ready to display.
    Applied(ViewModel),
    /// A newer sync won the race; its view already stands.
    Superseded,
    /// The node echoed its bootstrap record, so the refresh was skipped.
    Skipped,
    /// The record was stored but the refresh failed; the previous view
    /// stays on display.
    Failed(ClientError),
}

/// Result of one accepted submission.
#[derive(Debug)]
pub struct Submission {
    pub ack: BlockAck,
    pub resync: ResyncOutcome,
}

/// Drives the submission flow: send the form's record, reset the form on
/// acknowledgment, then refresh the view unless the ack is the genesis echo.
/// The controller never touches the display; it hands outcomes to the shell.
pub struct Controller {
    client: LedgerClient,
    synchronizer: Synchronizer,
}

impl Controller {
    pub fn new(client: LedgerClient) -> Self {
        let synchronizer = Synchronizer::new(client.clone());
        Self {
            client,
            synchronizer,
        }
    }

    pub fn synchronizer(&self) -> &Synchronizer {
        &self.synchronizer
    }

    /// Submit the form's record to the node.
    ///
    /// On failure the form keeps its values so the operator can resubmit;
    /// no refresh is attempted. On success the form is cleared and the
    /// refresh runs, except when the node echoes the bootstrap record
    /// instead of the stored one.
    pub async fn submit(&self, form: &mut BlockForm) -> Result<Submission> {
        let record = form.record();
        let ack = self.client.add_block(&record).await?;
        form.reset();

        if ack.is_genesis() {
            debug!("genesis echo from node, refresh skipped");
            return Ok(Submission {
                ack,
                resync: ResyncOutcome::Skipped,
            });
        }

        let resync = match self.synchronizer.sync().await {
            Ok(Some(view)) => ResyncOutcome::Applied(view),
            Ok(None) => ResyncOutcome::Superseded,
            Err(err) => ResyncOutcome::Failed(err),
        };

        Ok(Submission { ack, resync })
    }
}
