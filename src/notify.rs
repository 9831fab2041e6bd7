//! Delivery of state-change notifications to a renderer.

use crate::error::GameError;
use crate::games::tictactoe::TurnUpdate;
use tokio::sync::mpsc;

/// Receives a notification after every state change.
///
/// Delivery is fire-and-forget: the game loops never wait on the renderer
/// and ignore failures to deliver.
pub trait RenderTarget<N> {
    /// Hands one notification to the renderer.
    fn render(&mut self, update: N);
}

/// Records notifications in order.
impl<N> RenderTarget<N> for Vec<N> {
    fn render(&mut self, update: N) {
        self.push(update);
    }
}

/// Forwards notifications to another task. A dropped receiver is ignored.
impl<N> RenderTarget<N> for mpsc::UnboundedSender<N> {
    fn render(&mut self, update: N) {
        let _ = self.send(update);
    }
}

/// What the turn loop reports for each input it handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// The session changed.
    Updated(TurnUpdate),
    /// A selection was refused; the session is unchanged.
    Rejected(GameError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_records_in_order() {
        let mut target: Vec<u32> = Vec::new();
        target.render(1);
        target.render(2);
        assert_eq!(target, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_channel_forwards_and_ignores_closed() {
        let (mut tx, mut rx) = mpsc::unbounded_channel();
        tx.render("moved");
        assert_eq!(rx.recv().await, Some("moved"));

        drop(rx);
        tx.render("dropped");
    }
}
