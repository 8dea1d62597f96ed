use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;

/// Coupled sender/receiver pair. Producers get clones of the sender,
/// the owner keeps the single receiver.
#[derive(Debug)]
pub struct Channel<T> {
    tx: UnboundedSender<T>,
    rx: UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl<T> Channel<T> {
    pub fn sender(&self) -> UnboundedSender<T> {
        self.tx.clone()
    }
    /// Drops the owner's sender so the receiver closes once every
    /// producer has hung up.
    pub fn into_rx(self) -> UnboundedReceiver<T> {
        self.rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn receiver_closes_after_producers_leave() {
        let channel = Channel::<u8>::default();
        let tx = channel.sender();
        let mut rx = channel.into_rx();
        tx.send(7).unwrap();
        drop(tx);
        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(rx.recv().await, None);
    }
}
