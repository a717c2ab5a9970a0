//! Navigation requests
//!
//! Views never switch routes themselves. They push a [`Route`] through a
//! [`Navigator`] and the shell activates it on its next drain.

use tokio::sync::mpsc;

use crate::routing::Route;

pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// [`Navigator`] backed by an unbounded channel
#[derive(Debug, Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Route>,
}

impl ChannelNavigator {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Route>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, route: Route) {
        tracing::debug!(%route, "Navigation requested");
        if self.tx.send(route).is_err() {
            tracing::warn!("Navigation dropped: receiver closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_delivered_in_order() {
        let (navigator, mut rx) = ChannelNavigator::channel();
        navigator.navigate(Route::Create);
        navigator.navigate(Route::List);

        assert_eq!(rx.try_recv().unwrap(), Route::Create);
        assert_eq!(rx.try_recv().unwrap(), Route::List);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_closed_receiver_does_not_panic() {
        let (navigator, rx) = ChannelNavigator::channel();
        drop(rx);
        navigator.navigate(Route::List);
    }
}
