use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

#[cfg(unix)]
use tokio::signal::unix::Signal;

/// Resolves when the process receives a shutdown signal.
pub struct SignalHandler {
    #[cfg(unix)]
    signals: smallvec::SmallVec<[Signal; 3]>,
    #[cfg(not(unix))]
    ctrl_c: Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>,
}

impl SignalHandler {
    #[cfg(unix)]
    pub fn new() -> Self {
        use tokio::signal::unix::{signal, SignalKind};

        trace!("registering signal listeners");

        let signals = [
            SignalKind::interrupt(),
            SignalKind::terminate(),
            SignalKind::quit(),
        ]
        .into_iter()
        .filter_map(|kind| {
            signal(kind)
                .inspect_err(|err| error!("failed to listen for {:?}: {}", kind, err))
                .ok()
        })
        .collect();

        SignalHandler { signals }
    }

    #[cfg(not(unix))]
    pub fn new() -> Self {
        trace!("registering ctrl-c listener");

        SignalHandler {
            ctrl_c: Box::pin(tokio::signal::ctrl_c()),
        }
    }
}

impl Default for SignalHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Future for SignalHandler {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        #[cfg(unix)]
        let received = self
            .signals
            .iter_mut()
            .any(|signal| signal.poll_recv(cx).is_ready());

        #[cfg(not(unix))]
        let received = self.ctrl_c.as_mut().poll(cx).is_ready();

        if received {
            info!("shutdown signal received");
            return Poll::Ready(());
        }

        Poll::Pending
    }
}
