//! `tower` integration: run a [`ResponseNotifier`] on every successful
//! response of an `http` client stack.

use super::{AlertService, ResponseNotifier};
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};
use tower::{Layer, Service};

type BoxFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

#[derive(Debug)]
pub struct NotificationLayer<S> {
    notifier: Arc<ResponseNotifier<S>>,
}

impl<S: AlertService> NotificationLayer<S> {
    pub fn new(notifier: ResponseNotifier<S>) -> Self {
        Self {
            notifier: Arc::new(notifier),
        }
    }
}

impl<S> Clone for NotificationLayer<S> {
    fn clone(&self) -> Self {
        Self {
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<Inner, S> Layer<Inner> for NotificationLayer<S> {
    type Service = NotificationService<Inner, S>;

    fn layer(&self, inner: Inner) -> Self::Service {
        NotificationService {
            inner,
            notifier: Arc::clone(&self.notifier),
        }
    }
}

/// Service produced by [`NotificationLayer`]. Errors from the inner service
/// and non-2xx responses are passed through without notification.
#[derive(Debug)]
pub struct NotificationService<Inner, S> {
    inner: Inner,
    notifier: Arc<ResponseNotifier<S>>,
}

impl<Inner: Clone, S> Clone for NotificationService<Inner, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<Inner, S, Request, ResBody> Service<Request> for NotificationService<Inner, S>
where
    Inner: Service<Request, Response = http::Response<ResBody>>,
    Inner::Future: Send + 'static,
    Inner::Error: 'static,
    ResBody: 'static,
    S: AlertService + 'static,
{
    type Response = http::Response<ResBody>;
    type Error = Inner::Error;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, request: Request) -> Self::Future {
        let future = self.inner.call(request);
        let notifier = Arc::clone(&self.notifier);

        Box::pin(async move {
            let response = future.await?;
            if response.status().is_success() {
                Ok(notifier.on_response(response))
            } else {
                Ok(response)
            }
        })
    }
}
