//! Middleware trait and pipeline composition

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::Full;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Body type alias
pub type Body = Full<Bytes>;

/// Middleware trait for request/response processing
#[async_trait]
pub trait Middleware: Send + Sync + fmt::Debug {
    /// Process a request
    ///
    /// # Arguments
    ///
    /// * `req` - The incoming HTTP request
    /// * `next` - The remainder of the pipeline
    ///
    /// # Returns
    ///
    /// Returns the HTTP response or an error
    async fn call(&self, req: Request<Body>, next: Next) -> Result<Response<Body>>;
}

/// Type alias for the terminal handler function
pub type HandlerFn = Box<
    dyn Fn(Request<Body>) -> Pin<Box<dyn Future<Output = Result<Response<Body>>> + Send>>
        + Send
        + Sync,
>;

/// An ordered chain of middleware stages terminated by a handler.
///
/// Stages run in insertion order; each stage decides whether and how to
/// forward the request to the rest of the chain via [`Next::run`].
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new(|req| async move {
///     Ok(Response::new(Body::from("hello")))
/// })
/// .stage(Arc::new(RequestDecompression::new()));
///
/// let response = pipeline.run(request).await?;
/// ```
pub struct Pipeline {
    stages: Vec<Arc<dyn Middleware>>,
    handler: Arc<HandlerFn>,
}

impl Pipeline {
    /// Create a pipeline with only a terminal handler
    pub fn new<F, Fut>(handler: F) -> Self
    where
        F: Fn(Request<Body>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Body>>> + Send + 'static,
    {
        Self {
            stages: Vec::new(),
            handler: Arc::new(Box::new(move |req| Box::pin(handler(req)))),
        }
    }

    /// Append a stage to the end of the chain
    #[must_use]
    pub fn stage(mut self, stage: Arc<dyn Middleware>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Run a request through every stage and the terminal handler
    pub async fn run(&self, req: Request<Body>) -> Result<Response<Body>> {
        let next = Next {
            stages: self.stages.clone().into(),
            index: 0,
            handler: Arc::clone(&self.handler),
        };
        next.run(req).await
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stages.len())
            .finish()
    }
}

/// Represents the remainder of the pipeline after the current stage
pub struct Next {
    stages: Arc<[Arc<dyn Middleware>]>,
    index: usize,
    handler: Arc<HandlerFn>,
}

impl Next {
    /// Run the next stage, or the terminal handler if none remain
    pub async fn run(self, req: Request<Body>) -> Result<Response<Body>> {
        if let Some(stage) = self.stages.get(self.index).cloned() {
            let next = Self {
                stages: self.stages,
                index: self.index + 1,
                handler: self.handler,
            };
            stage.call(req, next).await
        } else {
            (self.handler)(req).await
        }
    }
}

impl Clone for Next {
    fn clone(&self) -> Self {
        Self {
            stages: Arc::clone(&self.stages),
            index: self.index,
            handler: Arc::clone(&self.handler),
        }
    }
}

impl fmt::Debug for Next {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Next")
            .field("index", &self.index)
            .field("remaining", &(self.stages.len() - self.index))
            .finish()
    }
}
