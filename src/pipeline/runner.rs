//! Activity runner.
//!
//! Per invocation:
//! `Building → (BuildFailed | Built) → Dispatching → (DispatchFailed | Dispatched) → Responding`.
//! Every branch ends in exactly one `ResponseEnvelope`. The request builder runs once,
//! dispatch runs at most once, nothing is retried. A panic at any stage is caught here and
//! answered as an unclassified failure.

use std::any::Any;
use std::future::Future;
use std::panic::{AssertUnwindSafe, catch_unwind};

use anyhow::anyhow;
use futures::FutureExt;
use serde::Serialize;

use crate::pipeline::{error::ActivityError, response::ResponseEnvelope};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Build,
    Dispatch,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Stage::Build => "build",
            Stage::Dispatch => "dispatch",
        }
    }
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(panic: &(dyn Any + Send)) -> &str {
    panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("<non-string panic payload>")
}

fn panicked(stage: Stage, panic: Box<dyn Any + Send>) -> ActivityError {
    ActivityError::Unexpected(anyhow!(
        "panicked during {}: {}",
        stage.as_str(),
        panic_message(panic.as_ref())
    ))
}

/// Runs one activity invocation against an explicitly supplied component provider.
#[derive(Debug, Clone)]
pub struct ActivityRunner<P> {
    provider: P,
}

impl<P> ActivityRunner<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub async fn run<Req, Res, B, D, Fut>(self, build: B, dispatch: D) -> ResponseEnvelope
    where
        B: FnOnce() -> Result<Req, ActivityError>,
        D: FnOnce(Req, P) -> Fut,
        Fut: Future<Output = Result<Res, ActivityError>>,
        Res: Serialize,
    {
        let request_type = std::any::type_name::<Req>();

        let built = catch_unwind(AssertUnwindSafe(build))
            .unwrap_or_else(|panic| Err(panicked(Stage::Build, panic)));
        let request = match built {
            Ok(request) => request,
            Err(err) => return respond::<Res>(request_type, Stage::Build, Err(err)),
        };

        let provider = self.provider;
        let outcome = match catch_unwind(AssertUnwindSafe(|| dispatch(request, provider))) {
            Ok(fut) => AssertUnwindSafe(fut)
                .catch_unwind()
                .await
                .unwrap_or_else(|panic| Err(panicked(Stage::Dispatch, panic))),
            Err(panic) => Err(panicked(Stage::Dispatch, panic)),
        };
        respond(request_type, Stage::Dispatch, outcome)
    }
}

fn respond<Res: Serialize>(
    request_type: &'static str,
    stage: Stage,
    outcome: Result<Res, ActivityError>,
) -> ResponseEnvelope {
    catch_unwind(AssertUnwindSafe(|| render(request_type, stage, outcome))).unwrap_or_else(
        |panic| {
            tracing::error!(
                request = request_type,
                panic = panic_message(panic.as_ref()),
                "rendering the response panicked"
            );
            ResponseEnvelope::server_error()
        },
    )
}

fn render<Res: Serialize>(
    request_type: &'static str,
    stage: Stage,
    outcome: Result<Res, ActivityError>,
) -> ResponseEnvelope {
    match outcome {
        Ok(result) => {
            tracing::debug!(request = request_type, "activity succeeded");
            ResponseEnvelope::success(&result)
        }
        Err(err) if err.is_classified() => {
            tracing::warn!(
                request = request_type,
                stage = stage.as_str(),
                code = err.code(),
                error = %err,
                "activity failed"
            );
            ResponseEnvelope::from_error(&err)
        }
        Err(err) => {
            tracing::error!(
                request = request_type,
                stage = stage.as_str(),
                error = ?err,
                "activity failed unexpectedly"
            );
            ResponseEnvelope::from_error(&err)
        }
    }
}
