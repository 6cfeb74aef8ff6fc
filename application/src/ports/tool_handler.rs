//! Tool handler port
//!
//! Defines the interface of an async tool executor: the function that
//! actually performs a tool's work once it is allowed to run.

use async_trait::async_trait;
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;
use toolgate_domain::{ExecutionContext, ToolError, ToolOutput};

/// Port for executing a single tool
///
/// Auto-executing tools carry their handler inline; confirmation-required
/// tools have theirs registered in the execution table and only run after
/// a human approved the invocation.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Run the tool with its arguments and the request's execution context
    async fn call(&self, args: Value, ctx: ExecutionContext) -> Result<ToolOutput, ToolError>;
}

/// Adapter turning an async closure into a [`ToolHandler`].
pub struct FnToolHandler<F> {
    f: F,
}

#[async_trait]
impl<F, Fut> ToolHandler for FnToolHandler<F>
where
    F: Fn(Value, ExecutionContext) -> Fut + Send + Sync,
    Fut: Future<Output = Result<ToolOutput, ToolError>> + Send,
{
    async fn call(&self, args: Value, ctx: ExecutionContext) -> Result<ToolOutput, ToolError> {
        (self.f)(args, ctx).await
    }
}

/// Wrap an async closure as a shared tool handler.
///
/// ```ignore
/// let handler = handler_fn(|args, _ctx| async move {
///     let city = args["city"].as_str().unwrap_or("somewhere");
///     Ok::<_, ToolError>(ToolOutput::text(format!("The weather in {city} is sunny")))
/// });
/// ```
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn ToolHandler>
where
    F: Fn(Value, ExecutionContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ToolOutput, ToolError>> + Send + 'static,
{
    Arc::new(FnToolHandler { f })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use toolgate_domain::SessionId;

    fn ctx() -> ExecutionContext {
        ExecutionContext::new(SessionId::parse("s1").unwrap(), Arc::from(Vec::new()), "c1")
    }

    #[tokio::test]
    async fn test_handler_fn_passes_args_and_context() {
        let handler = handler_fn(|args: Value, ctx: ExecutionContext| async move {
            Ok::<_, ToolError>(ToolOutput::text(format!(
                "{} for {}",
                args["city"].as_str().unwrap_or_default(),
                ctx.tool_call_id
            )))
        });

        let output = handler.call(json!({"city": "Paris"}), ctx()).await.unwrap();
        assert_eq!(output.as_text(), Some("Paris for c1"));
    }

    #[tokio::test]
    async fn test_handler_fn_propagates_errors() {
        let handler = handler_fn(|_args: Value, _ctx: ExecutionContext| async move {
            Err::<ToolOutput, _>(ToolError::execution_failed("station offline"))
        });

        let err = handler.call(Value::Null, ctx()).await.unwrap_err();
        assert_eq!(err.code, "EXECUTION_FAILED");
    }
}
