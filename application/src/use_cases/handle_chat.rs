//! Handle Chat use case
//!
//! Request entry point: checks the session, reconciles the transcript and
//! hands the result to the inference step. Stream failures are reported on
//! the side channel as an `error` event before the error is returned, so
//! the transport can abort the response.

use super::reconcile::{ReconcileError, ReconcileOutput, ReconcileTranscriptUseCase};
use crate::config::ReconcileParams;
use crate::ports::inference::InferencePort;
use crate::ports::result_stream::ResultStreamWriter;
use crate::ports::tool_catalog::ToolCatalogPort;
use std::sync::Arc;
use toolgate_domain::{Message, RequestContext, StreamEvent, to_core_messages};
use tracing::{info, warn};

/// Use case for handling one chat request
pub struct HandleChatUseCase<T: ToolCatalogPort, I: InferencePort> {
    catalog: Arc<T>,
    inference: Arc<I>,
    reconciler: ReconcileTranscriptUseCase<T>,
}

impl<T: ToolCatalogPort, I: InferencePort> HandleChatUseCase<T, I> {
    pub fn new(catalog: Arc<T>, inference: Arc<I>) -> Self {
        let reconciler = ReconcileTranscriptUseCase::new(Arc::clone(&catalog));
        Self {
            catalog,
            inference,
            reconciler,
        }
    }

    pub fn with_params(mut self, params: ReconcileParams) -> Self {
        self.reconciler = self.reconciler.with_params(params);
        self
    }

    pub async fn execute(
        &self,
        ctx: RequestContext,
        messages: Vec<Message>,
        writer: &dyn ResultStreamWriter,
    ) -> Result<ReconcileOutput, ReconcileError> {
        let Some(session) = ctx.session() else {
            warn!("Chat request without an active session");
            let err = ReconcileError::MissingSession;
            writer.write(StreamEvent::error(err.to_string()));
            return Err(err);
        };

        info!(session = %session, messages = messages.len(), "Handling chat request");

        let output = match self.reconciler.execute(session, messages, writer).await {
            Ok(output) => output,
            Err(err) => {
                writer.write(StreamEvent::error(err.to_string()));
                return Err(err);
            }
        };

        let history = to_core_messages(&output.messages);
        if let Err(err) = self
            .inference
            .respond(&history, self.catalog.tool_spec(), writer)
            .await
        {
            warn!(session = %session, error = %err, "Inference failed");
            let err = ReconcileError::from(err);
            writer.write(StreamEvent::error(err.to_string()));
            return Err(err);
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::inference::GatewayError;
    use crate::ports::tool_handler::{ToolHandler, handler_fn};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Mutex;
    use toolgate_domain::{
        ApprovalVerdict, CoreContent, CoreMessage, Part, SessionId, ToolDefinition, ToolError,
        ToolInvocation, ToolOutput, ToolSpec,
    };

    struct WeatherCatalog {
        spec: ToolSpec,
        handler: Arc<dyn ToolHandler>,
    }

    impl WeatherCatalog {
        fn new() -> Self {
            Self {
                spec: ToolSpec::new().register(ToolDefinition::new(
                    "getWeatherInformation",
                    "Show the weather in a given city",
                )),
                handler: handler_fn(|_args: Value, _ctx| async move {
                    Ok::<_, ToolError>(ToolOutput::text("The weather in Paris is sunny"))
                }),
            }
        }
    }

    impl ToolCatalogPort for WeatherCatalog {
        fn tool_spec(&self) -> &ToolSpec {
            &self.spec
        }

        fn requires_confirmation(&self, name: &str) -> bool {
            name == "getWeatherInformation"
        }

        fn execution(&self, name: &str) -> Option<Arc<dyn ToolHandler>> {
            self.requires_confirmation(name)
                .then(|| Arc::clone(&self.handler))
        }

        fn auto_executor(&self, _name: &str) -> Option<Arc<dyn ToolHandler>> {
            None
        }
    }

    /// Records the history it was given and optionally fails
    struct ScriptedInference {
        seen: Mutex<Option<Vec<CoreMessage>>>,
        fail: bool,
    }

    impl ScriptedInference {
        fn new(fail: bool) -> Self {
            Self {
                seen: Mutex::new(None),
                fail,
            }
        }
    }

    #[async_trait]
    impl InferencePort for ScriptedInference {
        async fn respond(
            &self,
            history: &[CoreMessage],
            tools: &ToolSpec,
            _writer: &dyn ResultStreamWriter,
        ) -> Result<(), GatewayError> {
            assert!(tools.contains("getWeatherInformation"));
            *self.seen.lock().unwrap() = Some(history.to_vec());
            if self.fail {
                Err(GatewayError::ConnectionError("refused".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct CollectingWriter {
        events: Mutex<Vec<StreamEvent>>,
    }

    impl ResultStreamWriter for CollectingWriter {
        fn write(&self, event: StreamEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn approved_transcript() -> Vec<Message> {
        vec![
            Message::user("u1", "What's the weather in Paris?"),
            Message::assistant("a1").with_part(Part::tool_invocation(
                ToolInvocation::call("c1", "getWeatherInformation", json!({"city": "Paris"}))
                    .with_verdict(ApprovalVerdict::Approved),
            )),
        ]
    }

    fn ctx() -> RequestContext {
        RequestContext::new(SessionId::parse("s-42").unwrap())
    }

    #[tokio::test]
    async fn test_missing_session_emits_error_event() {
        let inference = Arc::new(ScriptedInference::new(false));
        let use_case = HandleChatUseCase::new(Arc::new(WeatherCatalog::new()), Arc::clone(&inference));
        let writer = CollectingWriter::default();

        let err = use_case
            .execute(RequestContext::anonymous(), approved_transcript(), &writer)
            .await
            .unwrap_err();

        assert!(matches!(err, ReconcileError::MissingSession));
        let events = writer.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].is_error());
        assert!(inference.seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_reconciled_history_is_forwarded() {
        let inference = Arc::new(ScriptedInference::new(false));
        let use_case = HandleChatUseCase::new(Arc::new(WeatherCatalog::new()), Arc::clone(&inference));
        let writer = CollectingWriter::default();

        let output = use_case
            .execute(ctx(), approved_transcript(), &writer)
            .await
            .unwrap();
        assert_eq!(output.resolved, vec!["c1".to_string()]);

        let seen = inference.seen.lock().unwrap().clone().unwrap();
        let has_result = seen.iter().flat_map(|m| m.content.iter()).any(|c| {
            matches!(c, CoreContent::ToolResult { tool_call_id, .. } if tool_call_id == "c1")
        });
        assert!(has_result);

        let events = writer.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].tool_call_id(), Some("c1"));
    }

    #[tokio::test]
    async fn test_inference_failure_is_reported_on_stream() {
        let inference = Arc::new(ScriptedInference::new(true));
        let use_case = HandleChatUseCase::new(Arc::new(WeatherCatalog::new()), inference);
        let writer = CollectingWriter::default();

        let err = use_case
            .execute(ctx(), approved_transcript(), &writer)
            .await
            .unwrap_err();

        assert!(matches!(err, ReconcileError::Inference(_)));
        let events = writer.events.lock().unwrap();
        // The tool result was already streamed before inference failed
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].tool_call_id(), Some("c1"));
        assert!(events[1].is_error());
    }
}
