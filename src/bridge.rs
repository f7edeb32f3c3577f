use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use rust_socketio::asynchronous::{Client, ClientBuilder};
use rust_socketio::{Event, Payload};

use crate::config::HarnessConfig;
use crate::error::HarnessError;
use crate::message::{client_message, server_message};

/// Owns the single connection to the messaging endpoint.
///
/// All inbound handlers are registered before the connection attempt and
/// only write to the diagnostic log. The handle is read-only after
/// creation; the two send methods are the only way anything is emitted.
pub struct Bridge {
    socket: Client,
}

impl Bridge {
    /// Opens the connection described by `config` on the root namespace.
    ///
    /// Exactly one connection attempt is made here. Reconnect behavior
    /// after that is whatever the transport does on its own.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Connect`] if the attempt fails.
    pub async fn connect(config: &HarnessConfig) -> Result<Self, HarnessError> {
        let socket = ClientBuilder::new(config.endpoint.as_str())
            .namespace("/")
            .on(
                server_message::STRING_TO_CLIENT,
                log_handler(server_message::STRING_TO_CLIENT),
            )
            .on(
                server_message::STRUCT_TO_CLIENT,
                log_handler(server_message::STRUCT_TO_CLIENT),
            )
            .on(Event::Connect, |_, _| {
                async move {
                    tracing::info!("transport connected");
                }
                .boxed()
            })
            .on(Event::Error, |payload, _| {
                async move {
                    tracing::warn!(detail = %render_payload(&payload), "transport error");
                }
                .boxed()
            })
            .connect()
            .await
            .map_err(|e| HarnessError::Connect {
                endpoint: config.endpoint.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { socket })
    }

    /// Emits `text` on the string channel, verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Emit`] if the transport rejects the send.
    pub async fn send_text(&self, text: &str) -> Result<(), HarnessError> {
        tracing::info!(text, "sending");
        self.emit(
            client_message::STRING_TO_SERVER,
            client_message::string_payload(text),
        )
        .await
    }

    /// Emits the fixed sample record on the struct channel. Prompt state
    /// is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Emit`] if the transport rejects the send.
    pub async fn send_record(&self) -> Result<(), HarnessError> {
        let record = serde_json::to_value(client_message::SampleRecord::sample())
            .expect("sample record serializes to JSON");
        self.emit(client_message::STRUCT_TO_SERVER, record).await
    }

    /// Disconnects and drops the handle. Errors during teardown are not
    /// interesting to a harness that is already leaving.
    pub async fn shutdown(self) {
        let _ = self.socket.disconnect().await;
    }

    async fn emit(
        &self,
        channel: &'static str,
        payload: serde_json::Value,
    ) -> Result<(), HarnessError> {
        self.socket
            .emit(channel, payload)
            .await
            .map_err(|e| HarnessError::Emit {
                channel,
                reason: e.to_string(),
            })
    }
}

/// Handler for a named server channel: one log entry per delivery, nothing
/// else.
fn log_handler(
    channel: &'static str,
) -> impl FnMut(Payload, Client) -> BoxFuture<'static, ()> + Send + Sync + 'static {
    move |payload, _| {
        async move {
            tracing::info!(channel, payload = %render_payload(&payload), "server event");
        }
        .boxed()
    }
}

/// Renders an inbound payload for the log without constraining its shape.
fn render_payload(payload: &Payload) -> String {
    match payload {
        Payload::Text(values) => values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", "),
        Payload::Binary(bytes) => format!("<{} binary bytes>", bytes.len()),
        _ => "<unsupported payload>".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_payloads_render_as_json() {
        let payload = Payload::Text(vec![json!("hello")]);
        assert_eq!(render_payload(&payload), "\"hello\"");
    }

    #[test]
    fn multi_argument_payloads_are_joined() {
        let payload = Payload::Text(vec![json!({"field1": "value1"}), json!(7)]);
        assert_eq!(render_payload(&payload), "{\"field1\":\"value1\"}, 7");
    }

    #[test]
    fn binary_payloads_render_as_length() {
        let payload = Payload::Binary(vec![0u8, 1, 2, 3].into());
        assert_eq!(render_payload(&payload), "<4 binary bytes>");
    }
}
