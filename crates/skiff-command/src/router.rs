//! Command router
//!
//! Shared upstream stages (categorize, filter, parse) feed per-subscriber
//! channels. Subscriptions are independent: dropping one removes only that
//! subscription, and a fault inside one subscriber's task never touches
//! the shared stages or sibling subscribers.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::UnboundedReceiverStream;

use skiff_cache::SnapshotCell;
use skiff_model::Message;

use crate::command::{
    CommandEvent, CommandInvocation, CommandSpec, FilteredCommand, ParseFailure,
};

struct Subscription {
    spec: CommandSpec,
    sender: mpsc::UnboundedSender<CommandEvent>,
}

/// Routes chat messages to command subscribers
pub struct CommandRouter {
    prefix: String,
    case_insensitive: bool,
    cell: Arc<SnapshotCell>,
    subscriptions: Mutex<Vec<Subscription>>,
}

impl CommandRouter {
    #[must_use]
    pub fn new(prefix: impl Into<String>, cell: Arc<SnapshotCell>) -> Self {
        Self {
            prefix: prefix.into(),
            case_insensitive: true,
            cell,
            subscriptions: Mutex::new(Vec::new()),
        }
    }

    /// Match command names case-sensitively
    #[must_use]
    pub fn case_sensitive(mut self) -> Self {
        self.case_insensitive = false;
        self
    }

    /// Register a subscriber; its events arrive on the returned stream
    ///
    /// Each subscriber sees its own matching messages in arrival order.
    /// Dropping the stream withdraws only this subscription.
    pub fn subscribe(&self, spec: CommandSpec) -> CommandEvents {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscriptions.lock().push(Subscription { spec, sender });
        CommandEvents { receiver }
    }

    /// Route one message through categorize, filter, and parse
    ///
    /// Non-command messages are dropped silently; everything else reaches
    /// every matching subscription as a [`CommandEvent`].
    pub fn handle_message(&self, message: &Message) {
        // Categorize: prefix plus first token
        let Some(body) = message.content.strip_prefix(&self.prefix) else {
            return;
        };
        let Some(token) = body.split_whitespace().next() else {
            return;
        };
        let rest = body[body.find(token).unwrap_or(0) + token.len()..].trim_start();

        let snapshot = self.cell.current();

        let mut subscriptions = self.subscriptions.lock();
        subscriptions.retain(|sub| {
            if !sub.spec.matches(token, self.case_insensitive) {
                return true;
            }

            // Filter: collect every rejection, in filter order
            let failed: Vec<&'static str> = sub
                .spec
                .filters
                .iter()
                .filter(|f| !f.check(&snapshot, message))
                .map(|f| f.name())
                .collect();

            let event = if failed.is_empty() {
                // Parse only once all filters pass
                match sub.spec.parser.as_ref().map(|p| p.parse(rest)) {
                    Some(Err(error)) => CommandEvent::ParseFailed(ParseFailure {
                        message: message.clone(),
                        error,
                    }),
                    parsed => CommandEvent::Invocation(CommandInvocation {
                        message: message.clone(),
                        snapshot: Arc::clone(&snapshot),
                        args: parsed.and_then(Result::ok),
                    }),
                }
            } else {
                CommandEvent::Filtered(FilteredCommand {
                    message: message.clone(),
                    failed,
                })
            };

            // A closed channel means the subscriber is gone; drop it lazily
            match sub.sender.send(event) {
                Ok(()) => true,
                Err(_) => {
                    tracing::debug!(command = %sub.spec.name, "subscriber gone; removing");
                    false
                }
            }
        });
    }

    /// Drive the router from a message stream until it closes
    pub async fn run(&self, mut messages: mpsc::Receiver<Message>) {
        while let Some(message) = messages.recv().await {
            self.handle_message(&message);
        }
        tracing::debug!("message stream closed; router stopping");
    }
}

/// A subscriber's private event stream
pub struct CommandEvents {
    receiver: mpsc::UnboundedReceiver<CommandEvent>,
}

impl CommandEvents {
    /// Receive the next event for this subscription
    pub async fn recv(&mut self) -> Option<CommandEvent> {
        self.receiver.recv().await
    }

    /// Expose the subscription as a [`tokio_stream::Stream`]
    #[must_use]
    pub fn into_stream(self) -> UnboundedReceiverStream<CommandEvent> {
        UnboundedReceiverStream::new(self.receiver)
    }

    /// Spawn a task consuming this subscription
    ///
    /// The handle is the subscriber's completion signal: a panic inside
    /// `handler` fails only this handle, never the router or siblings.
    pub fn spawn_for_each<F>(mut self, mut handler: F) -> JoinHandle<()>
    where
        F: FnMut(CommandEvent) + Send + 'static,
    {
        tokio::spawn(async move {
            while let Some(event) = self.recv().await {
                handler(event);
            }
        })
    }
}
