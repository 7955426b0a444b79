use std::sync::Arc;

use crate::messaging::Message;

/// Normalized handler stored inside a behavior: probes a message and either
/// produces a reply or declines.
pub(crate) type HandlerCase = Arc<dyn Fn(&Message) -> Option<Message> + Send + Sync>;

/// A single `(type-guard, closure)` pair matching an incoming message to a
/// response.
pub struct MessageCase {
  handler: HandlerCase,
}

impl MessageCase {
  /// Wraps an already-normalized handler closure.
  ///
  /// The closure must return `None` to decline a message, which makes
  /// dispatch fall through to the next case.
  pub fn new<F>(handler: F) -> Self
  where
    F: Fn(&Message) -> Option<Message> + Send + Sync + 'static, {
    Self { handler: Arc::new(handler) }
  }

  pub(crate) fn into_handler(self) -> HandlerCase {
    self.handler
  }
}

/// Conversion applied to a handler closure's return value.
///
/// Closed set: `()` signals a match with an empty (unit) reply, [`Message`]
/// is a direct reply, and `Option<Message>` lets the handler decline after
/// the type guard already matched.
pub trait Reply {
  /// Converts the handler result into an optional dispatch result.
  fn into_reply(self) -> Option<Message>;
}

impl Reply for () {
  fn into_reply(self) -> Option<Message> {
    Some(Message::unit())
  }
}

impl Reply for Message {
  fn into_reply(self) -> Option<Message> {
    Some(self)
  }
}

impl Reply for Option<Message> {
  fn into_reply(self) -> Option<Message> {
    self
  }
}

/// Builds a [`MessageCase`] guarded by the payload type `T`.
///
/// The case matches when the payload downcasts to `T` and the closure yields
/// a non-empty [`Reply`].
///
/// # Arguments
/// * `handler` - Closure receiving the matched payload
pub fn on<T, R, F>(handler: F) -> MessageCase
where
  T: Clone + Send + 'static,
  R: Reply,
  F: Fn(T) -> R + Send + Sync + 'static, {
  MessageCase::new(move |message: &Message| {
    message.downcast_ref::<T>().cloned().and_then(|payload| handler(payload).into_reply())
  })
}
