use core::any::{type_name, Any};
use core::fmt;

/// Type-erased message payload passed through behavior dispatch.
///
/// Wire formats are out of scope here; `Message` is only the in-process
/// carrier handed to [`crate::behavior::Behavior::invoke`] and returned as a
/// dispatch result.
pub struct Message {
  payload: Box<dyn Any + Send>,
  type_name: &'static str,
}

impl Message {
  /// Wraps a payload value into a `Message`.
  #[must_use]
  pub fn new<T>(value: T) -> Self
  where
    T: Send + 'static, {
    Self {
      payload: Box::new(value),
      type_name: type_name::<T>(),
    }
  }

  /// Creates the empty (unit) message produced by handlers that return `()`.
  #[must_use]
  pub fn unit() -> Self {
    Self::new(())
  }

  /// Returns `true` when the payload is of type `T`.
  #[must_use]
  pub fn is<T>(&self) -> bool
  where
    T: 'static, {
    self.payload.is::<T>()
  }

  /// Returns `true` when this is the unit message.
  #[must_use]
  pub fn is_unit(&self) -> bool {
    self.is::<()>()
  }

  /// Borrows the payload as `T`, if it has that type.
  #[must_use]
  pub fn downcast_ref<T>(&self) -> Option<&T>
  where
    T: 'static, {
    self.payload.downcast_ref::<T>()
  }

  /// Extracts the payload as `T`, returning the message unchanged on a type
  /// mismatch.
  ///
  /// # Errors
  /// Returns `Err(self)` when the payload is not of type `T`.
  pub fn downcast<T>(self) -> Result<T, Self>
  where
    T: Send + 'static, {
    let type_name = self.type_name;
    match self.payload.downcast::<T>() {
      Ok(value) => Ok(*value),
      Err(payload) => Err(Self { payload, type_name }),
    }
  }
}

impl fmt::Debug for Message {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Message").field("type", &self.type_name).finish()
  }
}
