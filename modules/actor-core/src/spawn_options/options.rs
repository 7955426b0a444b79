use core::fmt;
use core::ops::BitOr;

/// Spawn-time configuration flags.
///
/// Bitset semantics: flags combine with `|` and are tested with
/// [`SpawnOptions::contains`]. Validation happens at the start of every
/// spawn operation, before any actor is constructed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnOptions(u8);

impl SpawnOptions {
  /// No flags set.
  pub const NONE: Self = Self(0);
  /// The actor uses the blocking API and needs a dedicated execution context.
  pub const BLOCKING_API: Self = Self(1 << 0);
  /// The actor's mailbox honors message priorities.
  pub const PRIORITY_AWARE: Self = Self(1 << 1);
  /// The actor runs on a dedicated thread instead of the cooperative host.
  pub const DETACHED: Self = Self(1 << 2);
  /// The actor is registered but does not process messages until resumed.
  pub const LAZY_INIT: Self = Self(1 << 3);
  /// The actor is not published to any global registry.
  pub const HIDDEN: Self = Self(1 << 4);
  /// The spawning actor monitors the new actor. Illegal at top level.
  pub const MONITORED: Self = Self(1 << 5);
  /// The spawning actor links to the new actor. Illegal at top level.
  pub const LINKED: Self = Self(1 << 6);

  /// Returns `true` when every flag of `other` is set in `self`.
  #[must_use]
  pub const fn contains(self, other: Self) -> bool {
    self.0 & other.0 == other.0
  }

  /// Returns `true` when `BLOCKING_API` is set.
  #[must_use]
  pub const fn has_blocking_api_flag(self) -> bool {
    self.contains(Self::BLOCKING_API)
  }

  /// Returns `true` when `PRIORITY_AWARE` is set.
  #[must_use]
  pub const fn has_priority_aware_flag(self) -> bool {
    self.contains(Self::PRIORITY_AWARE)
  }

  /// Returns `true` when `DETACHED` is set.
  #[must_use]
  pub const fn has_detached_flag(self) -> bool {
    self.contains(Self::DETACHED)
  }

  /// Returns `true` when `LAZY_INIT` is set.
  #[must_use]
  pub const fn has_lazy_init_flag(self) -> bool {
    self.contains(Self::LAZY_INIT)
  }

  /// Returns `true` when `HIDDEN` is set.
  #[must_use]
  pub const fn has_hide_flag(self) -> bool {
    self.contains(Self::HIDDEN)
  }

  /// Returns `true` when `MONITORED` is set.
  #[must_use]
  pub const fn has_monitor_flag(self) -> bool {
    self.contains(Self::MONITORED)
  }

  /// Returns `true` when `LINKED` is set.
  #[must_use]
  pub const fn has_link_flag(self) -> bool {
    self.contains(Self::LINKED)
  }

  /// Returns `true` when neither `MONITORED` nor `LINKED` is set.
  ///
  /// Top-level spawns require this to hold; the flags are only legal when an
  /// existing actor relationship spawns on its own behalf.
  #[must_use]
  pub const fn is_unbound(self) -> bool {
    !self.has_monitor_flag() && !self.has_link_flag()
  }
}

impl BitOr for SpawnOptions {
  type Output = Self;

  fn bitor(self, rhs: Self) -> Self {
    Self(self.0 | rhs.0)
  }
}

impl Default for SpawnOptions {
  fn default() -> Self {
    Self::NONE
  }
}

impl fmt::Debug for SpawnOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    const NAMES: [(SpawnOptions, &str); 7] = [
      (SpawnOptions::BLOCKING_API, "BLOCKING_API"),
      (SpawnOptions::PRIORITY_AWARE, "PRIORITY_AWARE"),
      (SpawnOptions::DETACHED, "DETACHED"),
      (SpawnOptions::LAZY_INIT, "LAZY_INIT"),
      (SpawnOptions::HIDDEN, "HIDDEN"),
      (SpawnOptions::MONITORED, "MONITORED"),
      (SpawnOptions::LINKED, "LINKED"),
    ];
    let mut list = f.debug_tuple("SpawnOptions");
    let mut any = false;
    for (flag, name) in NAMES {
      if self.contains(flag) {
        list.field(&name);
        any = true;
      }
    }
    if !any {
      list.field(&"NONE");
    }
    list.finish()
  }
}
