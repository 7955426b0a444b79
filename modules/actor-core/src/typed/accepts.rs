/// Marks a protocol as accepting messages of type `T`.
///
/// A protocol is an empty marker type; one `Accepts` impl per admissible
/// message type turns runtime dispatch misses into compile errors at the
/// send site:
///
/// ```
/// use spindle_actor_core::Accepts;
///
/// struct CounterProtocol;
///
/// impl Accepts<u32> for CounterProtocol {}
/// impl Accepts<&'static str> for CounterProtocol {}
/// ```
pub trait Accepts<T>: 'static {}
