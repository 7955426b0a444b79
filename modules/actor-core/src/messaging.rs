mod message;
#[cfg(test)]
mod tests;

pub use message::Message;
