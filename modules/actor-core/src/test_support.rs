mod call_log;
mod recording_group;
mod recording_host;

pub use call_log::CallLog;
pub use recording_group::RecordingGroup;
pub use recording_host::{LaunchRecord, RecordingHost};
