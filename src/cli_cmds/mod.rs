mod core;

pub(crate) use self::core::{cmd_change, cmd_current, cmd_scan, cmd_stats};
