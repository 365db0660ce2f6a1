pub const FETCH: &str = "fetch";
pub const SCAN: &str = "scan";
pub const CONFIG: &str = "config";
pub const UI: &str = "ui";

pub const ALL: [&str; 4] = [FETCH, SCAN, CONFIG, UI];
