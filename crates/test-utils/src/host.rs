use std::collections::BTreeMap;

use building_blocker::config::GameMode;
use building_blocker::startup::FacilityHost;

/// A fake host that:
/// - reports a fixed game mode
/// - records the last visibility set for each facility
/// - counts `set_visible` calls
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub mode: Option<GameMode>,
    pub visibility: BTreeMap<String, bool>,
    pub calls: usize,
}

impl RecordingHost {
    pub fn new(mode: Option<GameMode>, facilities: &[&str]) -> Self {
        Self {
            mode,
            visibility: facilities.iter().map(|f| (f.to_string(), true)).collect(),
            calls: 0,
        }
    }

    pub fn is_visible(&self, facility: &str) -> Option<bool> {
        self.visibility.get(facility).copied()
    }
}

impl FacilityHost for RecordingHost {
    fn current_mode(&self) -> Option<GameMode> {
        self.mode
    }

    fn facilities(&self) -> Vec<String> {
        self.visibility.keys().cloned().collect()
    }

    fn set_visible(&mut self, facility: &str, visible: bool) {
        self.calls += 1;
        self.visibility.insert(facility.to_string(), visible);
    }
}
