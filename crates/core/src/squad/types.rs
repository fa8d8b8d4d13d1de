use serde::{Deserialize, Serialize};

/// One registered team in the squad registry.
///
/// Records are immutable once appended; `members` may span several lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquadRecord {
    pub team: String,
    pub members: String,
}

impl SquadRecord {
    pub fn new(team: impl Into<String>, members: impl Into<String>) -> Self {
        Self {
            team: team.into(),
            members: members.into(),
        }
    }
}

/// Reverses registry order for newest-first presentation.
pub fn newest_first(mut records: Vec<SquadRecord>) -> Vec<SquadRecord> {
    records.reverse();
    records
}
