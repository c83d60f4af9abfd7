use crate::arrangement::Arrangement;
use crate::types::Phase;

/// Read-only view of a round for presenters.
///
/// The target row is only present once the round has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub round_id: u32,
    pub seed: u32,
    pub item_count: usize,
    pub check_count: u32,
    pub phase: Phase,
    pub player: Arrangement,
    pub target: Option<Arrangement>,
    pub last_correct: Option<usize>,
    pub score: Option<u32>,
}

impl RoundSnapshot {
    pub fn clear(&mut self) {
        self.round_id = 0;
        self.seed = 0;
        self.item_count = 0;
        self.check_count = 0;
        self.phase = Phase::Playing;
        self.player.clear();
        self.target = None;
        self.last_correct = None;
        self.score = None;
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        Self {
            round_id: 0,
            seed: 0,
            item_count: 0,
            check_count: 0,
            phase: Phase::Playing,
            player: Arrangement::new(),
            target: None,
            last_correct: None,
            score: None,
        }
    }
}
