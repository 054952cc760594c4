use party_types::{Player, RankGroup};

/// Turns the frozen score list into tie-grouped final standings.
pub struct RankingComputer;

impl RankingComputer {
    /// Competition ranking: one group per distinct point value, descending.
    /// Tied players share a rank and keep their original order; each group's
    /// rank is one plus the number of distinct values above it, so two
    /// players tied for first are both rank 1 and the next group is rank 2.
    pub fn compute(players: &[Player], points: &[i32]) -> Vec<RankGroup> {
        debug_assert_eq!(players.len(), points.len());

        let mut distinct: Vec<i32> = points.to_vec();
        distinct.sort_unstable_by(|a, b| b.cmp(a));
        distinct.dedup();

        distinct
            .into_iter()
            .enumerate()
            .map(|(position, value)| RankGroup {
                rank: (position + 1) as u32,
                points: value,
                players: players
                    .iter()
                    .zip(points)
                    .filter(|&(_, &p)| p == value)
                    .map(|(player, _)| player.clone())
                    .collect(),
            })
            .collect()
    }
}
