// Previous-rank resolution for leaderboards
use crate::domain::leaderboard::Leaderboard;

/// Stamp every item of `current` with its 1-based position in `previous`.
///
/// Labels match exactly; the first match in `previous` wins. Items that were
/// not on the previous board get no previous rank.
pub fn resolve_previous_ranks(current: &mut Leaderboard, previous: &Leaderboard) {
    let mut matched = 0usize;

    for item in &mut current.items {
        item.previous_rank = previous
            .items
            .iter()
            .position(|old| old.label == item.label)
            .and_then(|index| u32::try_from(index + 1).ok());

        if item.previous_rank.is_some() {
            matched += 1;
        }
    }

    tracing::debug!(
        items = current.items.len(),
        matched,
        "resolved leaderboard previous ranks"
    );
}

impl Leaderboard {
    pub fn calculate_previous_ranks(&mut self, previous: &Leaderboard) {
        resolve_previous_ranks(self, previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::leaderboard::LeaderboardItem;
    use crate::domain::widget::Widget;

    fn board(labels: &[&str]) -> Leaderboard {
        Leaderboard::new(labels.iter().map(|label| LeaderboardItem::labelled(*label)))
    }

    fn ranks(board: &Leaderboard) -> Vec<Option<u32>> {
        board.items.iter().map(|item| item.previous_rank).collect()
    }

    #[test]
    fn test_resolve_previous_ranks() {
        let previous = board(&["A", "B", "C"]);
        let mut current = board(&["C", "A", "D"]);

        resolve_previous_ranks(&mut current, &previous);

        assert_eq!(ranks(&current), vec![Some(3), Some(1), None]);
    }

    #[test]
    fn test_stale_ranks_are_cleared() {
        let mut current = board(&["X"]);
        current.items[0].previous_rank = Some(7);

        current.calculate_previous_ranks(&board(&["Y"]));

        assert_eq!(ranks(&current), vec![None]);
    }

    #[test]
    fn test_first_match_wins_and_matching_is_case_sensitive() {
        let previous = board(&["b", "a", "a"]);
        let mut current = board(&["a", "A"]);

        current.calculate_previous_ranks(&previous);

        assert_eq!(ranks(&current), vec![Some(2), None]);
    }

    #[test]
    fn test_resolved_ranks_are_encoded() {
        let previous = Leaderboard::new([
            LeaderboardItem::new("Alice", 10.0),
            LeaderboardItem::new("Bob", 5.0),
        ]);
        let mut current = Leaderboard::new([
            LeaderboardItem::new("Bob", 12.0),
            LeaderboardItem::new("Eve", 11.0),
        ]);

        current.calculate_previous_ranks(&previous);

        assert_eq!(
            current.encode_to_string().unwrap(),
            r#"{"item":[{"label":"Bob","value":12,"previous_rank":2},{"label":"Eve","value":11}]}"#
        );
    }
}
