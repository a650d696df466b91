use playtrace_types::{GameProfile, GameType, PlaySummary};
use std::collections::BTreeMap;

/// Cross-game play activity from per-game profiles.
///
/// Most/least played iterate games in canonical order so ties resolve
/// deterministically; both are `None` when nothing was played at all.
pub fn play_summary(profiles: &[GameProfile]) -> PlaySummary {
    let counts: BTreeMap<GameType, usize> = profiles
        .iter()
        .map(|p| (p.game_type, p.stats.total_sessions))
        .collect();
    let total_sessions: usize = counts.values().sum();

    let mut most_played = None;
    let mut least_played = None;
    if total_sessions > 0 {
        for game in GameType::ALL {
            let Some(&count) = counts.get(&game) else {
                continue;
            };
            match most_played {
                Some((_, best)) if count <= best => {}
                _ => most_played = Some((game, count)),
            }
            match least_played {
                Some((_, worst)) if count >= worst => {}
                _ => least_played = Some((game, count)),
            }
        }
    }

    let last_played = profiles.iter().filter_map(|p| p.stats.last_played).max();

    PlaySummary {
        total_sessions,
        session_counts_by_game: counts,
        most_played: most_played.map(|(game, _)| game),
        least_played: least_played.map(|(game, _)| game),
        last_played,
    }
}
