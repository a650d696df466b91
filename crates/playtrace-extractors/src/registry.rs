use playtrace_types::GameType;

use crate::dance::DanceExtractor;
use crate::gaze::GazeExtractor;
use crate::gesture::GestureExtractor;
use crate::posture::PostureExtractor;
use crate::repeat::RepeatExtractor;
use crate::traits::MetricExtractor;

/// Static description of one supported game.
#[derive(Debug, Clone, Copy)]
pub struct GameMetadata {
    pub game: GameType,
    /// Path segment of the game's history service.
    pub service_path: &'static str,
    pub description: &'static str,
}

const GAMES: &[GameMetadata] = &[
    GameMetadata {
        game: GameType::Gesture,
        service_path: "gesture-game",
        description: "Hand gesture recognition",
    },
    GameMetadata {
        game: GameType::MirrorPosture,
        service_path: "mirror-posture-game",
        description: "Facial posture imitation",
    },
    GameMetadata {
        game: GameType::DanceDoodle,
        service_path: "dance-doodle",
        description: "Full-body pose imitation",
    },
    GameMetadata {
        game: GameType::Gaze,
        service_path: "gaze-game",
        description: "Gaze tracking rounds",
    },
    GameMetadata {
        game: GameType::RepeatWithMe,
        service_path: "repeat-with-me-game",
        description: "Speech repetition rounds",
    },
];

pub fn all_games() -> &'static [GameMetadata] {
    GAMES
}

/// Metadata lookup. Infallible: the game set is closed and every variant
/// has an entry.
pub fn metadata_for(game: GameType) -> &'static GameMetadata {
    GAMES
        .iter()
        .find(|m| m.game == game)
        .expect("metadata table covers every GameType")
}

/// Create the extractor for one game.
pub fn create_extractor(game: GameType) -> Box<dyn MetricExtractor> {
    match game {
        GameType::Gesture => Box::new(GestureExtractor),
        GameType::MirrorPosture => Box::new(PostureExtractor),
        GameType::DanceDoodle => Box::new(DanceExtractor),
        GameType::Gaze => Box::new(GazeExtractor),
        GameType::RepeatWithMe => Box::new(RepeatExtractor),
    }
}

/// Create the full closed set, one extractor per supported game.
pub fn create_all_extractors() -> Vec<Box<dyn MetricExtractor>> {
    GameType::ALL.iter().map(|g| create_extractor(*g)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_game_has_metadata_and_an_extractor() {
        for game in GameType::ALL {
            assert_eq!(metadata_for(game).game, game);
            assert_eq!(create_extractor(game).game_type(), game);
        }
        assert_eq!(create_all_extractors().len(), GameType::ALL.len());
    }
}
