use serde::{Deserialize, Serialize};

/// Polarity and unit of a trial value.
///
/// Downstream "better/worse" decisions must consult this instead of
/// assuming a uniform direction: completion times improve by going down,
/// similarity scores and event counts improve by going up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSemantics {
    /// Seconds to complete; lower is better.
    Duration,
    /// 0-100 similarity/accuracy score; higher is better.
    ScorePercent,
    /// Event count per round; higher is better.
    Count,
}

impl ValueSemantics {
    pub fn higher_is_better(&self) -> bool {
        match self {
            ValueSemantics::Duration => false,
            ValueSemantics::ScorePercent | ValueSemantics::Count => true,
        }
    }
}

/// Supported game types (closed set, registered at startup).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    Gesture,
    MirrorPosture,
    DanceDoodle,
    Gaze,
    RepeatWithMe,
}

/// One measurable unit within a game session (a gesture, pose, or round).
///
/// The flat enum covers all games; `GameType::trial_kinds` returns the
/// fixed, ordered subset for one game. Extractors never invent or omit
/// kinds — a kind that was not attempted carries a null value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrialKind {
    // Gesture recognition (completion seconds)
    ThumbsUp,
    ThumbsDown,
    Victory,
    Butterfly,
    Spectacle,
    Heart,
    PointingUp,
    ILoveYou,
    Dua,
    ClosedFist,
    OpenPalm,

    // Mirror posture (completion seconds)
    LookingSideways,
    MouthOpen,
    ShowingTeeth,
    Kiss,

    // Dance doodle (completion seconds)
    CoolArms,
    OpenWings,
    SillyBoxer,
    HappyStand,
    CrossyPlay,
    ShhFun,
    Stretch,

    // Gaze tracking (event counts)
    GazeRound1,
    GazeRound2,
    GazeRound3,

    // Repeat-with-me (0-100 similarity scores)
    RepeatRound1,
    RepeatRound2,
    RepeatRound3,
    RepeatRound4,
    RepeatRound5,
    RepeatRound6,
    RepeatRound7,
    RepeatRound8,
    RepeatRound9,
    RepeatRound10,
    RepeatRound11,
    RepeatRound12,
}

const GESTURE_KINDS: &[TrialKind] = &[
    TrialKind::ThumbsUp,
    TrialKind::ThumbsDown,
    TrialKind::Victory,
    TrialKind::Butterfly,
    TrialKind::Spectacle,
    TrialKind::Heart,
    TrialKind::PointingUp,
    TrialKind::ILoveYou,
    TrialKind::Dua,
    TrialKind::ClosedFist,
    TrialKind::OpenPalm,
];

const MIRROR_POSTURE_KINDS: &[TrialKind] = &[
    TrialKind::LookingSideways,
    TrialKind::MouthOpen,
    TrialKind::ShowingTeeth,
    TrialKind::Kiss,
];

const DANCE_DOODLE_KINDS: &[TrialKind] = &[
    TrialKind::CoolArms,
    TrialKind::OpenWings,
    TrialKind::SillyBoxer,
    TrialKind::HappyStand,
    TrialKind::CrossyPlay,
    TrialKind::ShhFun,
    TrialKind::Stretch,
];

const GAZE_KINDS: &[TrialKind] = &[
    TrialKind::GazeRound1,
    TrialKind::GazeRound2,
    TrialKind::GazeRound3,
];

const REPEAT_WITH_ME_KINDS: &[TrialKind] = &[
    TrialKind::RepeatRound1,
    TrialKind::RepeatRound2,
    TrialKind::RepeatRound3,
    TrialKind::RepeatRound4,
    TrialKind::RepeatRound5,
    TrialKind::RepeatRound6,
    TrialKind::RepeatRound7,
    TrialKind::RepeatRound8,
    TrialKind::RepeatRound9,
    TrialKind::RepeatRound10,
    TrialKind::RepeatRound11,
    TrialKind::RepeatRound12,
];

impl GameType {
    /// All supported games, in canonical order.
    pub const ALL: [GameType; 5] = [
        GameType::Gesture,
        GameType::MirrorPosture,
        GameType::DanceDoodle,
        GameType::Gaze,
        GameType::RepeatWithMe,
    ];

    /// Wire identifier used in raw records and service routing.
    pub fn tag(&self) -> &'static str {
        match self {
            GameType::Gesture => "gesture",
            GameType::MirrorPosture => "mirror-posture",
            GameType::DanceDoodle => "dance-doodle",
            GameType::Gaze => "gaze",
            GameType::RepeatWithMe => "repeat-with-me",
        }
    }

    /// Parse a wire identifier. Unknown tags are `None`, never a panic —
    /// callers decide whether that is a zero-data default or an error.
    pub fn from_tag(tag: &str) -> Option<GameType> {
        GameType::ALL.iter().find(|g| g.tag() == tag).copied()
    }

    /// Human-readable game name as the dashboards show it.
    pub fn label(&self) -> &'static str {
        match self {
            GameType::Gesture => "Gesture Game",
            GameType::MirrorPosture => "Mirror Posture Game",
            GameType::DanceDoodle => "Dance Doodle",
            GameType::Gaze => "Gaze Game",
            GameType::RepeatWithMe => "Repeat With Me Game",
        }
    }

    /// Value semantics shared by every trial of this game.
    pub fn value_semantics(&self) -> ValueSemantics {
        match self {
            GameType::Gesture | GameType::MirrorPosture | GameType::DanceDoodle => {
                ValueSemantics::Duration
            }
            GameType::Gaze => ValueSemantics::Count,
            GameType::RepeatWithMe => ValueSemantics::ScorePercent,
        }
    }

    /// The fixed, ordered trial kinds for this game.
    pub fn trial_kinds(&self) -> &'static [TrialKind] {
        match self {
            GameType::Gesture => GESTURE_KINDS,
            GameType::MirrorPosture => MIRROR_POSTURE_KINDS,
            GameType::DanceDoodle => DANCE_DOODLE_KINDS,
            GameType::Gaze => GAZE_KINDS,
            GameType::RepeatWithMe => REPEAT_WITH_ME_KINDS,
        }
    }
}

impl TrialKind {
    /// Display name as the dashboards show it.
    pub fn label(&self) -> &'static str {
        match self {
            TrialKind::ThumbsUp => "Thumbs Up 👍",
            TrialKind::ThumbsDown => "Thumbs Down 👎",
            TrialKind::Victory => "Victory ✌️",
            TrialKind::Butterfly => "Butterfly 🦋",
            TrialKind::Spectacle => "Spectacle 👓",
            TrialKind::Heart => "Heart ❤️",
            TrialKind::PointingUp => "Pointing Up ☝️",
            TrialKind::ILoveYou => "I Love You 🤟",
            TrialKind::Dua => "Dua 🙏",
            TrialKind::ClosedFist => "Closed Fist ✊",
            TrialKind::OpenPalm => "Open Palm 🖐️",
            TrialKind::LookingSideways => "Looking Sideways",
            TrialKind::MouthOpen => "Mouth Open",
            TrialKind::ShowingTeeth => "Showing Teeth",
            TrialKind::Kiss => "Kiss",
            TrialKind::CoolArms => "Cool Arms",
            TrialKind::OpenWings => "Open Wings",
            TrialKind::SillyBoxer => "Silly Boxer",
            TrialKind::HappyStand => "Happy Stand",
            TrialKind::CrossyPlay => "Crossy Play",
            TrialKind::ShhFun => "Shh Fun",
            TrialKind::Stretch => "Stretch",
            TrialKind::GazeRound1 => "Round 1",
            TrialKind::GazeRound2 => "Round 2",
            TrialKind::GazeRound3 => "Round 3",
            TrialKind::RepeatRound1 => "Round 1",
            TrialKind::RepeatRound2 => "Round 2",
            TrialKind::RepeatRound3 => "Round 3",
            TrialKind::RepeatRound4 => "Round 4",
            TrialKind::RepeatRound5 => "Round 5",
            TrialKind::RepeatRound6 => "Round 6",
            TrialKind::RepeatRound7 => "Round 7",
            TrialKind::RepeatRound8 => "Round 8",
            TrialKind::RepeatRound9 => "Round 9",
            TrialKind::RepeatRound10 => "Round 10",
            TrialKind::RepeatRound11 => "Round 11",
            TrialKind::RepeatRound12 => "Round 12",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trial_kind_counts_are_fixed() {
        assert_eq!(GameType::Gesture.trial_kinds().len(), 11);
        assert_eq!(GameType::MirrorPosture.trial_kinds().len(), 4);
        assert_eq!(GameType::DanceDoodle.trial_kinds().len(), 7);
        assert_eq!(GameType::Gaze.trial_kinds().len(), 3);
        assert_eq!(GameType::RepeatWithMe.trial_kinds().len(), 12);
    }

    #[test]
    fn tag_round_trips() {
        for game in GameType::ALL {
            assert_eq!(GameType::from_tag(game.tag()), Some(game));
        }
        assert_eq!(GameType::from_tag("pinball"), None);
    }

    #[test]
    fn polarity_follows_semantics() {
        assert!(!GameType::Gesture.value_semantics().higher_is_better());
        assert!(!GameType::MirrorPosture.value_semantics().higher_is_better());
        assert!(!GameType::DanceDoodle.value_semantics().higher_is_better());
        assert!(GameType::Gaze.value_semantics().higher_is_better());
        assert!(GameType::RepeatWithMe.value_semantics().higher_is_better());
    }
}
