//! Fixed colour sets and the mascot roster.

/// Soft page backgrounds. The first entry is the initial background.
pub const BACKGROUND_COLORS: [&str; 12] = [
    "#f8f9fa", "#e9ecef", "#dee2e6", "#f1f3f5", "#edf2fb", "#e2eafc", "#d7e3fc", "#ccdbfd",
    "#fff1e6", "#fde2e4", "#fad2e1", "#e2ece9",
];

/// Saturated glyph colours.
pub const TEXT_COLORS: [&str; 12] = [
    "#1a73e8", "#4285f4", "#34a853", "#ea4335", "#5f6368", "#1e88e5", "#43a047", "#e53935",
    "#fb8c00", "#8e24aa", "#3949ab", "#039be5",
];

pub const INITIAL_BACKGROUND: &str = BACKGROUND_COLORS[0];

/// Characters shown for non-alphanumeric keys. Each maps to one bundled image
/// under `images/` and one display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mascot {
    #[default]
    Tayo,
    Rogi,
    Rani,
    Gani,
    Citu,
    Hana,
    Nuri,
    Pat,
    Rookie,
    Poco,
    Frank,
}

impl Mascot {
    pub const ALL: [Mascot; 11] = [
        Mascot::Tayo,
        Mascot::Rogi,
        Mascot::Rani,
        Mascot::Gani,
        Mascot::Citu,
        Mascot::Hana,
        Mascot::Nuri,
        Mascot::Pat,
        Mascot::Rookie,
        Mascot::Poco,
        Mascot::Frank,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Mascot::Tayo => "bus-tayo",
            Mascot::Rogi => "bus-rogi",
            Mascot::Rani => "bus-rani",
            Mascot::Gani => "bus-gani",
            Mascot::Citu => "bus-citu",
            Mascot::Hana => "bus-hana",
            Mascot::Nuri => "bus-nuri",
            Mascot::Pat => "car-pat",
            Mascot::Rookie => "car-rookie",
            Mascot::Poco => "truck-poco",
            Mascot::Frank => "truck-frank",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mascot::Tayo => "타요",
            Mascot::Rogi => "로기",
            Mascot::Rani => "라니",
            Mascot::Gani => "가니",
            Mascot::Citu => "시투",
            Mascot::Hana => "하나",
            Mascot::Nuri => "누리",
            Mascot::Pat => "패트",
            Mascot::Rookie => "루키",
            Mascot::Poco => "포코",
            Mascot::Frank => "프랭크",
        }
    }

    pub fn image(self) -> &'static str {
        match self {
            Mascot::Tayo => "images/tayo.png",
            Mascot::Rogi => "images/rogi.png",
            Mascot::Rani => "images/rani.png",
            Mascot::Gani => "images/gani.png",
            Mascot::Citu => "images/citu.png",
            Mascot::Hana => "images/hana.png",
            Mascot::Nuri => "images/nuri.png",
            Mascot::Pat => "images/pat.png",
            Mascot::Rookie => "images/rookie.png",
            Mascot::Poco => "images/poco.png",
            Mascot::Frank => "images/frank.png",
        }
    }

    /// Unknown tokens fall back to the first mascot.
    pub fn from_token(token: &str) -> Mascot {
        Mascot::ALL
            .iter()
            .copied()
            .find(|m| m.token() == token)
            .unwrap_or_default()
    }
}
