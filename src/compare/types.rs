// src/compare/types.rs
use std::fmt;

/// One finished game from the tracked team's point of view.
/// `x` is the opponent's points, `y` the team's; `x < y` is a win.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameRow {
    pub x: u32,
    pub y: u32,
    pub date: String,
}

impl GameRow {
    #[inline]
    pub fn is_win(&self) -> bool { self.x < self.y }
}

/// A player's game-log row: the game plus the player's own points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerGame {
    pub game: GameRow,
    pub points: u32,
}

/// Raw schedule row as handed over by the retrieval side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTeamRow {
    pub date: String,
    pub result: String,
}

/// Raw game-log row as handed over by the retrieval side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawPlayerRow {
    pub date: String,
    pub result: String,
    pub points: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Player1Only,
    Player2Only,
    Both,
    Neither,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Player1Only,
        Category::Player2Only,
        Category::Both,
        Category::Neither,
    ];

    /// The fixed presence lookup.
    pub fn from_presence(in_p1: bool, in_p2: bool) -> Self {
        match (in_p1, in_p2) {
            (false, false) => Category::Neither,
            (true, false)  => Category::Player1Only,
            (false, true)  => Category::Player2Only,
            (true, true)   => Category::Both,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Player1Only => "player1_only",
            Category::Player2Only => "player2_only",
            Category::Both        => "both",
            Category::Neither     => "neither",
        }
    }

    /// Label tail used in titles: "with Curry and no Green", …
    pub fn label(&self, names: [&str; 2]) -> String {
        let [a, b] = names;
        match self {
            Category::Player1Only => format!("with {a} and no {b}"),
            Category::Player2Only => format!("with {b} and no {a}"),
            Category::Both        => format!("with both {a} and {b}"),
            Category::Neither     => format!("with neither {a} nor {b}"),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paint for one plotted point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Annotation {
    pub color: String,
    pub ecolor: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColoredGame {
    pub game: GameRow,
    pub category: Category,
    pub paint: Annotation,
}

/// The team's games, each painted by participation.
pub type ComparativeDataset = Vec<ColoredGame>;

/// Background and foreground for one category's frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlotLayers {
    /// Everything else, repainted with the muted color.
    pub muted: Vec<ColoredGame>,
    /// Only the rows of the requested color, untouched.
    pub highlighted: Vec<ColoredGame>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryResult {
    pub category: Category,
    pub ratio: f64,
    pub layers: PlotLayers,
    pub color: String,
    pub label: String,
}

impl CategoryResult {
    pub fn games(&self) -> usize { self.layers.highlighted.len() }

    pub fn wins(&self) -> usize {
        self.layers.highlighted.iter().filter(|r| r.game.is_win()).count()
    }
}
