use super::enums::{Landmark, SquareKind};
use serde::Serialize;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize)]
pub struct BoardSquare {
    pub kind: SquareKind,
    pub name: Option<&'static str>,
    pub landmark: Option<Landmark>,
}

impl BoardSquare {
    pub const fn new(kind: SquareKind, name: Option<&'static str>) -> Self {
        BoardSquare {
            kind,
            name,
            landmark: None,
        }
    }

    pub const fn plain() -> Self {
        BoardSquare::new(SquareKind::Plain, None)
    }

    pub const fn named(kind: SquareKind, name: &'static str) -> Self {
        BoardSquare::new(kind, Some(name))
    }

    pub const fn landmark(kind: SquareKind, name: &'static str, landmark: Landmark) -> Self {
        BoardSquare {
            kind,
            name: Some(name),
            landmark: Some(landmark),
        }
    }

    /// Returns True, if landing here draws a card or redirects the token
    pub fn is_special(&self) -> bool {
        matches!(
            self.kind,
            SquareKind::Chance | SquareKind::CommunityChest | SquareKind::GoToJail
        )
    }
}
