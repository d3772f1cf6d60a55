use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Corner or edge the widget is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
    CenterRight,
    CenterLeft,
}

/// CSS inset properties applied to the host element. Unset edges stay unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Insets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<&'static str>,
}

impl Insets {
    /// Set edges as `(property, value)` pairs.
    pub fn properties(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
        [
            ("top", self.top),
            ("bottom", self.bottom),
            ("left", self.left),
            ("right", self.right),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

const EDGE: &str = "20px";
const MIDDLE: &str = "50%";

impl Position {
    pub const ALL: [Position; 6] = [
        Position::BottomRight,
        Position::BottomLeft,
        Position::TopRight,
        Position::TopLeft,
        Position::CenterRight,
        Position::CenterLeft,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::CenterRight => "center-right",
            Position::CenterLeft => "center-left",
        }
    }

    /// Resolve a position attribute; absent or unknown values give
    /// `bottom-right`.
    pub fn resolve(value: Option<&str>) -> Self {
        match value {
            Some(name) => name.parse().unwrap_or_else(|_| {
                tracing::debug!("Unknown position '{}', using bottom-right", name);
                Position::default()
            }),
            None => Position::default(),
        }
    }

    pub fn insets(&self) -> Insets {
        match self {
            Position::BottomRight => Insets { bottom: Some(EDGE), right: Some(EDGE), ..Insets::default() },
            Position::BottomLeft => Insets { bottom: Some(EDGE), left: Some(EDGE), ..Insets::default() },
            Position::TopRight => Insets { top: Some(EDGE), right: Some(EDGE), ..Insets::default() },
            Position::TopLeft => Insets { top: Some(EDGE), left: Some(EDGE), ..Insets::default() },
            Position::CenterRight => Insets { top: Some(MIDDLE), right: Some(EDGE), ..Insets::default() },
            Position::CenterLeft => Insets { top: Some(MIDDLE), left: Some(EDGE), ..Insets::default() },
        }
    }

    pub fn is_left(&self) -> bool {
        matches!(self, Position::BottomLeft | Position::TopLeft | Position::CenterLeft)
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown position '{}'", s))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Position::BottomRight, vec![("bottom", "20px"), ("right", "20px")])]
    #[case(Position::BottomLeft, vec![("bottom", "20px"), ("left", "20px")])]
    #[case(Position::TopRight, vec![("top", "20px"), ("right", "20px")])]
    #[case(Position::TopLeft, vec![("top", "20px"), ("left", "20px")])]
    #[case(Position::CenterRight, vec![("top", "50%"), ("right", "20px")])]
    #[case(Position::CenterLeft, vec![("top", "50%"), ("left", "20px")])]
    fn test_position_insets(#[case] position: Position, #[case] expected: Vec<(&str, &str)>) {
        let props: Vec<_> = position.insets().properties().collect();
        assert_eq!(props, expected);
    }

    #[test]
    fn test_top_left_sets_no_bottom_or_right() {
        let insets = Position::resolve(Some("top-left")).insets();
        assert_eq!(insets.top, Some("20px"));
        assert_eq!(insets.left, Some("20px"));
        assert!(insets.bottom.is_none());
        assert!(insets.right.is_none());
    }

    #[rstest]
    #[case(None)]
    #[case(Some("middle"))]
    #[case(Some("Bottom-Left"))]
    fn test_unknown_positions_fall_back(#[case] value: Option<&str>) {
        assert_eq!(Position::resolve(value), Position::BottomRight);
    }

    #[test]
    fn test_names_parse_back() {
        for position in Position::ALL {
            assert_eq!(position.name().parse::<Position>(), Ok(position));
        }
        assert_eq!(Position::CenterLeft.next(), Position::BottomRight);
    }
}
