use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// Cells separated by spaces - how solutions are printed
    Spaced,
    /// Same as the input format
    Compact,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Exhaustive,
    Greedy,
}

impl Method {
    /// Numbering used by the interactive menu.
    pub fn from_choice(choice: i32) -> Option<Method> {
        match choice {
            1 => Some(Method::Exhaustive),
            2 => Some(Method::Greedy),
            _ => None,
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Method::Exhaustive => write!(f, "exhaustive"),
            Method::Greedy => write!(f, "greedy"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidChoice;

impl Display for InvalidChoice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid choice")
    }
}

impl Error for InvalidChoice {}

impl FromStr for Method {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "exhaustive" | "dfs" => Ok(Method::Exhaustive),
            "greedy" | "best-first" => Ok(Method::Greedy),
            other => other
                .parse()
                .ok()
                .and_then(Method::from_choice)
                .ok_or(InvalidChoice),
        }
    }
}

/// What the search does with a successor that is already waiting in the frontier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontierMode {
    /// Only expanded boards are filtered, the same board can be queued (and expanded) several times.
    Literal,
    /// Boards that were ever queued are not queued again.
    Strict,
}

impl Display for FrontierMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            FrontierMode::Literal => write!(f, "literal"),
            FrontierMode::Strict => write!(f, "strict"),
        }
    }
}

/// Where the greedy heuristic takes piece targets from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetTable {
    /// Fixed table matching the reference goal layout.
    Canonical,
    /// Positions of pieces on the puzzle's goal board.
    FromGoal,
}

impl Display for TargetTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            TargetTable::Canonical => write!(f, "canonical"),
            TargetTable::FromGoal => write!(f, "from-goal"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    pub frontier: FrontierMode,
    pub targets: TargetTable,
    /// Stop after this many boards were expanded
    pub max_expansions: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            frontier: FrontierMode::Literal,
            targets: TargetTable::Canonical,
            max_expansions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing_methods() {
        assert_eq!("1".parse(), Ok(Method::Exhaustive));
        assert_eq!("dfs".parse(), Ok(Method::Exhaustive));
        assert_eq!("exhaustive".parse(), Ok(Method::Exhaustive));
        assert_eq!(" 2\n".parse(), Ok(Method::Greedy));
        assert_eq!("best-first".parse(), Ok(Method::Greedy));
        assert_eq!("greedy".parse(), Ok(Method::Greedy));

        assert_eq!("3".parse::<Method>(), Err(InvalidChoice));
        assert_eq!("0".parse::<Method>(), Err(InvalidChoice));
        assert_eq!("bfs".parse::<Method>(), Err(InvalidChoice));
        assert_eq!("".parse::<Method>(), Err(InvalidChoice));
    }

    #[test]
    fn method_round_trip_through_display() {
        for &method in &[Method::Exhaustive, Method::Greedy] {
            assert_eq!(method.to_string().parse(), Ok(method));
        }
    }
}
