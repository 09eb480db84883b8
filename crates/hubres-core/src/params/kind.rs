//! Resource kind requested from the hub.

use std::fmt;
use std::str::FromStr;

use crate::error::ResolveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Task,
    Pipeline,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Task => "task",
            Kind::Pipeline => "pipeline",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on `task` or `pipeline`.
impl FromStr for Kind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" => Ok(Kind::Task),
            "pipeline" => Ok(Kind::Pipeline),
            _ => Err(ResolveError::invalid_kind()),
        }
    }
}
