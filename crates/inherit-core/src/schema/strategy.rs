use crate::{err, Error};
use std::{fmt, str::FromStr};

/// How a hierarchy is laid out across tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// One table for the whole hierarchy plus a discriminator column.
    #[default]
    SingleTable,

    /// One table per type; child rows share the root row's key.
    JoinedTable,

    /// One self-contained table per concrete type; no table for the root.
    ConcreteTable,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [
        Strategy::SingleTable,
        Strategy::JoinedTable,
        Strategy::ConcreteTable,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::SingleTable => "single-table",
            Strategy::JoinedTable => "joined-table",
            Strategy::ConcreteTable => "concrete-table",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                err!("unknown mapping strategy `{s}`; expected single-table, joined-table or concrete-table")
            })
    }
}
