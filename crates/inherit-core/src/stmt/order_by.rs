/// Explicit ordering key for a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Property to sort by. `id` sorts by identifier.
    pub property: String,

    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl OrderBy {
    pub fn asc(property: impl Into<String>) -> OrderBy {
        OrderBy {
            property: property.into(),
            direction: Direction::Asc,
        }
    }

    pub fn desc(property: impl Into<String>) -> OrderBy {
        OrderBy {
            property: property.into(),
            direction: Direction::Desc,
        }
    }
}
