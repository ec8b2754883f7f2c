#[derive(Debug)]
pub struct Capability {
    /// Multi-table writes can be made atomic with
    /// [`Transaction`](super::operation::Transaction) operations.
    pub transactions: bool,

    /// The store checks foreign keys declared in the schema.
    pub foreign_keys: bool,
}

impl Capability {
    /// Capabilities of the bundled in-memory store.
    pub const MEMORY: Self = Self {
        transactions: true,
        foreign_keys: true,
    };

    /// A store without transactions; only layouts that never split an
    /// entity across tables can run on it.
    pub const NON_TRANSACTIONAL: Self = Self {
        transactions: false,
        ..Self::MEMORY
    };
}
