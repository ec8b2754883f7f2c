use inherit_core::{
    driver::Operation,
    schema::db::TableId,
    stmt::OrderBy,
};

/// The table actions for one statement, in execution order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Plan {
    pub steps: Vec<Step>,

    /// Steps run inside one scoped transaction: either all of them apply or
    /// none do.
    pub transaction: bool,

    /// Explicit ordering for reads. Without one, results are grouped by
    /// concrete type in declaration order, then by identifier.
    pub order_by: Option<OrderBy>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub operation: Operation,

    /// How to interpret the store's response
    pub output: StepOutput,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StepOutput {
    /// Rows become entities
    Entities(Reconstruct),

    /// The row count adds to the statement's count
    Count,

    /// The action must affect a row; otherwise the entity was not found
    RequireAffected,

    /// The response carries nothing of interest
    Discard,
}

/// Turns returned rows back into entities.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconstruct {
    /// Every row has the same concrete type
    Fixed(Shape),

    /// The concrete type is named by the row's value at `column`
    Discriminated {
        column: usize,
        shapes: Vec<(String, Shape)>,
    },
}

/// Where a concrete type's values sit in a returned row.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Name of the concrete type
    pub entity: String,

    /// Declaration position of the type, used for default ordering
    pub position: usize,

    /// Index of the identifier
    pub key: usize,

    /// Property names and their indices
    pub fields: Vec<(String, usize)>,
}

impl Plan {
    pub(crate) fn new(steps: Vec<Step>) -> Plan {
        let transaction = steps.iter().filter(|step| step.operation.is_write()).count() > 1;

        Plan {
            steps,
            transaction,
            order_by: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Tables written to, in order.
    pub fn writes(&self) -> Vec<TableId> {
        self.steps
            .iter()
            .filter_map(|step| step.operation.write_target())
            .collect()
    }
}

impl Step {
    pub(crate) fn entities(operation: impl Into<Operation>, reconstruct: Reconstruct) -> Step {
        Step {
            operation: operation.into(),
            output: StepOutput::Entities(reconstruct),
        }
    }

    pub(crate) fn count(operation: impl Into<Operation>) -> Step {
        Step {
            operation: operation.into(),
            output: StepOutput::Count,
        }
    }

    pub(crate) fn require_affected(operation: impl Into<Operation>) -> Step {
        Step {
            operation: operation.into(),
            output: StepOutput::RequireAffected,
        }
    }

    pub(crate) fn discard(operation: impl Into<Operation>) -> Step {
        Step {
            operation: operation.into(),
            output: StepOutput::Discard,
        }
    }
}
