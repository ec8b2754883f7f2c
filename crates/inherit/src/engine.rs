//! Translates statements into table actions and runs them.

mod exec;
pub use exec::ExecResponse;

mod plan;
pub use plan::{Plan, Reconstruct, Shape, Step, StepOutput};

mod planner;
use planner::Translate;

use inherit_core::{driver::Capability, Schema};
use std::sync::Arc;

/// Plans and executes statements for one schema. The strategy's translator
/// is picked when the engine is created and never changes.
#[derive(Debug, Clone)]
pub struct Engine {
    /// The schema being managed
    pub schema: Arc<Schema>,

    /// Capabilities of the store the engine writes to
    capability: &'static Capability,

    translate: Arc<dyn Translate>,
}

impl Engine {
    pub(crate) fn new(schema: Arc<Schema>, capability: &'static Capability) -> Engine {
        let translate = planner::translator(schema.strategy);

        Engine {
            schema,
            capability,
            translate,
        }
    }

    pub fn capability(&self) -> &'static Capability {
        self.capability
    }
}
