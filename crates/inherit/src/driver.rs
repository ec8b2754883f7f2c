pub use inherit_core::driver::{
    operation::{self, Operation},
    Capability, Connection, Driver, Response, Rows,
};

#[cfg(feature = "memory")]
pub use inherit_driver_memory::Memory;
