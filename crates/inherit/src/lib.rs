pub mod db;
pub use db::Db;

mod describe;
pub use describe::{describe_default, Describe};

pub mod driver;

pub mod engine;
pub use engine::{Engine, ExecResponse, Plan};

pub mod id;
pub use id::{IdGenerator, RandomIds, Sequence};

pub mod schema {
    pub use inherit_core::schema::{
        app::{self, Hierarchy},
        db, mapping, Name, Schema, Strategy,
    };
}

pub mod stmt {
    pub use inherit_core::stmt::*;
}

pub use inherit_core::{
    schema::{app::Hierarchy, Strategy},
    stmt::{Count, Delete, Entity, Expr, Id, Insert, OrderBy, Query, Statement, Type, Update, Value},
    Error, Result,
};
