//! Database repository layer.
//!
//! Repositories translate domain operations into SQL statements and convert SeaORM
//! entity models into domain models so the service layer never sees entities. Each
//! repository operation runs exactly one independent statement.

pub mod product;
