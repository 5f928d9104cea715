//! Layered interception substrate for MPI profiling tools.
//!
//! A process carries an ordered stack of tool layers between the
//! application and the real MPI implementation. Every intercepted
//! operation is identified by a dense integer id; each layer holds a
//! table of native handler pointers for those ids. A wrapper running at
//! layer `i` asks the stack for the handler registered at layer `i + 1`
//! and invokes it with the original arguments, the next level index, and
//! the unchanged stack pointer.
//!
//! The crate only provides the lookup and checked-cast machinery; the
//! per-operation trampolines live in the tool crates built on top of it.

pub mod c;
pub mod consts;
pub mod ops;
mod layer;

pub use layer::{report_missing_handler, FuncTable, LayerStack, RawHandler};

use ops::OpId;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operation id outside the handler table.
    UnknownOp(OpId),
}

pub type Result<T> = std::result::Result<T, Error>;
