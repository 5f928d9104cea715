//! Per-datatype traffic recorder, built as an interception layer on the
//! `qmpi` dispatch substrate.
//!
//! Every MPI operation is wrapped; each wrapper forwards to the next
//! layer's handler and returns its result unmodified. A handful of
//! wrappers additionally classify successful calls into atomic
//! (datatype class, direction) buckets; the finalize wrapper sum-reduces
//! the buckets across all ranks and prints the totals on rank 0.
use log::error;
use qmpi::c::ReturnStatus;
use qmpi::consts;
use qmpi::FuncTable;
use std::sync::OnceLock;

pub mod counters;
pub mod pmpi;
pub mod report;
pub mod wrappers;

pub use wrappers::register_layer;

use counters::CounterStore;
use pmpi::PmpiHooks;

/// The process-wide counter store every wrapper records into.
pub static COUNTERS: CounterStore = CounterStore::new();

static HOOKS: OnceLock<PmpiHooks> = OnceLock::new();

/// Install the native collaborator entry points. Called once by the
/// runtime before any intercepted traffic; later calls are ignored.
/// Until hooks are installed, accounting that needs them is skipped and
/// calls are forwarded untouched.
pub fn install_hooks(hooks: PmpiHooks) -> bool {
    HOOKS.set(hooks).is_ok()
}

pub(crate) fn hooks() -> Option<&'static PmpiHooks> {
    HOOKS.get()
}

/// C entry point the runtime loader resolves to register this tool's
/// wrappers into its layer table.
///
/// SAFETY: `table` must point to a live `FuncTable` owned by the runtime.
#[no_mangle]
pub unsafe extern "C" fn qmpi_tool_register(table: *mut FuncTable) -> ReturnStatus {
    if table.is_null() {
        return consts::ERR_INTERN;
    }
    match register_layer(&mut *table) {
        Ok(()) => consts::SUCCESS,
        Err(err) => {
            error!("wrapper registration failed: {:?}", err);
            consts::ERR_INTERN
        }
    }
}
