//! Layer stack and handler resolution.
use crate::ops::{self, OpId};
use crate::{Error, Result};
use log::{error, warn};
use std::any::TypeId;
use std::ffi::{c_int, c_void};
use std::mem;

/// Type-erased native handler pointer.
///
/// Registration captures the `TypeId` of the concrete
/// `unsafe extern "C" fn` type alongside the pointer bits, so a later
/// [`cast`](RawHandler::cast) to the wrong signature is rejected instead
/// of producing an ill-typed call.
#[derive(Copy, Clone)]
pub struct RawHandler {
    ptr: *const c_void,
    sig: TypeId,
}

impl RawHandler {
    pub fn new<F: Copy + 'static>(handler: F) -> RawHandler {
        // Only thin function pointers can be erased to a single word.
        assert_eq!(mem::size_of::<F>(), mem::size_of::<*const c_void>());
        let ptr = unsafe { mem::transmute_copy::<F, *const c_void>(&handler) };
        RawHandler {
            ptr,
            sig: TypeId::of::<F>(),
        }
    }

    /// Recover the typed function pointer if `F` is the type the handler
    /// was registered with.
    pub fn cast<F: Copy + 'static>(&self) -> Option<F> {
        if self.sig == TypeId::of::<F>() {
            Some(unsafe { mem::transmute_copy::<*const c_void, F>(&self.ptr) })
        } else {
            None
        }
    }
}

// A RawHandler is a code pointer plus a tag; nothing about it is tied to
// the registering thread.
unsafe impl Send for RawHandler {}
unsafe impl Sync for RawHandler {}

/// Per-layer handler table, one optional entry per operation id.
pub struct FuncTable {
    entries: Vec<Option<RawHandler>>,
}

impl FuncTable {
    pub fn new() -> FuncTable {
        FuncTable {
            entries: vec![None; ops::NUM_OPS],
        }
    }

    /// Register `handler` for `op`. The concrete function pointer type is
    /// captured here and re-checked on every dispatch.
    pub fn register<F: Copy + 'static>(&mut self, op: OpId, handler: F) -> Result<()> {
        let entry = self.entries.get_mut(op).ok_or(Error::UnknownOp(op))?;
        *entry = Some(RawHandler::new(handler));
        Ok(())
    }

    pub fn get(&self, op: OpId) -> Option<RawHandler> {
        self.entries.get(op).copied().flatten()
    }
}

impl Default for FuncTable {
    fn default() -> FuncTable {
        FuncTable::new()
    }
}

/// Ordered interception chain for one process.
///
/// Layer 0 is closest to the application; the highest index is the
/// terminal layer backed by the real MPI implementation. The stack is
/// populated during tool/runtime initialization, before any intercepted
/// traffic, and is read-only afterwards.
pub struct LayerStack {
    layers: Vec<FuncTable>,
}

impl LayerStack {
    pub fn new() -> LayerStack {
        LayerStack { layers: vec![] }
    }

    /// Append a layer, returning the level it will run at.
    pub fn push_layer(&mut self, table: FuncTable) -> usize {
        self.layers.push(table);
        self.layers.len() - 1
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Handler registered for `op` by the layer *after* `level`, or
    /// `None` when that entry is unset or `level` is the terminal layer.
    pub fn next_handler(&self, op: OpId, level: c_int) -> Option<RawHandler> {
        let next = usize::try_from(level).ok()? + 1;
        self.layers.get(next)?.get(op)
    }

    /// Resolve and type-check the next handler in one step. A signature
    /// mismatch is a registration bug in some layer; it is reported and
    /// treated like a missing handler rather than dispatched.
    pub fn next_typed<F: Copy + 'static>(&self, op: OpId, level: c_int) -> Option<F> {
        let handler = self.next_handler(op, level)?;
        let typed = handler.cast::<F>();
        if typed.is_none() {
            error!(
                "handler for {} at layer {} does not match its registered signature",
                ops::name(op),
                level + 1
            );
        }
        typed
    }
}

impl Default for LayerStack {
    fn default() -> LayerStack {
        LayerStack::new()
    }
}

/// Diagnostic for an unresolvable next handler. Wrappers call this and
/// then return the zero default of their own calling convention; no
/// operation is allowed to crash on an unset table entry.
pub fn report_missing_handler(op: OpId, level: c_int) {
    warn!(
        "no next handler for {} above layer {}; returning default",
        ops::name(op),
        level
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::c::ReturnStatus;

    type PlainFn = unsafe extern "C" fn(c_int, *mut LayerStack) -> ReturnStatus;
    type OtherFn = unsafe extern "C" fn(c_int, c_int, *mut LayerStack) -> ReturnStatus;

    unsafe extern "C" fn layer_one(_level: c_int, _stack: *mut LayerStack) -> ReturnStatus {
        101
    }

    unsafe extern "C" fn layer_two(_level: c_int, _stack: *mut LayerStack) -> ReturnStatus {
        102
    }

    unsafe extern "C" fn other(_a: c_int, _b: c_int, _stack: *mut LayerStack) -> ReturnStatus {
        0
    }

    fn single_op_table(handler: PlainFn) -> FuncTable {
        let mut table = FuncTable::new();
        table.register(ops::BARRIER, handler).unwrap();
        table
    }

    #[test]
    fn next_handler_returns_following_layers_registration() {
        let mut stack = LayerStack::new();
        stack.push_layer(FuncTable::new());
        stack.push_layer(single_op_table(layer_one));
        stack.push_layer(single_op_table(layer_two));

        let f = stack
            .next_typed::<PlainFn>(ops::BARRIER, 0)
            .expect("layer 1 handler");
        assert_eq!(unsafe { f(1, std::ptr::null_mut()) }, 101);

        let f = stack
            .next_typed::<PlainFn>(ops::BARRIER, 1)
            .expect("layer 2 handler");
        assert_eq!(unsafe { f(2, std::ptr::null_mut()) }, 102);
    }

    #[test]
    fn terminal_layer_has_no_next_handler() {
        let mut stack = LayerStack::new();
        stack.push_layer(single_op_table(layer_one));
        stack.push_layer(single_op_table(layer_two));

        assert!(stack.next_handler(ops::BARRIER, 1).is_none());
        assert!(stack.next_handler(ops::BARRIER, 7).is_none());
    }

    #[test]
    fn unregistered_entry_resolves_to_none() {
        let mut stack = LayerStack::new();
        stack.push_layer(FuncTable::new());
        stack.push_layer(FuncTable::new());

        assert!(stack.next_handler(ops::BARRIER, 0).is_none());
    }

    #[test]
    fn signature_mismatch_is_rejected() {
        let handler = RawHandler::new(other as OtherFn);
        assert!(handler.cast::<PlainFn>().is_none());
        assert!(handler.cast::<OtherFn>().is_some());

        let mut stack = LayerStack::new();
        stack.push_layer(FuncTable::new());
        let mut table = FuncTable::new();
        table.register(ops::BARRIER, other as OtherFn).unwrap();
        stack.push_layer(table);

        assert!(stack.next_typed::<PlainFn>(ops::BARRIER, 0).is_none());
    }

    #[test]
    fn out_of_range_op_is_an_error() {
        let mut table = FuncTable::new();
        let err = table.register(ops::NUM_OPS, layer_one as PlainFn);
        assert_eq!(err, Err(Error::UnknownOp(ops::NUM_OPS)));
    }

    #[test]
    fn negative_level_never_panics() {
        let mut stack = LayerStack::new();
        stack.push_layer(single_op_table(layer_one));

        // Levels below 0 are not valid layer positions; resolution must
        // fail cleanly rather than index the stack.
        assert!(stack.next_handler(ops::BARRIER, -1).is_none());
        assert!(stack.next_handler(ops::BARRIER, -2).is_none());
    }
}
