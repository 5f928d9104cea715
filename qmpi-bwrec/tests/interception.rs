//! End-to-end interception tests: the recorder layer at level 0 over a
//! mock terminal layer standing in for the real MPI implementation.
//!
//! The counter store is process-global, so every test uses its own
//! (datatype class, direction) buckets and the tests stay independent
//! even when run concurrently.
use qmpi::c::{Comm, Datatype, ReturnStatus, Status};
use qmpi::{consts, ops, FuncTable, LayerStack};
use qmpi_bwrec::counters::{DatatypeClass, Direction};
use qmpi_bwrec::pmpi::PmpiHooks;
use qmpi_bwrec::wrappers::{
    self, AllreduceFn, BarrierFn, BcastFn, ClockFn, FinalizeFn, RecvFn, ReduceFn, SendFn,
};
use qmpi_bwrec::{install_hooks, register_layer, COUNTERS};
use std::ffi::{c_int, c_void};
use std::sync::atomic::{AtomicBool, AtomicI32, AtomicI64, Ordering};

// ---- mock collaborator hooks -----------------------------------------

static LAST_GET_COUNT_SEEN: AtomicI64 = AtomicI64::new(-1);

unsafe extern "C" fn hook_comm_rank(_comm: Comm, rank: *mut c_int) -> ReturnStatus {
    *rank = 0;
    consts::SUCCESS
}

unsafe extern "C" fn hook_comm_size(_comm: Comm, size: *mut c_int) -> ReturnStatus {
    *size = 4;
    consts::SUCCESS
}

/// Single-rank "sum": copy the local contribution into the totals.
unsafe extern "C" fn hook_reduce(
    sendbuf: *const c_void,
    recvbuf: *mut c_void,
    count: c_int,
    _datatype: Datatype,
    _op: qmpi::c::Op,
    _root: c_int,
    _comm: Comm,
) -> ReturnStatus {
    std::ptr::copy_nonoverlapping(sendbuf as *const i64, recvbuf as *mut i64, count as usize);
    consts::SUCCESS
}

unsafe extern "C" fn hook_get_count(
    status: *const Status,
    _datatype: Datatype,
    count: *mut c_int,
) -> ReturnStatus {
    let transferred = (*status).count;
    LAST_GET_COUNT_SEEN.store(transferred, Ordering::SeqCst);
    *count = transferred as c_int;
    consts::SUCCESS
}

fn ensure_hooks() {
    install_hooks(PmpiHooks {
        comm_rank: hook_comm_rank,
        comm_size: hook_comm_size,
        reduce: hook_reduce,
        get_count: hook_get_count,
    });
}

// ---- mock terminal handlers ------------------------------------------

static SEND_SEEN_COUNT: AtomicI32 = AtomicI32::new(-1);
static SEND_SEEN_DEST: AtomicI32 = AtomicI32::new(-1);
static SEND_SEEN_TAG: AtomicI32 = AtomicI32::new(-1);
static SEND_SEEN_LEVEL: AtomicI32 = AtomicI32::new(-1);

unsafe extern "C" fn terminal_send_ok(
    _buf: *const c_void,
    count: c_int,
    _datatype: Datatype,
    dest: c_int,
    tag: c_int,
    _comm: Comm,
    level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    SEND_SEEN_COUNT.store(count, Ordering::SeqCst);
    SEND_SEEN_DEST.store(dest, Ordering::SeqCst);
    SEND_SEEN_TAG.store(tag, Ordering::SeqCst);
    SEND_SEEN_LEVEL.store(level, Ordering::SeqCst);
    consts::SUCCESS
}

unsafe extern "C" fn terminal_send_fail(
    _buf: *const c_void,
    _count: c_int,
    _datatype: Datatype,
    _dest: c_int,
    _tag: c_int,
    _comm: Comm,
    _level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    77
}

/// Completes with fewer elements than the caller asked for.
unsafe extern "C" fn terminal_recv_short(
    _buf: *mut c_void,
    _count: c_int,
    _datatype: Datatype,
    source: c_int,
    tag: c_int,
    _comm: Comm,
    status: *mut Status,
    _level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    *status = Status {
        source,
        tag,
        error: consts::SUCCESS,
        count: 42,
    };
    consts::SUCCESS
}

unsafe extern "C" fn terminal_recv_fail(
    _buf: *mut c_void,
    _count: c_int,
    _datatype: Datatype,
    _source: c_int,
    _tag: c_int,
    _comm: Comm,
    _status: *mut Status,
    _level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    88
}

unsafe extern "C" fn terminal_bcast_ok(
    _buffer: *mut c_void,
    _count: c_int,
    _datatype: Datatype,
    _root: c_int,
    _comm: Comm,
    _level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    consts::SUCCESS
}

unsafe extern "C" fn terminal_allreduce_ok(
    _sendbuf: *const c_void,
    _recvbuf: *mut c_void,
    _count: c_int,
    _datatype: Datatype,
    _op: qmpi::c::Op,
    _comm: Comm,
    _level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    consts::SUCCESS
}

unsafe extern "C" fn terminal_allreduce_fail(
    _sendbuf: *const c_void,
    _recvbuf: *mut c_void,
    _count: c_int,
    _datatype: Datatype,
    _op: qmpi::c::Op,
    _comm: Comm,
    _level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    99
}

unsafe extern "C" fn terminal_reduce_ok(
    _sendbuf: *const c_void,
    _recvbuf: *mut c_void,
    _count: c_int,
    _datatype: Datatype,
    _op: qmpi::c::Op,
    _root: c_int,
    _comm: Comm,
    _level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    consts::SUCCESS
}

unsafe extern "C" fn terminal_barrier(
    _comm: Comm,
    level: c_int,
    _stack: *mut LayerStack,
) -> ReturnStatus {
    // Distinguishable status code proves the result is not rewritten.
    100 + level
}

static FINALIZE_FORWARDED: AtomicBool = AtomicBool::new(false);

unsafe extern "C" fn terminal_finalize(_level: c_int, _stack: *mut LayerStack) -> ReturnStatus {
    FINALIZE_FORWARDED.store(true, Ordering::SeqCst);
    consts::SUCCESS
}

unsafe extern "C" fn terminal_wtick(_level: c_int, _stack: *mut LayerStack) -> f64 {
    1e-6
}

/// Recorder layer at level 0, terminal layer built by `fill` at level 1.
fn two_layer_stack(fill: impl FnOnce(&mut FuncTable)) -> LayerStack {
    let mut recorder = FuncTable::new();
    register_layer(&mut recorder).expect("recorder registration");

    let mut terminal = FuncTable::new();
    fill(&mut terminal);

    let mut stack = LayerStack::new();
    stack.push_layer(recorder);
    stack.push_layer(terminal);
    stack
}

#[test]
fn every_operation_is_registered() {
    let mut table = FuncTable::new();
    register_layer(&mut table).expect("registration");
    for op in 0..ops::NUM_OPS {
        assert!(table.get(op).is_some(), "no wrapper for {}", ops::name(op));
    }
}

#[test]
fn send_variants_forward_arguments_and_classify_on_success() {
    let mut stack = two_layer_stack(|t| {
        t.register(ops::SEND, terminal_send_ok as SendFn).unwrap();
        t.register(ops::BSEND, terminal_send_ok as SendFn).unwrap();
        t.register(ops::RSEND, terminal_send_ok as SendFn).unwrap();
        t.register(ops::SSEND, terminal_send_ok as SendFn).unwrap();
    });

    unsafe {
        let buf = std::ptr::null();
        let dt = consts::INT64;
        let comm = consts::COMM_WORLD;
        assert_eq!(wrappers::send(buf, 1000, dt, 3, 9, comm, 0, &mut stack), 0);
        assert_eq!(wrappers::bsend(buf, 1, dt, 3, 9, comm, 0, &mut stack), 0);
        assert_eq!(wrappers::rsend(buf, 1, dt, 3, 9, comm, 0, &mut stack), 0);
        assert_eq!(wrappers::ssend(buf, 1, dt, 3, 9, comm, 0, &mut stack), 0);
    }

    // One increment per call, not per element.
    assert_eq!(COUNTERS.get(Direction::Sent, DatatypeClass::I64), 4);
    // The terminal handler saw the original arguments and the next level.
    assert_eq!(SEND_SEEN_DEST.load(Ordering::SeqCst), 3);
    assert_eq!(SEND_SEEN_TAG.load(Ordering::SeqCst), 9);
    assert_eq!(SEND_SEEN_LEVEL.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_send_is_not_classified() {
    let mut stack = two_layer_stack(|t| {
        t.register(ops::SEND, terminal_send_fail as SendFn).unwrap();
    });

    let ret = unsafe {
        wrappers::send(
            std::ptr::null(),
            10,
            consts::FLOAT,
            1,
            0,
            consts::COMM_WORLD,
            0,
            &mut stack,
        )
    };
    assert_eq!(ret, 77);
    assert_eq!(COUNTERS.get(Direction::Sent, DatatypeClass::F32), 0);
}

#[test]
fn recv_classifies_with_the_completed_count() {
    ensure_hooks();
    let mut stack = two_layer_stack(|t| {
        t.register(ops::RECV, terminal_recv_short as RecvFn).unwrap();
    });

    let mut status = Status::zeroed();
    let ret = unsafe {
        wrappers::recv(
            std::ptr::null_mut(),
            100, // requested buffer count, deliberately different
            consts::INT16,
            5,
            7,
            consts::COMM_WORLD,
            &mut status,
            0,
            &mut stack,
        )
    };
    assert_eq!(ret, consts::SUCCESS);
    assert_eq!(COUNTERS.get(Direction::Received, DatatypeClass::I16), 1);
    // Classification went through the status query, which saw the
    // transfer's 42 elements rather than the requested 100.
    assert_eq!(LAST_GET_COUNT_SEEN.load(Ordering::SeqCst), 42);
    // The substituted status was copied back out.
    assert_eq!(status.source, 5);
    assert_eq!(status.tag, 7);
    assert_eq!(status.count, 42);
}

#[test]
fn recv_with_status_ignore_still_queries_the_local_status() {
    ensure_hooks();
    let mut stack = two_layer_stack(|t| {
        t.register(ops::RECV, terminal_recv_short as RecvFn).unwrap();
    });

    let ret = unsafe {
        wrappers::recv(
            std::ptr::null_mut(),
            8,
            consts::UINT16,
            1,
            2,
            consts::COMM_WORLD,
            consts::STATUS_IGNORE,
            0,
            &mut stack,
        )
    };
    assert_eq!(ret, consts::SUCCESS);
    // Shares the I16 bucket with the test above when run in the same
    // process, so only check it moved at all.
    assert!(COUNTERS.get(Direction::Received, DatatypeClass::I16) >= 1);
}

#[test]
fn failed_recv_is_not_classified() {
    ensure_hooks();
    let mut stack = two_layer_stack(|t| {
        t.register(ops::RECV, terminal_recv_fail as RecvFn).unwrap();
    });

    let mut status = Status::zeroed();
    let ret = unsafe {
        wrappers::recv(
            std::ptr::null_mut(),
            4,
            consts::FLOAT,
            0,
            0,
            consts::COMM_WORLD,
            &mut status,
            0,
            &mut stack,
        )
    };
    assert_eq!(ret, 88);
    assert_eq!(COUNTERS.get(Direction::Received, DatatypeClass::F32), 0);
}

#[test]
fn bcast_splits_root_and_non_root() {
    ensure_hooks();
    let mut stack = two_layer_stack(|t| {
        t.register(ops::BCAST, terminal_bcast_ok as BcastFn).unwrap();
    });

    unsafe {
        // Mock rank is 0. Root call: one send regardless of group size.
        let ret = wrappers::bcast(
            std::ptr::null_mut(),
            50,
            consts::CHAR,
            0,
            consts::COMM_WORLD,
            0,
            &mut stack,
        );
        assert_eq!(ret, consts::SUCCESS);
        // Non-root call: one receive.
        let ret = wrappers::bcast(
            std::ptr::null_mut(),
            50,
            consts::CHAR,
            2,
            consts::COMM_WORLD,
            0,
            &mut stack,
        );
        assert_eq!(ret, consts::SUCCESS);
    }

    assert_eq!(COUNTERS.get(Direction::Sent, DatatypeClass::I8), 1);
    assert_eq!(COUNTERS.get(Direction::Received, DatatypeClass::I8), 1);
}

#[test]
fn bcast_root_classification_tolerates_huge_counts() {
    ensure_hooks();
    let mut stack = two_layer_stack(|t| {
        t.register(ops::BCAST, terminal_bcast_ok as BcastFn).unwrap();
    });

    // Mock rank 0 is the root of a 4-rank group, so the modeled
    // per-member count is scaled by 3; with a near-maximum count the
    // scaling must saturate, not trap.
    let ret = unsafe {
        wrappers::bcast(
            std::ptr::null_mut(),
            c_int::MAX,
            consts::INT16,
            0,
            consts::COMM_WORLD,
            0,
            &mut stack,
        )
    };
    assert_eq!(ret, consts::SUCCESS);
    assert_eq!(COUNTERS.get(Direction::Sent, DatatypeClass::I16), 1);
}

#[test]
fn reductions_classify_on_success_only() {
    let mut stack = two_layer_stack(|t| {
        t.register(ops::ALLREDUCE, terminal_allreduce_ok as AllreduceFn)
            .unwrap();
        t.register(ops::REDUCE, terminal_reduce_ok as ReduceFn).unwrap();
    });

    unsafe {
        let ret = wrappers::allreduce(
            std::ptr::null(),
            std::ptr::null_mut(),
            16,
            consts::DOUBLE,
            consts::OP_SUM,
            consts::COMM_WORLD,
            0,
            &mut stack,
        );
        assert_eq!(ret, consts::SUCCESS);
        let ret = wrappers::reduce(
            std::ptr::null(),
            std::ptr::null_mut(),
            16,
            consts::UINT64,
            consts::OP_SUM,
            0,
            consts::COMM_WORLD,
            0,
            &mut stack,
        );
        assert_eq!(ret, consts::SUCCESS);
    }
    assert_eq!(COUNTERS.get(Direction::Reduced, DatatypeClass::F64), 1);
    assert_eq!(COUNTERS.get(Direction::Reduced, DatatypeClass::I64), 1);

    let mut stack = two_layer_stack(|t| {
        t.register(ops::ALLREDUCE, terminal_allreduce_fail as AllreduceFn)
            .unwrap();
    });
    let ret = unsafe {
        wrappers::allreduce(
            std::ptr::null(),
            std::ptr::null_mut(),
            16,
            consts::BYTE,
            consts::OP_SUM,
            consts::COMM_WORLD,
            0,
            &mut stack,
        )
    };
    assert_eq!(ret, 99);
    assert_eq!(COUNTERS.get(Direction::Reduced, DatatypeClass::I8), 0);
}

#[test]
fn forwarded_status_codes_are_returned_unmodified() {
    let mut stack = two_layer_stack(|t| {
        t.register(ops::BARRIER, terminal_barrier as BarrierFn).unwrap();
    });
    let ret = unsafe { wrappers::barrier(consts::COMM_WORLD, 0, &mut stack) };
    assert_eq!(ret, 101);
}

#[test]
fn missing_next_handler_yields_defaults_not_crashes() {
    ensure_hooks();
    // Keep rank 0's stdout quiet under the test harness.
    std::env::set_var("QMPI_BWREC_REPORT", "0");

    // Recorder layer only; nothing registered above it.
    let mut stack = LayerStack::new();
    let mut recorder = FuncTable::new();
    register_layer(&mut recorder).expect("registration");
    stack.push_layer(recorder);

    // Resolution is total over the whole table: every operation's next
    // slot is empty and says so.
    for op in 0..ops::NUM_OPS {
        assert!(stack.next_handler(op, 0).is_none(), "{}", ops::name(op));
    }

    // Every wrapper with its own resolution path returns its zero
    // default instead of dereferencing the empty slot.
    unsafe {
        assert_eq!(wrappers::barrier(consts::COMM_WORLD, 0, &mut stack), consts::SUCCESS);
        assert_eq!(
            wrappers::send(
                std::ptr::null(),
                1,
                consts::LONG_DOUBLE,
                0,
                0,
                consts::COMM_WORLD,
                0,
                &mut stack,
            ),
            consts::SUCCESS
        );
        assert_eq!(
            wrappers::recv(
                std::ptr::null_mut(),
                1,
                consts::SHORT,
                0,
                0,
                consts::COMM_WORLD,
                consts::STATUS_IGNORE,
                0,
                &mut stack,
            ),
            consts::SUCCESS
        );
        assert_eq!(
            wrappers::sendrecv(
                std::ptr::null(),
                1,
                consts::SHORT,
                0,
                0,
                std::ptr::null_mut(),
                1,
                consts::SHORT,
                0,
                0,
                consts::COMM_WORLD,
                consts::STATUS_IGNORE,
                0,
                &mut stack,
            ),
            consts::SUCCESS
        );
        assert_eq!(
            wrappers::bcast(
                std::ptr::null_mut(),
                1,
                consts::SHORT,
                0,
                consts::COMM_WORLD,
                0,
                &mut stack,
            ),
            consts::SUCCESS
        );
        assert_eq!(
            wrappers::allreduce(
                std::ptr::null(),
                std::ptr::null_mut(),
                1,
                consts::SHORT,
                consts::OP_SUM,
                consts::COMM_WORLD,
                0,
                &mut stack,
            ),
            consts::SUCCESS
        );
        assert_eq!(
            wrappers::reduce(
                std::ptr::null(),
                std::ptr::null_mut(),
                1,
                consts::SHORT,
                consts::OP_SUM,
                0,
                consts::COMM_WORLD,
                0,
                &mut stack,
            ),
            consts::SUCCESS
        );
        assert_eq!(
            wrappers::init(std::ptr::null_mut(), std::ptr::null_mut(), 0, &mut stack),
            consts::SUCCESS
        );
        assert_eq!(wrappers::finalize(0, &mut stack), consts::SUCCESS);
        assert_eq!(wrappers::wtime(0, &mut stack), 0.0);
        assert_eq!(wrappers::wtick(0, &mut stack), 0.0);
    }
}

#[test]
fn mistyped_next_handler_is_treated_as_missing() {
    let mut stack = two_layer_stack(|t| {
        // Wrong convention registered for barrier.
        t.register(ops::BARRIER, terminal_wtick as ClockFn).unwrap();
    });
    let ret = unsafe { wrappers::barrier(consts::COMM_WORLD, 0, &mut stack) };
    assert_eq!(ret, consts::SUCCESS);
}

#[test]
fn clock_queries_forward_through_their_own_convention() {
    let mut stack = two_layer_stack(|t| {
        t.register(ops::WTICK, terminal_wtick as ClockFn).unwrap();
    });
    let tick = unsafe { wrappers::wtick(0, &mut stack) };
    assert_eq!(tick, 1e-6);
}

#[test]
fn finalize_aggregates_and_forwards() {
    ensure_hooks();
    // Keep rank 0's stdout quiet under the test harness.
    std::env::set_var("QMPI_BWREC_REPORT", "0");

    let mut stack = two_layer_stack(|t| {
        t.register(ops::FINALIZE, terminal_finalize as FinalizeFn).unwrap();
    });
    let ret = unsafe { wrappers::finalize(0, &mut stack) };
    assert_eq!(ret, consts::SUCCESS);
    assert!(FINALIZE_FORWARDED.load(Ordering::SeqCst));
}

#[test]
fn dispatch_goes_through_the_registered_table_entry() {
    let mut recorder = FuncTable::new();
    register_layer(&mut recorder).expect("registration");

    // The application shim resolves layer 0's entry the same way the
    // wrappers resolve deeper layers: typed lookup against the table.
    let entry = recorder.get(ops::SEND).expect("send registered");
    assert!(entry.cast::<SendFn>().is_some());
    assert!(entry.cast::<RecvFn>().is_none());
}
