//! Interception wrappers, one per MPI operation.
//!
//! Every wrapper reproduces the native signature of the operation it
//! shadows, with the layer level and stack pointer appended, and
//! forwards to the next layer's handler with the arguments untouched.
//! The bulk of the set is pure forwarding, expanded from the manifest at
//! the bottom of this file; the wrappers with accounting or a special
//! calling convention are written out above it.
//!
//! A missing or ill-typed next handler is never dereferenced: the
//! wrapper reports it and returns the zero default of its return
//! convention (`SUCCESS` for status-code operations, `0.0` for the
//! clock queries).
use crate::pmpi::{HookPmpi, Pmpi};
use crate::{hooks, report, COUNTERS};
use qmpi::c::{
    Aint, Comm, CommCopyAttrFn, CommDeleteAttrFn, CommErrhandlerFn, CopyFn, Count,
    DatarepConversionFn, DatarepExtentFn, Datatype, DeleteFn, Errhandler, File, FileErrhandlerFn,
    GrequestCancelFn, GrequestFreeFn, GrequestQueryFn, Group, HandlerFn, Info, Message, Offset,
    Op, Request, ReturnStatus, Status, TypeCopyAttrFn, TypeDeleteAttrFn, UserFn, Win,
    WinCopyAttrFn, WinDeleteAttrFn, WinErrhandlerFn,
};
use qmpi::ops;
use qmpi::{consts, report_missing_handler, FuncTable, LayerStack};
use std::ffi::{c_char, c_double, c_int, c_void};
use std::sync::Once;

/// Expand one pure-forwarding wrapper per manifest row, plus the
/// registration function covering all of them. The emitted type alias is
/// the binary contract a terminal implementation registers against.
macro_rules! forward_ops {
    ($($name:ident, $alias:ident, $op:path, ($($arg:ident: $ty:ty),*));* $(;)?) => {
        $(
            pub type $alias =
                unsafe extern "C" fn($($arg: $ty,)* level: c_int, stack: *mut LayerStack) -> ReturnStatus;

            pub unsafe extern "C" fn $name(
                $($arg: $ty,)*
                level: c_int,
                stack: *mut LayerStack,
            ) -> ReturnStatus {
                match (*stack).next_typed::<$alias>($op, level) {
                    Some(next) => next($($arg,)* level + 1, stack),
                    None => {
                        report_missing_handler($op, level);
                        consts::SUCCESS
                    }
                }
            }
        )*

        fn register_forward(table: &mut FuncTable) -> qmpi::Result<()> {
            $(table.register($op, $name as $alias)?;)*
            Ok(())
        }
    };
}

// ---- point-to-point sends --------------------------------------------

pub type SendFn = unsafe extern "C" fn(
    buf: *const c_void,
    count: c_int,
    datatype: Datatype,
    dest: c_int,
    tag: c_int,
    comm: Comm,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus;

/// The four send flavors share one signature and one policy: forward,
/// then classify as a send only when the forwarded call succeeded.
macro_rules! send_variant {
    ($name:ident, $op:path) => {
        pub unsafe extern "C" fn $name(
            buf: *const c_void,
            count: c_int,
            datatype: Datatype,
            dest: c_int,
            tag: c_int,
            comm: Comm,
            level: c_int,
            stack: *mut LayerStack,
        ) -> ReturnStatus {
            let ret = match (*stack).next_typed::<SendFn>($op, level) {
                Some(next) => next(buf, count, datatype, dest, tag, comm, level + 1, stack),
                None => {
                    report_missing_handler($op, level);
                    return consts::SUCCESS;
                }
            };
            if ret == consts::SUCCESS {
                COUNTERS.record_send(count, datatype);
            }
            ret
        }
    };
}

send_variant!(send, ops::SEND);
send_variant!(bsend, ops::BSEND);
send_variant!(rsend, ops::RSEND);
send_variant!(ssend, ops::SSEND);

// ---- point-to-point receive ------------------------------------------

pub type RecvFn = unsafe extern "C" fn(
    buf: *mut c_void,
    count: c_int,
    datatype: Datatype,
    source: c_int,
    tag: c_int,
    comm: Comm,
    status: *mut Status,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus;

/// Receive classification uses the element count the completed status
/// reports, not the caller's buffer count. A local status is substituted
/// so the count query works even when the caller passed `STATUS_IGNORE`.
pub unsafe extern "C" fn recv(
    buf: *mut c_void,
    count: c_int,
    datatype: Datatype,
    source: c_int,
    tag: c_int,
    comm: Comm,
    status: *mut Status,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus {
    let next = match (*stack).next_typed::<RecvFn>(ops::RECV, level) {
        Some(next) => next,
        None => {
            report_missing_handler(ops::RECV, level);
            return consts::SUCCESS;
        }
    };

    let mut local_status = Status::zeroed();
    let ret = next(
        buf,
        count,
        datatype,
        source,
        tag,
        comm,
        &mut local_status,
        level + 1,
        stack,
    );
    if status != consts::STATUS_IGNORE {
        *status = local_status;
    }

    if ret != consts::SUCCESS {
        return ret;
    }
    if let Some(hooks) = hooks() {
        match HookPmpi(*hooks).get_count(&local_status, datatype) {
            Ok(actual) => COUNTERS.record_recv(actual, datatype),
            Err(code) => return code,
        }
    }
    ret
}

// ---- combined send-receive -------------------------------------------

pub type SendrecvFn = unsafe extern "C" fn(
    sendbuf: *const c_void,
    sendcount: c_int,
    sendtype: Datatype,
    dest: c_int,
    sendtag: c_int,
    recvbuf: *mut c_void,
    recvcount: c_int,
    recvtype: Datatype,
    source: c_int,
    recvtag: c_int,
    comm: Comm,
    status: *mut Status,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus;

/// Only the receive half is classified; the send half of a combined
/// send-receive goes unrecorded (see DESIGN.md).
pub unsafe extern "C" fn sendrecv(
    sendbuf: *const c_void,
    sendcount: c_int,
    sendtype: Datatype,
    dest: c_int,
    sendtag: c_int,
    recvbuf: *mut c_void,
    recvcount: c_int,
    recvtype: Datatype,
    source: c_int,
    recvtag: c_int,
    comm: Comm,
    status: *mut Status,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus {
    let next = match (*stack).next_typed::<SendrecvFn>(ops::SENDRECV, level) {
        Some(next) => next,
        None => {
            report_missing_handler(ops::SENDRECV, level);
            return consts::SUCCESS;
        }
    };

    let mut local_status = Status::zeroed();
    let ret = next(
        sendbuf,
        sendcount,
        sendtype,
        dest,
        sendtag,
        recvbuf,
        recvcount,
        recvtype,
        source,
        recvtag,
        comm,
        &mut local_status,
        level + 1,
        stack,
    );
    if status != consts::STATUS_IGNORE {
        *status = local_status;
    }

    if ret != consts::SUCCESS {
        return ret;
    }
    if let Some(hooks) = hooks() {
        match HookPmpi(*hooks).get_count(&local_status, recvtype) {
            Ok(actual) => COUNTERS.record_recv(actual, recvtype),
            Err(code) => return code,
        }
    }
    ret
}

// ---- broadcast --------------------------------------------------------

pub type BcastFn = unsafe extern "C" fn(
    buffer: *mut c_void,
    count: c_int,
    datatype: Datatype,
    root: c_int,
    comm: Comm,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus;

/// The root models one send to every other member of the group; every
/// other rank records one receive. Classification is best-effort: a
/// failed rank or size query abandons it without touching the forwarded
/// result.
pub unsafe extern "C" fn bcast(
    buffer: *mut c_void,
    count: c_int,
    datatype: Datatype,
    root: c_int,
    comm: Comm,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus {
    let ret = match (*stack).next_typed::<BcastFn>(ops::BCAST, level) {
        Some(next) => next(buffer, count, datatype, root, comm, level + 1, stack),
        None => {
            report_missing_handler(ops::BCAST, level);
            return consts::SUCCESS;
        }
    };

    if ret == consts::SUCCESS {
        if let Some(hooks) = hooks() {
            let pmpi = HookPmpi(*hooks);
            if let Ok(rank) = pmpi.comm_rank(comm) {
                if rank == root {
                    if let Ok(size) = pmpi.comm_size(comm) {
                        // The product only labels the call; saturate
                        // rather than overflow on huge counts.
                        COUNTERS.record_send(count.saturating_mul(size - 1), datatype);
                    }
                } else {
                    COUNTERS.record_recv(count, datatype);
                }
            }
        }
    }
    ret
}

// ---- reductions -------------------------------------------------------

pub type AllreduceFn = unsafe extern "C" fn(
    sendbuf: *const c_void,
    recvbuf: *mut c_void,
    count: c_int,
    datatype: Datatype,
    op: Op,
    comm: Comm,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus;

pub unsafe extern "C" fn allreduce(
    sendbuf: *const c_void,
    recvbuf: *mut c_void,
    count: c_int,
    datatype: Datatype,
    op: Op,
    comm: Comm,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus {
    let ret = match (*stack).next_typed::<AllreduceFn>(ops::ALLREDUCE, level) {
        Some(next) => next(sendbuf, recvbuf, count, datatype, op, comm, level + 1, stack),
        None => {
            report_missing_handler(ops::ALLREDUCE, level);
            return consts::SUCCESS;
        }
    };
    if ret == consts::SUCCESS {
        COUNTERS.record_reduce(count, datatype);
    }
    ret
}

pub type ReduceFn = unsafe extern "C" fn(
    sendbuf: *const c_void,
    recvbuf: *mut c_void,
    count: c_int,
    datatype: Datatype,
    op: Op,
    root: c_int,
    comm: Comm,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus;

pub unsafe extern "C" fn reduce(
    sendbuf: *const c_void,
    recvbuf: *mut c_void,
    count: c_int,
    datatype: Datatype,
    op: Op,
    root: c_int,
    comm: Comm,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus {
    let ret = match (*stack).next_typed::<ReduceFn>(ops::REDUCE, level) {
        Some(next) => next(
            sendbuf,
            recvbuf,
            count,
            datatype,
            op,
            root,
            comm,
            level + 1,
            stack,
        ),
        None => {
            report_missing_handler(ops::REDUCE, level);
            return consts::SUCCESS;
        }
    };
    if ret == consts::SUCCESS {
        COUNTERS.record_reduce(count, datatype);
    }
    ret
}

// ---- init and finalize ------------------------------------------------

pub type InitFn = unsafe extern "C" fn(
    argc: *mut c_int,
    argv: *mut *mut *mut c_char,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus;

pub unsafe extern "C" fn init(
    argc: *mut c_int,
    argv: *mut *mut *mut c_char,
    level: c_int,
    stack: *mut LayerStack,
) -> ReturnStatus {
    static LOG_INIT: Once = Once::new();
    LOG_INIT.call_once(|| {
        // Another layer may already own the global logger.
        let _ = env_logger::try_init();
    });

    match (*stack).next_typed::<InitFn>(ops::INIT, level) {
        Some(next) => next(argc, argv, level + 1, stack),
        None => {
            report_missing_handler(ops::INIT, level);
            consts::SUCCESS
        }
    }
}

pub type FinalizeFn =
    unsafe extern "C" fn(level: c_int, stack: *mut LayerStack) -> ReturnStatus;

/// Shutdown interception: aggregate and report the counters, then
/// forward finalize. A failing aggregation step propagates its code
/// *instead of* forwarding (see DESIGN.md for why this asymmetry is
/// kept).
pub unsafe extern "C" fn finalize(level: c_int, stack: *mut LayerStack) -> ReturnStatus {
    if let Some(hooks) = hooks() {
        let ret = report::shutdown_report(&COUNTERS, &HookPmpi(*hooks), consts::COMM_WORLD);
        if ret != consts::SUCCESS {
            return ret;
        }
    }

    match (*stack).next_typed::<FinalizeFn>(ops::FINALIZE, level) {
        Some(next) => next(level + 1, stack),
        None => {
            report_missing_handler(ops::FINALIZE, level);
            consts::SUCCESS
        }
    }
}

// ---- clock queries ----------------------------------------------------

/// Wtick and Wtime return a floating-point value directly and take no
/// forwarded arguments; they cannot reuse the status-code trampoline.
pub type ClockFn = unsafe extern "C" fn(level: c_int, stack: *mut LayerStack) -> c_double;

pub unsafe extern "C" fn wtick(level: c_int, stack: *mut LayerStack) -> c_double {
    match (*stack).next_typed::<ClockFn>(ops::WTICK, level) {
        Some(next) => next(level + 1, stack),
        None => {
            report_missing_handler(ops::WTICK, level);
            0.0
        }
    }
}

pub unsafe extern "C" fn wtime(level: c_int, stack: *mut LayerStack) -> c_double {
    match (*stack).next_typed::<ClockFn>(ops::WTIME, level) {
        Some(next) => next(level + 1, stack),
        None => {
            report_missing_handler(ops::WTIME, level);
            0.0
        }
    }
}

/// Register every wrapper of this layer into `table`.
pub fn register_layer(table: &mut FuncTable) -> qmpi::Result<()> {
    register_forward(table)?;
    table.register(ops::SEND, send as SendFn)?;
    table.register(ops::BSEND, bsend as SendFn)?;
    table.register(ops::RSEND, rsend as SendFn)?;
    table.register(ops::SSEND, ssend as SendFn)?;
    table.register(ops::RECV, recv as RecvFn)?;
    table.register(ops::SENDRECV, sendrecv as SendrecvFn)?;
    table.register(ops::BCAST, bcast as BcastFn)?;
    table.register(ops::ALLREDUCE, allreduce as AllreduceFn)?;
    table.register(ops::REDUCE, reduce as ReduceFn)?;
    table.register(ops::INIT, init as InitFn)?;
    table.register(ops::FINALIZE, finalize as FinalizeFn)?;
    table.register(ops::WTICK, wtick as ClockFn)?;
    table.register(ops::WTIME, wtime as ClockFn)?;
    Ok(())
}

forward_ops! {
    abort, AbortFn, ops::ABORT, (comm: Comm, errorcode: c_int);
    accumulate, AccumulateFn, ops::ACCUMULATE, (origin_addr: *const c_void, origin_count: c_int, origin_datatype: Datatype, target_rank: c_int, target_disp: Aint, target_count: c_int, target_datatype: Datatype, op: Op, win: Win);
    add_error_class, AddErrorClassFn, ops::ADD_ERROR_CLASS, (errorclass: *mut c_int);
    add_error_code, AddErrorCodeFn, ops::ADD_ERROR_CODE, (errorclass: c_int, errorcode: *mut c_int);
    add_error_string, AddErrorStringFn, ops::ADD_ERROR_STRING, (errorcode: c_int, string: *const c_char);
    address, AddressFn, ops::ADDRESS, (location: *mut c_void, address: *mut Aint);
    allgather, AllgatherFn, ops::ALLGATHER, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, comm: Comm);
    allgatherv, AllgathervFn, ops::ALLGATHERV, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int, recvtype: Datatype, comm: Comm);
    alloc_mem, AllocMemFn, ops::ALLOC_MEM, (size: Aint, info: Info, baseptr: *mut c_void);
    alltoall, AlltoallFn, ops::ALLTOALL, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, comm: Comm);
    alltoallv, AlltoallvFn, ops::ALLTOALLV, (sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, rdispls: *const c_int, recvtype: Datatype, comm: Comm);
    alltoallw, AlltoallwFn, ops::ALLTOALLW, (sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int, sendtypes: *const Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, rdispls: *const c_int, recvtypes: *const Datatype, comm: Comm);
    attr_delete, AttrDeleteFn, ops::ATTR_DELETE, (comm: Comm, keyval: c_int);
    attr_get, AttrGetFn, ops::ATTR_GET, (comm: Comm, keyval: c_int, attribute_val: *mut c_void, flag: *mut c_int);
    attr_put, AttrPutFn, ops::ATTR_PUT, (comm: Comm, keyval: c_int, attribute_val: *mut c_void);
    barrier, BarrierFn, ops::BARRIER, (comm: Comm);
    bsend_init, BsendInitFn, ops::BSEND_INIT, (buf: *const c_void, count: c_int, datatype: Datatype, dest: c_int, tag: c_int, comm: Comm, request: *mut Request);
    buffer_attach, BufferAttachFn, ops::BUFFER_ATTACH, (buffer: *mut c_void, size: c_int);
    buffer_detach, BufferDetachFn, ops::BUFFER_DETACH, (buffer: *mut c_void, size: *mut c_int);
    cancel, CancelFn, ops::CANCEL, (request: *mut Request);
    cart_coords, CartCoordsFn, ops::CART_COORDS, (comm: Comm, rank: c_int, maxdims: c_int, coords: *mut c_int);
    cart_create, CartCreateFn, ops::CART_CREATE, (old_comm: Comm, ndims: c_int, dims: *const c_int, periods: *const c_int, reorder: c_int, comm_cart: *mut Comm);
    cart_get, CartGetFn, ops::CART_GET, (comm: Comm, maxdims: c_int, dims: *mut c_int, periods: *mut c_int, coords: *mut c_int);
    cart_map, CartMapFn, ops::CART_MAP, (comm: Comm, ndims: c_int, dims: *const c_int, periods: *const c_int, newrank: *mut c_int);
    cart_rank, CartRankFn, ops::CART_RANK, (comm: Comm, coords: *const c_int, rank: *mut c_int);
    cart_shift, CartShiftFn, ops::CART_SHIFT, (comm: Comm, direction: c_int, disp: c_int, rank_source: *mut c_int, rank_dest: *mut c_int);
    cart_sub, CartSubFn, ops::CART_SUB, (comm: Comm, remain_dims: *const c_int, new_comm: *mut Comm);
    cartdim_get, CartdimGetFn, ops::CARTDIM_GET, (comm: Comm, ndims: *mut c_int);
    close_port, ClosePortFn, ops::CLOSE_PORT, (port_name: *const c_char);
    comm_accept, CommAcceptFn, ops::COMM_ACCEPT, (port_name: *const c_char, info: Info, root: c_int, comm: Comm, newcomm: *mut Comm);
    comm_call_errhandler, CommCallErrhandlerFn, ops::COMM_CALL_ERRHANDLER, (comm: Comm, errorcode: c_int);
    comm_compare, CommCompareFn, ops::COMM_COMPARE, (comm1: Comm, comm2: Comm, result: *mut c_int);
    comm_connect, CommConnectFn, ops::COMM_CONNECT, (port_name: *const c_char, info: Info, root: c_int, comm: Comm, newcomm: *mut Comm);
    comm_create, CommCreateFn, ops::COMM_CREATE, (comm: Comm, group: Group, newcomm: *mut Comm);
    comm_create_errhandler, CommCreateErrhandlerFn, ops::COMM_CREATE_ERRHANDLER, (function: Option<CommErrhandlerFn>, errhandler: *mut Errhandler);
    comm_create_group, CommCreateGroupFn, ops::COMM_CREATE_GROUP, (comm: Comm, group: Group, tag: c_int, newcomm: *mut Comm);
    comm_create_keyval, CommCreateKeyvalFn, ops::COMM_CREATE_KEYVAL, (comm_copy_attr_fn: Option<CommCopyAttrFn>, comm_delete_attr_fn: Option<CommDeleteAttrFn>, comm_keyval: *mut c_int, extra_state: *mut c_void);
    comm_delete_attr, CommDeleteAttrOpFn, ops::COMM_DELETE_ATTR, (comm: Comm, comm_keyval: c_int);
    comm_disconnect, CommDisconnectFn, ops::COMM_DISCONNECT, (comm: *mut Comm);
    comm_dup, CommDupFn, ops::COMM_DUP, (comm: Comm, newcomm: *mut Comm);
    comm_dup_with_info, CommDupWithInfoFn, ops::COMM_DUP_WITH_INFO, (comm: Comm, info: Info, newcomm: *mut Comm);
    comm_free, CommFreeFn, ops::COMM_FREE, (comm: *mut Comm);
    comm_free_keyval, CommFreeKeyvalFn, ops::COMM_FREE_KEYVAL, (comm_keyval: *mut c_int);
    comm_get_attr, CommGetAttrFn, ops::COMM_GET_ATTR, (comm: Comm, comm_keyval: c_int, attribute_val: *mut c_void, flag: *mut c_int);
    comm_get_errhandler, CommGetErrhandlerFn, ops::COMM_GET_ERRHANDLER, (comm: Comm, erhandler: *mut Errhandler);
    comm_get_info, CommGetInfoFn, ops::COMM_GET_INFO, (comm: Comm, info_used: *mut Info);
    comm_get_name, CommGetNameFn, ops::COMM_GET_NAME, (comm: Comm, comm_name: *mut c_char, resultlen: *mut c_int);
    comm_get_parent, CommGetParentFn, ops::COMM_GET_PARENT, (parent: *mut Comm);
    comm_group, CommGroupFn, ops::COMM_GROUP, (comm: Comm, group: *mut Group);
    comm_idup, CommIdupFn, ops::COMM_IDUP, (comm: Comm, newcomm: *mut Comm, request: *mut Request);
    comm_join, CommJoinFn, ops::COMM_JOIN, (fd: c_int, intercomm: *mut Comm);
    comm_rank, CommRankFn, ops::COMM_RANK, (comm: Comm, rank: *mut c_int);
    comm_remote_group, CommRemoteGroupFn, ops::COMM_REMOTE_GROUP, (comm: Comm, group: *mut Group);
    comm_remote_size, CommRemoteSizeFn, ops::COMM_REMOTE_SIZE, (comm: Comm, size: *mut c_int);
    comm_set_attr, CommSetAttrFn, ops::COMM_SET_ATTR, (comm: Comm, comm_keyval: c_int, attribute_val: *mut c_void);
    comm_set_errhandler, CommSetErrhandlerFn, ops::COMM_SET_ERRHANDLER, (comm: Comm, errhandler: Errhandler);
    comm_set_info, CommSetInfoFn, ops::COMM_SET_INFO, (comm: Comm, info: Info);
    comm_set_name, CommSetNameFn, ops::COMM_SET_NAME, (comm: Comm, comm_name: *const c_char);
    comm_size, CommSizeFn, ops::COMM_SIZE, (comm: Comm, size: *mut c_int);
    comm_split, CommSplitFn, ops::COMM_SPLIT, (comm: Comm, color: c_int, key: c_int, newcomm: *mut Comm);
    comm_split_type, CommSplitTypeFn, ops::COMM_SPLIT_TYPE, (comm: Comm, split_type: c_int, key: c_int, info: Info, newcomm: *mut Comm);
    comm_test_inter, CommTestInterFn, ops::COMM_TEST_INTER, (comm: Comm, flag: *mut c_int);
    compare_and_swap, CompareAndSwapFn, ops::COMPARE_AND_SWAP, (origin_addr: *const c_void, compare_addr: *const c_void, result_addr: *mut c_void, datatype: Datatype, target_rank: c_int, target_disp: Aint, win: Win);
    dims_create, DimsCreateFn, ops::DIMS_CREATE, (nnodes: c_int, ndims: c_int, dims: *mut c_int);
    dist_graph_create, DistGraphCreateFn, ops::DIST_GRAPH_CREATE, (comm_old: Comm, n: c_int, nodes: *const c_int, degrees: *const c_int, targets: *const c_int, weights: *const c_int, info: Info, reorder: c_int, newcomm: *mut Comm);
    dist_graph_create_adjacent, DistGraphCreateAdjacentFn, ops::DIST_GRAPH_CREATE_ADJACENT, (comm_old: Comm, indegree: c_int, sources: *const c_int, sourceweights: *const c_int, outdegree: c_int, destinations: *const c_int, destweights: *const c_int, info: Info, reorder: c_int, comm_dist_graph: *mut Comm);
    dist_graph_neighbors, DistGraphNeighborsFn, ops::DIST_GRAPH_NEIGHBORS, (comm: Comm, maxindegree: c_int, sources: *mut c_int, sourceweights: *mut c_int, maxoutdegree: c_int, destinations: *mut c_int, destweights: *mut c_int);
    dist_graph_neighbors_count, DistGraphNeighborsCountFn, ops::DIST_GRAPH_NEIGHBORS_COUNT, (comm: Comm, inneighbors: *mut c_int, outneighbors: *mut c_int, weighted: *mut c_int);
    errhandler_create, ErrhandlerCreateFn, ops::ERRHANDLER_CREATE, (function: Option<HandlerFn>, errhandler: *mut Errhandler);
    errhandler_free, ErrhandlerFreeFn, ops::ERRHANDLER_FREE, (errhandler: *mut Errhandler);
    errhandler_get, ErrhandlerGetFn, ops::ERRHANDLER_GET, (comm: Comm, errhandler: *mut Errhandler);
    errhandler_set, ErrhandlerSetFn, ops::ERRHANDLER_SET, (comm: Comm, errhandler: Errhandler);
    error_class, ErrorClassFn, ops::ERROR_CLASS, (errorcode: c_int, errorclass: *mut c_int);
    error_string, ErrorStringFn, ops::ERROR_STRING, (errorcode: c_int, string: *mut c_char, resultlen: *mut c_int);
    exscan, ExscanFn, ops::EXSCAN, (sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int, datatype: Datatype, op: Op, comm: Comm);
    fetch_and_op, FetchAndOpFn, ops::FETCH_AND_OP, (origin_addr: *const c_void, result_addr: *mut c_void, datatype: Datatype, target_rank: c_int, target_disp: Aint, op: Op, win: Win);
    file_call_errhandler, FileCallErrhandlerFn, ops::FILE_CALL_ERRHANDLER, (fh: File, errorcode: c_int);
    file_close, FileCloseFn, ops::FILE_CLOSE, (fh: *mut File);
    file_create_errhandler, FileCreateErrhandlerFn, ops::FILE_CREATE_ERRHANDLER, (function: Option<FileErrhandlerFn>, errhandler: *mut Errhandler);
    file_delete, FileDeleteFn, ops::FILE_DELETE, (filename: *const c_char, info: Info);
    file_get_amode, FileGetAmodeFn, ops::FILE_GET_AMODE, (fh: File, amode: *mut c_int);
    file_get_atomicity, FileGetAtomicityFn, ops::FILE_GET_ATOMICITY, (fh: File, flag: *mut c_int);
    file_get_byte_offset, FileGetByteOffsetFn, ops::FILE_GET_BYTE_OFFSET, (fh: File, offset: Offset, disp: *mut Offset);
    file_get_errhandler, FileGetErrhandlerFn, ops::FILE_GET_ERRHANDLER, (file: File, errhandler: *mut Errhandler);
    file_get_group, FileGetGroupFn, ops::FILE_GET_GROUP, (fh: File, group: *mut Group);
    file_get_info, FileGetInfoFn, ops::FILE_GET_INFO, (fh: File, info_used: *mut Info);
    file_get_position, FileGetPositionFn, ops::FILE_GET_POSITION, (fh: File, offset: *mut Offset);
    file_get_position_shared, FileGetPositionSharedFn, ops::FILE_GET_POSITION_SHARED, (fh: File, offset: *mut Offset);
    file_get_size, FileGetSizeFn, ops::FILE_GET_SIZE, (fh: File, size: *mut Offset);
    file_get_type_extent, FileGetTypeExtentFn, ops::FILE_GET_TYPE_EXTENT, (fh: File, datatype: Datatype, extent: *mut Aint);
    file_get_view, FileGetViewFn, ops::FILE_GET_VIEW, (fh: File, disp: *mut Offset, etype: *mut Datatype, filetype: *mut Datatype, datarep: *mut c_char);
    file_iread, FileIreadFn, ops::FILE_IREAD, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iread_all, FileIreadAllFn, ops::FILE_IREAD_ALL, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iread_at, FileIreadAtFn, ops::FILE_IREAD_AT, (fh: File, offset: Offset, buf: *mut c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iread_at_all, FileIreadAtAllFn, ops::FILE_IREAD_AT_ALL, (fh: File, offset: Offset, buf: *mut c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iread_shared, FileIreadSharedFn, ops::FILE_IREAD_SHARED, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iwrite, FileIwriteFn, ops::FILE_IWRITE, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iwrite_all, FileIwriteAllFn, ops::FILE_IWRITE_ALL, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iwrite_at, FileIwriteAtFn, ops::FILE_IWRITE_AT, (fh: File, offset: Offset, buf: *const c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iwrite_at_all, FileIwriteAtAllFn, ops::FILE_IWRITE_AT_ALL, (fh: File, offset: Offset, buf: *const c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_iwrite_shared, FileIwriteSharedFn, ops::FILE_IWRITE_SHARED, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype, request: *mut Request);
    file_open, FileOpenFn, ops::FILE_OPEN, (comm: Comm, filename: *const c_char, amode: c_int, info: Info, fh: *mut File);
    file_preallocate, FilePreallocateFn, ops::FILE_PREALLOCATE, (fh: File, size: Offset);
    file_read, FileReadFn, ops::FILE_READ, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_read_all, FileReadAllFn, ops::FILE_READ_ALL, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_read_all_begin, FileReadAllBeginFn, ops::FILE_READ_ALL_BEGIN, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype);
    file_read_all_end, FileReadAllEndFn, ops::FILE_READ_ALL_END, (fh: File, buf: *mut c_void, status: *mut Status);
    file_read_at, FileReadAtFn, ops::FILE_READ_AT, (fh: File, offset: Offset, buf: *mut c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_read_at_all, FileReadAtAllFn, ops::FILE_READ_AT_ALL, (fh: File, offset: Offset, buf: *mut c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_read_at_all_begin, FileReadAtAllBeginFn, ops::FILE_READ_AT_ALL_BEGIN, (fh: File, offset: Offset, buf: *mut c_void, count: c_int, datatype: Datatype);
    file_read_at_all_end, FileReadAtAllEndFn, ops::FILE_READ_AT_ALL_END, (fh: File, buf: *mut c_void, status: *mut Status);
    file_read_ordered, FileReadOrderedFn, ops::FILE_READ_ORDERED, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_read_ordered_begin, FileReadOrderedBeginFn, ops::FILE_READ_ORDERED_BEGIN, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype);
    file_read_ordered_end, FileReadOrderedEndFn, ops::FILE_READ_ORDERED_END, (fh: File, buf: *mut c_void, status: *mut Status);
    file_read_shared, FileReadSharedFn, ops::FILE_READ_SHARED, (fh: File, buf: *mut c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_seek, FileSeekFn, ops::FILE_SEEK, (fh: File, offset: Offset, whence: c_int);
    file_seek_shared, FileSeekSharedFn, ops::FILE_SEEK_SHARED, (fh: File, offset: Offset, whence: c_int);
    file_set_atomicity, FileSetAtomicityFn, ops::FILE_SET_ATOMICITY, (fh: File, flag: c_int);
    file_set_errhandler, FileSetErrhandlerFn, ops::FILE_SET_ERRHANDLER, (file: File, errhandler: Errhandler);
    file_set_info, FileSetInfoFn, ops::FILE_SET_INFO, (fh: File, info: Info);
    file_set_size, FileSetSizeFn, ops::FILE_SET_SIZE, (fh: File, size: Offset);
    file_set_view, FileSetViewFn, ops::FILE_SET_VIEW, (fh: File, disp: Offset, etype: Datatype, filetype: Datatype, datarep: *const c_char, info: Info);
    file_sync, FileSyncFn, ops::FILE_SYNC, (fh: File);
    file_write, FileWriteFn, ops::FILE_WRITE, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_write_all, FileWriteAllFn, ops::FILE_WRITE_ALL, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_write_all_begin, FileWriteAllBeginFn, ops::FILE_WRITE_ALL_BEGIN, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype);
    file_write_all_end, FileWriteAllEndFn, ops::FILE_WRITE_ALL_END, (fh: File, buf: *const c_void, status: *mut Status);
    file_write_at, FileWriteAtFn, ops::FILE_WRITE_AT, (fh: File, offset: Offset, buf: *const c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_write_at_all, FileWriteAtAllFn, ops::FILE_WRITE_AT_ALL, (fh: File, offset: Offset, buf: *const c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_write_at_all_begin, FileWriteAtAllBeginFn, ops::FILE_WRITE_AT_ALL_BEGIN, (fh: File, offset: Offset, buf: *const c_void, count: c_int, datatype: Datatype);
    file_write_at_all_end, FileWriteAtAllEndFn, ops::FILE_WRITE_AT_ALL_END, (fh: File, buf: *const c_void, status: *mut Status);
    file_write_ordered, FileWriteOrderedFn, ops::FILE_WRITE_ORDERED, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype, status: *mut Status);
    file_write_ordered_begin, FileWriteOrderedBeginFn, ops::FILE_WRITE_ORDERED_BEGIN, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype);
    file_write_ordered_end, FileWriteOrderedEndFn, ops::FILE_WRITE_ORDERED_END, (fh: File, buf: *const c_void, status: *mut Status);
    file_write_shared, FileWriteSharedFn, ops::FILE_WRITE_SHARED, (fh: File, buf: *const c_void, count: c_int, datatype: Datatype, status: *mut Status);
    finalized, FinalizedFn, ops::FINALIZED, (flag: *mut c_int);
    free_mem, FreeMemFn, ops::FREE_MEM, (base: *mut c_void);
    gather, GatherFn, ops::GATHER, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, root: c_int, comm: Comm);
    gatherv, GathervFn, ops::GATHERV, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int, recvtype: Datatype, root: c_int, comm: Comm);
    get, GetFn, ops::GET, (origin_addr: *mut c_void, origin_count: c_int, origin_datatype: Datatype, target_rank: c_int, target_disp: Aint, target_count: c_int, target_datatype: Datatype, win: Win);
    get_accumulate, GetAccumulateFn, ops::GET_ACCUMULATE, (origin_addr: *const c_void, origin_count: c_int, origin_datatype: Datatype, result_addr: *mut c_void, result_count: c_int, result_datatype: Datatype, target_rank: c_int, target_disp: Aint, target_count: c_int, target_datatype: Datatype, op: Op, win: Win);
    get_address, GetAddressFn, ops::GET_ADDRESS, (location: *const c_void, address: *mut Aint);
    get_count, GetCountFn, ops::GET_COUNT, (status: *const Status, datatype: Datatype, count: *mut c_int);
    get_elements, GetElementsFn, ops::GET_ELEMENTS, (status: *const Status, datatype: Datatype, count: *mut c_int);
    get_elements_x, GetElementsXFn, ops::GET_ELEMENTS_X, (status: *const Status, datatype: Datatype, count: *mut Count);
    get_library_version, GetLibraryVersionFn, ops::GET_LIBRARY_VERSION, (version: *mut c_char, resultlen: *mut c_int);
    get_processor_name, GetProcessorNameFn, ops::GET_PROCESSOR_NAME, (name: *mut c_char, resultlen: *mut c_int);
    get_version, GetVersionFn, ops::GET_VERSION, (version: *mut c_int, subversion: *mut c_int);
    graph_create, GraphCreateFn, ops::GRAPH_CREATE, (comm_old: Comm, nnodes: c_int, index: *const c_int, edges: *const c_int, reorder: c_int, comm_graph: *mut Comm);
    graph_get, GraphGetFn, ops::GRAPH_GET, (comm: Comm, maxindex: c_int, maxedges: c_int, index: *mut c_int, edges: *mut c_int);
    graph_map, GraphMapFn, ops::GRAPH_MAP, (comm: Comm, nnodes: c_int, index: *const c_int, edges: *const c_int, newrank: *mut c_int);
    graph_neighbors, GraphNeighborsFn, ops::GRAPH_NEIGHBORS, (comm: Comm, rank: c_int, maxneighbors: c_int, neighbors: *mut c_int);
    graph_neighbors_count, GraphNeighborsCountFn, ops::GRAPH_NEIGHBORS_COUNT, (comm: Comm, rank: c_int, nneighbors: *mut c_int);
    graphdims_get, GraphdimsGetFn, ops::GRAPHDIMS_GET, (comm: Comm, nnodes: *mut c_int, nedges: *mut c_int);
    grequest_complete, GrequestCompleteFn, ops::GREQUEST_COMPLETE, (request: Request);
    grequest_start, GrequestStartFn, ops::GREQUEST_START, (query_fn: Option<GrequestQueryFn>, free_fn: Option<GrequestFreeFn>, cancel_fn: Option<GrequestCancelFn>, extra_state: *mut c_void, request: *mut Request);
    group_compare, GroupCompareFn, ops::GROUP_COMPARE, (group1: Group, group2: Group, result: *mut c_int);
    group_difference, GroupDifferenceFn, ops::GROUP_DIFFERENCE, (group1: Group, group2: Group, newgroup: *mut Group);
    group_excl, GroupExclFn, ops::GROUP_EXCL, (group: Group, n: c_int, ranks: *const c_int, newgroup: *mut Group);
    group_free, GroupFreeFn, ops::GROUP_FREE, (group: *mut Group);
    group_incl, GroupInclFn, ops::GROUP_INCL, (group: Group, n: c_int, ranks: *const c_int, newgroup: *mut Group);
    group_intersection, GroupIntersectionFn, ops::GROUP_INTERSECTION, (group1: Group, group2: Group, newgroup: *mut Group);
    group_range_excl, GroupRangeExclFn, ops::GROUP_RANGE_EXCL, (group: Group, n: c_int, ranges: *mut [c_int; 3], newgroup: *mut Group);
    group_range_incl, GroupRangeInclFn, ops::GROUP_RANGE_INCL, (group: Group, n: c_int, ranges: *mut [c_int; 3], newgroup: *mut Group);
    group_rank, GroupRankFn, ops::GROUP_RANK, (group: Group, rank: *mut c_int);
    group_size, GroupSizeFn, ops::GROUP_SIZE, (group: Group, size: *mut c_int);
    group_translate_ranks, GroupTranslateRanksFn, ops::GROUP_TRANSLATE_RANKS, (group1: Group, n: c_int, ranks1: *const c_int, group2: Group, ranks2: *mut c_int);
    group_union, GroupUnionFn, ops::GROUP_UNION, (group1: Group, group2: Group, newgroup: *mut Group);
    iallgather, IallgatherFn, ops::IALLGATHER, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, comm: Comm, request: *mut Request);
    iallgatherv, IallgathervFn, ops::IALLGATHERV, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int, recvtype: Datatype, comm: Comm, request: *mut Request);
    iallreduce, IallreduceFn, ops::IALLREDUCE, (sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int, datatype: Datatype, op: Op, comm: Comm, request: *mut Request);
    ialltoall, IalltoallFn, ops::IALLTOALL, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, comm: Comm, request: *mut Request);
    ialltoallv, IalltoallvFn, ops::IALLTOALLV, (sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, rdispls: *const c_int, recvtype: Datatype, comm: Comm, request: *mut Request);
    ialltoallw, IalltoallwFn, ops::IALLTOALLW, (sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int, sendtypes: *const Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, rdispls: *const c_int, recvtypes: *const Datatype, comm: Comm, request: *mut Request);
    ibarrier, IbarrierFn, ops::IBARRIER, (comm: Comm, request: *mut Request);
    ibcast, IbcastFn, ops::IBCAST, (buffer: *mut c_void, count: c_int, datatype: Datatype, root: c_int, comm: Comm, request: *mut Request);
    ibsend, IbsendFn, ops::IBSEND, (buf: *const c_void, count: c_int, datatype: Datatype, dest: c_int, tag: c_int, comm: Comm, request: *mut Request);
    iexscan, IexscanFn, ops::IEXSCAN, (sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int, datatype: Datatype, op: Op, comm: Comm, request: *mut Request);
    igather, IgatherFn, ops::IGATHER, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, root: c_int, comm: Comm, request: *mut Request);
    igatherv, IgathervFn, ops::IGATHERV, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int, recvtype: Datatype, root: c_int, comm: Comm, request: *mut Request);
    improbe, ImprobeFn, ops::IMPROBE, (source: c_int, tag: c_int, comm: Comm, flag: *mut c_int, message: *mut Message, status: *mut Status);
    imrecv, ImrecvFn, ops::IMRECV, (buf: *mut c_void, count: c_int, type_: Datatype, message: *mut Message, request: *mut Request);
    ineighbor_allgather, IneighborAllgatherFn, ops::INEIGHBOR_ALLGATHER, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, comm: Comm, request: *mut Request);
    ineighbor_allgatherv, IneighborAllgathervFn, ops::INEIGHBOR_ALLGATHERV, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int, recvtype: Datatype, comm: Comm, request: *mut Request);
    ineighbor_alltoall, IneighborAlltoallFn, ops::INEIGHBOR_ALLTOALL, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, comm: Comm, request: *mut Request);
    ineighbor_alltoallv, IneighborAlltoallvFn, ops::INEIGHBOR_ALLTOALLV, (sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, rdispls: *const c_int, recvtype: Datatype, comm: Comm, request: *mut Request);
    ineighbor_alltoallw, IneighborAlltoallwFn, ops::INEIGHBOR_ALLTOALLW, (sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const Aint, sendtypes: *const Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, rdispls: *const Aint, recvtypes: *const Datatype, comm: Comm, request: *mut Request);
    info_create, InfoCreateFn, ops::INFO_CREATE, (info: *mut Info);
    info_delete, InfoDeleteFn, ops::INFO_DELETE, (info: Info, key: *const c_char);
    info_dup, InfoDupFn, ops::INFO_DUP, (info: Info, newinfo: *mut Info);
    info_free, InfoFreeFn, ops::INFO_FREE, (info: *mut Info);
    info_get, InfoGetFn, ops::INFO_GET, (info: Info, key: *const c_char, valuelen: c_int, value: *mut c_char, flag: *mut c_int);
    info_get_nkeys, InfoGetNkeysFn, ops::INFO_GET_NKEYS, (info: Info, nkeys: *mut c_int);
    info_get_nthkey, InfoGetNthkeyFn, ops::INFO_GET_NTHKEY, (info: Info, n: c_int, key: *mut c_char);
    info_get_valuelen, InfoGetValuelenFn, ops::INFO_GET_VALUELEN, (info: Info, key: *const c_char, valuelen: *mut c_int, flag: *mut c_int);
    info_set, InfoSetFn, ops::INFO_SET, (info: Info, key: *const c_char, value: *const c_char);
    init_thread, InitThreadFn, ops::INIT_THREAD, (argc: *mut c_int, argv: *mut *mut *mut c_char, required: c_int, provided: *mut c_int);
    initialized, InitializedFn, ops::INITIALIZED, (flag: *mut c_int);
    intercomm_create, IntercommCreateFn, ops::INTERCOMM_CREATE, (local_comm: Comm, local_leader: c_int, bridge_comm: Comm, remote_leader: c_int, tag: c_int, newintercomm: *mut Comm);
    intercomm_merge, IntercommMergeFn, ops::INTERCOMM_MERGE, (intercomm: Comm, high: c_int, newintercomm: *mut Comm);
    iprobe, IprobeFn, ops::IPROBE, (source: c_int, tag: c_int, comm: Comm, flag: *mut c_int, status: *mut Status);
    irecv, IrecvFn, ops::IRECV, (buf: *mut c_void, count: c_int, datatype: Datatype, source: c_int, tag: c_int, comm: Comm, request: *mut Request);
    ireduce, IreduceFn, ops::IREDUCE, (sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int, datatype: Datatype, op: Op, root: c_int, comm: Comm, request: *mut Request);
    ireduce_scatter, IreduceScatterFn, ops::IREDUCE_SCATTER, (sendbuf: *const c_void, recvbuf: *mut c_void, recvcounts: *const c_int, datatype: Datatype, op: Op, comm: Comm, request: *mut Request);
    ireduce_scatter_block, IreduceScatterBlockFn, ops::IREDUCE_SCATTER_BLOCK, (sendbuf: *const c_void, recvbuf: *mut c_void, recvcount: c_int, datatype: Datatype, op: Op, comm: Comm, request: *mut Request);
    irsend, IrsendFn, ops::IRSEND, (buf: *const c_void, count: c_int, datatype: Datatype, dest: c_int, tag: c_int, comm: Comm, request: *mut Request);
    is_thread_main, IsThreadMainFn, ops::IS_THREAD_MAIN, (flag: *mut c_int);
    iscan, IscanFn, ops::ISCAN, (sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int, datatype: Datatype, op: Op, comm: Comm, request: *mut Request);
    iscatter, IscatterFn, ops::ISCATTER, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, root: c_int, comm: Comm, request: *mut Request);
    iscatterv, IscattervFn, ops::ISCATTERV, (sendbuf: *const c_void, sendcounts: *const c_int, displs: *const c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, root: c_int, comm: Comm, request: *mut Request);
    isend, IsendFn, ops::ISEND, (buf: *const c_void, count: c_int, datatype: Datatype, dest: c_int, tag: c_int, comm: Comm, request: *mut Request);
    issend, IssendFn, ops::ISSEND, (buf: *const c_void, count: c_int, datatype: Datatype, dest: c_int, tag: c_int, comm: Comm, request: *mut Request);
    keyval_create, KeyvalCreateFn, ops::KEYVAL_CREATE, (copy_fn: Option<CopyFn>, delete_fn: Option<DeleteFn>, keyval: *mut c_int, extra_state: *mut c_void);
    keyval_free, KeyvalFreeFn, ops::KEYVAL_FREE, (keyval: *mut c_int);
    lookup_name, LookupNameFn, ops::LOOKUP_NAME, (service_name: *const c_char, info: Info, port_name: *mut c_char);
    mprobe, MprobeFn, ops::MPROBE, (source: c_int, tag: c_int, comm: Comm, message: *mut Message, status: *mut Status);
    mrecv, MrecvFn, ops::MRECV, (buf: *mut c_void, count: c_int, type_: Datatype, message: *mut Message, status: *mut Status);
    neighbor_allgather, NeighborAllgatherFn, ops::NEIGHBOR_ALLGATHER, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, comm: Comm);
    neighbor_allgatherv, NeighborAllgathervFn, ops::NEIGHBOR_ALLGATHERV, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, displs: *const c_int, recvtype: Datatype, comm: Comm);
    neighbor_alltoall, NeighborAlltoallFn, ops::NEIGHBOR_ALLTOALL, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, comm: Comm);
    neighbor_alltoallv, NeighborAlltoallvFn, ops::NEIGHBOR_ALLTOALLV, (sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, rdispls: *const c_int, recvtype: Datatype, comm: Comm);
    neighbor_alltoallw, NeighborAlltoallwFn, ops::NEIGHBOR_ALLTOALLW, (sendbuf: *const c_void, sendcounts: *const c_int, sdispls: *const Aint, sendtypes: *const Datatype, recvbuf: *mut c_void, recvcounts: *const c_int, rdispls: *const Aint, recvtypes: *const Datatype, comm: Comm);
    op_commutative, OpCommutativeFn, ops::OP_COMMUTATIVE, (op: Op, commute: *mut c_int);
    op_create, OpCreateFn, ops::OP_CREATE, (function: Option<UserFn>, commute: c_int, op: *mut Op);
    op_free, OpFreeFn, ops::OP_FREE, (op: *mut Op);
    open_port, OpenPortFn, ops::OPEN_PORT, (info: Info, port_name: *mut c_char);
    pack, PackFn, ops::PACK, (inbuf: *const c_void, incount: c_int, datatype: Datatype, outbuf: *mut c_void, outsize: c_int, position: *mut c_int, comm: Comm);
    pack_external, PackExternalFn, ops::PACK_EXTERNAL, (datarep: *const c_char, inbuf: *const c_void, incount: c_int, datatype: Datatype, outbuf: *mut c_void, outsize: Aint, position: *mut Aint);
    pack_external_size, PackExternalSizeFn, ops::PACK_EXTERNAL_SIZE, (datarep: *const c_char, incount: c_int, datatype: Datatype, size: *mut Aint);
    pack_size, PackSizeFn, ops::PACK_SIZE, (incount: c_int, datatype: Datatype, comm: Comm, size: *mut c_int);
    pcontrol, PcontrolFn, ops::PCONTROL, (ctl_level: c_int);
    probe, ProbeFn, ops::PROBE, (source: c_int, tag: c_int, comm: Comm, status: *mut Status);
    publish_name, PublishNameFn, ops::PUBLISH_NAME, (service_name: *const c_char, info: Info, port_name: *const c_char);
    put, PutFn, ops::PUT, (origin_addr: *const c_void, origin_count: c_int, origin_datatype: Datatype, target_rank: c_int, target_disp: Aint, target_count: c_int, target_datatype: Datatype, win: Win);
    query_thread, QueryThreadFn, ops::QUERY_THREAD, (provided: *mut c_int);
    raccumulate, RaccumulateFn, ops::RACCUMULATE, (origin_addr: *const c_void, origin_count: c_int, origin_datatype: Datatype, target_rank: c_int, target_disp: Aint, target_count: c_int, target_datatype: Datatype, op: Op, win: Win, request: *mut Request);
    recv_init, RecvInitFn, ops::RECV_INIT, (buf: *mut c_void, count: c_int, datatype: Datatype, source: c_int, tag: c_int, comm: Comm, request: *mut Request);
    reduce_local, ReduceLocalFn, ops::REDUCE_LOCAL, (inbuf: *const c_void, inoutbuf: *mut c_void, count: c_int, datatype: Datatype, op: Op);
    reduce_scatter, ReduceScatterFn, ops::REDUCE_SCATTER, (sendbuf: *const c_void, recvbuf: *mut c_void, recvcounts: *const c_int, datatype: Datatype, op: Op, comm: Comm);
    reduce_scatter_block, ReduceScatterBlockFn, ops::REDUCE_SCATTER_BLOCK, (sendbuf: *const c_void, recvbuf: *mut c_void, recvcount: c_int, datatype: Datatype, op: Op, comm: Comm);
    register_datarep, RegisterDatarepFn, ops::REGISTER_DATAREP, (datarep: *const c_char, read_conversion_fn: Option<DatarepConversionFn>, write_conversion_fn: Option<DatarepConversionFn>, dtype_file_extent_fn: Option<DatarepExtentFn>, extra_state: *mut c_void);
    request_free, RequestFreeFn, ops::REQUEST_FREE, (request: *mut Request);
    request_get_status, RequestGetStatusFn, ops::REQUEST_GET_STATUS, (request: Request, flag: *mut c_int, status: *mut Status);
    rget, RgetFn, ops::RGET, (origin_addr: *mut c_void, origin_count: c_int, origin_datatype: Datatype, target_rank: c_int, target_disp: Aint, target_count: c_int, target_datatype: Datatype, win: Win, request: *mut Request);
    rget_accumulate, RgetAccumulateFn, ops::RGET_ACCUMULATE, (origin_addr: *const c_void, origin_count: c_int, origin_datatype: Datatype, result_addr: *mut c_void, result_count: c_int, result_datatype: Datatype, target_rank: c_int, target_disp: Aint, target_count: c_int, target_datatype: Datatype, op: Op, win: Win, request: *mut Request);
    rput, RputFn, ops::RPUT, (origin_addr: *const c_void, origin_count: c_int, origin_datatype: Datatype, target_rank: c_int, target_disp: Aint, target_cout: c_int, target_datatype: Datatype, win: Win, request: *mut Request);
    rsend_init, RsendInitFn, ops::RSEND_INIT, (buf: *const c_void, count: c_int, datatype: Datatype, dest: c_int, tag: c_int, comm: Comm, request: *mut Request);
    scan, ScanFn, ops::SCAN, (sendbuf: *const c_void, recvbuf: *mut c_void, count: c_int, datatype: Datatype, op: Op, comm: Comm);
    scatter, ScatterFn, ops::SCATTER, (sendbuf: *const c_void, sendcount: c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, root: c_int, comm: Comm);
    scatterv, ScattervFn, ops::SCATTERV, (sendbuf: *const c_void, sendcounts: *const c_int, displs: *const c_int, sendtype: Datatype, recvbuf: *mut c_void, recvcount: c_int, recvtype: Datatype, root: c_int, comm: Comm);
    send_init, SendInitFn, ops::SEND_INIT, (buf: *const c_void, count: c_int, datatype: Datatype, dest: c_int, tag: c_int, comm: Comm, request: *mut Request);
    sendrecv_replace, SendrecvReplaceFn, ops::SENDRECV_REPLACE, (buf: *mut c_void, count: c_int, datatype: Datatype, dest: c_int, sendtag: c_int, source: c_int, recvtag: c_int, comm: Comm, status: *mut Status);
    ssend_init, SsendInitFn, ops::SSEND_INIT, (buf: *const c_void, count: c_int, datatype: Datatype, dest: c_int, tag: c_int, comm: Comm, request: *mut Request);
    start, StartFn, ops::START, (request: *mut Request);
    startall, StartallFn, ops::STARTALL, (count: c_int, array_of_requests: *mut Request);
    status_set_cancelled, StatusSetCancelledFn, ops::STATUS_SET_CANCELLED, (status: *mut Status, flag: c_int);
    status_set_elements, StatusSetElementsFn, ops::STATUS_SET_ELEMENTS, (status: *mut Status, datatype: Datatype, count: c_int);
    status_set_elements_x, StatusSetElementsXFn, ops::STATUS_SET_ELEMENTS_X, (status: *mut Status, datatype: Datatype, count: Count);
    test, TestFn, ops::TEST, (request: *mut Request, flag: *mut c_int, status: *mut Status);
    test_cancelled, TestCancelledFn, ops::TEST_CANCELLED, (status: *const Status, flag: *mut c_int);
    testall, TestallFn, ops::TESTALL, (count: c_int, array_of_requests: *mut Request, flag: *mut c_int, array_of_statuses: *mut Status);
    testany, TestanyFn, ops::TESTANY, (count: c_int, array_of_requests: *mut Request, index: *mut c_int, flag: *mut c_int, status: *mut Status);
    testsome, TestsomeFn, ops::TESTSOME, (incount: c_int, array_of_requests: *mut Request, outcount: *mut c_int, array_of_indices: *mut c_int, array_of_statuses: *mut Status);
    topo_test, TopoTestFn, ops::TOPO_TEST, (comm: Comm, status: *mut c_int);
    type_commit, TypeCommitFn, ops::TYPE_COMMIT, (type_: *mut Datatype);
    type_contiguous, TypeContiguousFn, ops::TYPE_CONTIGUOUS, (count: c_int, oldtype: Datatype, newtype: *mut Datatype);
    type_create_darray, TypeCreateDarrayFn, ops::TYPE_CREATE_DARRAY, (size: c_int, rank: c_int, ndims: c_int, gsize_array: *const c_int, distrib_array: *const c_int, darg_array: *const c_int, psize_array: *const c_int, order: c_int, oldtype: Datatype, newtype: *mut Datatype);
    type_create_f90_complex, TypeCreateF90ComplexFn, ops::TYPE_CREATE_F90_COMPLEX, (p: c_int, r: c_int, newtype: *mut Datatype);
    type_create_f90_integer, TypeCreateF90IntegerFn, ops::TYPE_CREATE_F90_INTEGER, (r: c_int, newtype: *mut Datatype);
    type_create_f90_real, TypeCreateF90RealFn, ops::TYPE_CREATE_F90_REAL, (p: c_int, r: c_int, newtype: *mut Datatype);
    type_create_hindexed, TypeCreateHindexedFn, ops::TYPE_CREATE_HINDEXED, (count: c_int, array_of_blocklengths: *const c_int, array_of_displacements: *const Aint, oldtype: Datatype, newtype: *mut Datatype);
    type_create_hindexed_block, TypeCreateHindexedBlockFn, ops::TYPE_CREATE_HINDEXED_BLOCK, (count: c_int, blocklength: c_int, array_of_displacements: *const Aint, oldtype: Datatype, newtype: *mut Datatype);
    type_create_hvector, TypeCreateHvectorFn, ops::TYPE_CREATE_HVECTOR, (count: c_int, blocklength: c_int, stride: Aint, oldtype: Datatype, newtype: *mut Datatype);
    type_create_indexed_block, TypeCreateIndexedBlockFn, ops::TYPE_CREATE_INDEXED_BLOCK, (count: c_int, blocklength: c_int, array_of_displacements: *const c_int, oldtype: Datatype, newtype: *mut Datatype);
    type_create_keyval, TypeCreateKeyvalFn, ops::TYPE_CREATE_KEYVAL, (type_copy_attr_fn: Option<TypeCopyAttrFn>, type_delete_attr_fn: Option<TypeDeleteAttrFn>, type_keyval: *mut c_int, extra_state: *mut c_void);
    type_create_resized, TypeCreateResizedFn, ops::TYPE_CREATE_RESIZED, (oldtype: Datatype, lb: Aint, extent: Aint, newtype: *mut Datatype);
    type_create_struct, TypeCreateStructFn, ops::TYPE_CREATE_STRUCT, (count: c_int, array_of_block_lengths: *const c_int, array_of_displacements: *const Aint, array_of_types: *const Datatype, newtype: *mut Datatype);
    type_create_subarray, TypeCreateSubarrayFn, ops::TYPE_CREATE_SUBARRAY, (ndims: c_int, size_array: *const c_int, subsize_array: *const c_int, start_array: *const c_int, order: c_int, oldtype: Datatype, newtype: *mut Datatype);
    type_delete_attr, TypeDeleteAttrOpFn, ops::TYPE_DELETE_ATTR, (type_: Datatype, type_keyval: c_int);
    type_dup, TypeDupFn, ops::TYPE_DUP, (type_: Datatype, newtype: *mut Datatype);
    type_extent, TypeExtentFn, ops::TYPE_EXTENT, (type_: Datatype, extent: *mut Aint);
    type_free, TypeFreeFn, ops::TYPE_FREE, (type_: *mut Datatype);
    type_free_keyval, TypeFreeKeyvalFn, ops::TYPE_FREE_KEYVAL, (type_keyval: *mut c_int);
    type_get_attr, TypeGetAttrFn, ops::TYPE_GET_ATTR, (type_: Datatype, type_keyval: c_int, attribute_val: *mut c_void, flag: *mut c_int);
    type_get_contents, TypeGetContentsFn, ops::TYPE_GET_CONTENTS, (mtype: Datatype, max_integers: c_int, max_addresses: c_int, max_datatypes: c_int, array_of_integers: *mut c_int, array_of_addresses: *mut Aint, array_of_datatypes: *mut Datatype);
    type_get_envelope, TypeGetEnvelopeFn, ops::TYPE_GET_ENVELOPE, (type_: Datatype, num_integers: *mut c_int, num_addresses: *mut c_int, num_datatypes: *mut c_int, combiner: *mut c_int);
    type_get_extent, TypeGetExtentFn, ops::TYPE_GET_EXTENT, (type_: Datatype, lb: *mut Aint, extent: *mut Aint);
    type_get_extent_x, TypeGetExtentXFn, ops::TYPE_GET_EXTENT_X, (type_: Datatype, lb: *mut Count, extent: *mut Count);
    type_get_name, TypeGetNameFn, ops::TYPE_GET_NAME, (type_: Datatype, type_name: *mut c_char, resultlen: *mut c_int);
    type_get_true_extent, TypeGetTrueExtentFn, ops::TYPE_GET_TRUE_EXTENT, (datatype: Datatype, true_lb: *mut Aint, true_extent: *mut Aint);
    type_get_true_extent_x, TypeGetTrueExtentXFn, ops::TYPE_GET_TRUE_EXTENT_X, (datatype: Datatype, true_lb: *mut Count, true_extent: *mut Count);
    type_hindexed, TypeHindexedFn, ops::TYPE_HINDEXED, (count: c_int, array_of_blocklengths: *mut c_int, array_of_displacements: *mut Aint, oldtype: Datatype, newtype: *mut Datatype);
    type_hvector, TypeHvectorFn, ops::TYPE_HVECTOR, (count: c_int, blocklength: c_int, stride: Aint, oldtype: Datatype, newtype: *mut Datatype);
    type_indexed, TypeIndexedFn, ops::TYPE_INDEXED, (count: c_int, array_of_blocklengths: *const c_int, array_of_displacements: *const c_int, oldtype: Datatype, newtype: *mut Datatype);
    type_lb, TypeLbFn, ops::TYPE_LB, (type_: Datatype, lb: *mut Aint);
    type_match_size, TypeMatchSizeFn, ops::TYPE_MATCH_SIZE, (typeclass: c_int, size: c_int, type_: *mut Datatype);
    type_set_attr, TypeSetAttrFn, ops::TYPE_SET_ATTR, (type_: Datatype, type_keyval: c_int, attr_val: *mut c_void);
    type_set_name, TypeSetNameFn, ops::TYPE_SET_NAME, (type_: Datatype, type_name: *const c_char);
    type_size, TypeSizeFn, ops::TYPE_SIZE, (type_: Datatype, size: *mut c_int);
    type_size_x, TypeSizeXFn, ops::TYPE_SIZE_X, (type_: Datatype, size: *mut Count);
    type_struct, TypeStructFn, ops::TYPE_STRUCT, (count: c_int, array_of_blocklengths: *mut c_int, array_of_displacements: *mut Aint, array_of_types: *mut Datatype, newtype: *mut Datatype);
    type_ub, TypeUbFn, ops::TYPE_UB, (mtype: Datatype, ub: *mut Aint);
    type_vector, TypeVectorFn, ops::TYPE_VECTOR, (count: c_int, blocklength: c_int, stride: c_int, oldtype: Datatype, newtype: *mut Datatype);
    unpack, UnpackFn, ops::UNPACK, (inbuf: *const c_void, insize: c_int, position: *mut c_int, outbuf: *mut c_void, outcount: c_int, datatype: Datatype, comm: Comm);
    unpack_external, UnpackExternalFn, ops::UNPACK_EXTERNAL, (datarep: *const c_char, inbuf: *const c_void, insize: Aint, position: *mut Aint, outbuf: *mut c_void, outcount: c_int, datatype: Datatype);
    unpublish_name, UnpublishNameFn, ops::UNPUBLISH_NAME, (service_name: *const c_char, info: Info, port_name: *const c_char);
    wait, WaitFn, ops::WAIT, (request: *mut Request, status: *mut Status);
    waitall, WaitallFn, ops::WAITALL, (count: c_int, array_of_requests: *mut Request, array_of_statuses: *mut Status);
    waitany, WaitanyFn, ops::WAITANY, (count: c_int, array_of_requests: *mut Request, index: *mut c_int, status: *mut Status);
    waitsome, WaitsomeFn, ops::WAITSOME, (incount: c_int, array_of_requests: *mut Request, outcount: *mut c_int, array_of_indices: *mut c_int, array_of_statuses: *mut Status);
    win_allocate, WinAllocateFn, ops::WIN_ALLOCATE, (size: Aint, disp_unit: c_int, info: Info, comm: Comm, baseptr: *mut c_void, win: *mut Win);
    win_allocate_shared, WinAllocateSharedFn, ops::WIN_ALLOCATE_SHARED, (size: Aint, disp_unit: c_int, info: Info, comm: Comm, baseptr: *mut c_void, win: *mut Win);
    win_attach, WinAttachFn, ops::WIN_ATTACH, (win: Win, base: *mut c_void, size: Aint);
    win_call_errhandler, WinCallErrhandlerFn, ops::WIN_CALL_ERRHANDLER, (win: Win, errorcode: c_int);
    win_complete, WinCompleteFn, ops::WIN_COMPLETE, (win: Win);
    win_create, WinCreateFn, ops::WIN_CREATE, (base: *mut c_void, size: Aint, disp_unit: c_int, info: Info, comm: Comm, win: *mut Win);
    win_create_dynamic, WinCreateDynamicFn, ops::WIN_CREATE_DYNAMIC, (info: Info, comm: Comm, win: *mut Win);
    win_create_errhandler, WinCreateErrhandlerFn, ops::WIN_CREATE_ERRHANDLER, (function: Option<WinErrhandlerFn>, errhandler: *mut Errhandler);
    win_create_keyval, WinCreateKeyvalFn, ops::WIN_CREATE_KEYVAL, (win_copy_attr_fn: Option<WinCopyAttrFn>, win_delete_attr_fn: Option<WinDeleteAttrFn>, win_keyval: *mut c_int, extra_state: *mut c_void);
    win_delete_attr, WinDeleteAttrOpFn, ops::WIN_DELETE_ATTR, (win: Win, win_keyval: c_int);
    win_detach, WinDetachFn, ops::WIN_DETACH, (win: Win, base: *const c_void);
    win_fence, WinFenceFn, ops::WIN_FENCE, (assert: c_int, win: Win);
    win_flush, WinFlushFn, ops::WIN_FLUSH, (rank: c_int, win: Win);
    win_flush_all, WinFlushAllFn, ops::WIN_FLUSH_ALL, (win: Win);
    win_flush_local, WinFlushLocalFn, ops::WIN_FLUSH_LOCAL, (rank: c_int, win: Win);
    win_flush_local_all, WinFlushLocalAllFn, ops::WIN_FLUSH_LOCAL_ALL, (win: Win);
    win_free, WinFreeFn, ops::WIN_FREE, (win: *mut Win);
    win_free_keyval, WinFreeKeyvalFn, ops::WIN_FREE_KEYVAL, (win_keyval: *mut c_int);
    win_get_attr, WinGetAttrFn, ops::WIN_GET_ATTR, (win: Win, win_keyval: c_int, attribute_val: *mut c_void, flag: *mut c_int);
    win_get_errhandler, WinGetErrhandlerFn, ops::WIN_GET_ERRHANDLER, (win: Win, errhandler: *mut Errhandler);
    win_get_group, WinGetGroupFn, ops::WIN_GET_GROUP, (win: Win, group: *mut Group);
    win_get_info, WinGetInfoFn, ops::WIN_GET_INFO, (win: Win, info_used: *mut Info);
    win_get_name, WinGetNameFn, ops::WIN_GET_NAME, (win: Win, win_name: *mut c_char, resultlen: *mut c_int);
    win_lock, WinLockFn, ops::WIN_LOCK, (lock_type: c_int, rank: c_int, assert: c_int, win: Win);
    win_lock_all, WinLockAllFn, ops::WIN_LOCK_ALL, (assert: c_int, win: Win);
    win_post, WinPostFn, ops::WIN_POST, (group: Group, assert: c_int, win: Win);
    win_set_attr, WinSetAttrFn, ops::WIN_SET_ATTR, (win: Win, win_keyval: c_int, attribute_val: *mut c_void);
    win_set_errhandler, WinSetErrhandlerFn, ops::WIN_SET_ERRHANDLER, (win: Win, errhandler: Errhandler);
    win_set_info, WinSetInfoFn, ops::WIN_SET_INFO, (win: Win, info: Info);
    win_set_name, WinSetNameFn, ops::WIN_SET_NAME, (win: Win, win_name: *const c_char);
    win_shared_query, WinSharedQueryFn, ops::WIN_SHARED_QUERY, (win: Win, rank: c_int, size: *mut Aint, disp_unit: *mut c_int, baseptr: *mut c_void);
    win_start, WinStartFn, ops::WIN_START, (group: Group, assert: c_int, win: Win);
    win_sync, WinSyncFn, ops::WIN_SYNC, (win: Win);
    win_test, WinTestFn, ops::WIN_TEST, (win: Win, flag: *mut c_int);
    win_unlock, WinUnlockFn, ops::WIN_UNLOCK, (rank: c_int, win: Win);
    win_unlock_all, WinUnlockAllFn, ops::WIN_UNLOCK_ALL, (win: Win);
    win_wait, WinWaitFn, ops::WIN_WAIT, (win: Win);
}
