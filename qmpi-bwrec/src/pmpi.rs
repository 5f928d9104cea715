//! Collaborator entry points into the underlying MPI implementation.
//!
//! The recorder never reimplements messaging; the four capabilities it
//! needs (rank query, group size, sum-reduction, completed-transfer
//! element count) are consumed through [`Pmpi`]. The production
//! implementation is a struct of native function pointers handed over by
//! the runtime before traffic starts.
use qmpi::c::{Comm, Datatype, Op, ReturnStatus, Status};
use qmpi::consts;
use std::ffi::{c_int, c_void};

/// Result carrying the exact foreign status code on failure.
pub type PmpiResult<T> = std::result::Result<T, ReturnStatus>;

pub trait Pmpi {
    /// Rank of the calling process within `comm`.
    fn comm_rank(&self, comm: Comm) -> PmpiResult<c_int>;

    /// Number of processes in `comm`.
    fn comm_size(&self, comm: Comm) -> PmpiResult<c_int>;

    /// Element-wise sum of `local` across all processes of `comm` into
    /// `total` on `root`. `total` is only meaningful on the root.
    fn reduce_sum_i64(
        &self,
        local: &[i64],
        total: &mut [i64],
        root: c_int,
        comm: Comm,
    ) -> PmpiResult<()>;

    /// Number of elements of `datatype` actually transferred by the
    /// completed operation described by `status`.
    fn get_count(&self, status: &Status, datatype: Datatype) -> PmpiResult<c_int>;
}

/// Native entry points supplied by the MPI runtime when it loads the
/// tool. These bypass the interception chain on purpose: accounting
/// queries must not be counted themselves.
#[repr(C)]
#[derive(Copy, Clone)]
pub struct PmpiHooks {
    pub comm_rank: unsafe extern "C" fn(Comm, *mut c_int) -> ReturnStatus,
    pub comm_size: unsafe extern "C" fn(Comm, *mut c_int) -> ReturnStatus,
    pub reduce: unsafe extern "C" fn(
        *const c_void,
        *mut c_void,
        c_int,
        Datatype,
        Op,
        c_int,
        Comm,
    ) -> ReturnStatus,
    pub get_count: unsafe extern "C" fn(*const Status, Datatype, *mut c_int) -> ReturnStatus,
}

/// [`Pmpi`] implementation over the installed native hooks.
pub struct HookPmpi(pub PmpiHooks);

impl Pmpi for HookPmpi {
    fn comm_rank(&self, comm: Comm) -> PmpiResult<c_int> {
        let mut rank: c_int = 0;
        let ret = unsafe { (self.0.comm_rank)(comm, &mut rank) };
        if ret == consts::SUCCESS {
            Ok(rank)
        } else {
            Err(ret)
        }
    }

    fn comm_size(&self, comm: Comm) -> PmpiResult<c_int> {
        let mut size: c_int = 0;
        let ret = unsafe { (self.0.comm_size)(comm, &mut size) };
        if ret == consts::SUCCESS {
            Ok(size)
        } else {
            Err(ret)
        }
    }

    fn reduce_sum_i64(
        &self,
        local: &[i64],
        total: &mut [i64],
        root: c_int,
        comm: Comm,
    ) -> PmpiResult<()> {
        assert_eq!(local.len(), total.len());
        let ret = unsafe {
            (self.0.reduce)(
                local.as_ptr() as *const c_void,
                total.as_mut_ptr() as *mut c_void,
                local.len() as c_int,
                consts::INT64,
                consts::OP_SUM,
                root,
                comm,
            )
        };
        if ret == consts::SUCCESS {
            Ok(())
        } else {
            Err(ret)
        }
    }

    fn get_count(&self, status: &Status, datatype: Datatype) -> PmpiResult<c_int> {
        let mut count: c_int = 0;
        let ret = unsafe { (self.0.get_count)(status, datatype, &mut count) };
        if ret == consts::SUCCESS {
            Ok(count)
        } else {
            Err(ret)
        }
    }
}
