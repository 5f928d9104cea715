//! C interface types and definitions.
//!
//! IMPORTANT: These must mirror the MPI header the intercepted
//! application was compiled against. Handle types are plain integers;
//! callback parameters are `Option<..Fn>` so a null pointer crosses the
//! boundary soundly.
use std::ffi::{c_int, c_void};

/// Default return value type.
pub type ReturnStatus = c_int;

/// Address-sized integer corresponding to MPI_Aint.
pub type Aint = isize;

/// Count type corresponding to MPI_Count.
pub type Count = i64;

/// File offset type corresponding to MPI_Offset.
pub type Offset = i64;

pub type Comm = c_int;

pub type Datatype = c_int;

pub type Errhandler = c_int;

pub type File = c_int;

pub type Group = c_int;

pub type Info = c_int;

pub type Message = c_int;

pub type Op = c_int;

pub type Request = c_int;

pub type Win = c_int;

/// MPI_Status struct.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Status {
    pub source: c_int,
    pub tag: c_int,
    pub error: c_int,
    /// Transferred size in bytes, filled in on completion.
    pub count: Count,
}

impl Status {
    pub const fn zeroed() -> Status {
        Status {
            source: 0,
            tag: 0,
            error: 0,
            count: 0,
        }
    }
}

pub type CommCopyAttrFn =
    unsafe extern "C" fn(Comm, c_int, *mut c_void, *mut c_void, *mut c_void, *mut c_int) -> c_int;

pub type CommDeleteAttrFn = unsafe extern "C" fn(Comm, c_int, *mut c_void, *mut c_void) -> c_int;

pub type CommErrhandlerFn = unsafe extern "C" fn(*mut Comm, *mut c_int, ...);

pub type CopyFn =
    unsafe extern "C" fn(Comm, c_int, *mut c_void, *mut c_void, *mut c_void, *mut c_int) -> c_int;

pub type DeleteFn = unsafe extern "C" fn(Comm, c_int, *mut c_void, *mut c_void) -> c_int;

pub type DatarepConversionFn =
    unsafe extern "C" fn(*mut c_void, Datatype, c_int, *mut c_void, Offset, *mut c_void) -> c_int;

pub type DatarepExtentFn = unsafe extern "C" fn(Datatype, *mut Aint, *mut c_void) -> c_int;

pub type FileErrhandlerFn = unsafe extern "C" fn(*mut File, *mut c_int, ...);

pub type GrequestCancelFn = unsafe extern "C" fn(*mut c_void, c_int) -> c_int;

pub type GrequestFreeFn = unsafe extern "C" fn(*mut c_void) -> c_int;

pub type GrequestQueryFn = unsafe extern "C" fn(*mut c_void, *mut Status) -> c_int;

pub type HandlerFn = unsafe extern "C" fn(*mut Comm, *mut c_int, ...);

pub type TypeCopyAttrFn = unsafe extern "C" fn(
    Datatype,
    c_int,
    *mut c_void,
    *mut c_void,
    *mut c_void,
    *mut c_int,
) -> c_int;

pub type TypeDeleteAttrFn =
    unsafe extern "C" fn(Datatype, c_int, *mut c_void, *mut c_void) -> c_int;

pub type UserFn = unsafe extern "C" fn(*mut c_void, *mut c_void, *mut c_int, *mut Datatype);

pub type WinCopyAttrFn =
    unsafe extern "C" fn(Win, c_int, *mut c_void, *mut c_void, *mut c_void, *mut c_int) -> c_int;

pub type WinDeleteAttrFn = unsafe extern "C" fn(Win, c_int, *mut c_void, *mut c_void) -> c_int;

pub type WinErrhandlerFn = unsafe extern "C" fn(*mut Win, *mut c_int, ...);
