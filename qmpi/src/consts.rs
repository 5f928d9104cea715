//! MPI constant values.
//!
//! IMPORTANT: These must mirror the header of the runtime that loads the
//! tool stack.
use crate::c;

pub const SUCCESS: c::ReturnStatus = 0;

pub const ERR_INTERN: c::ReturnStatus = 1;

pub const COMM_WORLD: c::Comm = 1;

pub const OP_SUM: c::Op = 1;

/// Marker pointer a caller passes when it does not want the status back.
pub const STATUS_IGNORE: *mut c::Status = 1 as *mut c::Status;

// Predefined datatype handles. The fixed-width integer handles are
// distinct from INT/UNSIGNED even where the widths coincide.
pub const CHAR: c::Datatype = 1;
pub const SIGNED_CHAR: c::Datatype = 2;
pub const UNSIGNED_CHAR: c::Datatype = 3;
pub const BYTE: c::Datatype = 4;
pub const INT8: c::Datatype = 5;
pub const UINT8: c::Datatype = 6;
pub const INT16: c::Datatype = 7;
pub const UINT16: c::Datatype = 8;
pub const INT32: c::Datatype = 9;
pub const UINT32: c::Datatype = 10;
pub const INT64: c::Datatype = 11;
pub const UINT64: c::Datatype = 12;
pub const INT: c::Datatype = 13;
pub const UNSIGNED: c::Datatype = 14;
pub const FLOAT: c::Datatype = 15;
pub const DOUBLE: c::Datatype = 16;
pub const SHORT: c::Datatype = 17;
pub const LONG: c::Datatype = 18;
pub const LONG_DOUBLE: c::Datatype = 19;
