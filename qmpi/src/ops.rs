//! Dense operation identifiers.
//!
//! One id per intercepted MPI operation, used as the primary key into
//! every layer's handler table. Ids are dense (`0..NUM_OPS`) and fixed
//! for the lifetime of the process; the calling convention registered
//! for an id must never change across layers.

pub type OpId = usize;

pub const NUM_OPS: usize = 360;

pub const ABORT: OpId = 0;
pub const ACCUMULATE: OpId = 1;
pub const ADD_ERROR_CLASS: OpId = 2;
pub const ADD_ERROR_CODE: OpId = 3;
pub const ADD_ERROR_STRING: OpId = 4;
pub const ADDRESS: OpId = 5;
pub const ALLGATHER: OpId = 6;
pub const ALLGATHERV: OpId = 7;
pub const ALLOC_MEM: OpId = 8;
pub const ALLREDUCE: OpId = 9;
pub const ALLTOALL: OpId = 10;
pub const ALLTOALLV: OpId = 11;
pub const ALLTOALLW: OpId = 12;
pub const ATTR_DELETE: OpId = 13;
pub const ATTR_GET: OpId = 14;
pub const ATTR_PUT: OpId = 15;
pub const BARRIER: OpId = 16;
pub const BCAST: OpId = 17;
pub const BSEND: OpId = 18;
pub const BSEND_INIT: OpId = 19;
pub const BUFFER_ATTACH: OpId = 20;
pub const BUFFER_DETACH: OpId = 21;
pub const CANCEL: OpId = 22;
pub const CART_COORDS: OpId = 23;
pub const CART_CREATE: OpId = 24;
pub const CART_GET: OpId = 25;
pub const CART_MAP: OpId = 26;
pub const CART_RANK: OpId = 27;
pub const CART_SHIFT: OpId = 28;
pub const CART_SUB: OpId = 29;
pub const CARTDIM_GET: OpId = 30;
pub const CLOSE_PORT: OpId = 31;
pub const COMM_ACCEPT: OpId = 32;
pub const COMM_CALL_ERRHANDLER: OpId = 33;
pub const COMM_COMPARE: OpId = 34;
pub const COMM_CONNECT: OpId = 35;
pub const COMM_CREATE: OpId = 36;
pub const COMM_CREATE_ERRHANDLER: OpId = 37;
pub const COMM_CREATE_GROUP: OpId = 38;
pub const COMM_CREATE_KEYVAL: OpId = 39;
pub const COMM_DELETE_ATTR: OpId = 40;
pub const COMM_DISCONNECT: OpId = 41;
pub const COMM_DUP: OpId = 42;
pub const COMM_DUP_WITH_INFO: OpId = 43;
pub const COMM_FREE: OpId = 44;
pub const COMM_FREE_KEYVAL: OpId = 45;
pub const COMM_GET_ATTR: OpId = 46;
pub const COMM_GET_ERRHANDLER: OpId = 47;
pub const COMM_GET_INFO: OpId = 48;
pub const COMM_GET_NAME: OpId = 49;
pub const COMM_GET_PARENT: OpId = 50;
pub const COMM_GROUP: OpId = 51;
pub const COMM_IDUP: OpId = 52;
pub const COMM_JOIN: OpId = 53;
pub const COMM_RANK: OpId = 54;
pub const COMM_REMOTE_GROUP: OpId = 55;
pub const COMM_REMOTE_SIZE: OpId = 56;
pub const COMM_SET_ATTR: OpId = 57;
pub const COMM_SET_ERRHANDLER: OpId = 58;
pub const COMM_SET_INFO: OpId = 59;
pub const COMM_SET_NAME: OpId = 60;
pub const COMM_SIZE: OpId = 61;
pub const COMM_SPLIT: OpId = 62;
pub const COMM_SPLIT_TYPE: OpId = 63;
pub const COMM_TEST_INTER: OpId = 64;
pub const COMPARE_AND_SWAP: OpId = 65;
pub const DIMS_CREATE: OpId = 66;
pub const DIST_GRAPH_CREATE: OpId = 67;
pub const DIST_GRAPH_CREATE_ADJACENT: OpId = 68;
pub const DIST_GRAPH_NEIGHBORS: OpId = 69;
pub const DIST_GRAPH_NEIGHBORS_COUNT: OpId = 70;
pub const ERRHANDLER_CREATE: OpId = 71;
pub const ERRHANDLER_FREE: OpId = 72;
pub const ERRHANDLER_GET: OpId = 73;
pub const ERRHANDLER_SET: OpId = 74;
pub const ERROR_CLASS: OpId = 75;
pub const ERROR_STRING: OpId = 76;
pub const EXSCAN: OpId = 77;
pub const FETCH_AND_OP: OpId = 78;
pub const FILE_CALL_ERRHANDLER: OpId = 79;
pub const FILE_CLOSE: OpId = 80;
pub const FILE_CREATE_ERRHANDLER: OpId = 81;
pub const FILE_DELETE: OpId = 82;
pub const FILE_GET_AMODE: OpId = 83;
pub const FILE_GET_ATOMICITY: OpId = 84;
pub const FILE_GET_BYTE_OFFSET: OpId = 85;
pub const FILE_GET_ERRHANDLER: OpId = 86;
pub const FILE_GET_GROUP: OpId = 87;
pub const FILE_GET_INFO: OpId = 88;
pub const FILE_GET_POSITION: OpId = 89;
pub const FILE_GET_POSITION_SHARED: OpId = 90;
pub const FILE_GET_SIZE: OpId = 91;
pub const FILE_GET_TYPE_EXTENT: OpId = 92;
pub const FILE_GET_VIEW: OpId = 93;
pub const FILE_IREAD: OpId = 94;
pub const FILE_IREAD_ALL: OpId = 95;
pub const FILE_IREAD_AT: OpId = 96;
pub const FILE_IREAD_AT_ALL: OpId = 97;
pub const FILE_IREAD_SHARED: OpId = 98;
pub const FILE_IWRITE: OpId = 99;
pub const FILE_IWRITE_ALL: OpId = 100;
pub const FILE_IWRITE_AT: OpId = 101;
pub const FILE_IWRITE_AT_ALL: OpId = 102;
pub const FILE_IWRITE_SHARED: OpId = 103;
pub const FILE_OPEN: OpId = 104;
pub const FILE_PREALLOCATE: OpId = 105;
pub const FILE_READ: OpId = 106;
pub const FILE_READ_ALL: OpId = 107;
pub const FILE_READ_ALL_BEGIN: OpId = 108;
pub const FILE_READ_ALL_END: OpId = 109;
pub const FILE_READ_AT: OpId = 110;
pub const FILE_READ_AT_ALL: OpId = 111;
pub const FILE_READ_AT_ALL_BEGIN: OpId = 112;
pub const FILE_READ_AT_ALL_END: OpId = 113;
pub const FILE_READ_ORDERED: OpId = 114;
pub const FILE_READ_ORDERED_BEGIN: OpId = 115;
pub const FILE_READ_ORDERED_END: OpId = 116;
pub const FILE_READ_SHARED: OpId = 117;
pub const FILE_SEEK: OpId = 118;
pub const FILE_SEEK_SHARED: OpId = 119;
pub const FILE_SET_ATOMICITY: OpId = 120;
pub const FILE_SET_ERRHANDLER: OpId = 121;
pub const FILE_SET_INFO: OpId = 122;
pub const FILE_SET_SIZE: OpId = 123;
pub const FILE_SET_VIEW: OpId = 124;
pub const FILE_SYNC: OpId = 125;
pub const FILE_WRITE: OpId = 126;
pub const FILE_WRITE_ALL: OpId = 127;
pub const FILE_WRITE_ALL_BEGIN: OpId = 128;
pub const FILE_WRITE_ALL_END: OpId = 129;
pub const FILE_WRITE_AT: OpId = 130;
pub const FILE_WRITE_AT_ALL: OpId = 131;
pub const FILE_WRITE_AT_ALL_BEGIN: OpId = 132;
pub const FILE_WRITE_AT_ALL_END: OpId = 133;
pub const FILE_WRITE_ORDERED: OpId = 134;
pub const FILE_WRITE_ORDERED_BEGIN: OpId = 135;
pub const FILE_WRITE_ORDERED_END: OpId = 136;
pub const FILE_WRITE_SHARED: OpId = 137;
pub const FINALIZE: OpId = 138;
pub const FINALIZED: OpId = 139;
pub const FREE_MEM: OpId = 140;
pub const GATHER: OpId = 141;
pub const GATHERV: OpId = 142;
pub const GET: OpId = 143;
pub const GET_ACCUMULATE: OpId = 144;
pub const GET_ADDRESS: OpId = 145;
pub const GET_COUNT: OpId = 146;
pub const GET_ELEMENTS: OpId = 147;
pub const GET_ELEMENTS_X: OpId = 148;
pub const GET_LIBRARY_VERSION: OpId = 149;
pub const GET_PROCESSOR_NAME: OpId = 150;
pub const GET_VERSION: OpId = 151;
pub const GRAPH_CREATE: OpId = 152;
pub const GRAPH_GET: OpId = 153;
pub const GRAPH_MAP: OpId = 154;
pub const GRAPH_NEIGHBORS: OpId = 155;
pub const GRAPH_NEIGHBORS_COUNT: OpId = 156;
pub const GRAPHDIMS_GET: OpId = 157;
pub const GREQUEST_COMPLETE: OpId = 158;
pub const GREQUEST_START: OpId = 159;
pub const GROUP_COMPARE: OpId = 160;
pub const GROUP_DIFFERENCE: OpId = 161;
pub const GROUP_EXCL: OpId = 162;
pub const GROUP_FREE: OpId = 163;
pub const GROUP_INCL: OpId = 164;
pub const GROUP_INTERSECTION: OpId = 165;
pub const GROUP_RANGE_EXCL: OpId = 166;
pub const GROUP_RANGE_INCL: OpId = 167;
pub const GROUP_RANK: OpId = 168;
pub const GROUP_SIZE: OpId = 169;
pub const GROUP_TRANSLATE_RANKS: OpId = 170;
pub const GROUP_UNION: OpId = 171;
pub const IALLGATHER: OpId = 172;
pub const IALLGATHERV: OpId = 173;
pub const IALLREDUCE: OpId = 174;
pub const IALLTOALL: OpId = 175;
pub const IALLTOALLV: OpId = 176;
pub const IALLTOALLW: OpId = 177;
pub const IBARRIER: OpId = 178;
pub const IBCAST: OpId = 179;
pub const IBSEND: OpId = 180;
pub const IEXSCAN: OpId = 181;
pub const IGATHER: OpId = 182;
pub const IGATHERV: OpId = 183;
pub const IMPROBE: OpId = 184;
pub const IMRECV: OpId = 185;
pub const INEIGHBOR_ALLGATHER: OpId = 186;
pub const INEIGHBOR_ALLGATHERV: OpId = 187;
pub const INEIGHBOR_ALLTOALL: OpId = 188;
pub const INEIGHBOR_ALLTOALLV: OpId = 189;
pub const INEIGHBOR_ALLTOALLW: OpId = 190;
pub const INFO_CREATE: OpId = 191;
pub const INFO_DELETE: OpId = 192;
pub const INFO_DUP: OpId = 193;
pub const INFO_FREE: OpId = 194;
pub const INFO_GET: OpId = 195;
pub const INFO_GET_NKEYS: OpId = 196;
pub const INFO_GET_NTHKEY: OpId = 197;
pub const INFO_GET_VALUELEN: OpId = 198;
pub const INFO_SET: OpId = 199;
pub const INIT: OpId = 200;
pub const INIT_THREAD: OpId = 201;
pub const INITIALIZED: OpId = 202;
pub const INTERCOMM_CREATE: OpId = 203;
pub const INTERCOMM_MERGE: OpId = 204;
pub const IPROBE: OpId = 205;
pub const IRECV: OpId = 206;
pub const IREDUCE: OpId = 207;
pub const IREDUCE_SCATTER: OpId = 208;
pub const IREDUCE_SCATTER_BLOCK: OpId = 209;
pub const IRSEND: OpId = 210;
pub const IS_THREAD_MAIN: OpId = 211;
pub const ISCAN: OpId = 212;
pub const ISCATTER: OpId = 213;
pub const ISCATTERV: OpId = 214;
pub const ISEND: OpId = 215;
pub const ISSEND: OpId = 216;
pub const KEYVAL_CREATE: OpId = 217;
pub const KEYVAL_FREE: OpId = 218;
pub const LOOKUP_NAME: OpId = 219;
pub const MPROBE: OpId = 220;
pub const MRECV: OpId = 221;
pub const NEIGHBOR_ALLGATHER: OpId = 222;
pub const NEIGHBOR_ALLGATHERV: OpId = 223;
pub const NEIGHBOR_ALLTOALL: OpId = 224;
pub const NEIGHBOR_ALLTOALLV: OpId = 225;
pub const NEIGHBOR_ALLTOALLW: OpId = 226;
pub const OP_COMMUTATIVE: OpId = 227;
pub const OP_CREATE: OpId = 228;
pub const OP_FREE: OpId = 229;
pub const OPEN_PORT: OpId = 230;
pub const PACK: OpId = 231;
pub const PACK_EXTERNAL: OpId = 232;
pub const PACK_EXTERNAL_SIZE: OpId = 233;
pub const PACK_SIZE: OpId = 234;
pub const PCONTROL: OpId = 235;
pub const PROBE: OpId = 236;
pub const PUBLISH_NAME: OpId = 237;
pub const PUT: OpId = 238;
pub const QUERY_THREAD: OpId = 239;
pub const RACCUMULATE: OpId = 240;
pub const RECV: OpId = 241;
pub const RECV_INIT: OpId = 242;
pub const REDUCE: OpId = 243;
pub const REDUCE_LOCAL: OpId = 244;
pub const REDUCE_SCATTER: OpId = 245;
pub const REDUCE_SCATTER_BLOCK: OpId = 246;
pub const REGISTER_DATAREP: OpId = 247;
pub const REQUEST_FREE: OpId = 248;
pub const REQUEST_GET_STATUS: OpId = 249;
pub const RGET: OpId = 250;
pub const RGET_ACCUMULATE: OpId = 251;
pub const RPUT: OpId = 252;
pub const RSEND: OpId = 253;
pub const RSEND_INIT: OpId = 254;
pub const SCAN: OpId = 255;
pub const SCATTER: OpId = 256;
pub const SCATTERV: OpId = 257;
pub const SEND: OpId = 258;
pub const SEND_INIT: OpId = 259;
pub const SENDRECV: OpId = 260;
pub const SENDRECV_REPLACE: OpId = 261;
pub const SSEND: OpId = 262;
pub const SSEND_INIT: OpId = 263;
pub const START: OpId = 264;
pub const STARTALL: OpId = 265;
pub const STATUS_SET_CANCELLED: OpId = 266;
pub const STATUS_SET_ELEMENTS: OpId = 267;
pub const STATUS_SET_ELEMENTS_X: OpId = 268;
pub const TEST: OpId = 269;
pub const TEST_CANCELLED: OpId = 270;
pub const TESTALL: OpId = 271;
pub const TESTANY: OpId = 272;
pub const TESTSOME: OpId = 273;
pub const TOPO_TEST: OpId = 274;
pub const TYPE_COMMIT: OpId = 275;
pub const TYPE_CONTIGUOUS: OpId = 276;
pub const TYPE_CREATE_DARRAY: OpId = 277;
pub const TYPE_CREATE_F90_COMPLEX: OpId = 278;
pub const TYPE_CREATE_F90_INTEGER: OpId = 279;
pub const TYPE_CREATE_F90_REAL: OpId = 280;
pub const TYPE_CREATE_HINDEXED: OpId = 281;
pub const TYPE_CREATE_HINDEXED_BLOCK: OpId = 282;
pub const TYPE_CREATE_HVECTOR: OpId = 283;
pub const TYPE_CREATE_INDEXED_BLOCK: OpId = 284;
pub const TYPE_CREATE_KEYVAL: OpId = 285;
pub const TYPE_CREATE_RESIZED: OpId = 286;
pub const TYPE_CREATE_STRUCT: OpId = 287;
pub const TYPE_CREATE_SUBARRAY: OpId = 288;
pub const TYPE_DELETE_ATTR: OpId = 289;
pub const TYPE_DUP: OpId = 290;
pub const TYPE_EXTENT: OpId = 291;
pub const TYPE_FREE: OpId = 292;
pub const TYPE_FREE_KEYVAL: OpId = 293;
pub const TYPE_GET_ATTR: OpId = 294;
pub const TYPE_GET_CONTENTS: OpId = 295;
pub const TYPE_GET_ENVELOPE: OpId = 296;
pub const TYPE_GET_EXTENT: OpId = 297;
pub const TYPE_GET_EXTENT_X: OpId = 298;
pub const TYPE_GET_NAME: OpId = 299;
pub const TYPE_GET_TRUE_EXTENT: OpId = 300;
pub const TYPE_GET_TRUE_EXTENT_X: OpId = 301;
pub const TYPE_HINDEXED: OpId = 302;
pub const TYPE_HVECTOR: OpId = 303;
pub const TYPE_INDEXED: OpId = 304;
pub const TYPE_LB: OpId = 305;
pub const TYPE_MATCH_SIZE: OpId = 306;
pub const TYPE_SET_ATTR: OpId = 307;
pub const TYPE_SET_NAME: OpId = 308;
pub const TYPE_SIZE: OpId = 309;
pub const TYPE_SIZE_X: OpId = 310;
pub const TYPE_STRUCT: OpId = 311;
pub const TYPE_UB: OpId = 312;
pub const TYPE_VECTOR: OpId = 313;
pub const UNPACK: OpId = 314;
pub const UNPACK_EXTERNAL: OpId = 315;
pub const UNPUBLISH_NAME: OpId = 316;
pub const WAIT: OpId = 317;
pub const WAITALL: OpId = 318;
pub const WAITANY: OpId = 319;
pub const WAITSOME: OpId = 320;
pub const WIN_ALLOCATE: OpId = 321;
pub const WIN_ALLOCATE_SHARED: OpId = 322;
pub const WIN_ATTACH: OpId = 323;
pub const WIN_CALL_ERRHANDLER: OpId = 324;
pub const WIN_COMPLETE: OpId = 325;
pub const WIN_CREATE: OpId = 326;
pub const WIN_CREATE_DYNAMIC: OpId = 327;
pub const WIN_CREATE_ERRHANDLER: OpId = 328;
pub const WIN_CREATE_KEYVAL: OpId = 329;
pub const WIN_DELETE_ATTR: OpId = 330;
pub const WIN_DETACH: OpId = 331;
pub const WIN_FENCE: OpId = 332;
pub const WIN_FLUSH: OpId = 333;
pub const WIN_FLUSH_ALL: OpId = 334;
pub const WIN_FLUSH_LOCAL: OpId = 335;
pub const WIN_FLUSH_LOCAL_ALL: OpId = 336;
pub const WIN_FREE: OpId = 337;
pub const WIN_FREE_KEYVAL: OpId = 338;
pub const WIN_GET_ATTR: OpId = 339;
pub const WIN_GET_ERRHANDLER: OpId = 340;
pub const WIN_GET_GROUP: OpId = 341;
pub const WIN_GET_INFO: OpId = 342;
pub const WIN_GET_NAME: OpId = 343;
pub const WIN_LOCK: OpId = 344;
pub const WIN_LOCK_ALL: OpId = 345;
pub const WIN_POST: OpId = 346;
pub const WIN_SET_ATTR: OpId = 347;
pub const WIN_SET_ERRHANDLER: OpId = 348;
pub const WIN_SET_INFO: OpId = 349;
pub const WIN_SET_NAME: OpId = 350;
pub const WIN_SHARED_QUERY: OpId = 351;
pub const WIN_START: OpId = 352;
pub const WIN_SYNC: OpId = 353;
pub const WIN_TEST: OpId = 354;
pub const WIN_UNLOCK: OpId = 355;
pub const WIN_UNLOCK_ALL: OpId = 356;
pub const WIN_WAIT: OpId = 357;
pub const WTICK: OpId = 358;
pub const WTIME: OpId = 359;

/// Display name for an operation id, for diagnostics only.
pub fn name(op: OpId) -> &'static str {
    OP_NAMES.get(op).copied().unwrap_or("<unknown op>")
}

static OP_NAMES: [&str; NUM_OPS] = [
    "MPI_Abort",
    "MPI_Accumulate",
    "MPI_Add_error_class",
    "MPI_Add_error_code",
    "MPI_Add_error_string",
    "MPI_Address",
    "MPI_Allgather",
    "MPI_Allgatherv",
    "MPI_Alloc_mem",
    "MPI_Allreduce",
    "MPI_Alltoall",
    "MPI_Alltoallv",
    "MPI_Alltoallw",
    "MPI_Attr_delete",
    "MPI_Attr_get",
    "MPI_Attr_put",
    "MPI_Barrier",
    "MPI_Bcast",
    "MPI_Bsend",
    "MPI_Bsend_init",
    "MPI_Buffer_attach",
    "MPI_Buffer_detach",
    "MPI_Cancel",
    "MPI_Cart_coords",
    "MPI_Cart_create",
    "MPI_Cart_get",
    "MPI_Cart_map",
    "MPI_Cart_rank",
    "MPI_Cart_shift",
    "MPI_Cart_sub",
    "MPI_Cartdim_get",
    "MPI_Close_port",
    "MPI_Comm_accept",
    "MPI_Comm_call_errhandler",
    "MPI_Comm_compare",
    "MPI_Comm_connect",
    "MPI_Comm_create",
    "MPI_Comm_create_errhandler",
    "MPI_Comm_create_group",
    "MPI_Comm_create_keyval",
    "MPI_Comm_delete_attr",
    "MPI_Comm_disconnect",
    "MPI_Comm_dup",
    "MPI_Comm_dup_with_info",
    "MPI_Comm_free",
    "MPI_Comm_free_keyval",
    "MPI_Comm_get_attr",
    "MPI_Comm_get_errhandler",
    "MPI_Comm_get_info",
    "MPI_Comm_get_name",
    "MPI_Comm_get_parent",
    "MPI_Comm_group",
    "MPI_Comm_idup",
    "MPI_Comm_join",
    "MPI_Comm_rank",
    "MPI_Comm_remote_group",
    "MPI_Comm_remote_size",
    "MPI_Comm_set_attr",
    "MPI_Comm_set_errhandler",
    "MPI_Comm_set_info",
    "MPI_Comm_set_name",
    "MPI_Comm_size",
    "MPI_Comm_split",
    "MPI_Comm_split_type",
    "MPI_Comm_test_inter",
    "MPI_Compare_and_swap",
    "MPI_Dims_create",
    "MPI_Dist_graph_create",
    "MPI_Dist_graph_create_adjacent",
    "MPI_Dist_graph_neighbors",
    "MPI_Dist_graph_neighbors_count",
    "MPI_Errhandler_create",
    "MPI_Errhandler_free",
    "MPI_Errhandler_get",
    "MPI_Errhandler_set",
    "MPI_Error_class",
    "MPI_Error_string",
    "MPI_Exscan",
    "MPI_Fetch_and_op",
    "MPI_File_call_errhandler",
    "MPI_File_close",
    "MPI_File_create_errhandler",
    "MPI_File_delete",
    "MPI_File_get_amode",
    "MPI_File_get_atomicity",
    "MPI_File_get_byte_offset",
    "MPI_File_get_errhandler",
    "MPI_File_get_group",
    "MPI_File_get_info",
    "MPI_File_get_position",
    "MPI_File_get_position_shared",
    "MPI_File_get_size",
    "MPI_File_get_type_extent",
    "MPI_File_get_view",
    "MPI_File_iread",
    "MPI_File_iread_all",
    "MPI_File_iread_at",
    "MPI_File_iread_at_all",
    "MPI_File_iread_shared",
    "MPI_File_iwrite",
    "MPI_File_iwrite_all",
    "MPI_File_iwrite_at",
    "MPI_File_iwrite_at_all",
    "MPI_File_iwrite_shared",
    "MPI_File_open",
    "MPI_File_preallocate",
    "MPI_File_read",
    "MPI_File_read_all",
    "MPI_File_read_all_begin",
    "MPI_File_read_all_end",
    "MPI_File_read_at",
    "MPI_File_read_at_all",
    "MPI_File_read_at_all_begin",
    "MPI_File_read_at_all_end",
    "MPI_File_read_ordered",
    "MPI_File_read_ordered_begin",
    "MPI_File_read_ordered_end",
    "MPI_File_read_shared",
    "MPI_File_seek",
    "MPI_File_seek_shared",
    "MPI_File_set_atomicity",
    "MPI_File_set_errhandler",
    "MPI_File_set_info",
    "MPI_File_set_size",
    "MPI_File_set_view",
    "MPI_File_sync",
    "MPI_File_write",
    "MPI_File_write_all",
    "MPI_File_write_all_begin",
    "MPI_File_write_all_end",
    "MPI_File_write_at",
    "MPI_File_write_at_all",
    "MPI_File_write_at_all_begin",
    "MPI_File_write_at_all_end",
    "MPI_File_write_ordered",
    "MPI_File_write_ordered_begin",
    "MPI_File_write_ordered_end",
    "MPI_File_write_shared",
    "MPI_Finalize",
    "MPI_Finalized",
    "MPI_Free_mem",
    "MPI_Gather",
    "MPI_Gatherv",
    "MPI_Get",
    "MPI_Get_accumulate",
    "MPI_Get_address",
    "MPI_Get_count",
    "MPI_Get_elements",
    "MPI_Get_elements_x",
    "MPI_Get_library_version",
    "MPI_Get_processor_name",
    "MPI_Get_version",
    "MPI_Graph_create",
    "MPI_Graph_get",
    "MPI_Graph_map",
    "MPI_Graph_neighbors",
    "MPI_Graph_neighbors_count",
    "MPI_Graphdims_get",
    "MPI_Grequest_complete",
    "MPI_Grequest_start",
    "MPI_Group_compare",
    "MPI_Group_difference",
    "MPI_Group_excl",
    "MPI_Group_free",
    "MPI_Group_incl",
    "MPI_Group_intersection",
    "MPI_Group_range_excl",
    "MPI_Group_range_incl",
    "MPI_Group_rank",
    "MPI_Group_size",
    "MPI_Group_translate_ranks",
    "MPI_Group_union",
    "MPI_Iallgather",
    "MPI_Iallgatherv",
    "MPI_Iallreduce",
    "MPI_Ialltoall",
    "MPI_Ialltoallv",
    "MPI_Ialltoallw",
    "MPI_Ibarrier",
    "MPI_Ibcast",
    "MPI_Ibsend",
    "MPI_Iexscan",
    "MPI_Igather",
    "MPI_Igatherv",
    "MPI_Improbe",
    "MPI_Imrecv",
    "MPI_Ineighbor_allgather",
    "MPI_Ineighbor_allgatherv",
    "MPI_Ineighbor_alltoall",
    "MPI_Ineighbor_alltoallv",
    "MPI_Ineighbor_alltoallw",
    "MPI_Info_create",
    "MPI_Info_delete",
    "MPI_Info_dup",
    "MPI_Info_free",
    "MPI_Info_get",
    "MPI_Info_get_nkeys",
    "MPI_Info_get_nthkey",
    "MPI_Info_get_valuelen",
    "MPI_Info_set",
    "MPI_Init",
    "MPI_Init_thread",
    "MPI_Initialized",
    "MPI_Intercomm_create",
    "MPI_Intercomm_merge",
    "MPI_Iprobe",
    "MPI_Irecv",
    "MPI_Ireduce",
    "MPI_Ireduce_scatter",
    "MPI_Ireduce_scatter_block",
    "MPI_Irsend",
    "MPI_Is_thread_main",
    "MPI_Iscan",
    "MPI_Iscatter",
    "MPI_Iscatterv",
    "MPI_Isend",
    "MPI_Issend",
    "MPI_Keyval_create",
    "MPI_Keyval_free",
    "MPI_Lookup_name",
    "MPI_Mprobe",
    "MPI_Mrecv",
    "MPI_Neighbor_allgather",
    "MPI_Neighbor_allgatherv",
    "MPI_Neighbor_alltoall",
    "MPI_Neighbor_alltoallv",
    "MPI_Neighbor_alltoallw",
    "MPI_Op_commutative",
    "MPI_Op_create",
    "MPI_Op_free",
    "MPI_Open_port",
    "MPI_Pack",
    "MPI_Pack_external",
    "MPI_Pack_external_size",
    "MPI_Pack_size",
    "MPI_Pcontrol",
    "MPI_Probe",
    "MPI_Publish_name",
    "MPI_Put",
    "MPI_Query_thread",
    "MPI_Raccumulate",
    "MPI_Recv",
    "MPI_Recv_init",
    "MPI_Reduce",
    "MPI_Reduce_local",
    "MPI_Reduce_scatter",
    "MPI_Reduce_scatter_block",
    "MPI_Register_datarep",
    "MPI_Request_free",
    "MPI_Request_get_status",
    "MPI_Rget",
    "MPI_Rget_accumulate",
    "MPI_Rput",
    "MPI_Rsend",
    "MPI_Rsend_init",
    "MPI_Scan",
    "MPI_Scatter",
    "MPI_Scatterv",
    "MPI_Send",
    "MPI_Send_init",
    "MPI_Sendrecv",
    "MPI_Sendrecv_replace",
    "MPI_Ssend",
    "MPI_Ssend_init",
    "MPI_Start",
    "MPI_Startall",
    "MPI_Status_set_cancelled",
    "MPI_Status_set_elements",
    "MPI_Status_set_elements_x",
    "MPI_Test",
    "MPI_Test_cancelled",
    "MPI_Testall",
    "MPI_Testany",
    "MPI_Testsome",
    "MPI_Topo_test",
    "MPI_Type_commit",
    "MPI_Type_contiguous",
    "MPI_Type_create_darray",
    "MPI_Type_create_f90_complex",
    "MPI_Type_create_f90_integer",
    "MPI_Type_create_f90_real",
    "MPI_Type_create_hindexed",
    "MPI_Type_create_hindexed_block",
    "MPI_Type_create_hvector",
    "MPI_Type_create_indexed_block",
    "MPI_Type_create_keyval",
    "MPI_Type_create_resized",
    "MPI_Type_create_struct",
    "MPI_Type_create_subarray",
    "MPI_Type_delete_attr",
    "MPI_Type_dup",
    "MPI_Type_extent",
    "MPI_Type_free",
    "MPI_Type_free_keyval",
    "MPI_Type_get_attr",
    "MPI_Type_get_contents",
    "MPI_Type_get_envelope",
    "MPI_Type_get_extent",
    "MPI_Type_get_extent_x",
    "MPI_Type_get_name",
    "MPI_Type_get_true_extent",
    "MPI_Type_get_true_extent_x",
    "MPI_Type_hindexed",
    "MPI_Type_hvector",
    "MPI_Type_indexed",
    "MPI_Type_lb",
    "MPI_Type_match_size",
    "MPI_Type_set_attr",
    "MPI_Type_set_name",
    "MPI_Type_size",
    "MPI_Type_size_x",
    "MPI_Type_struct",
    "MPI_Type_ub",
    "MPI_Type_vector",
    "MPI_Unpack",
    "MPI_Unpack_external",
    "MPI_Unpublish_name",
    "MPI_Wait",
    "MPI_Waitall",
    "MPI_Waitany",
    "MPI_Waitsome",
    "MPI_Win_allocate",
    "MPI_Win_allocate_shared",
    "MPI_Win_attach",
    "MPI_Win_call_errhandler",
    "MPI_Win_complete",
    "MPI_Win_create",
    "MPI_Win_create_dynamic",
    "MPI_Win_create_errhandler",
    "MPI_Win_create_keyval",
    "MPI_Win_delete_attr",
    "MPI_Win_detach",
    "MPI_Win_fence",
    "MPI_Win_flush",
    "MPI_Win_flush_all",
    "MPI_Win_flush_local",
    "MPI_Win_flush_local_all",
    "MPI_Win_free",
    "MPI_Win_free_keyval",
    "MPI_Win_get_attr",
    "MPI_Win_get_errhandler",
    "MPI_Win_get_group",
    "MPI_Win_get_info",
    "MPI_Win_get_name",
    "MPI_Win_lock",
    "MPI_Win_lock_all",
    "MPI_Win_post",
    "MPI_Win_set_attr",
    "MPI_Win_set_errhandler",
    "MPI_Win_set_info",
    "MPI_Win_set_name",
    "MPI_Win_shared_query",
    "MPI_Win_start",
    "MPI_Win_sync",
    "MPI_Win_test",
    "MPI_Win_unlock",
    "MPI_Win_unlock_all",
    "MPI_Win_wait",
    "MPI_Wtick",
    "MPI_Wtime",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_table_positions() {
        assert_eq!(name(SEND), "MPI_Send");
        assert_eq!(name(BCAST), "MPI_Bcast");
        assert_eq!(name(FINALIZE), "MPI_Finalize");
        assert_eq!(name(WTIME), "MPI_Wtime");
        assert_eq!(name(ABORT), "MPI_Abort");
        assert_eq!(name(NUM_OPS - 1), "MPI_Wtime");
        assert_eq!(name(NUM_OPS), "<unknown op>");
    }
}
