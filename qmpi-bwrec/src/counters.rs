//! Per-datatype traffic counters.
//!
//! One atomic bucket per (datatype class, direction) pair. A bucket
//! counts *calls* observed with that datatype class, not elements or
//! bytes: every record operation increments its bucket by exactly 1,
//! whatever the element count of the call was. Buckets are never
//! decremented and are only read as a snapshot at shutdown.
use qmpi::c::Datatype;
use qmpi::consts;
use std::ffi::c_int;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Sent = 0,
    Received = 1,
    Reduced = 2,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DatatypeClass {
    I8 = 0,
    I16 = 1,
    I32 = 2,
    I64 = 3,
    /// The native `int`/`unsigned` handles get their own bucket, kept
    /// separate from the fixed-width 32-bit one even where the widths
    /// coincide.
    NativeInt = 4,
    F32 = 5,
    F64 = 6,
}

pub const NUM_CLASSES: usize = 7;
pub const NUM_BUCKETS: usize = NUM_CLASSES * 3;

/// Map a datatype handle to its counting class. Unrecognized handles
/// (derived types, long doubles, ...) are not counted at all.
pub fn classify(datatype: Datatype) -> Option<DatatypeClass> {
    match datatype {
        consts::UINT8
        | consts::INT8
        | consts::CHAR
        | consts::UNSIGNED_CHAR
        | consts::SIGNED_CHAR
        | consts::BYTE => Some(DatatypeClass::I8),
        consts::UINT16 | consts::INT16 => Some(DatatypeClass::I16),
        consts::UINT32 | consts::INT32 => Some(DatatypeClass::I32),
        consts::UINT64 | consts::INT64 => Some(DatatypeClass::I64),
        consts::INT | consts::UNSIGNED => Some(DatatypeClass::NativeInt),
        consts::FLOAT => Some(DatatypeClass::F32),
        consts::DOUBLE => Some(DatatypeClass::F64),
        _ => None,
    }
}

/// Process-wide counter array.
///
/// Increments are single relaxed fetch-adds; buckets are independent, so
/// no stronger ordering or locking is needed for concurrent callers.
pub struct CounterStore {
    buckets: [AtomicU64; NUM_BUCKETS],
}

impl CounterStore {
    const ZERO: AtomicU64 = AtomicU64::new(0);

    pub const fn new() -> CounterStore {
        CounterStore {
            buckets: [Self::ZERO; NUM_BUCKETS],
        }
    }

    fn bump(&self, direction: Direction, class: DatatypeClass) {
        let bucket = direction as usize * NUM_CLASSES + class as usize;
        self.buckets[bucket].fetch_add(1, Ordering::Relaxed);
    }

    /// Count one send call. The element count is part of the
    /// classification interface but does not scale the increment.
    pub fn record_send(&self, _count: c_int, datatype: Datatype) {
        if let Some(class) = classify(datatype) {
            self.bump(Direction::Sent, class);
        }
    }

    /// Count one receive call, classified by the completed transfer.
    pub fn record_recv(&self, _count: c_int, datatype: Datatype) {
        if let Some(class) = classify(datatype) {
            self.bump(Direction::Received, class);
        }
    }

    /// Count one reduction contribution.
    pub fn record_reduce(&self, _count: c_int, datatype: Datatype) {
        if let Some(class) = classify(datatype) {
            self.bump(Direction::Reduced, class);
        }
    }

    pub fn get(&self, direction: Direction, class: DatatypeClass) -> u64 {
        let bucket = direction as usize * NUM_CLASSES + class as usize;
        self.buckets[bucket].load(Ordering::Relaxed)
    }

    /// Copy out every bucket for the shutdown reduction.
    pub fn snapshot(&self) -> [i64; NUM_BUCKETS] {
        let mut out = [0i64; NUM_BUCKETS];
        for (slot, bucket) in out.iter_mut().zip(&self.buckets) {
            *slot = bucket.load(Ordering::Relaxed) as i64;
        }
        out
    }
}

impl Default for CounterStore {
    fn default() -> CounterStore {
        CounterStore::new()
    }
}

/// Display labels, indexed like the bucket array. Trailing spaces keep
/// the report's colons aligned.
pub static BUCKET_NAMES: [&str; NUM_BUCKETS] = [
    "8-bit integers sent     ",
    "16-bit integers sent    ",
    "32-bit integers sent    ",
    "64-bit integers sent    ",
    "native integers sent    ",
    "floats sent             ",
    "doubles sent            ",
    "8-bit integers received ",
    "16-bit integers received",
    "32-bit integers received",
    "64-bit integers received",
    "native integers received",
    "floats received         ",
    "doubles received        ",
    "8-bit integers reduced  ",
    "16-bit integers reduced ",
    "32-bit integers reduced ",
    "64-bit integers reduced ",
    "native integers reduced ",
    "floats reduced          ",
    "doubles reduced         ",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_covers_every_supported_handle() {
        let cases = [
            (consts::CHAR, DatatypeClass::I8),
            (consts::SIGNED_CHAR, DatatypeClass::I8),
            (consts::UNSIGNED_CHAR, DatatypeClass::I8),
            (consts::BYTE, DatatypeClass::I8),
            (consts::INT8, DatatypeClass::I8),
            (consts::UINT8, DatatypeClass::I8),
            (consts::INT16, DatatypeClass::I16),
            (consts::UINT16, DatatypeClass::I16),
            (consts::INT32, DatatypeClass::I32),
            (consts::UINT32, DatatypeClass::I32),
            (consts::INT64, DatatypeClass::I64),
            (consts::UINT64, DatatypeClass::I64),
            (consts::INT, DatatypeClass::NativeInt),
            (consts::UNSIGNED, DatatypeClass::NativeInt),
            (consts::FLOAT, DatatypeClass::F32),
            (consts::DOUBLE, DatatypeClass::F64),
        ];
        for (handle, expected) in cases {
            assert_eq!(classify(handle), Some(expected), "handle {}", handle);
        }
    }

    #[test]
    fn unrecognized_handles_are_ignored() {
        assert_eq!(classify(consts::SHORT), None);
        assert_eq!(classify(consts::LONG), None);
        assert_eq!(classify(consts::LONG_DOUBLE), None);
        assert_eq!(classify(9999), None);

        let store = CounterStore::new();
        store.record_send(10, consts::LONG);
        store.record_recv(10, consts::LONG_DOUBLE);
        store.record_reduce(10, 9999);
        assert_eq!(store.snapshot(), [0i64; NUM_BUCKETS]);
    }

    #[test]
    fn increment_is_one_per_call_regardless_of_count() {
        let store = CounterStore::new();
        store.record_send(1000, consts::INT64);
        store.record_send(0, consts::INT64);
        store.record_send(-3, consts::INT64);
        assert_eq!(store.get(Direction::Sent, DatatypeClass::I64), 3);

        // No other bucket moved.
        let snapshot = store.snapshot();
        assert_eq!(snapshot.iter().sum::<i64>(), 3);
    }

    #[test]
    fn directions_use_distinct_buckets() {
        let store = CounterStore::new();
        store.record_send(1, consts::FLOAT);
        store.record_recv(1, consts::FLOAT);
        store.record_recv(1, consts::FLOAT);
        store.record_reduce(1, consts::FLOAT);

        assert_eq!(store.get(Direction::Sent, DatatypeClass::F32), 1);
        assert_eq!(store.get(Direction::Received, DatatypeClass::F32), 2);
        assert_eq!(store.get(Direction::Reduced, DatatypeClass::F32), 1);
    }

    #[test]
    fn native_int_bucket_is_distinct_from_i32() {
        let store = CounterStore::new();
        store.record_send(1, consts::INT);
        assert_eq!(store.get(Direction::Sent, DatatypeClass::NativeInt), 1);
        assert_eq!(store.get(Direction::Sent, DatatypeClass::I32), 0);
    }

    #[test]
    fn concurrent_increments_are_not_lost() {
        use std::sync::Arc;

        let store = Arc::new(CounterStore::new());
        let threads: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..10_000 {
                        store.record_send(1, consts::DOUBLE);
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(store.get(Direction::Sent, DatatypeClass::F64), 40_000);
    }
}
