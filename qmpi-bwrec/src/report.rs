//! Shutdown aggregation and reporting.
//!
//! At finalize time every rank's bucket array is sum-reduced into rank
//! 0, which prints one line per non-zero total. The report can be
//! suppressed with `QMPI_BWREC_REPORT=0` (any value other than `1`);
//! only rank 0 consults the variable.
use crate::counters::{CounterStore, BUCKET_NAMES, NUM_BUCKETS};
use crate::pmpi::{Pmpi, PmpiResult};
use lazy_static::lazy_static;
use qmpi::c::{Comm, ReturnStatus};
use qmpi::consts;
use std::env;
use std::fmt::Write;

lazy_static! {
    static ref REPORT_ENABLED: bool = match env::var("QMPI_BWREC_REPORT") {
        Ok(value) => value == "1",
        Err(_) => true,
    };
}

/// Sum every rank's snapshot into rank 0. Returns the totals on rank 0
/// and `None` on every other rank. Both the reduction and the rank query
/// propagate their exact failure code.
pub fn aggregate<P: Pmpi>(
    store: &CounterStore,
    pmpi: &P,
    comm: Comm,
) -> PmpiResult<Option<[i64; NUM_BUCKETS]>> {
    let local = store.snapshot();
    let mut total = [0i64; NUM_BUCKETS];
    pmpi.reduce_sum_i64(&local, &mut total, 0, comm)?;
    let rank = pmpi.comm_rank(comm)?;
    Ok(if rank == 0 { Some(total) } else { None })
}

/// Render the non-zero buckets, one `<label>: <count>` line each.
pub fn render(totals: &[i64; NUM_BUCKETS]) -> String {
    let mut out = String::new();
    for (label, total) in BUCKET_NAMES.iter().zip(totals) {
        if *total != 0 {
            // Writing to a String cannot fail.
            let _ = writeln!(out, "{}: {}", label, total);
        }
    }
    out
}

/// Run the full shutdown path: aggregate, and print on rank 0 unless
/// suppressed. Returns the failing collaborator status code, if any;
/// the caller decides whether that suppresses finalize forwarding.
pub fn shutdown_report<P: Pmpi>(store: &CounterStore, pmpi: &P, comm: Comm) -> ReturnStatus {
    match aggregate(store, pmpi, comm) {
        Ok(Some(totals)) => {
            if *REPORT_ENABLED {
                print!("{}", render(&totals));
            }
            consts::SUCCESS
        }
        Ok(None) => consts::SUCCESS,
        Err(code) => code,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qmpi::c::{Datatype, Status};
    use std::cell::RefCell;
    use std::ffi::c_int;

    /// Fixed-topology mock: holds each peer's bucket array; reduction is
    /// the element-wise sum of all of them.
    struct MockPmpi {
        rank: c_int,
        peers: Vec<[i64; NUM_BUCKETS]>,
        fail_reduce: Option<ReturnStatus>,
        fail_rank: Option<ReturnStatus>,
        reduce_calls: RefCell<usize>,
    }

    impl MockPmpi {
        fn new(rank: c_int, peers: Vec<[i64; NUM_BUCKETS]>) -> MockPmpi {
            MockPmpi {
                rank,
                peers,
                fail_reduce: None,
                fail_rank: None,
                reduce_calls: RefCell::new(0),
            }
        }
    }

    impl Pmpi for MockPmpi {
        fn comm_rank(&self, _comm: Comm) -> PmpiResult<c_int> {
            match self.fail_rank {
                Some(code) => Err(code),
                None => Ok(self.rank),
            }
        }

        fn comm_size(&self, _comm: Comm) -> PmpiResult<c_int> {
            Ok(self.peers.len() as c_int + 1)
        }

        fn reduce_sum_i64(
            &self,
            local: &[i64],
            total: &mut [i64],
            _root: c_int,
            _comm: Comm,
        ) -> PmpiResult<()> {
            *self.reduce_calls.borrow_mut() += 1;
            if let Some(code) = self.fail_reduce {
                return Err(code);
            }
            for (i, slot) in total.iter_mut().enumerate() {
                *slot = local[i] + self.peers.iter().map(|p| p[i]).sum::<i64>();
            }
            Ok(())
        }

        fn get_count(&self, _status: &Status, _datatype: Datatype) -> PmpiResult<c_int> {
            Ok(0)
        }
    }

    #[test]
    fn aggregate_sums_elementwise_across_ranks() {
        let store = CounterStore::new();
        store.record_send(5, qmpi::consts::INT64);

        let mut peer_a = [0i64; NUM_BUCKETS];
        peer_a[3] = 2; // 64-bit sent
        peer_a[20] = 7; // doubles reduced
        let peer_zero = [0i64; NUM_BUCKETS]; // all-zero participant

        let pmpi = MockPmpi::new(0, vec![peer_a, peer_zero]);
        let totals = aggregate(&store, &pmpi, consts::COMM_WORLD)
            .expect("aggregation")
            .expect("rank 0 receives totals");

        assert_eq!(totals[3], 3);
        assert_eq!(totals[20], 7);
        assert_eq!(totals.iter().sum::<i64>(), 10);
    }

    #[test]
    fn non_root_ranks_get_no_totals() {
        let store = CounterStore::new();
        let pmpi = MockPmpi::new(3, vec![]);
        let result = aggregate(&store, &pmpi, consts::COMM_WORLD).expect("aggregation");
        assert!(result.is_none());
    }

    #[test]
    fn reduce_failure_propagates_its_code() {
        let store = CounterStore::new();
        let mut pmpi = MockPmpi::new(0, vec![]);
        pmpi.fail_reduce = Some(33);

        assert_eq!(aggregate(&store, &pmpi, consts::COMM_WORLD), Err(33));
        assert_eq!(shutdown_report(&store, &pmpi, consts::COMM_WORLD), 33);
    }

    #[test]
    fn rank_failure_propagates_its_code_not_the_reduce_status() {
        let store = CounterStore::new();
        let mut pmpi = MockPmpi::new(0, vec![]);
        pmpi.fail_rank = Some(44);

        assert_eq!(aggregate(&store, &pmpi, consts::COMM_WORLD), Err(44));
        // The reduction itself ran and succeeded before the rank query failed.
        assert_eq!(*pmpi.reduce_calls.borrow(), 1);
    }

    #[test]
    fn render_prints_only_non_zero_buckets() {
        let mut totals = [0i64; NUM_BUCKETS];
        totals[0] = 12; // 8-bit sent
        totals[11] = 4; // native integers received

        let text = render(&totals);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "8-bit integers sent     : 12",
                "native integers received: 4",
            ]
        );
    }

    #[test]
    fn render_of_all_zero_totals_is_empty() {
        assert_eq!(render(&[0i64; NUM_BUCKETS]), "");
    }
}
