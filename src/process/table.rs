use std::collections::HashSet;

use sysinfo::Pid;

use super::ProcessEntry;

/// The displayed process list: insertion-ordered, one entry per live pid,
/// with at most one row selected.
#[derive(Debug, Default)]
pub struct ProcessTable {
    entries: Vec<ProcessEntry>,
    selected: Option<Pid>,
}

impl ProcessTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ProcessEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<Pid> {
        self.selected
    }

    /// Selects the row for `pid`. Pids without a displayed row are ignored.
    pub fn select(&mut self, pid: Pid) {
        if self.entries.iter().any(|e| e.pid == pid) {
            self.selected = Some(pid);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Brings the table in line with a fresh snapshot of live pids.
    ///
    /// Rows whose pid is no longer live are removed; live pids without a row
    /// are appended at the end, in the order `live` presents them, with the
    /// name `name_of` resolves. `name_of` returning `None` means the process
    /// exited between enumeration and lookup; that pid is skipped and picked
    /// up on a later pass if it is still around. Surviving rows keep their
    /// relative order, and running the same snapshot twice is a no-op.
    pub fn reconcile<F>(&mut self, live: &[Pid], mut name_of: F)
    where
        F: FnMut(Pid) -> Option<String>,
    {
        let live_set: HashSet<Pid> = live.iter().copied().collect();
        self.entries.retain(|e| live_set.contains(&e.pid));

        let mut displayed: HashSet<Pid> = self.entries.iter().map(|e| e.pid).collect();
        for &pid in live {
            if displayed.contains(&pid) {
                continue;
            }
            if let Some(name) = name_of(pid) {
                self.entries.push(ProcessEntry { name, pid });
                displayed.insert(pid);
            }
        }

        if let Some(pid) = self.selected {
            if !displayed.contains(&pid) {
                self.selected = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pid(n: usize) -> Pid {
        Pid::from(n)
    }

    fn names(table: &ProcessTable) -> Vec<(&str, Pid)> {
        table
            .entries()
            .iter()
            .map(|e| (e.name.as_str(), e.pid))
            .collect()
    }

    fn lookup(p: Pid) -> Option<String> {
        Some(format!("proc-{p}"))
    }

    #[test]
    fn converges_from_empty() {
        let mut table = ProcessTable::new();
        table.reconcile(&[pid(1), pid(2), pid(3)], lookup);

        assert_eq!(
            names(&table),
            vec![("proc-1", pid(1)), ("proc-2", pid(2)), ("proc-3", pid(3))]
        );
    }

    #[test]
    fn reconcile_is_idempotent() {
        let mut table = ProcessTable::new();
        let live = [pid(4), pid(7), pid(9)];
        table.reconcile(&live, lookup);
        let first = names(&table)
            .into_iter()
            .map(|(n, p)| (n.to_owned(), p))
            .collect::<Vec<_>>();

        table.reconcile(&live, lookup);
        let second = names(&table)
            .into_iter()
            .map(|(n, p)| (n.to_owned(), p))
            .collect::<Vec<_>>();

        assert_eq!(first, second);
    }

    #[test]
    fn removes_dead_keeps_order_appends_new() {
        let mut table = ProcessTable::new();
        table.reconcile(&[pid(1), pid(2)], |p| {
            Some(if p == pid(1) { "A".into() } else { "B".into() })
        });

        table.reconcile(&[pid(1), pid(3)], |p| {
            assert_eq!(p, pid(3), "only the new pid needs a name lookup");
            Some("C".into())
        });

        assert_eq!(names(&table), vec![("A", pid(1)), ("C", pid(3))]);
    }

    #[test]
    fn unchanged_when_live_set_matches() {
        let mut table = ProcessTable::new();
        table.reconcile(&[pid(1)], |_| Some("A".into()));

        table.reconcile(&[pid(1)], |_| panic!("no lookup for an existing row"));

        assert_eq!(names(&table), vec![("A", pid(1))]);
    }

    #[test]
    fn skips_pid_whose_name_lookup_fails() {
        let mut table = ProcessTable::new();
        table.reconcile(&[pid(1), pid(2)], |p| {
            (p != pid(2)).then(|| format!("proc-{p}"))
        });
        assert_eq!(names(&table), vec![("proc-1", pid(1))]);

        // Still alive next pass, so it shows up then.
        table.reconcile(&[pid(1), pid(2)], lookup);
        assert_eq!(names(&table), vec![("proc-1", pid(1)), ("proc-2", pid(2))]);
    }

    #[test]
    fn never_duplicates_a_pid() {
        let mut table = ProcessTable::new();
        table.reconcile(&[pid(5), pid(5)], lookup);
        assert_eq!(names(&table), vec![("proc-5", pid(5))]);
    }

    #[test]
    fn selection_survives_while_pid_lives() {
        let mut table = ProcessTable::new();
        table.reconcile(&[pid(1), pid(2)], lookup);
        table.select(pid(2));

        table.reconcile(&[pid(2), pid(3)], lookup);

        assert_eq!(table.selected(), Some(pid(2)));
    }

    #[test]
    fn selection_cleared_when_pid_exits() {
        let mut table = ProcessTable::new();
        table.reconcile(&[pid(1), pid(2)], lookup);
        table.select(pid(2));

        table.reconcile(&[pid(1)], lookup);

        assert_eq!(table.selected(), None);
    }

    #[test]
    fn select_ignores_unknown_pid() {
        let mut table = ProcessTable::new();
        table.reconcile(&[pid(1)], lookup);

        table.select(pid(42));

        assert_eq!(table.selected(), None);
    }
}
