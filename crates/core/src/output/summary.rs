use std::fmt;

/// Counters reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub tables: usize,
    pub records: usize,
    pub buckets: usize,
    pub objects: usize,
    pub users: usize,
    pub files_written: usize,
}

impl ExportSummary {
    /// Adds the counters of `other` to `self`.
    pub fn absorb(&mut self, other: ExportSummary) {
        self.tables += other.tables;
        self.records += other.records;
        self.buckets += other.buckets;
        self.objects += other.objects;
        self.users += other.users;
        self.files_written += other.files_written;
    }
}

impl fmt::Display for ExportSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tables ({} records), {} buckets ({} objects), {} users, {} files written",
            self.tables, self.records, self.buckets, self.objects, self.users, self.files_written
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorb() {
        let mut total = ExportSummary {
            tables: 1,
            records: 10,
            files_written: 1,
            ..Default::default()
        };
        total.absorb(ExportSummary {
            buckets: 1,
            objects: 4,
            files_written: 4,
            ..Default::default()
        });

        assert_eq!(total.tables, 1);
        assert_eq!(total.objects, 4);
        assert_eq!(total.files_written, 5);
    }

    #[test]
    fn test_display() {
        let summary = ExportSummary {
            tables: 17,
            records: 120,
            buckets: 3,
            objects: 9,
            users: 2,
            files_written: 27,
        };
        assert_eq!(
            summary.to_string(),
            "17 tables (120 records), 3 buckets (9 objects), 2 users, 27 files written"
        );
    }
}
