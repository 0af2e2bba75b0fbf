use std::fmt;

/// The kind of store an export target lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Table,
    Bucket,
}

/// One resource to export, identified by its full name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    kind: TargetKind,
    name: String,
}

impl ExportTarget {
    pub fn table(name: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Table,
            name: name.into(),
        }
    }

    pub fn bucket(name: impl Into<String>) -> Self {
        Self {
            kind: TargetKind::Bucket,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
