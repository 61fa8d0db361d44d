use std::fmt;

/// Direction of a punch in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunchKind {
    In,
    Out,
}

impl PunchKind {
    /// Convert the word used in log lines and on the command line → enum
    pub fn from_word(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    /// Convert enum → log word
    pub fn as_str(&self) -> &'static str {
        match self {
            PunchKind::In => "in",
            PunchKind::Out => "out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, PunchKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, PunchKind::Out)
    }
}

impl fmt::Display for PunchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
