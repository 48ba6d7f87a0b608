/// State of a flag that widens its effect each time it is repeated.
///
/// The first occurrence switches the output column on for accepted fusions, the second
/// also switches it on for discarded fusions. Further occurrences change nothing.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Escalation {
    #[default]
    Off,
    Accepted,
    AcceptedAndDiscarded,
}

impl Escalation {
    pub fn escalate(self) -> Self {
        match self {
            Self::Off => Self::Accepted,
            Self::Accepted | Self::AcceptedAndDiscarded => Self::AcceptedAndDiscarded,
        }
    }

    pub fn from_count(n: u8) -> Self {
        (0..n).fold(Self::Off, |s, _| s.escalate())
    }

    pub fn for_accepted(&self) -> bool {
        !matches!(self, Self::Off)
    }

    pub fn for_discarded(&self) -> bool {
        matches!(self, Self::AcceptedAndDiscarded)
    }
}
