use std::{fmt, str::FromStr};

/// Filters applied by the detection pipeline to discard candidate fusions.
///
/// Only the enablement of a filter is tracked here. The vocabulary is closed:
/// a name that does not map to one of these variants is always an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Filter {
    Duplicates,
    UninterestingContigs,
    ReadThrough,
    InconsistentlyClipped,
    Homopolymer,
    SmallInsertSize,
    LongGap,
    SameGene,
    Hairpin,
    Mismatches,
    LowEntropy,
    NoGenomicSupport,
    ShortAnchor,
    Homologs,
    Blacklist,
    PcrFusions,
    Isoforms,
    Intronic,
    EndToEnd,
    RelativeSupport,
    MinSupport,
    SelectBest,
    Mismappers,
    MergeAdjacent,
    KnownFusions,
    Spliced,
    ManySpliced,
    NoCoverage,
    GenomicSupport,
    IntragenicExonic,
    MarginalReadThrough,
    NonCodingNeighbors,
    InVitro,
    UndeterminedBreakpoints,
}

pub const N_FILTERS: usize = 34;

impl Filter {
    pub const ALL: [Filter; N_FILTERS] = [
        Self::Duplicates,
        Self::UninterestingContigs,
        Self::ReadThrough,
        Self::InconsistentlyClipped,
        Self::Homopolymer,
        Self::SmallInsertSize,
        Self::LongGap,
        Self::SameGene,
        Self::Hairpin,
        Self::Mismatches,
        Self::LowEntropy,
        Self::NoGenomicSupport,
        Self::ShortAnchor,
        Self::Homologs,
        Self::Blacklist,
        Self::PcrFusions,
        Self::Isoforms,
        Self::Intronic,
        Self::EndToEnd,
        Self::RelativeSupport,
        Self::MinSupport,
        Self::SelectBest,
        Self::Mismappers,
        Self::MergeAdjacent,
        Self::KnownFusions,
        Self::Spliced,
        Self::ManySpliced,
        Self::NoCoverage,
        Self::GenomicSupport,
        Self::IntragenicExonic,
        Self::MarginalReadThrough,
        Self::NonCodingNeighbors,
        Self::InVitro,
        Self::UndeterminedBreakpoints,
    ];

    fn idx(&self) -> usize {
        *self as usize
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Duplicates => "duplicates",
            Self::UninterestingContigs => "uninteresting_contigs",
            Self::ReadThrough => "read_through",
            Self::InconsistentlyClipped => "inconsistently_clipped",
            Self::Homopolymer => "homopolymer",
            Self::SmallInsertSize => "small_insert_size",
            Self::LongGap => "long_gap",
            Self::SameGene => "same_gene",
            Self::Hairpin => "hairpin",
            Self::Mismatches => "mismatches",
            Self::LowEntropy => "low_entropy",
            Self::NoGenomicSupport => "no_genomic_support",
            Self::ShortAnchor => "short_anchor",
            Self::Homologs => "homologs",
            Self::Blacklist => "blacklist",
            Self::PcrFusions => "pcr_fusions",
            Self::Isoforms => "isoforms",
            Self::Intronic => "intronic",
            Self::EndToEnd => "end_to_end",
            Self::RelativeSupport => "relative_support",
            Self::MinSupport => "min_support",
            Self::SelectBest => "select_best",
            Self::Mismappers => "mismappers",
            Self::MergeAdjacent => "merge_adjacent",
            Self::KnownFusions => "known_fusions",
            Self::Spliced => "spliced",
            Self::ManySpliced => "many_spliced",
            Self::NoCoverage => "no_coverage",
            Self::GenomicSupport => "genomic_support",
            Self::IntragenicExonic => "intragenic_exonic",
            Self::MarginalReadThrough => "marginal_read_through",
            Self::NonCodingNeighbors => "non_coding_neighbors",
            Self::InVitro => "in_vitro",
            Self::UndeterminedBreakpoints => "undetermined_breakpoints",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter '{0}'")]
pub struct UnknownFilter(pub String);

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|f| f.name() == s)
            .copied()
            .ok_or_else(|| UnknownFilter(s.to_string()))
    }
}

/// Enabled state for every [`Filter`]. All filters start enabled and can only be switched off.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FilterSet([bool; N_FILTERS]);

impl Default for FilterSet {
    fn default() -> Self {
        Self([true; N_FILTERS])
    }
}

impl FilterSet {
    pub fn is_enabled(&self, f: Filter) -> bool {
        self.0[f.idx()]
    }

    pub fn disable(&mut self, f: Filter) {
        self.0[f.idx()] = false
    }

    /// Disable all filters named in a comma or whitespace separated list.
    ///
    /// Every name is checked before anything is changed, so on error the set is left as it was.
    pub fn disable_list(&mut self, list: &str) -> Result<(), UnknownFilter> {
        let filters = list
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .map(Filter::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        for f in filters {
            trace!("Disabling filter {f}");
            self.disable(f)
        }
        Ok(())
    }

    pub fn enabled(&self) -> impl Iterator<Item = Filter> + '_ {
        Filter::ALL.into_iter().filter(|f| self.is_enabled(*f))
    }

    pub fn disabled(&self) -> impl Iterator<Item = Filter> + '_ {
        Filter::ALL.into_iter().filter(|f| !self.is_enabled(*f))
    }
}
