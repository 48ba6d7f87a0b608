use std::path::PathBuf;

use crate::filters::FilterSet;
use super::{Escalation, GtfFeatures, Strandedness};

mod check;
mod defaults;
mod fields;
mod getters;
mod mk_config;

/// Input files. Every one of these must be readable when given.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputFile {
    ChimericAlignments,
    ReadThroughAlignments,
    RnaAlignments,
    GenomicBreakpoints,
    GeneAnnotation,
    Assembly,
    Blacklist,
    KnownFusions,
}

/// Output files. The directory each would be written to must exist.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputFile {
    Fusions,
    DiscardedFusions,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IntParam {
    MinSupport,
    MinAnchorLength,
    HomopolymerLength,
    MaxGenomicBreakpointDistance,
    MinReadThroughDistance,
    MinSplicedEvents,
    FragmentLength,
    SubsamplingThreshold,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FloatParam {
    EvalueCutoff,
    MaxMismapperFraction,
    MaxHomologIdentity,
    MaxKmerContent,
    MismatchPvalueCutoff,
    HighExpressionQuantile,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EscalatingFlag {
    FusionSequence,
    ReadIdentifiers,
}

/// Config
///
/// Settings for a fusion detection run, generated from the command line arguments.
/// Once returned from [`parse_args`](super::parse_args) it is read only.
///
/// Files are `None` until given on the command line. Numeric parameters always lie
/// within the limits set in the flag table.
#[derive(Debug, Clone)]
pub struct Config {
    // Input files
    chimeric_alignments: Option<PathBuf>,
    read_through_alignments: Option<PathBuf>,
    rna_alignments: Option<PathBuf>,
    genomic_breakpoints: Option<PathBuf>,
    gene_annotation: Option<PathBuf>,
    assembly: Option<PathBuf>,
    blacklist: Option<PathBuf>,
    known_fusions: Option<PathBuf>,

    // Output files
    output: Option<PathBuf>,
    discarded_output: Option<PathBuf>,

    // Annotation and contig selection
    gtf_feature_names: String,
    gtf_features: GtfFeatures,
    interesting_contigs: String,
    strandedness: Strandedness,

    filters: FilterSet,

    // Filter thresholds
    evalue_cutoff: f64,
    min_support: u32,
    max_mismapper_fraction: f64,
    max_homolog_identity: f64,
    min_anchor_length: u32,
    homopolymer_length: u32,
    max_genomic_breakpoint_distance: u32,
    min_read_through_distance: u32,
    min_spliced_events: u32,
    max_kmer_content: f64,
    mismatch_pvalue_cutoff: f64,
    fragment_length: u32,
    subsampling_threshold: u32,
    high_expression_quantile: f64,

    // Extra output columns
    fusion_sequence: Escalation,
    read_identifiers: Escalation,
}
