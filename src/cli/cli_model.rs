use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::log_utils::{LogLevel, DEFAULT_LOGLEVEL};

use super::{
    config::{EscalatingFlag, FloatParam, InputFile, IntParam, OutputFile},
    validate::{FloatBounds, IntBounds},
};

/// What a flag does with its argument
#[derive(Debug, Copy, Clone)]
pub(crate) enum Handler {
    Input(InputFile),
    /// Input alignment file that must also have a readable index
    IndexedInput(InputFile),
    Output(OutputFile),
    Int(IntParam, IntBounds),
    Float(FloatParam, FloatBounds),
    Strandedness,
    Contigs,
    GtfFeatures,
    DisableFilters,
    Escalate(EscalatingFlag),
    LogLevel,
    Help,
}

impl Handler {
    pub(crate) fn takes_value(&self) -> bool {
        !matches!(self, Self::Escalate(_) | Self::Help)
    }
}

#[derive(Debug)]
pub(crate) struct FlagSpec {
    pub(crate) id: &'static str,
    pub(crate) short: char,
    pub(crate) long: &'static str,
    pub(crate) value_name: &'static str,
    pub(crate) help: &'static str,
    pub(crate) handler: Handler,
}

impl FlagSpec {
    /// Flag token used in diagnostics
    pub(crate) fn token(&self) -> String {
        format!("-{}", self.short)
    }

    /// Look up a flag by the way it is written on the command line (`-S` or `--min-support`)
    pub(crate) fn find(arg: &str) -> Option<&'static Self> {
        FLAGS
            .iter()
            .find(|f| arg.strip_prefix("--") == Some(f.long) || arg == f.token())
    }

    fn arg(&self) -> Arg {
        let arg = Arg::new(self.id).short(self.short).long(self.long);
        match self.handler {
            // Counted so that repeating them is not an error
            Handler::Escalate(_) | Handler::Help => arg.action(ArgAction::Count),
            Handler::LogLevel => arg
                .action(ArgAction::Append)
                .value_name(self.value_name)
                .value_parser(value_parser!(LogLevel))
                .ignore_case(true)
                .default_value(DEFAULT_LOGLEVEL),
            _ => arg
                .action(ArgAction::Append)
                .value_name(self.value_name)
                .value_parser(value_parser!(String))
                .allow_hyphen_values(true),
        }
    }
}

const fn flag(
    id: &'static str,
    short: char,
    long: &'static str,
    value_name: &'static str,
    handler: Handler,
    help: &'static str,
) -> FlagSpec {
    FlagSpec {
        id,
        short,
        long,
        value_name,
        help,
        handler,
    }
}

/// All recognised flags, in the order they are listed in the usage text
pub(crate) const FLAGS: &[FlagSpec] = &[
    flag(
        "chimeric_alignments",
        'c',
        "primary-alignment-file",
        "FILE",
        Handler::Input(InputFile::ChimericAlignments),
        "BAM file with chimeric alignments as produced by the STAR aligner. \
         The file does not need to be sorted.",
    ),
    flag(
        "read_through_alignments",
        'r',
        "read-through-alignment-file",
        "FILE",
        Handler::Input(InputFile::ReadThroughAlignments),
        "BAM file with read-through alignments extracted from the normal alignments. \
         STAR does not report read-through fusions as chimeric alignments, so without \
         this file no read-through fusions are detected.",
    ),
    flag(
        "rna_alignments",
        'x',
        "normal-alignment-file",
        "FILE",
        Handler::IndexedInput(InputFile::RnaAlignments),
        "BAM file with normal alignments as produced by STAR. It must be sorted by \
         coordinate and indexed (.bai). It is used to estimate the distribution of \
         mate gaps and to discard fusions without expression around the breakpoints.",
    ),
    flag(
        "genomic_breakpoints",
        'd',
        "genomic-breakpoints-file",
        "FILE",
        Handler::Input(InputFile::GenomicBreakpoints),
        "Tab-separated file with structural variant breakpoints from whole-genome \
         sequencing. Columns: breakpoint1, breakpoint2 (contig:position, 1-based), \
         direction1, direction2 (upstream/downstream). Matching breakpoints raise \
         sensitivity for weakly expressed fusions.",
    ),
    flag(
        "gene_annotation",
        'g',
        "annotation-file",
        "FILE",
        Handler::Input(InputFile::GeneAnnotation),
        "GTF file with the gene annotation. May be gzip-compressed.",
    ),
    flag(
        "gtf_features",
        'G',
        "gtf-feature-names",
        "GTF_FEATURES",
        Handler::GtfFeatures,
        "Comma-/space-separated list of KEY=NAME entries naming the GTF attributes \
         and features to use. Alternatives are separated by '|'.",
    ),
    flag(
        "output",
        'o',
        "primary-output-file",
        "FILE",
        Handler::Output(OutputFile::Fusions),
        "Output file with the fusions that passed all filters, one per line, \
         tab-separated.",
    ),
    flag(
        "discarded_output",
        'O',
        "discarded-output-file",
        "FILE",
        Handler::Output(OutputFile::DiscardedFusions),
        "Output file with the fusions that were discarded by a filter. Same format \
         as the primary output file.",
    ),
    flag(
        "assembly",
        'a',
        "assembly-file",
        "FILE",
        Handler::Input(InputFile::Assembly),
        "FastA file with the genome sequence. May be gzip-compressed.",
    ),
    flag(
        "known_fusions",
        'k',
        "known-fusions-file",
        "FILE",
        Handler::Input(InputFile::KnownFusions),
        "Tab-separated file with pairs of genes known to be fused recurrently. \
         Listed fusions are treated with more sensitivity. May be gzip-compressed.",
    ),
    flag(
        "blacklist",
        'b',
        "blacklist-file",
        "FILE",
        Handler::Input(InputFile::Blacklist),
        "File with blacklisted ranges, two tab-separated columns of the form \
         contig:position or contig:start-end. The second column may instead be one \
         of: any, split_read_donor, split_read_acceptor, split_read_any, \
         discordant_mates, low_support, read_through, filter_spliced. Required \
         unless the 'blacklist' filter is disabled.",
    ),
    flag(
        "strandedness",
        's',
        "strandedness",
        "STRANDEDNESS",
        Handler::Strandedness,
        "Whether the library was prepared with a strand-specific protocol \
         (auto/yes/no/reverse). Stranded data resolves ambiguities when the strand \
         cannot be inferred from splice patterns.",
    ),
    flag(
        "interesting_contigs",
        'i',
        "interesting-contigs",
        "CONTIGS",
        Handler::Contigs,
        "Comma-/space-separated list of contigs of interest. Fusions between genes \
         on other contigs are ignored. Names may be given with or without the \
         \"chr\" prefix.",
    ),
    flag(
        "disabled_filters",
        'f',
        "disabled-filters",
        "FILTERS",
        Handler::DisableFilters,
        "Comma-/space-separated list of filters to disable. All filters are enabled \
         by default. May be given more than once.",
    ),
    flag(
        "evalue_cutoff",
        'E',
        "evalue-cutoff",
        "MAX_E-VALUE",
        Handler::Float(FloatParam::EvalueCutoff, FloatBounds::greater_than(0.0)),
        "Fusions whose expected number of random occurrences (e-value) exceeds this \
         value are discarded by the 'relative_support' filter. Raising it can add \
         many false positives and slow down later steps.",
    ),
    flag(
        "min_support",
        'S',
        "min-support",
        "MIN_SUPPORTING_READS",
        Handler::Int(IntParam::MinSupport, IntBounds::at_least(0)),
        "The 'min_support' filter discards fusions with fewer supporting reads \
         (split reads and discordant mates combined).",
    ),
    flag(
        "max_mismapper_fraction",
        'm',
        "max-mismapper-fraction",
        "MAX_MISMAPPERS",
        Handler::Float(FloatParam::MaxMismapperFraction, FloatBounds::between(0.0, 1.0)),
        "The 'mismappers' filter discards a fusion when more than this fraction of \
         its supporting reads are mismapped.",
    ),
    flag(
        "max_homolog_identity",
        'L',
        "max-homolog-identity",
        "MAX_HOMOLOG_IDENTITY",
        Handler::Float(FloatParam::MaxHomologIdentity, FloatBounds::between(0.0, 1.0)),
        "Genes sharing more than this fraction of sequence identity are treated as \
         homologs and removed by the 'homologs' filter.",
    ),
    flag(
        "homopolymer_length",
        'H',
        "homopolymer-length",
        "HOMOPOLYMER_LENGTH",
        Handler::Int(IntParam::HomopolymerLength, IntBounds::at_least(2)),
        "The 'homopolymer' filter removes breakpoints next to homopolymers of at \
         least this length.",
    ),
    flag(
        "max_genomic_breakpoint_distance",
        'D',
        "max-genomic-breakpoint-distance",
        "MAX_GENOMIC_BREAKPOINT_DISTANCE",
        Handler::Int(IntParam::MaxGenomicBreakpointDistance, IntBounds::at_least(0)),
        "Maximum distance between a genomic breakpoint (see -d) and a transcriptomic \
         breakpoint for both to count as the same event. Inside genes the distance \
         is added to the gene end.",
    ),
    flag(
        "min_read_through_distance",
        'R',
        "min-read-through-distance",
        "READ_THROUGH_DISTANCE",
        Handler::Int(IntParam::MinReadThroughDistance, IntBounds::at_least(0)),
        "The 'read_through' filter removes read-through fusions with breakpoints \
         closer than this distance.",
    ),
    flag(
        "min_anchor_length",
        'A',
        "min-anchor-length",
        "MIN_ANCHOR_LENGTH",
        Handler::Int(IntParam::MinAnchorLength, IntBounds::at_least(0)),
        "Split reads aligning to a stretch shorter than this many bases in one gene, \
         with no discordant mates, are removed by the 'short_anchor' filter.",
    ),
    flag(
        "min_spliced_events",
        'M',
        "min-spliced-events",
        "MANY_SPLICED_EVENTS",
        Handler::Int(IntParam::MinSplicedEvents, IntBounds::at_least(0)),
        "The 'many_spliced' filter recovers fusions between genes with at least this \
         many spliced breakpoints.",
    ),
    flag(
        "max_kmer_content",
        'K',
        "max-kmer-content",
        "MAX_KMER_CONTENT",
        Handler::Float(FloatParam::MaxKmerContent, FloatBounds::between(0.0, 1.0)),
        "The 'low_entropy' filter discards reads where repetitive 3-mers make up \
         more than this fraction of the sequence.",
    ),
    flag(
        "mismatch_pvalue_cutoff",
        'V',
        "mismatch-pvalue-cutoff",
        "MAX_MISMATCH_PVALUE",
        Handler::Float(FloatParam::MismatchPvalueCutoff, FloatBounds::greater_than(0.0)),
        "The 'mismatches' filter discards reads whose number of mismatches is \
         unlikely under a binomial model at this p-value.",
    ),
    flag(
        "fragment_length",
        'F',
        "fragment-length",
        "FRAGMENT_LENGTH",
        Handler::Int(IntParam::FragmentLength, IntBounds::at_least(1)),
        "Mean fragment length for single-end data, used to filter hairpin \
         artifacts. Ignored for paired-end data, where it is estimated.",
    ),
    flag(
        "subsampling_threshold",
        'U',
        "subsampling-threshold",
        "MAX_READS",
        Handler::Int(
            IntParam::SubsamplingThreshold,
            IntBounds::new(1, i16::MAX as i64),
        ),
        "Fusions with more supporting reads than this are subsampled. Read counts \
         above the threshold are approximate.",
    ),
    flag(
        "high_expression_quantile",
        'Q',
        "high-expression-quantile",
        "QUANTILE",
        Handler::Float(
            FloatParam::HighExpressionQuantile,
            FloatBounds::between(0.0, 1.0),
        ),
        "Genes expressed above this quantile may be removed by the 'pcr_fusions' \
         filter.",
    ),
    flag(
        "print_fusion_sequence",
        'T',
        "print-fusion-sequence",
        "",
        Handler::Escalate(EscalatingFlag::FusionSequence),
        "Fill the 'fusion_transcript' column with the fusion sequence assembled \
         from the supporting reads. Give twice to also fill it in the discarded \
         output file.",
    ),
    flag(
        "print_read_identifiers",
        'I',
        "print-read-identifiers",
        "",
        Handler::Escalate(EscalatingFlag::ReadIdentifiers),
        "Fill the 'read_identifiers' column with the comma-separated names of the \
         supporting reads. Give twice to also fill it in the discarded output file.",
    ),
    flag(
        "loglevel",
        'l',
        "loglevel",
        "LOGLEVEL",
        Handler::LogLevel,
        "Set log level (none/error/warn/info/debug/trace).",
    ),
    flag("help", 'h', "help", "", Handler::Help, "Print help and exit."),
];

/// True if the help flag was given anywhere in `m`
pub(crate) fn help_requested(m: &ArgMatches) -> bool {
    FLAGS
        .iter()
        .any(|f| matches!(f.handler, Handler::Help) && m.get_count(f.id) > 0)
}

pub(crate) fn cli_model() -> Command {
    FLAGS.iter().fold(
        command!()
            .disable_help_flag(true)
            .disable_version_flag(true),
        |cmd, spec| cmd.arg(spec.arg()),
    )
}
