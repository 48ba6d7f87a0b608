use crate::filters::FilterSet;

use super::{
    super::{gtf_features::DEFAULT_GTF_FEATURES, Escalation, GtfFeatures, Strandedness},
    Config,
};

pub const DEFAULT_CONTIGS: &str =
    "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 X Y";

/// Baseline settings before any argument is applied.
///
/// This is rebuilt on every call so the usage text always shows the true defaults.
impl Default for Config {
    fn default() -> Self {
        Self {
            chimeric_alignments: None,
            read_through_alignments: None,
            rna_alignments: None,
            genomic_breakpoints: None,
            gene_annotation: None,
            assembly: None,
            blacklist: None,
            known_fusions: None,
            output: None,
            discarded_output: None,
            gtf_feature_names: DEFAULT_GTF_FEATURES.to_string(),
            gtf_features: GtfFeatures::default(),
            interesting_contigs: DEFAULT_CONTIGS.to_string(),
            strandedness: Strandedness::Auto,
            filters: FilterSet::default(),
            evalue_cutoff: 0.3,
            min_support: 2,
            max_mismapper_fraction: 0.8,
            max_homolog_identity: 0.3,
            min_anchor_length: 23,
            homopolymer_length: 6,
            max_genomic_breakpoint_distance: 100000,
            min_read_through_distance: 10000,
            min_spliced_events: 4,
            max_kmer_content: 0.6,
            mismatch_pvalue_cutoff: 0.01,
            fragment_length: 200,
            subsampling_threshold: 300,
            high_expression_quantile: 0.998,
            fusion_sequence: Escalation::Off,
            read_identifiers: Escalation::Off,
        }
    }
}
