use std::path::Path;

use crate::filters::{Filter, FilterSet};

use super::{super::GtfFeatures, Config, Strandedness};

impl Config {
    pub fn chimeric_alignments(&self) -> Option<&Path> {
        self.chimeric_alignments.as_deref()
    }

    pub fn read_through_alignments(&self) -> Option<&Path> {
        self.read_through_alignments.as_deref()
    }

    pub fn rna_alignments(&self) -> Option<&Path> {
        self.rna_alignments.as_deref()
    }

    pub fn genomic_breakpoints(&self) -> Option<&Path> {
        self.genomic_breakpoints.as_deref()
    }

    pub fn gene_annotation(&self) -> Option<&Path> {
        self.gene_annotation.as_deref()
    }

    pub fn assembly(&self) -> Option<&Path> {
        self.assembly.as_deref()
    }

    pub fn blacklist(&self) -> Option<&Path> {
        self.blacklist.as_deref()
    }

    pub fn known_fusions(&self) -> Option<&Path> {
        self.known_fusions.as_deref()
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn discarded_output(&self) -> Option<&Path> {
        self.discarded_output.as_deref()
    }

    /// GTF feature specification as given (commas replaced by spaces)
    pub fn gtf_feature_names(&self) -> &str {
        &self.gtf_feature_names
    }

    pub fn gtf_features(&self) -> &GtfFeatures {
        &self.gtf_features
    }

    pub fn interesting_contigs(&self) -> impl Iterator<Item = &str> {
        self.interesting_contigs.split_whitespace()
    }

    pub fn strandedness(&self) -> Strandedness {
        self.strandedness
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn filter_enabled(&self, f: Filter) -> bool {
        self.filters.is_enabled(f)
    }

    pub fn evalue_cutoff(&self) -> f64 {
        self.evalue_cutoff
    }

    pub fn min_support(&self) -> u32 {
        self.min_support
    }

    pub fn max_mismapper_fraction(&self) -> f64 {
        self.max_mismapper_fraction
    }

    pub fn max_homolog_identity(&self) -> f64 {
        self.max_homolog_identity
    }

    pub fn min_anchor_length(&self) -> u32 {
        self.min_anchor_length
    }

    pub fn homopolymer_length(&self) -> u32 {
        self.homopolymer_length
    }

    pub fn max_genomic_breakpoint_distance(&self) -> u32 {
        self.max_genomic_breakpoint_distance
    }

    pub fn min_read_through_distance(&self) -> u32 {
        self.min_read_through_distance
    }

    pub fn min_spliced_events(&self) -> u32 {
        self.min_spliced_events
    }

    pub fn max_kmer_content(&self) -> f64 {
        self.max_kmer_content
    }

    pub fn mismatch_pvalue_cutoff(&self) -> f64 {
        self.mismatch_pvalue_cutoff
    }

    pub fn fragment_length(&self) -> u32 {
        self.fragment_length
    }

    pub fn subsampling_threshold(&self) -> u32 {
        self.subsampling_threshold
    }

    pub fn high_expression_quantile(&self) -> f64 {
        self.high_expression_quantile
    }

    pub fn print_fusion_sequence(&self) -> bool {
        self.fusion_sequence.for_accepted()
    }

    pub fn print_fusion_sequence_for_discarded(&self) -> bool {
        self.fusion_sequence.for_discarded()
    }

    pub fn print_read_identifiers(&self) -> bool {
        self.read_identifiers.for_accepted()
    }

    pub fn print_read_identifiers_for_discarded(&self) -> bool {
        self.read_identifiers.for_discarded()
    }
}
