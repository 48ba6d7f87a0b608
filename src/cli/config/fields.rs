use std::path::{Path, PathBuf};

use super::{Config, Escalation, EscalatingFlag, FloatParam, InputFile, IntParam, OutputFile};

impl Config {
    pub(super) fn input_mut(&mut self, f: InputFile) -> &mut Option<PathBuf> {
        match f {
            InputFile::ChimericAlignments => &mut self.chimeric_alignments,
            InputFile::ReadThroughAlignments => &mut self.read_through_alignments,
            InputFile::RnaAlignments => &mut self.rna_alignments,
            InputFile::GenomicBreakpoints => &mut self.genomic_breakpoints,
            InputFile::GeneAnnotation => &mut self.gene_annotation,
            InputFile::Assembly => &mut self.assembly,
            InputFile::Blacklist => &mut self.blacklist,
            InputFile::KnownFusions => &mut self.known_fusions,
        }
    }

    pub(super) fn output_mut(&mut self, f: OutputFile) -> &mut Option<PathBuf> {
        match f {
            OutputFile::Fusions => &mut self.output,
            OutputFile::DiscardedFusions => &mut self.discarded_output,
        }
    }

    pub(super) fn int_mut(&mut self, p: IntParam) -> &mut u32 {
        match p {
            IntParam::MinSupport => &mut self.min_support,
            IntParam::MinAnchorLength => &mut self.min_anchor_length,
            IntParam::HomopolymerLength => &mut self.homopolymer_length,
            IntParam::MaxGenomicBreakpointDistance => &mut self.max_genomic_breakpoint_distance,
            IntParam::MinReadThroughDistance => &mut self.min_read_through_distance,
            IntParam::MinSplicedEvents => &mut self.min_spliced_events,
            IntParam::FragmentLength => &mut self.fragment_length,
            IntParam::SubsamplingThreshold => &mut self.subsampling_threshold,
        }
    }

    pub(super) fn float_mut(&mut self, p: FloatParam) -> &mut f64 {
        match p {
            FloatParam::EvalueCutoff => &mut self.evalue_cutoff,
            FloatParam::MaxMismapperFraction => &mut self.max_mismapper_fraction,
            FloatParam::MaxHomologIdentity => &mut self.max_homolog_identity,
            FloatParam::MaxKmerContent => &mut self.max_kmer_content,
            FloatParam::MismatchPvalueCutoff => &mut self.mismatch_pvalue_cutoff,
            FloatParam::HighExpressionQuantile => &mut self.high_expression_quantile,
        }
    }

    pub(super) fn escalation_mut(&mut self, f: EscalatingFlag) -> &mut Escalation {
        match f {
            EscalatingFlag::FusionSequence => &mut self.fusion_sequence,
            EscalatingFlag::ReadIdentifiers => &mut self.read_identifiers,
        }
    }

    pub fn input_file(&self, f: InputFile) -> Option<&Path> {
        let p = match f {
            InputFile::ChimericAlignments => &self.chimeric_alignments,
            InputFile::ReadThroughAlignments => &self.read_through_alignments,
            InputFile::RnaAlignments => &self.rna_alignments,
            InputFile::GenomicBreakpoints => &self.genomic_breakpoints,
            InputFile::GeneAnnotation => &self.gene_annotation,
            InputFile::Assembly => &self.assembly,
            InputFile::Blacklist => &self.blacklist,
            InputFile::KnownFusions => &self.known_fusions,
        };
        p.as_deref()
    }

    pub fn output_file(&self, f: OutputFile) -> Option<&Path> {
        match f {
            OutputFile::Fusions => self.output.as_deref(),
            OutputFile::DiscardedFusions => self.discarded_output.as_deref(),
        }
    }

    pub fn int_param(&self, p: IntParam) -> u32 {
        match p {
            IntParam::MinSupport => self.min_support,
            IntParam::MinAnchorLength => self.min_anchor_length,
            IntParam::HomopolymerLength => self.homopolymer_length,
            IntParam::MaxGenomicBreakpointDistance => self.max_genomic_breakpoint_distance,
            IntParam::MinReadThroughDistance => self.min_read_through_distance,
            IntParam::MinSplicedEvents => self.min_spliced_events,
            IntParam::FragmentLength => self.fragment_length,
            IntParam::SubsamplingThreshold => self.subsampling_threshold,
        }
    }

    pub fn float_param(&self, p: FloatParam) -> f64 {
        match p {
            FloatParam::EvalueCutoff => self.evalue_cutoff,
            FloatParam::MaxMismapperFraction => self.max_mismapper_fraction,
            FloatParam::MaxHomologIdentity => self.max_homolog_identity,
            FloatParam::MaxKmerContent => self.max_kmer_content,
            FloatParam::MismatchPvalueCutoff => self.mismatch_pvalue_cutoff,
            FloatParam::HighExpressionQuantile => self.high_expression_quantile,
        }
    }

    pub fn escalation(&self, f: EscalatingFlag) -> Escalation {
        match f {
            EscalatingFlag::FusionSequence => self.fusion_sequence,
            EscalatingFlag::ReadIdentifiers => self.read_identifiers,
        }
    }
}
