use std::{fs::File, path::Path};

use arriba_opts::{parse_args, CliError, Config, Filter, cli::Strandedness};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        for f in ["a.bam", "b.bam", "b.bam.bai", "g.gtf", "ref.fa", "bl.tsv", "rt.bam"] {
            File::create(dir.path().join(f)).expect("create fixture file");
        }
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).display().to_string()
    }

    /// Mandatory arguments, each as (flag, value)
    fn mandatory(&self) -> Vec<(&'static str, String)> {
        vec![
            ("-c", self.path("a.bam")),
            ("-x", self.path("b.bam")),
            ("-g", self.path("g.gtf")),
            ("-o", self.path("out.tsv")),
            ("-a", self.path("ref.fa")),
        ]
    }

    fn args(&self, extra: &[&str]) -> Vec<String> {
        let mut v = vec!["arriba".to_string()];
        for (f, p) in self.mandatory() {
            v.push(f.to_string());
            v.push(p);
        }
        v.extend(extra.iter().map(|s| s.to_string()));
        v
    }

    fn parse(&self, extra: &[&str]) -> Result<Config, CliError> {
        parse_args(self.args(extra))
    }
}

#[test]
fn defaults_with_mandatory_only() {
    let fx = Fixture::new();
    let bl = fx.path("bl.tsv");
    let cfg = fx.parse(&["-b", &bl]).unwrap();
    assert_eq!(cfg.min_support(), 2);
    assert_eq!(cfg.evalue_cutoff(), 0.3);
    assert_eq!(cfg.strandedness(), Strandedness::Auto);
    assert!(Filter::ALL.iter().all(|f| cfg.filter_enabled(*f)));
    assert_eq!(cfg.chimeric_alignments(), Some(Path::new(&fx.path("a.bam"))));
    assert_eq!(cfg.output(), Some(Path::new(&fx.path("out.tsv"))));
    assert!(cfg.read_through_alignments().is_none());
}

#[test]
fn blacklist_filter_needs_file() {
    let fx = Fixture::new();
    let e = fx.parse(&[]).unwrap_err();
    assert!(matches!(e, CliError::CrossFieldConstraintViolation { .. }));

    let cfg = fx.parse(&["-f", "blacklist"]).unwrap();
    assert!(!cfg.filter_enabled(Filter::Blacklist));
}

#[test]
fn disabled_filters() {
    let fx = Fixture::new();
    let cfg = fx.parse(&["-f", "blacklist,homopolymer"]).unwrap();
    let off: Vec<_> = cfg.filters().disabled().collect();
    assert_eq!(off, [Filter::Homopolymer, Filter::Blacklist]);
    assert_eq!(cfg.filters().enabled().count(), Filter::ALL.len() - 2);

    let cfg = fx
        .parse(&["-f", "blacklist", "--disabled-filters", "spliced"])
        .unwrap();
    assert_eq!(cfg.filters().disabled().count(), 2);
}

#[test]
fn unknown_filter_anywhere() {
    let fx = Fixture::new();
    for list in ["bogus", "blacklist,bogus", "bogus blacklist", "homopolymer,,bogus"] {
        let e = fx.parse(&["-f", list]).unwrap_err();
        assert!(
            matches!(&e, CliError::UnknownFilterName(n) if n == "bogus"),
            "{list}: {e}"
        );
    }
}

#[test]
fn missing_each_mandatory() {
    let fx = Fixture::new();
    let mandatory = fx.mandatory();
    for skip in 0..mandatory.len() {
        let mut args = vec!["arriba".to_string(), "-f".to_string(), "blacklist".to_string()];
        for (i, (f, p)) in mandatory.iter().enumerate() {
            if i != skip {
                args.push(f.to_string());
                args.push(p.clone());
            }
        }
        let e = parse_args(args).unwrap_err();
        assert_eq!(
            e.to_string(),
            format!("Missing mandatory option: {}", mandatory[skip].0)
        );
    }
}

#[test]
fn escalating_flags() {
    let fx = Fixture::new();
    let cfg = fx.parse(&["-f", "blacklist", "-T"]).unwrap();
    assert!(cfg.print_fusion_sequence() && !cfg.print_fusion_sequence_for_discarded());
    assert!(!cfg.print_read_identifiers());

    let cfg = fx.parse(&["-f", "blacklist", "-T", "-I", "-T"]).unwrap();
    assert!(cfg.print_fusion_sequence() && cfg.print_fusion_sequence_for_discarded());
    assert!(cfg.print_read_identifiers() && !cfg.print_read_identifiers_for_discarded());

    let two = fx.parse(&["-f", "blacklist", "-II"]).unwrap();
    let three = fx.parse(&["-f", "blacklist", "-III"]).unwrap();
    assert_eq!(
        two.escalation(arriba_opts::cli::EscalatingFlag::ReadIdentifiers),
        three.escalation(arriba_opts::cli::EscalatingFlag::ReadIdentifiers)
    );
    assert!(three.print_read_identifiers_for_discarded());
}

#[test]
fn numeric_options() {
    let fx = Fixture::new();
    let cfg = fx
        .parse(&[
            "-f", "blacklist", "-S", "5", "-E", "0.5", "-m", "1", "-H", "2", "-U", "32767",
            "-Q", "0.5", "--fragment-length", "350", "-s", "REVERSE",
        ])
        .unwrap();
    assert_eq!(cfg.min_support(), 5);
    assert_eq!(cfg.evalue_cutoff(), 0.5);
    assert_eq!(cfg.max_mismapper_fraction(), 1.0);
    assert_eq!(cfg.homopolymer_length(), 2);
    assert_eq!(cfg.subsampling_threshold(), 32767);
    assert_eq!(cfg.high_expression_quantile(), 0.5);
    assert_eq!(cfg.fragment_length(), 350);
    assert_eq!(cfg.strandedness(), Strandedness::Reverse);
}

#[test]
fn range_errors_name_flag() {
    let fx = Fixture::new();
    let cases = [
        (["-H", "1"], "-H"),
        (["-E", "0"], "-E"),
        (["-E", "-1"], "-E"),
        (["-U", "40000"], "-U"),
        (["-K", "1.2"], "-K"),
        (["-F", "0"], "-F"),
    ];
    for (args, flag) in cases {
        let e = fx.parse(&args).unwrap_err();
        match e {
            CliError::OutOfRangeValue { flag: f, .. } => assert_eq!(f, flag),
            e => panic!("unexpected error for {args:?}: {e}"),
        }
    }
    let e = fx.parse(&["-S", "two"]).unwrap_err();
    assert!(matches!(e, CliError::MalformedValue { flag, .. } if flag == "-S"));
}

#[test]
fn first_error_wins() {
    let fx = Fixture::new();
    let e = fx.parse(&["-S", "x", "-H", "0"]).unwrap_err();
    assert!(matches!(e, CliError::MalformedValue { .. }));
    let e = fx.parse(&["-H", "0", "-S", "x"]).unwrap_err();
    assert!(matches!(e, CliError::OutOfRangeValue { .. }));
}

#[test]
fn every_occurrence_validated() {
    let fx = Fixture::new();
    let e = fx.parse(&["-S", "x", "-S", "3"]).unwrap_err();
    assert!(matches!(e, CliError::MalformedValue { .. }));
    let cfg = fx.parse(&["-f", "blacklist", "-S", "4", "-S", "3"]).unwrap();
    assert_eq!(cfg.min_support(), 3);
}

#[test]
fn unknown_and_incomplete_flags() {
    let fx = Fixture::new();
    let e = fx.parse(&["-z"]).unwrap_err();
    assert!(matches!(&e, CliError::UnknownFlag(f) if f == "-z"), "{e}");

    let e = fx.parse(&["-S"]).unwrap_err();
    assert!(matches!(&e, CliError::MissingFlagArgument(f) if f == "-S"), "{e}");
    assert_eq!(e.to_string(), "Option -S requires an argument.");

    let e = fx.parse(&["--min-support"]).unwrap_err();
    assert!(matches!(&e, CliError::MissingFlagArgument(f) if f == "-S"), "{e}");

    let e = fx.parse(&["-l", "loud"]).unwrap_err();
    assert!(matches!(&e, CliError::InvalidEnumValue { flag, .. } if flag == "-l"), "{e}");
}

#[test]
fn errors_reported_in_command_line_order() {
    let fx = Fixture::new();
    let missing = fx.path("missing.bam");

    let e = parse_args(["arriba", "-c", &missing, "-z"]).unwrap_err();
    assert!(matches!(&e, CliError::FileNotReadable(p) if p == Path::new(&missing)), "{e}");

    let e = fx.parse(&["-S", "x", "-z"]).unwrap_err();
    assert!(matches!(e, CliError::MalformedValue { .. }), "{e}");

    let e = fx.parse(&["-H", "0", "-S"]).unwrap_err();
    assert!(matches!(e, CliError::OutOfRangeValue { .. }), "{e}");

    let e = fx.parse(&["-z", "-S", "x"]).unwrap_err();
    assert!(matches!(&e, CliError::UnknownFlag(f) if f == "-z"), "{e}");

    // A flag followed by its value is complete, even one that looks like a flag
    let cfg = fx.parse(&["-f", "blacklist", "-i", "-h", "-S", "5"]).unwrap();
    assert_eq!(cfg.interesting_contigs().collect::<Vec<_>>(), ["-h"]);
    assert_eq!(cfg.min_support(), 5);
}

#[test]
fn bad_strandedness() {
    let fx = Fixture::new();
    let e = fx.parse(&["-s", "forward"]).unwrap_err();
    assert!(matches!(e, CliError::InvalidEnumValue { .. }));
}

#[test]
fn help_and_no_args() {
    let e = parse_args(["arriba"]).unwrap_err();
    assert!(matches!(e, CliError::NoArguments));
    assert_eq!(e.usage_message().as_deref(), Some("No arguments given."));

    let e = parse_args(["arriba", "-h"]).unwrap_err();
    assert!(matches!(e, CliError::HelpRequested));
    assert!(e.shows_usage() && e.usage_message().is_none());

    let fx = Fixture::new();
    let e = fx.parse(&["-S", "x", "-h"]).unwrap_err();
    assert!(matches!(e, CliError::MalformedValue { .. }));
}

#[test]
fn help_stops_the_scan() {
    let e = parse_args(["arriba", "-h", "-z"]).unwrap_err();
    assert!(matches!(e, CliError::HelpRequested), "{e}");

    let fx = Fixture::new();
    let e = fx.parse(&["-h", "-S", "x", "-h"]).unwrap_err();
    assert!(matches!(e, CliError::HelpRequested), "{e}");

    let e = fx.parse(&["-h", "-S"]).unwrap_err();
    assert!(matches!(e, CliError::HelpRequested), "{e}");

    // Help is not checked for mandatory options
    let e = parse_args(["arriba", "-S", "3", "-h"]).unwrap_err();
    assert!(matches!(e, CliError::HelpRequested), "{e}");
}

#[test]
fn missing_input_file() {
    let fx = Fixture::new();
    let missing = fx.path("missing.tsv");
    let e = fx.parse(&["-k", &missing]).unwrap_err();
    assert_eq!(e.to_string(), format!("File '{missing}' not found."));
}

#[test]
fn read_through_file_accepted() {
    let fx = Fixture::new();
    let rt = fx.path("rt.bam");
    let cfg = fx.parse(&["-f", "blacklist", "-r", &rt]).unwrap();
    assert_eq!(cfg.read_through_alignments(), Some(Path::new(&rt)));
}

#[test]
fn contigs_and_features() {
    let fx = Fixture::new();
    let cfg = fx
        .parse(&["-f", "blacklist", "-i", "1,2,X", "-G", "gene_name=Name,gene_id=ID"])
        .unwrap();
    assert_eq!(cfg.interesting_contigs().collect::<Vec<_>>(), ["1", "2", "X"]);
    assert_eq!(cfg.gtf_feature_names(), "gene_name=Name gene_id=ID");

    let e = fx.parse(&["-G", "nonsense"]).unwrap_err();
    assert!(matches!(e, CliError::MalformedGtfFeatures(_)));
}
