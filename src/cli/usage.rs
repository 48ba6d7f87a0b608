//! Help text

use crate::{filters::Filter, log_utils::DEFAULT_LOGLEVEL};

use super::{
    cli_model::{FlagSpec, Handler, FLAGS},
    Config,
};

pub const LINE_WIDTH: usize = 80;
const INDENT: &str = "        ";
pub const HELP_CONTACT: &str = "https://github.com/suhrig/arriba/";

/// Word wrap `text` below the option line `option`.
///
/// Lines are broken at spaces so that they fit into `width` columns. Embedded
/// newlines start a new line. Words longer than a line are not split.
pub fn wrap_help(option: &str, text: &str, width: usize) -> String {
    let mut out = format!(" {option}\n");
    for paragraph in text.split('\n') {
        let mut line = String::from(INDENT);
        for word in paragraph.split_whitespace() {
            if line.len() > INDENT.len() {
                if line.len() + 1 + word.len() > width {
                    out.push_str(&line);
                    out.push('\n');
                    line = String::from(INDENT);
                } else {
                    line.push(' ');
                }
            }
            line.push_str(word);
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn on_off(b: bool) -> &'static str {
    if b {
        "on"
    } else {
        "off"
    }
}

/// Default value shown after the description of a flag
fn default_text(spec: &FlagSpec, d: &Config) -> Option<String> {
    let s = match spec.handler {
        Handler::Int(p, _) => format!(" Default: {}", d.int_param(p)),
        Handler::Float(p, _) => format!(" Default: {}", d.float_param(p)),
        Handler::Strandedness => format!(" Default: {}", d.strandedness()),
        Handler::Contigs => format!(
            "\nDefault: {}",
            d.interesting_contigs().collect::<Vec<_>>().join(" ")
        ),
        Handler::GtfFeatures => format!("\nDefault: {}", d.gtf_feature_names()),
        Handler::DisableFilters => format!(
            " Valid values: {}",
            Filter::ALL.map(|f| f.name()).join(", ")
        ),
        Handler::Escalate(f) => format!(" Default: {}", on_off(d.escalation(f).for_accepted())),
        Handler::LogLevel => format!(" Default: {DEFAULT_LOGLEVEL}"),
        _ => return None,
    };
    Some(s)
}

fn option_label(spec: &FlagSpec) -> String {
    if spec.handler.takes_value() {
        format!("-{}, --{} {}", spec.short, spec.long, spec.value_name)
    } else {
        format!("-{}, --{}", spec.short, spec.long)
    }
}

/// Full usage text, preceded by `error_message` when given.
///
/// Defaults are taken from a fresh [`Config::default`], never from a configuration
/// that is being built.
pub fn usage_text(error_message: Option<&str>) -> String {
    let defaults = Config::default();
    let mut s = String::new();
    if let Some(e) = error_message {
        s.push_str(&format!("ERROR: {e}\n"));
    }
    s.push_str(&format!(
        "\nArriba gene fusion detector\n\
         ---------------------------\n\
         Version: {}\n\n\
         Arriba is a fast tool to search for aberrant transcripts such as gene fusions.\n\
         It is based on the chimeric BAM file generated by the STAR RNA-Seq aligner.\n\n\
         Usage: arriba -c chimeric.bam [-r read_through.bam] -x rna.bam \\\n\
         \x20             -g annotation.gtf -a assembly.fa [-b blacklists.tsv] [-k known_fusions.tsv] \\\n\
         \x20             -o fusions.tsv [-O discarded_fusions.tsv] \\\n\
         \x20             [OPTIONS]\n\n",
        env!("CARGO_PKG_VERSION")
    ));
    for spec in FLAGS {
        let mut text = spec.help.to_string();
        if let Some(d) = default_text(spec, &defaults) {
            text.push_str(&d);
        }
        s.push_str(&wrap_help(&option_label(spec), &text, LINE_WIDTH));
    }
    s.push_str(&format!("Questions or problems may be sent to: {HELP_CONTACT}\n"));
    s
}

/// Write the usage text to stderr and exit with status 1
pub fn print_usage(error_message: Option<&str>) -> ! {
    eprint!("{}", usage_text(error_message));
    std::process::exit(1)
}
