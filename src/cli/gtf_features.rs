use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

pub const DEFAULT_GTF_FEATURES: &str = "gene_name=gene_name|gene_id gene_id=gene_id transcript_id=transcript_id feature_exon=exon feature_UTR=UTR feature_gene=gene";

lazy_static! {
    static ref RE_FEATURE: Regex = Regex::new(r"^([A-Za-z_]+)=([^=|]+(?:\|[^=|]+)*)$").unwrap();
}

/// Names of the GTF attributes and feature types used when reading the gene annotation.
///
/// Each entry can have several alternatives, tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GtfFeatures {
    gene_name: Vec<Box<str>>,
    gene_id: Vec<Box<str>>,
    transcript_id: Vec<Box<str>>,
    feature_exon: Vec<Box<str>>,
    feature_utr: Vec<Box<str>>,
    feature_gene: Vec<Box<str>>,
}

fn one(s: &str) -> Vec<Box<str>> {
    vec![Box::from(s)]
}

impl Default for GtfFeatures {
    fn default() -> Self {
        Self {
            gene_name: vec![Box::from("gene_name"), Box::from("gene_id")],
            gene_id: one("gene_id"),
            transcript_id: one("transcript_id"),
            feature_exon: one("exon"),
            feature_utr: one("UTR"),
            feature_gene: one("gene"),
        }
    }
}

impl GtfFeatures {
    pub fn gene_name(&self) -> &[Box<str>] {
        &self.gene_name
    }

    pub fn gene_id(&self) -> &[Box<str>] {
        &self.gene_id
    }

    pub fn transcript_id(&self) -> &[Box<str>] {
        &self.transcript_id
    }

    pub fn feature_exon(&self) -> &[Box<str>] {
        &self.feature_exon
    }

    pub fn feature_utr(&self) -> &[Box<str>] {
        &self.feature_utr
    }

    pub fn feature_gene(&self) -> &[Box<str>] {
        &self.feature_gene
    }

    fn slot(&mut self, key: &str) -> Option<&mut Vec<Box<str>>> {
        match key {
            "gene_name" => Some(&mut self.gene_name),
            "gene_id" => Some(&mut self.gene_id),
            "transcript_id" => Some(&mut self.transcript_id),
            "feature_exon" => Some(&mut self.feature_exon),
            "feature_UTR" => Some(&mut self.feature_utr),
            "feature_gene" => Some(&mut self.feature_gene),
            _ => None,
        }
    }
}

/// Parse a comma or space separated list of `KEY=VALUE[|VALUE...]` entries.
///
/// Keys that are not mentioned keep their default. The error holds the offending entry.
impl FromStr for GtfFeatures {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut feat = Self::default();
        for entry in s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|e| !e.is_empty())
        {
            let cap = RE_FEATURE.captures(entry).ok_or_else(|| entry.to_string())?;
            let slot = feat.slot(&cap[1]).ok_or_else(|| entry.to_string())?;
            *slot = cap[2].split('|').map(Box::from).collect();
        }
        Ok(feat)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[Box<str>]) -> Vec<&str> {
        v.iter().map(|s| s.as_ref()).collect()
    }

    #[test]
    fn default_string_matches_default() {
        let f: GtfFeatures = DEFAULT_GTF_FEATURES.parse().unwrap();
        assert_eq!(f, GtfFeatures::default());
    }

    #[test]
    fn partial_override() {
        let f: GtfFeatures = "gene_name=Name,feature_exon=exon|CDS".parse().unwrap();
        assert_eq!(names(f.gene_name()), ["Name"]);
        assert_eq!(names(f.feature_exon()), ["exon", "CDS"]);
        assert_eq!(f.gene_id(), GtfFeatures::default().gene_id());
    }

    #[test]
    fn malformed() {
        assert_eq!(
            "gene_name".parse::<GtfFeatures>(),
            Err("gene_name".to_string())
        );
        assert_eq!(
            "gene_nom=x".parse::<GtfFeatures>(),
            Err("gene_nom=x".to_string())
        );
        assert!("gene_id=a||b".parse::<GtfFeatures>().is_err());
        assert!("gene_id=".parse::<GtfFeatures>().is_err());
        assert!("gene_id=a=b".parse::<GtfFeatures>().is_err());
    }

    #[test]
    fn repeated_parses() {
        for (s, id) in [("gene_id=a", "a"), ("gene_id=b|c", "b"), ("gene_id=d", "d")] {
            let f: GtfFeatures = s.parse().unwrap();
            assert_eq!(names(f.gene_id())[0], id);
            assert!("gene_id=".parse::<GtfFeatures>().is_err());
        }
    }
}
