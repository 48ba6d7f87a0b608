//! Filesystem preconditions for input and output file arguments

use std::{
    ffi::{CString, OsStr, OsString},
    os::unix::ffi::OsStrExt,
    path::{Path, PathBuf},
};

const BAM_SUFFIX: &str = ".bam";
const INDEX_SUFFIX: &str = ".bai";

/// True if `path` exists and can be read by the current process
pub fn is_readable<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return false;
    }
    match CString::new(path.as_os_str().as_bytes()) {
        // SAFETY: `c` is a valid nul terminated string that outlives the call
        Ok(c) => unsafe { libc::access(c.as_ptr(), libc::R_OK) == 0 },
        Err(_) => false,
    }
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = OsString::from(path.as_os_str());
    s.push(suffix);
    PathBuf::from(s)
}

/// Candidate locations of the index for a coordinate sorted alignment file.
///
/// `x.bam` can be indexed either as `x.bam.bai` or `x.bai`.
pub fn index_candidates<P: AsRef<Path>>(path: P) -> Vec<PathBuf> {
    let path = path.as_ref();
    let mut v = vec![with_suffix(path, INDEX_SUFFIX)];
    let bytes = path.as_os_str().as_bytes();
    if let Some(stem) = bytes.strip_suffix(BAM_SUFFIX.as_bytes()) {
        v.push(with_suffix(Path::new(OsStr::from_bytes(stem)), INDEX_SUFFIX))
    }
    v
}

/// Returns the first readable index for `path`, if any
pub fn find_index<P: AsRef<Path>>(path: P) -> Option<PathBuf> {
    index_candidates(path).into_iter().find(|p| is_readable(p))
}

/// True if the directory that would hold `path` exists.
///
/// A bare file name refers to the current directory.
pub fn parent_directory_exists<P: AsRef<Path>>(path: P) -> bool {
    match path.as_ref().parent() {
        Some(d) if !d.as_os_str().is_empty() => d.is_dir(),
        Some(_) => Path::new(".").is_dir(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn readable_files() {
        let dir = tempfile::tempdir().unwrap();
        let f = dir.path().join("a.bam");
        assert!(!is_readable(&f));
        File::create(&f).unwrap();
        assert!(is_readable(&f));
        assert!(!is_readable(""));
    }

    #[test]
    fn index_locations() {
        let v = index_candidates("dir/x.bam");
        assert_eq!(
            v,
            vec![PathBuf::from("dir/x.bam.bai"), PathBuf::from("dir/x.bai")]
        );
        assert_eq!(index_candidates("x.cram"), vec![PathBuf::from("x.cram.bai")]);
    }

    #[test]
    fn index_found_either_way() {
        let dir = tempfile::tempdir().unwrap();
        let bam1 = dir.path().join("one.bam");
        let bam2 = dir.path().join("two.bam");
        File::create(dir.path().join("one.bam.bai")).unwrap();
        File::create(dir.path().join("two.bai")).unwrap();
        assert_eq!(find_index(&bam1), Some(dir.path().join("one.bam.bai")));
        assert_eq!(find_index(&bam2), Some(dir.path().join("two.bai")));
        assert_eq!(find_index(dir.path().join("three.bam")), None);
    }

    #[test]
    fn output_parent() {
        let dir = tempfile::tempdir().unwrap();
        assert!(parent_directory_exists(dir.path().join("out.tsv")));
        assert!(!parent_directory_exists(dir.path().join("missing/out.tsv")));
        assert!(parent_directory_exists("out.tsv"));
        assert!(parent_directory_exists("/out.tsv"));
    }
}
