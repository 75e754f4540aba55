use crate::utils::file::{file_name_lossy, stem_lossy};
use std::cmp::Ordering;
use std::path::PathBuf;

/// Orders media files for numbering.
///
/// Names containing digits come first, ascending by the value of their first
/// digit run; equal values fall back to the whole file name. Names without
/// digits follow in plain lexicographic order. The extension is not searched
/// for digits, so `clip.mp4` counts as having none.
pub fn order_media(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let (mut numbered, mut plain): (Vec<PathBuf>, Vec<PathBuf>) = paths
        .into_iter()
        .partition(|path| first_digit_run(&stem_lossy(path)).is_some());

    numbered.sort_by(|a, b| {
        let a_name = file_name_lossy(a);
        let b_name = file_name_lossy(b);
        let (a_stem, b_stem) = (stem_lossy(a), stem_lossy(b));
        match (first_digit_run(&a_stem), first_digit_run(&b_stem)) {
            (Some(a_digits), Some(b_digits)) => {
                compare_digit_runs(a_digits, b_digits).then_with(|| a_name.cmp(&b_name))
            }
            _ => a_name.cmp(&b_name),
        }
    });
    plain.sort_by(|a, b| file_name_lossy(a).cmp(&file_name_lossy(b)));

    numbered.extend(plain);
    numbered
}

/// First contiguous run of ASCII digits in `name`.
pub fn first_digit_run(name: &str) -> Option<&str> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let rest = &name[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(&rest[..len])
}

/// Compares two digit runs by numeric value without parsing, so arbitrarily
/// long runs cannot overflow.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
