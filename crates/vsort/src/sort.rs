use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use std::io::BufRead;
use std::io::Write;
use version::Version;

pub fn args() -> Command {
    Command::new("sort")
        .about("Sort versions")
        .long_about("Take a list of versions, sort and print them one per line. Versions are read from stdin, one per line, when none are given. \
Blank stdin lines are skipped, while an empty or blank argument is kept as the absent version and sorts first")
        .arg(arg!([versions]... "Versions to sort"))
        .arg(arg!(--dedup "Print only the first of versions that compare equal"))
        .arg(arg!(--"skip-invalid" "Skip invalid versions"))
        .arg(arg!(--ascending "output in ascending order (default)")
            .overrides_with("descending")
        )
        .arg(arg!(--descending "output in descending order")
            .overrides_with("ascending")
        )
}

#[derive(Debug, Default, Clone)]
pub struct SortOptions {
    pub descending: bool,
    pub dedup: bool,
    pub skip_invalid: bool,
}

impl SortOptions {
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        Self {
            descending: matches.get_flag("descending"),
            dedup: matches.get_flag("dedup"),
            skip_invalid: matches.get_flag("skip-invalid"),
        }
    }
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {

    let opts = SortOptions::from_matches(matches);

    let versions = match matches.get_many::<String>("versions") {
        Some(versions) => versions.cloned().collect::<Vec<_>>(),
        None => {
            tracing::trace!("no versions given, reading stdin");
            read_versions(std::io::stdin().lock())?
        }
    };

    let mut stdout = std::io::stdout().lock();
    write_sorted(&versions, &opts, &mut stdout)
}

/// Read one version per line, blank lines are skipped
///
/// Arguments are not filtered this way, a blank argument is the absent version.
pub fn read_versions<R: BufRead>(read: R) -> Result<Vec<String>> {
    let mut versions = Vec::new();
    for line in read.lines() {
        let line = line.context("failed to read versions")?;
        if dotted_version_compare::simplify(Some(line.as_str())).is_none() {
            continue;
        }
        versions.push(line);
    }
    tracing::debug!(count = versions.len(), "read versions");
    Ok(versions)
}

pub fn write_sorted<W: Write>(versions: &[String], opts: &SortOptions, out: &mut W) -> Result<()> {

    let mut err = 0;
    let mut sorted = Vec::with_capacity(versions.len());

    for v in versions {
        match Version::parse(v) {
            Ok(v) => sorted.push(v),
            Err(e) if opts.skip_invalid => {
                tracing::warn!("skipping invalid version: {e}");
            }
            Err(e) => {
                eprintln!("error: {e}");
                err += 1;
            }
        }
    }
    if err > 0 {
        anyhow::bail!("{err} invalid version string(s)");
    }

    sorted.sort();

    if opts.dedup {
        let before = sorted.len();
        sorted.dedup();
        tracing::trace!("dedup removed {} versions", before - sorted.len());
    }

    if opts.descending {
        sorted.reverse();
    }

    for v in sorted {
        writeln!(out, "{}", v).context("failed to write version")?;
    }

    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;

    fn run(versions: &[&str], opts: &SortOptions) -> Result<Vec<String>> {
        let versions = versions.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let mut out = Vec::new();
        write_sorted(&versions, opts, &mut out)?;
        let out = String::from_utf8(out)?;
        Ok(out.lines().map(String::from).collect())
    }

    fn too_many_runs() -> String {
        (0..=dotted_version_compare::MAX_NUMERIC_RUNS).map(|i| i.to_string()).collect::<Vec<_>>().join("-")
    }

    #[test]
    fn ascending_by_default() {
        let out = run(&["1.0.1", "0.0.10", "0.0.2", "1"], &SortOptions::default()).unwrap();
        assert_eq!(out, ["0.0.2", "0.0.10", "1", "1.0.1"]);
    }

    #[test]
    fn descending() {
        let opts = SortOptions { descending: true, ..Default::default() };
        let out = run(&["0.1.0", "0.1.0.0", "0.0.5"], &opts).unwrap();
        assert_eq!(out, ["0.1.0.0", "0.1.0", "0.0.5"]);
    }

    #[test]
    fn dedup_keeps_first() {
        let opts = SortOptions { dedup: true, ..Default::default() };
        let out = run(&["0.0.1-SNAPSHOT", "0.0.2", "0.0.1"], &opts).unwrap();
        assert_eq!(out, ["0.0.1-SNAPSHOT", "0.0.2"]);
    }

    #[test]
    fn invalid_fails() {
        let bad = too_many_runs();
        assert!(run(&["1.0", bad.as_str()], &SortOptions::default()).is_err());
    }

    #[test]
    fn invalid_skipped() {
        let bad = too_many_runs();
        let opts = SortOptions { skip_invalid: true, ..Default::default() };
        let out = run(&["1.0", bad.as_str(), "0.9"], &opts).unwrap();
        assert_eq!(out, ["0.9", "1.0"]);
    }

    #[test]
    fn reads_lines() {
        let input = "1.0\n\n   \n0.9-SNAPSHOT\r\n2\n";
        let versions = read_versions(input.as_bytes()).unwrap();
        assert_eq!(versions, ["1.0", "0.9-SNAPSHOT", "2"]);
    }

    #[test]
    fn blank_stdin_lines_skipped_blank_args_kept() {
        let versions = read_versions("1.0\n \u{1}\n\n0.9\n".as_bytes()).unwrap();
        assert_eq!(versions, ["1.0", "0.9"]);

        let out = run(&["1.0", " ", "0.9"], &SortOptions::default()).unwrap();
        assert_eq!(out, [" ", "0.9", "1.0"]);
    }

    #[test]
    fn help_states_blank_handling() {
        let help = args().get_long_about().map(|s| s.to_string()).unwrap_or_default();
        assert!(help.contains("Blank stdin lines are skipped"));
    }

    #[test]
    fn resorting_is_a_no_op() {
        let once = run(&["2.0", ".0.1", "0.1-2015.1", "0.1.1", "10"], &SortOptions::default()).unwrap();
        let strs = once.iter().map(String::as_str).collect::<Vec<_>>();
        let twice = run(&strs, &SortOptions::default()).unwrap();
        assert_eq!(once, twice);
    }
}
