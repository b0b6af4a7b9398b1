use clap::Command;
use clap::arg;
use anyhow::Result;
use anyhow::Context;
use dotted_version_compare::VersionComparator;
use std::io::Write;

pub fn args() -> Command {
    Command::new("cmp")
        .about("Compare two versions")
        .long_about("Print -1, 0 or 1 when the first version is less than, equal to, or greater than the second. An empty version is less than any other")
        .arg(arg!(<left> "first version"))
        .arg(arg!(<right> "second version"))
}

pub fn main(matches: &clap::ArgMatches) -> Result<()> {
    let left = matches.get_one::<String>("left").context("version expected")?;
    let right = matches.get_one::<String>("right").context("version expected")?;

    let mut stdout = std::io::stdout().lock();
    write_compare(left, right, &mut stdout)
}

pub fn write_compare<W: Write>(left: &str, right: &str, out: &mut W) -> Result<()> {
    tracing::trace!(left, right, "compare");
    let result = VersionComparator::new()
        .compare_i32(Some(left), Some(right))
        .with_context(|| format!("cannot compare {left:?} and {right:?}"))?;
    writeln!(out, "{result}")?;
    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;

    fn run(left: &str, right: &str) -> Result<String> {
        let mut out = Vec::new();
        write_compare(left, right, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn prints_three_way_result() {
        assert_eq!(run("0.0.2", "0.0.10").unwrap(), "-1\n");
        assert_eq!(run("0.0.1", "0.0.1-SNAPSHOT").unwrap(), "0\n");
        assert_eq!(run("0.0.2-20151014", "0.0.1-20151015").unwrap(), "1\n");
    }

    #[test]
    fn empty_is_absent() {
        assert_eq!(run("", "").unwrap(), "0\n");
        assert_eq!(run(" ", "x").unwrap(), "-1\n");
        assert_eq!(run("x", "").unwrap(), "1\n");
    }

    #[test]
    fn too_many_runs_is_an_error() {
        let bad = (0..=dotted_version_compare::MAX_NUMERIC_RUNS).map(|i| i.to_string()).collect::<Vec<_>>().join("-");
        let err = run(&bad, &bad).unwrap_err();
        assert!(format!("{err:#}").contains("invalid version format"));
    }
}
