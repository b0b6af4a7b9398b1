use clap::Command;
use anyhow::Result;

mod cmp;
mod sort;

pub use sort::{read_versions, write_sorted, SortOptions};
pub use cmp::write_compare;

pub fn get_cli() -> Command {
    build_cli(
        Command::new("vsort")
            .version(env!("CARGO_PKG_VERSION"))
            .about("vsort : sort and compare dotted version strings")
            .subcommand_required(true)
    )
}

pub fn build_cli(cmd: clap::Command) -> clap::Command {
    cmd.subcommand(sort::args())
       .subcommand(cmp::args())
}

pub fn main_cli(matches: &clap::ArgMatches) -> Result<()> {

    match matches.subcommand() {

        Some(("sort", matches)) => {
            return sort::main(matches);
        }

        Some(("cmp", matches)) => {
            return cmp::main(matches);
        }

        _ =>  {
            anyhow::bail!("no subcmd");
        }
    }
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn cli_is_valid() {
        get_cli().debug_assert();
    }

    #[test]
    fn parses_sort_flags() {
        let matches = get_cli().get_matches_from(["vsort", "sort", "--descending", "--dedup", "1.0", "0.9"]);
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, "sort");

        let opts = SortOptions::from_matches(sub);
        assert!(opts.descending);
        assert!(opts.dedup);
        assert!(!opts.skip_invalid);

        let versions = sub.get_many::<String>("versions").unwrap().collect::<Vec<_>>();
        assert_eq!(versions, ["1.0", "0.9"]);
    }

    #[test]
    fn last_order_flag_wins() {
        let matches = get_cli().get_matches_from(["vsort", "sort", "--descending", "--ascending"]);
        let (_, sub) = matches.subcommand().unwrap();
        assert!(!SortOptions::from_matches(sub).descending);
    }

    #[test]
    fn subcommand_required() {
        assert!(get_cli().try_get_matches_from(["vsort"]).is_err());
    }
}
