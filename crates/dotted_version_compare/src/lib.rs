// dotted version compare
//
// --- General rules ---
//
// 1. An absent version is LESS than any present version (absent: empty, or only spaces and control chars)
// 2. Versions are split on '.' into components, compared pairwise from the left
// 3. Within a component only runs of ascii digits matter, everything else is ignored
// 4. Runs are compared as unbounded integers, leading zeros do not matter
// 5. Fewer runs is LESS than more runs (inside a component)
// 6. Fewer components is LESS than more components (when all shared components are equal)
//
// --- Examples ---
//
//   0.0.2           < 0.0.10             (2 < 10)
//   0.0.1          == 0.0.1-SNAPSHOT     (-SNAPSHOT is noise)
//   0.1-SNAPSHOT.1 == 0.1.1-SNAPSHOT     ((0), (1), (1)) both sides
//   0.0.1-20151014  < 0.0.1-20151015     ((0), (0), (1, 20151014)) < ((0), (0), (1, 20151015))
//   1               < 1.0.1              (less components)
//   .0.1            < 0.0.1              (empty first component is absent)
//   1.2.3-20140101  > 1.2.3-201501       (dates are only numbers)
//
// --- Limits ---
//
// A component may carry at most MAX_NUMERIC_RUNS numeric runs that take part in a compare.
// Walking past that is an InvalidVersionFormat error. compare_unbounded has no limit and
// gives the same answer whenever compare does not fail.

mod error;

pub use error::{Error, Result};

use num_bigint::BigUint;

/// Most numeric runs one dot separated component may hold.
pub const MAX_NUMERIC_RUNS: usize = 100;

/// Trim a string, empty strings or strings of only spaces and control characters become `None`.
///
/// Everything at or below ' ' is trimmed, other unicode whitespace (such as a no-break space) is kept.
pub fn simplify(s: Option<&str>) -> Option<&str> {
    s.map(|s| s.trim_matches(|c: char| c <= ' ')).filter(|s| !s.is_empty())
}

fn eq_to_none(v: std::cmp::Ordering) -> Option<std::cmp::Ordering> {
    if matches!(v, std::cmp::Ordering::Equal) {
        return None;
    }
    Some(v)
}

// absent is lesser
fn absent_cmp<'a>(v1: Option<&'a str>, v2: Option<&'a str>) -> std::result::Result<(&'a str, &'a str), std::cmp::Ordering> {
    match (v1, v2) {
        (None, None) => Err(std::cmp::Ordering::Equal),
        (None, Some(_)) => Err(std::cmp::Ordering::Less),
        (Some(_), None) => Err(std::cmp::Ordering::Greater),
        (Some(v1), Some(v2)) => Ok((v1, v2)),
    }
}

// --- run limits ----------------------------------------------------
//
// the walk asks a limit before every step that still has a run on either side

fn max_runs(step: usize, component: &str) -> Result<()> {
    if step > MAX_NUMERIC_RUNS {
        return Err(Error::InvalidVersionFormat {
            component: component.to_string(),
            max: MAX_NUMERIC_RUNS,
        });
    }
    Ok(())
}

fn no_limit(_step: usize, _component: &str) -> std::result::Result<(), std::convert::Infallible> {
    Ok(())
}

fn infallible<T>(r: std::result::Result<T, std::convert::Infallible>) -> T {
    match r {
        Ok(v) => v,
        Err(never) => match never {},
    }
}

// ---/run limits ----------------------------------------------------

/// Three-way compare of two version strings.
///
/// See the rules at the top of this file. The only failure is a component that walks past
/// [MAX_NUMERIC_RUNS] numeric runs.
pub fn compare(v1: Option<&str>, v2: Option<&str>) -> Result<std::cmp::Ordering> {
    compare_with(v1, v2, max_runs)
}

/// Same order as [compare], without the numeric run limit, so it cannot fail.
///
/// Agrees with [compare] whenever [compare] succeeds. This is a total order and is
/// what the `Ord` impls built on this crate use.
pub fn compare_unbounded(v1: Option<&str>, v2: Option<&str>) -> std::cmp::Ordering {
    infallible(compare_with(v1, v2, no_limit))
}

fn compare_with<E, L>(v1: Option<&str>, v2: Option<&str>, limit: L) -> std::result::Result<std::cmp::Ordering, E>
where
    L: Fn(usize, &str) -> std::result::Result<(), E> + Copy,
{

    let (v1, v2) = match absent_cmp(simplify(v1), simplify(v2)) {
        Ok(both) => both,
        Err(ret) => return Ok(ret),
    };

    // a literal split keeps leading and trailing empty components
    let mut parts1 = v1.split('.');
    let mut parts2 = v2.split('.');

    loop {
        match (parts1.next(), parts2.next()) {
            (Some(part1), Some(part2)) => {
                if let Some(ret) = eq_to_none(components_with(part1, part2, limit)?) {
                    return Ok(ret);
                }
            }
            (Some(_), None) => {
                // right side ran out of components, greater
                return Ok(std::cmp::Ordering::Greater);
            }
            (None, Some(_)) => {
                // left side ran out of components, less
                return Ok(std::cmp::Ordering::Less);
            }
            (None, None) => {
                return Ok(std::cmp::Ordering::Equal);
            }
        }
    }
}

/// Compare a single pair of dot separated components.
pub fn compare_components(c1: &str, c2: &str) -> Result<std::cmp::Ordering> {
    components_with(c1, c2, max_runs)
}

fn components_with<E, L>(c1: &str, c2: &str, limit: L) -> std::result::Result<std::cmp::Ordering, E>
where
    L: Fn(usize, &str) -> std::result::Result<(), E>,
{

    let (c1, c2) = match absent_cmp(simplify(Some(c1)), simplify(Some(c2))) {
        Ok(both) => both,
        Err(ret) => return Ok(ret),
    };

    let mut runs1 = numeric_runs(c1);
    let mut runs2 = numeric_runs(c2);

    let mut step = 1;
    loop {

        let run1 = runs1.next();
        let run2 = runs2.next();

        if run1.is_some() || run2.is_some() {
            limit(step, if run1.is_some() { c1 } else { c2 })?;
        }

        match (run1, run2) {
            (None, None) => {
                return Ok(std::cmp::Ordering::Equal);
            }
            (None, Some(_)) => {
                // left side ran out of numbers, less
                return Ok(std::cmp::Ordering::Less);
            }
            (Some(_), None) => {
                // right side ran out of numbers, greater
                return Ok(std::cmp::Ordering::Greater);
            }
            (Some(run1), Some(run2)) => {
                if let Some(ret) = eq_to_none(run_cmp(run1, run2)) {
                    return Ok(ret);
                }
            }
        }

        step += 1;
    }
}

// both sides are non-empty ascii digits
fn run_cmp(run1: &str, run2: &str) -> std::cmp::Ordering {

    if let (Ok(n1), Ok(n2)) = (run1.parse::<u64>(), run2.parse::<u64>()) {
        return n1.cmp(&n2);
    }

    let n1 = BigUint::parse_bytes(run1.as_bytes(), 10).unwrap_or_default();
    let n2 = BigUint::parse_bytes(run2.as_bytes(), 10).unwrap_or_default();
    n1.cmp(&n2)
}

/// Check that no component of `v` holds more than [MAX_NUMERIC_RUNS] numeric runs.
///
/// Two versions that both pass can always be compared without error.
pub fn check_version(v: &str) -> Result<()> {
    let Some(v) = simplify(Some(v)) else {
        return Ok(());
    };
    for part in v.split('.') {
        if numeric_runs(part).nth(MAX_NUMERIC_RUNS).is_some() {
            let component = simplify(Some(part)).unwrap_or_default();
            return Err(Error::InvalidVersionFormat {
                component: component.to_string(),
                max: MAX_NUMERIC_RUNS,
            });
        }
    }
    Ok(())
}

/// Sort versions in ascending order.
///
/// Every version is checked first, nothing is moved if any of them fails.
/// The sort is stable, versions comparing equal keep their input order.
pub fn sort_versions<T: AsRef<str>>(versions: &mut [T]) -> Result<()> {
    for v in versions.iter() {
        check_version(v.as_ref())?;
    }
    // all checked, the unbounded order is the same as compare here
    versions.sort_by(|a, b| compare_unbounded(Some(a.as_ref()), Some(b.as_ref())));
    Ok(())
}

// --- NumericRuns ---------------------------------------------------

/// Iterator over the maximal runs of ascii digits in a string, left to right.
///
/// "20140101-2" -> "20140101", "2"
#[derive(Debug, Clone)]
pub struct NumericRuns<'a> {
    s: &'a str,
    pos: usize,
}

pub fn numeric_runs(s: &str) -> NumericRuns<'_> {
    NumericRuns { s, pos: 0 }
}

impl<'a> Iterator for NumericRuns<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {

        let bytes = self.s.as_bytes();
        let remaining = &bytes[self.pos..];

        let Some(skip) = remaining.iter().position(u8::is_ascii_digit) else {
            self.pos = bytes.len();
            return None;
        };

        let start = self.pos + skip;
        let len = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_digit())
            .unwrap_or(bytes.len() - start);

        // ascii digits are always on char boundaries
        self.pos = start + len;
        Some(&self.s[start..self.pos])
    }
}

impl std::iter::FusedIterator for NumericRuns<'_> {}

// ---/NumericRuns ---------------------------------------------------

// --- VersionComparator ---------------------------------------------

/// Stateless comparator handle, for callers that want an object to pass around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VersionComparator;

impl VersionComparator {
    pub fn new() -> Self {
        Self
    }

    pub fn compare(&self, v1: Option<&str>, v2: Option<&str>) -> Result<std::cmp::Ordering> {
        compare(v1, v2)
    }

    /// Same as [VersionComparator::compare] but as -1, 0 or 1
    pub fn compare_i32(&self, v1: Option<&str>, v2: Option<&str>) -> Result<i32> {
        compare(v1, v2).map(|ord| ord as i32)
    }
}

// ---/VersionComparator ---------------------------------------------
