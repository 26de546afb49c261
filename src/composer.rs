use rand::Rng;
use rand::seq::SliceRandom;

use crate::vocab::{CLOSING_REMARKS, Department, LOCATIONS, TIME_PHRASES};

/// Pick one entry from a static, non-empty pool.
fn pick<R: Rng + ?Sized>(pool: &'static [&'static str], rng: &mut R) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Compose a complaint for a uniformly drawn department.
pub fn compose<R: Rng + ?Sized>(rng: &mut R) -> (Department, String) {
    let dept = Department::ALL
        .choose(rng)
        .copied()
        .unwrap_or(Department::Fire);
    (dept, compose_for(dept, rng))
}

/// Three sentences: issue + location, duration, closing remark.
pub fn compose_for<R: Rng + ?Sized>(dept: Department, rng: &mut R) -> String {
    let issue = pick(dept.issues(), rng);
    let sentence1 = format!("{issue} {}.", pick(&LOCATIONS, rng));
    let sentence2 = format!("This has been happening {}.", pick(&TIME_PHRASES, rng));
    let sentence3 = pick(&CLOSING_REMARKS, rng);

    format!("{sentence1} {sentence2} {sentence3}")
}
