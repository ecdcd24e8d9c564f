//! 配列とTreapにランダムな位置への挿入を繰り返し, 時間を比較する.
//!
//! `TREAP_LOG=debug`で設定を表示する.

use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Arg, Command};
use implicit_treap::Treap;
use rand::{rngs::SmallRng, Rng, SeedableRng};

#[derive(Debug, PartialEq)]
struct Options {
    count: usize,
    seed: Option<u64>,
    max_value: i64,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            count: 100_000,
            seed: None,
            max_value: 100,
        }
    }
}

fn make_options_parser() -> Command {
    Command::new("treap-bench")
        .about("Compares random insertion into a Vec and into an implicit treap")
        .arg(
            Arg::new("count")
                .short('n')
                .long("count")
                .value_name("N")
                .help("Number of random insertions")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("seed")
                .short('s')
                .long("seed")
                .value_name("SEED")
                .help("Seed for the generated workload and the treap priorities")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("max-value")
                .short('m')
                .long("max-value")
                .value_name("V")
                .help("Exclusive upper bound of the inserted values")
                .value_parser(clap::value_parser!(i64).range(1..)),
        )
}

impl Options {
    fn parse_from_args<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<std::ffi::OsString> + Clone,
    {
        let matches = make_options_parser()
            .try_get_matches_from(args)
            .context("invalid command line")?;
        let default = Options::default();
        Ok(Options {
            count: matches
                .get_one::<usize>("count")
                .copied()
                .unwrap_or(default.count),
            seed: matches.get_one::<u64>("seed").copied(),
            max_value: matches
                .get_one::<i64>("max-value")
                .copied()
                .unwrap_or(default.max_value),
        })
    }
}

/// `Treap::insert`と同じ規則で`Vec`に挿入する
fn insert_clamped(v: &mut Vec<i64>, index: isize, value: i64) {
    let len = v.len() as isize;
    if v.is_empty() || index <= 0 {
        v.insert(0, value);
    } else if index >= len - 1 {
        v.push(value);
    } else {
        v.insert(index as usize, value);
    }
}

fn main() -> anyhow::Result<()> {
    if std::env::var("TREAP_LOG").is_ok() {
        let e = env_logger::Env::new()
            .filter("TREAP_LOG")
            .write_style("TREAP_LOG_STYLE");
        env_logger::init_from_env(e);
    }

    let options = Options::parse_from_args(std::env::args_os())?;
    log::debug!("bench options: {:?}", options);

    let mut rng = match options.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let workload: Vec<(isize, i64)> = (0..options.count)
        .map(|i| {
            (
                rng.random_range(0..=i as i64) as isize,
                rng.random_range(0..options.max_value),
            )
        })
        .collect();

    let timestamp = Instant::now();
    let mut v = vec![];
    for &(index, value) in &workload {
        insert_clamped(&mut v, index, value);
    }
    let vec_time = timestamp.elapsed();

    let mut t = Treap::with_rng(SmallRng::from_rng(&mut rng));
    let timestamp = Instant::now();
    for &(index, value) in &workload {
        t.insert(index, value);
    }
    let treap_time = timestamp.elapsed();

    println!("vec:   {:.6}s", vec_time.as_secs_f64());
    println!("treap: {:.6}s", treap_time.as_secs_f64());

    let exported = t.export();
    if let Some(i) = (0..v.len()).find(|&i| exported.get(i) != v.get(i)) {
        bail!(
            "sequences differ at {i}: vec has {:?}, treap has {:?}",
            v.get(i),
            exported.get(i)
        );
    }
    if exported.len() != v.len() {
        bail!("length differs: vec {}, treap {}", v.len(), exported.len());
    }
    println!("Good");
    Ok(())
}
