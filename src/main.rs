use std::time::{Duration, Instant};

use env_logger::Env;
use log::info;
use voracious_radix_sort::RadixSort;
use vortex_sort::{Result, VortexSorter};

fn benchmark(name: &str, repeats: usize, mut f: impl FnMut() -> Result<()>) -> Result<()> {
    // Warmup.
    for _ in 0..repeats {
        f()?;
    }
    let start = Instant::now();
    for _ in 0..repeats {
        f()?;
    }
    let duration = start.elapsed();
    println!("  {}: {}", name, human_time(repeats, duration));
    Ok(())
}

fn human_time(repeats: usize, duration: Duration) -> String {
    let mut duration = duration.as_nanos() as f64 / repeats as f64;
    if duration < 1000.0 {
        return format!("{:.1}ns", duration);
    }
    duration /= 1000.0;
    if duration < 1000.0 {
        return format!("{:.1}us", duration);
    }
    duration /= 1000.0;
    if duration < 1000.0 {
        return format!("{:.1}ms", duration);
    }
    duration /= 1000.0;
    format!("{:.1}s", duration)
}

fn human_size(size: usize) -> String {
    if size < 1024 {
        return format!("{}B", size);
    }
    let mut size = size as f64;
    size /= 1024.0;
    if size < 1024.0 {
        return format!("{}KiB", size);
    }
    size /= 1024.0;
    if size < 1024.0 {
        return format!("{}MiB", size);
    }
    size /= 1024.0;
    format!("{}GiB", size)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let sorter = VortexSorter::new();
    let demo: [u64; 7] = [15, 3, 10, 4, 12, 1, 7];
    info!("original data: {:?}", demo);
    info!("sorted data: {:?}", sorter.sort(&demo)?);

    let threads = sorter.num_threads();
    let mut rng = fastrand::Rng::with_seed(0);
    for lg_size in [8, 10, 15, 20] {
        // Values below 2^31, so bands cover bit positions 0..=30.
        let data: Vec<u64> = (0..1usize << lg_size).map(|_| rng.u64(..1 << 31)).collect();
        let repeats = 1usize << 20usize.saturating_sub(lg_size);
        println!(
            "size: {} ({} elements)",
            human_size(std::mem::size_of::<u64>() * data.len()),
            data.len()
        );

        let mut expected = data.clone();
        expected.sort_unstable();
        if sorter.sort(&data)? != expected {
            eprintln!("vortex sort disagrees with slice::sort_unstable at {} elements", data.len());
            std::process::exit(1);
        }

        benchmark("slice::sort_unstable", repeats, || {
            let mut v = data.clone();
            v.sort_unstable();
            Ok(())
        })?;

        benchmark("voracious_sort", repeats, || {
            let mut v = data.clone();
            v.voracious_sort();
            Ok(())
        })?;

        benchmark("voracious_mt_sort", repeats, || {
            let mut v = data.clone();
            v.voracious_mt_sort(threads);
            Ok(())
        })?;

        benchmark("vortex_sort", repeats, || {
            sorter.sort(&data)?;
            Ok(())
        })?;
    }
    Ok(())
}
