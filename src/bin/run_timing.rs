//! Timing harness: produces the `array.txt` / `vector.txt` inputs for the
//! viewer by benchmarking element-wise writes over two point layouts, the
//! standard array-of-structs and the structure-of-arrays ("smart") one.
//!
//! Each row is `entries mean_std var_std mean_smart var_smart`, times in
//! seconds, one row per container size.

use std::fs::File;
use std::hint::black_box;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};

/// Repetitions per size; the reported variances are of the resulting mean.
const REPETITIONS: usize = 1000;

/// Array-of-structs element: the standard layout.
#[derive(Clone, Copy, Default)]
struct Point3 {
    x: f32,
    y: f32,
    z: f32,
}

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

/// Wall-clock seconds for each repetition of `op`.
fn sample<F: FnMut()>(mut op: F) -> Vec<f64> {
    (0..REPETITIONS)
        .map(|_| {
            let start = Instant::now();
            op();
            start.elapsed().as_secs_f64()
        })
        .collect()
}

/// Mean of the samples and the variance of that mean.
fn stats(samples: &[f64]) -> (f64, f64) {
    let r = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / r;
    let var = samples.iter().map(|t| (t - mean) * (t - mean)).sum::<f64>() / (r * (r - 1.0));
    (mean, var)
}

fn write_row(
    out: &mut impl Write,
    entries: usize,
    standard: (f64, f64),
    smart: (f64, f64),
) -> Result<()> {
    writeln!(
        out,
        "{} {} {} {} {}",
        entries, standard.0, standard.1, smart.0, smart.1
    )
    .context("writing timing row")
}

// ---------------------------------------------------------------------------
// Fixed-size arrays
// ---------------------------------------------------------------------------

fn time_array<const N: usize>(out: &mut impl Write) -> Result<()> {
    println!("- {N}");

    // STD: array of structs, every field written per element.
    let standard = {
        let mut points = [Point3::default(); N];
        let samples = sample(|| {
            for p in points.iter_mut() {
                p.x = 1.0;
                p.y = 1.0;
                p.z = 1.0;
            }
            black_box(&points);
        });
        stats(&samples)
    };

    // SMART: one array per component.
    let smart = {
        let mut xs = [0.0f32; N];
        let mut ys = [0.0f32; N];
        let mut zs = [0.0f32; N];
        let samples = sample(|| {
            xs.fill(1.0);
            ys.fill(1.0);
            zs.fill(1.0);
            black_box((&xs, &ys, &zs));
        });
        stats(&samples)
    };

    write_row(out, N, standard, smart)
}

fn run_array(dir: &Path) -> Result<()> {
    let path = dir.join("array.txt");
    let mut out = BufWriter::new(
        File::create(&path).with_context(|| format!("creating {}", path.display()))?,
    );

    time_array::<100>(&mut out)?;
    time_array::<1000>(&mut out)?;
    time_array::<10000>(&mut out)?;
    time_array::<100000>(&mut out)?;

    out.flush().context("flushing array.txt")
}

// ---------------------------------------------------------------------------
// Vectors
// ---------------------------------------------------------------------------

fn time_vector(n: usize, out: &mut impl Write) -> Result<()> {
    println!("- {n}");

    let standard = {
        let mut points = vec![Point3::default(); n];
        let samples = sample(|| {
            for p in points.iter_mut() {
                p.x = 1.0;
                p.y = 1.0;
                p.z = 1.0;
            }
            black_box(&points);
        });
        stats(&samples)
    };

    let smart = {
        let mut xs = vec![0.0f32; n];
        let mut ys = vec![0.0f32; n];
        let mut zs = vec![0.0f32; n];
        let samples = sample(|| {
            xs.fill(1.0);
            ys.fill(1.0);
            zs.fill(1.0);
            black_box((&xs, &ys, &zs));
        });
        stats(&samples)
    };

    write_row(out, n, standard, smart)
}

fn run_vector(dir: &Path) -> Result<()> {
    let path = dir.join("vector.txt");
    let mut out = BufWriter::new(
        File::create(&path).with_context(|| format!("creating {}", path.display()))?,
    );

    for n in [100, 1000, 10_000, 100_000, 1_000_000] {
        time_vector(n, &mut out)?;
    }

    out.flush().context("flushing vector.txt")
}

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let dir = args.next().unwrap_or_else(|| "./".to_string());
    if args.next().is_some() {
        bail!("only one argument is allowed (output directory)");
    }
    let dir = Path::new(&dir);

    println!("Run for array");
    run_array(dir)?;
    println!("Run for vector");
    run_vector(dir)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_mean_and_variance_of_the_mean() {
        let (mean, var) = stats(&[1.0, 2.0, 3.0]);
        assert!((mean - 2.0).abs() < 1e-12);
        // sum of squared deviations = 2, divided by R*(R-1) = 6
        assert!((var - 2.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn rows_are_five_single_space_fields() {
        let mut buf = Vec::new();
        write_row(&mut buf, 100, (0.004, 2.5e-7), (0.002, 1e-7)).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert_eq!(line.trim_end().split(' ').count(), 5);
        assert!(line.starts_with("100 0.004 "));
    }
}
