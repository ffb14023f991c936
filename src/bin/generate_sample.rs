//! Writes `gtex_qc_demo.csv`: a deterministic synthetic QC table with a
//! `Broad Tissue` column and four numeric QC metrics, in the shape the
//! viewer expects.

use anyhow::Result;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Per-tissue metric profile: (reads mean, mapping-rate mean, genes mean,
/// rin mean). Spread is shared across tissues.
const TISSUES: &[(&str, f64, f64, f64, f64)] = &[
    ("Blood", 42.0e6, 0.92, 17_500.0, 7.4),
    ("Brain", 55.0e6, 0.88, 21_000.0, 6.8),
    ("Heart", 48.0e6, 0.91, 18_200.0, 7.9),
    ("Liver", 50.0e6, 0.94, 16_800.0, 8.2),
    ("Lung", 45.0e6, 0.90, 19_400.0, 7.1),
];

const SAMPLES_PER_TISSUE: usize = 40;

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "gtex_qc_demo.csv";
    let mut writer = csv::Writer::from_path(output_path)?;
    writer.write_record([
        "SampleID",
        "Broad Tissue",
        "ReadsMapped",
        "MappingRate",
        "GenesDetected",
        "RIN",
    ])?;

    let mut row_id = 0usize;
    for &(tissue, reads_mu, rate_mu, genes_mu, rin_mu) in TISSUES {
        for _ in 0..SAMPLES_PER_TISSUE {
            let reads = rng.gauss(reads_mu, 6.0e6).max(1.0e6);
            let rate = rng.gauss(rate_mu, 0.03).clamp(0.5, 1.0);
            let genes = rng.gauss(genes_mu, 1_800.0).max(5_000.0);
            let rin = rng.gauss(rin_mu, 0.7).clamp(2.0, 10.0);

            writer.write_record([
                format!("GTEX-{row_id:04}"),
                tissue.to_string(),
                format!("{:.0}", reads),
                format!("{:.4}", rate),
                format!("{:.0}", genes),
                format!("{:.2}", rin),
            ])?;
            row_id += 1;
        }
    }
    writer.flush()?;

    println!(
        "Wrote {row_id} samples across {} tissues to {output_path}",
        TISSUES.len()
    );
    Ok(())
}
