// demos/druid.rs
// Run with:
//   cargo run --example druid

use stat_table::{CurveSpec, RunConfig, Stat, StatVector, compute_progression};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let start = StatVector::new(25.0, 22.0, 22.0, 19.0, 18.0);
    let end = StatVector::new(65.0, 100.0, 110.0, 69.0, 62.0);

    // Default exponential curve, written to stats/druid.csv.
    let cfg = RunConfig::new(end).with_start_stats(start).with_comment("druid");
    let table = stat_table::run(&cfg, &mut std::io::stdout())?;

    println!("== Druid ==");
    println!("curve      -> {}", table.curve());
    println!("end budget -> {}", table.end_budget());
    println!("partition  -> {:?}", table.partition());

    // Same stats on a quadratic curve for comparison (no file written).
    let quad = CurveSpec::polynomial([1.0 / 3600.0, 0.0, 0.0]);
    let quad_table = compute_progression(&quad, &start, &end)?;
    for level in [1, 10, 30, 60] {
        let a = table.row(level).map(|r| r.stats[Stat::Spi]).unwrap_or_default();
        let b = quad_table.row(level).map(|r| r.stats[Stat::Spi]).unwrap_or_default();
        println!("L{level:>2} spi: exp {a:>6}  quad {b:>6}");
    }
    Ok(())
}
