use std::env;

use solar_irradiance::{generate_annual_table, monthly_peak_solar_hours, TableConfig};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match env::args().nth(1) {
        Some(path) => TableConfig::from_file(path)?,
        None => TableConfig::default(),
    };

    let table = generate_annual_table(&config);
    println!("Annual table for {}", config.location);
    println!(
        "{} samples at {}-minute intervals, generated {}",
        table.metadata.total_entries, config.interval_minutes, table.metadata.generated_at
    );
    println!();

    for (name, psh) in MONTHS.iter().zip(monthly_peak_solar_hours(&table)) {
        println!("{}  {:5.2} h  {}", name, psh, "#".repeat((psh * 3.0).round() as usize));
    }
    println!();
    println!("Year total: {:.0} peak solar hours", table.metadata.annual_peak_solar_hours);

    Ok(())
}
