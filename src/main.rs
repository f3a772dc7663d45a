use anyhow::Result;
use clap::Parser;
use deskfinder::resolver::headline_price;
use deskfinder::{trace, utils};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Deskfinder - Headline price resolver for coworking listings")]
struct Args {
    /// Path to input JSON file with property records
    #[clap(short, long, default_value = "properties.json")]
    input: String,

    /// Category context applied to every listing (e.g. "virtual-office")
    #[clap(short, long)]
    category: Option<String>,

    /// Optional path to write resolved prices as CSV
    #[clap(short, long)]
    output: Option<String>,

    /// Print which matching rule produced each price
    #[clap(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    trace::set_verbose(args.verbose);

    println!("Deskfinder - Headline Price Resolver");
    println!("====================================");

    let properties = utils::load_properties_from_json(&args.input)?;
    if properties.is_empty() {
        println!("No properties to price.");
        return Ok(());
    }

    let context = args.category.as_deref();
    let mut rows = Vec::new();
    let mut unresolved = 0;

    for property in &properties {
        let price = headline_price(property, context);
        if price.is_empty() {
            unresolved += 1;
            println!("{}: no displayable price", property.name);
        } else {
            println!("{}: {}", property.name, price);
        }
        rows.push((property, price));
    }

    if let Some(output) = &args.output {
        utils::save_prices_to_csv(&rows, output)?;
    }

    println!("\n=== Summary ===");
    println!("Properties priced: {}", properties.len() - unresolved);
    println!("Without a displayable price: {}", unresolved);

    Ok(())
}
