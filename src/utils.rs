use crate::models::Property;
use anyhow::{Result, Context};
use std::fs::File;
use std::path::Path;

pub fn load_properties_from_json(input_path: &str) -> Result<Vec<Property>> {
    let path = Path::new(input_path);

    if !path.exists() {
        println!("Listings file does not exist: {}", input_path);
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .context(format!("Failed to open input file: {}", input_path))?;

    let properties: Vec<Property> = serde_json::from_reader(file)
        .context(format!("Failed to parse listings from: {}", input_path))?;

    println!("Loaded {} properties from {}", properties.len(), input_path);
    Ok(properties)
}

pub fn save_prices_to_csv(rows: &[(&Property, String)], output_path: &str) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create output file: {}", output_path))?;

    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(["Name", "City", "Categories", "Headline Price"])?;

    for (property, price) in rows {
        writer.write_record([
            property.name.as_str(),
            property.city.as_deref().unwrap_or(""),
            property.categories.join("; ").as_str(),
            price.as_str(),
        ])?;
    }

    writer.flush()?;
    println!("Saved {} prices to {}", rows.len(), output_path);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_file_is_an_empty_list() {
        let properties = load_properties_from_json("does-not-exist.json").unwrap();
        assert!(properties.is_empty());
    }
}
