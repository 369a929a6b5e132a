//! Basic usage example for usps-address.
//!
//! This example demonstrates the core functionality of the library:
//! - Standardizing full addresses
//! - Normalizing delivery lines and last lines on their own
//! - Switching between the warn and raise error policies
//!
//! Run with: RUST_LOG=warn cargo run --example basic_usage

use usps_address::{
    AddressStandardizer, Error, ErrorPolicy, StandardizerConfig, normalize_delivery_line,
};

fn main() -> Result<(), Error> {
    pretty_env_logger::init();

    println!("usps-address Basic Usage Example");
    println!("================================\n");

    // Example 1: Full address standardization
    println!("1. Address Standardization");
    println!("--------------------------");

    let standardizer = AddressStandardizer::new();
    let address = "100 North Main Street Apartment 4, Springfield, Illinois 62701";
    println!("Input: {address}");
    println!("Standardized:\n{}", standardizer.standardize(address)?);
    println!();

    // Example 2: Delivery line fields
    println!("2. Delivery Line Parsing");
    println!("------------------------");

    let line = "101 west Main Street South Suite 12";
    println!("Input: {line}");
    let parsed = standardizer.delivery_normalizer().parse(line)?;
    println!("  Primary Number: {}", parsed.primary_number);
    if let Some(predirectional) = &parsed.predirectional {
        println!("  Predirectional: {predirectional}");
    }
    println!("  Street Name: {}", parsed.street_name);
    if let Some(suffix) = &parsed.suffix {
        println!("  Suffix: {suffix}");
    }
    if let Some(postdirectional) = &parsed.postdirectional {
        println!("  Postdirectional: {postdirectional}");
    }
    if let (Some(designator), Some(value)) = (&parsed.secondary_designator, &parsed.secondary_value)
    {
        println!("  Secondary Unit: {designator} {value}");
    }
    println!("Normalized: {}", normalize_delivery_line(line)?);
    println!();

    // Example 3: Warn policy passes bad fields through
    println!("3. Warn Policy");
    println!("--------------");

    let bad = "7 Elm Rd, Anytown, TX 1234";
    println!("Input: {bad}");
    let report = standardizer.standardize_report(bad)?;
    println!("Standardized:\n{}", report.value);
    if report.has_warnings() {
        for warning in &report.warnings {
            println!("  Warning: {warning}");
        }
    }
    println!();

    // Example 4: Raise policy and a custom delimiter
    println!("4. Raise Policy");
    println!("---------------");

    let config = StandardizerConfig::builder()
        .delimiter("|")
        .error_policy(ErrorPolicy::Raise)
        .build();
    let strict = AddressStandardizer::with_config(config);

    for input in ["42 Oak Ave|Anytown|CA 90210", "42 Oak Ave|Anytown|ZZ 90210"] {
        match strict.standardize(input) {
            Ok(standardized) => println!("  {input} ->\n{standardized}"),
            Err(e) => println!("  {input} -> Error: {e}"),
        }
    }
    println!();

    // Example 5: Batch processing
    println!("5. Batch Processing");
    println!("-------------------");

    let addresses = [
        "123 Main St, Boston, MA 02108",
        "456 Oak Avenue\nPortland OR 97201",
        "789 Pine Road, Austin, Texas 73301",
    ];

    println!("Processing {} addresses in batch:", addresses.len());
    let results = standardizer.standardize_batch(&addresses)?;
    for (input, result) in addresses.iter().zip(&results) {
        println!("  {input:?} -> {result:?}");
    }
    println!();

    println!("All examples completed successfully!");

    Ok(())
}
