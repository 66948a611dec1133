/*!
# Apples

Walk through every kind of read: typed reads with and without a prompt, a deferred-type read, a line read, reads from a file, a user-defined type and optional reads.

Set `RUST_LOG=sensible_read=debug` to see the discarded tokens.
*/

extern crate sensible_read;

use std::io::{Read, Write};
use std::process;

use sensible_read::{
    read, read_from, read_opt, read_opt_from, reader, readline, Extract, InputSource, ScanError,
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct Tester {
    x: i32,
    f: f32,
}

impl Extract for Tester {
    fn extract<R: Read, W: Write>(source: &mut InputSource<R, W>) -> Result<Option<Self>, ScanError> {
        let x = match i32::extract(source)? {
            Some(x) => x,
            None => return Ok(None),
        };

        let f = match f32::extract(source)? {
            Some(f) => f,
            None => return Ok(None),
        };

        Ok(Some(Tester {
            x,
            f,
        }))
    }
}

fn total_bill(green_apples: u32, red_apples: u32, price: f64) -> f64 {
    (green_apples as f64 + red_apples as f64) * price
}

fn main() -> Result<(), ScanError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let green_apples: u32 =
        reader("Please enter how many green and red apples you want to buy: ").get()?;
    let red_apples = read::<u32>("")?;
    let price = read::<f64>("Please enter the price per apple: ")?;

    println!("Your total bill is {}", total_bill(green_apples, red_apples, price));

    let filename = readline("Please enter a file to read ints from (shuf.txt is the default): ")?;
    let filename = if filename.is_empty() { String::from("shuf.txt") } else { filename };

    println!("Attempting to open {} now...", filename);

    let mut ins = match InputSource::scan_path(&filename) {
        Ok(ins) => ins,
        Err(_) => {
            println!("Error: Couldn't open {}", filename);
            process::exit(1);
        }
    };

    println!("The first int in the file is: {}", read_from::<i32>(&mut ins)?);

    let mut numbers = Vec::new();

    while let Some(n) = read_opt_from::<i32>(&mut ins)? {
        numbers.push(n);
    }

    println!("Read {} more ints from the file.", numbers.len());

    let t: Tester = reader("Please enter an int and a float:\n").get()?;

    println!("t.x = {} t.f = {}", t.x, t.f);

    let height_cm = match read_opt::<u32>("Please enter your height (in cm):\n")? {
        Some(height_cm) => height_cm,
        None => {
            println!("You did not enter an unsigned int when asked for your height. Quitting...");
            process::exit(1);
        }
    };

    let weight_kg = match read_opt::<u32>("Please enter your weight (in kg):\n")? {
        Some(weight_kg) => weight_kg,
        None => {
            println!("You did not enter an unsigned int when asked for your weight. Quitting...");
            process::exit(1);
        }
    };

    let height_m = height_cm as f64 / 100.0;

    println!("Your BMI is: {}", weight_kg as f64 / (height_m * height_m));

    Ok(())
}
