/*!
# Count Tokens

Count the valid and the invalid integer tokens of a text file, printing each one.
*/

extern crate sensible_read;

use std::env;
use std::process;

use sensible_read::{read_opt_from, readline, InputSource, ScanError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), ScanError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let path = match env::args().nth(1) {
        Some(path) => path,
        None => readline("Input a text file: ")?,
    };

    let mut ins = match InputSource::scan_path(&path) {
        Ok(ins) => ins,
        Err(err) => {
            eprintln!("Couldn't open {}: {}", path, err);
            process::exit(1);
        }
    };

    let mut valid_count = 0;
    let mut invalid_count = 0;

    loop {
        match read_opt_from::<i32>(&mut ins)? {
            Some(n) => {
                println!("{}", n);

                valid_count += 1;
            }
            None if ins.is_eof() => break,
            None => {
                if let Some(token) = ins.next_token()? {
                    println!("{}", token);
                }

                invalid_count += 1;
            }
        }
    }

    println!(
        "There were {} valid ints in the file and {} invalid tokens in the file.",
        valid_count, invalid_count
    );

    Ok(())
}
