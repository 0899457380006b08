use std::{env, process};

use keypair_base58::convert;

fn main() {
    env_logger::init();

    // Get command line argument
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        println!("Usage: {} <keypair-file>", args[0]);
        process::exit(1);
    }

    // Convert to base58 and print the result
    match convert(&args[1]) {
        Ok(encoded) => println!("{}", encoded),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
