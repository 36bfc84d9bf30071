use dvb_text::{resolve, TextPipeline};
use std::env;

fn main() {
    colog::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <field bytes as hex, e.g. 01 48 69>", args[0]);
        std::process::exit(1);
    }

    // Field bytes arrive as hex octets, one or more per argument
    let mut field = Vec::new();
    for arg in &args[1..] {
        for octet in arg.split_whitespace() {
            match u8::from_str_radix(octet, 16) {
                Ok(byte) => field.push(byte),
                Err(_) => {
                    eprintln!("ERROR: not a hex octet: {:?}", octet);
                    std::process::exit(1);
                }
            }
        }
    }

    match resolve(&field) {
        Ok(resolved) => {
            println!("Charset: {}", resolved.charset);
            println!("Content offset: {}", resolved.offset);
        }
        Err(e) => println!("Classification: {}", e),
    }

    let mut pipeline = TextPipeline::new();
    match pipeline.convert(&field) {
        Ok(text) => println!("Text: {}", text),
        Err(e) => {
            eprintln!("ERROR: Failed to convert field");
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}
