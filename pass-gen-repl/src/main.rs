use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use pass_gen_core::generator::options::GeneratorOptions;
use pass_gen_core::generator::phrase_generator::PhraseGenerator;

const DEFAULT_AMOUNT: usize = 4;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Accept every word length; the bundled list is loaded as-is
    let mut options = GeneratorOptions::new();
    options.num_words = DEFAULT_AMOUNT;
    options.min_length = 0;
    options.max_length = usize::MAX;

    let generator = PhraseGenerator::new(options)?;
    generator.ready().await;
    println!("Ready");

    prompt();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("generate") => {
                let amount = match parts.next() {
                    None => DEFAULT_AMOUNT,
                    Some(raw) => match raw.parse::<usize>() {
                        Ok(amount) => amount,
                        Err(_) => {
                            println!("usage: generate [amount]");
                            prompt();
                            continue;
                        }
                    },
                };
                match generator.generate_words(amount, true).await {
                    Ok(words) => println!("{}", words.join(" ")),
                    Err(e) => println!("{}", e),
                }
            }
            Some("add") => {
                generator.add(parts.map(str::to_owned));
            }
            Some("delete") => {
                let targets: Vec<String> = parts.map(str::to_owned).collect();
                let outcome = generator.delete(&targets).await;
                println!("removed {}", outcome.removed);
                for error in outcome.errors {
                    println!("{}", error);
                }
            }
            Some("quit") | Some("exit") => break,
            Some(other) => {
                println!("unknown command: {} (try generate, add, delete, quit)", other)
            }
        }
        prompt();
    }

    Ok(())
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}
