//! Interactive running-key cipher over the Latin alphabet.
//!
//! Reads a text and a key from stdin, decrypts the text, then encrypts the
//! decrypted result again and prints both.

use std::io::{self, BufRead, Write};

use classic_ciphers::{BoundCipher, CipherConfig, Key, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn prompt(input: &mut impl BufRead, output: &mut impl Write, message: &str) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn run(cipher: &BoundCipher, input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    let text = prompt(input, output, "Enter your text: ")?;
    let key = Key::from(prompt(input, output, "Enter shift: ")?);

    let decrypted = cipher.decrypt(&text, &key)?;
    writeln!(output, "Decryption: {}", decrypted)?;

    let encrypted = cipher.encrypt(&decrypted, &key)?;
    writeln!(output, "Encryption: {}", encrypted)?;

    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let config = CipherConfig::default();
    info!(cipher = %config.kind, alphabet = %config.alphabet, "starting");
    let cipher = config.build();

    run(&cipher, &mut io::stdin().lock(), &mut io::stdout().lock())
}
