//! Storing an oversized session token in an in-memory cookie jar.
//!
//! Writes a long token, then overwrites it with a shorter one, deleting the
//! pieces the shorter write no longer needs.
//!
//! Run with:
//!     RUST_LOG=cookie_chunker=trace cargo run --example cookie_jar

use std::collections::BTreeMap;
use std::convert::Infallible;

use cookie_chunker::{SplitConfig, Splitter, combine, stale_piece_names};
use tracing_subscriber::EnvFilter;

const COOKIE: &str = "sb-xdbaubpgcisziicojymj-auth-token";

#[derive(Default)]
struct CookieJar {
    cookies: BTreeMap<String, String>,
}

impl CookieJar {
    fn write(
        &mut self,
        splitter: &Splitter,
        base: &str,
        value: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let pieces = splitter.split(base, value)?;

        let existing: Vec<String> = self.cookies.keys().cloned().collect();
        for name in stale_piece_names(base, existing.iter().map(String::as_str), &pieces) {
            println!("  delete {}", name);
            self.cookies.remove(name);
        }

        for piece in pieces {
            println!("  set    {} ({} chars)", piece.name, piece.value.len());
            self.cookies.insert(piece.name, piece.value);
        }
        Ok(())
    }

    fn read(&self, base: &str) -> Option<String> {
        let result = combine(base, |name: &str| {
            Ok::<_, Infallible>(self.cookies.get(name).cloned())
        });
        match result {
            Ok(value) => value,
            Err(e) => match e {},
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let splitter = Splitter::new(SplitConfig::default());
    let mut jar = CookieJar::default();

    let long_token = "eyJhbGciOiJIUzI1NiJ9.".repeat(400);
    println!("Writing {} char token:", long_token.len());
    jar.write(&splitter, COOKIE, &long_token)?;
    assert_eq!(jar.read(COOKIE).as_deref(), Some(long_token.as_str()));

    let short_token = "eyJhbGciOiJIUzI1NiJ9.".repeat(160);
    println!("\nOverwriting with {} char token:", short_token.len());
    jar.write(&splitter, COOKIE, &short_token)?;
    assert_eq!(jar.read(COOKIE).as_deref(), Some(short_token.as_str()));

    println!("\nJar now holds {} cookies", jar.cookies.len());
    Ok(())
}
