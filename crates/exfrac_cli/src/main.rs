//! Console walkthrough over the fraction type: construction, display,
//! mixed numbers, arithmetic, predicates, adjacency, and the error cases.

use exfrac_core::{Fraction, FractionError};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FractionError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Fraction walkthrough ===\n");

    println!("1. Construction and canonical display");
    let half = Fraction::new(1, 2)?;
    let two_quarters = Fraction::new(2, 4)?;
    let neg_half = Fraction::new(-3, 6)?;
    println!("new(1, 2)  = {half}");
    println!("new(2, 4)  = {two_quarters}");
    println!("new(-3, 6) = {neg_half}");

    println!("\n2. Mixed numbers");
    let five_halves = Fraction::new(5, 2)?;
    let improper_negative = Fraction::new(-7, 2)?;
    println!(
        "{five_halves} as a mixed number: {}",
        five_halves.to_mixed_number()
    );
    println!(
        "{improper_negative} as a mixed number: {}",
        improper_negative.to_mixed_number()
    );

    println!("\n3. Arithmetic");
    println!(
        "{half} + {two_quarters} = {}",
        half.checked_add(&two_quarters)?
    );
    println!(
        "{half} - {two_quarters} = {}",
        half.checked_sub(&two_quarters)?
    );
    println!(
        "{half} * {two_quarters} = {}",
        half.checked_mul(&two_quarters)?
    );
    println!(
        "{half} / {two_quarters} = {}",
        half.checked_div(&two_quarters)?
    );
    println!("{half} ^ 2 = {}", half.checked_pow(2)?);
    println!("{half} ^ -2 = {}", half.checked_pow(-2)?);

    println!("\n4. Comparisons");
    println!("{half} == {two_quarters}: {}", half == two_quarters);
    println!("{half} == {neg_half}: {}", half == neg_half);
    let one = Fraction::new(1, 1)?;
    println!("{one} == 1: {}", one == 1);

    println!("\n5. Predicates and conversions");
    println!("{half} is an integer? {}", half.is_integer());
    println!("{half} is proper? {}", half.is_proper());
    println!("{half} is a unit fraction? {}", half.is_unit());
    println!("{half} as f64 = {}", half.to_f64());
    println!("|{neg_half}| = {}", neg_half.abs());

    println!("\n6. Adjacency");
    let three_halves = Fraction::new(3, 2)?;
    let five_halves_again = Fraction::new(5, 2)?;
    println!(
        "{half} and {three_halves} adjacent? {}",
        half.is_adjacent_to(&three_halves)
    );
    println!(
        "{half} and {five_halves_again} adjacent? {}",
        half.is_adjacent_to(&five_halves_again)
    );

    println!("\n{}", "=".repeat(60));
    println!("7. Error handling");
    match Fraction::new(1, 0) {
        Ok(f) => println!("unexpected success: {f}"),
        Err(e) => println!("new(1, 0) failed: {e}"),
    }
    let zero = Fraction::new(0, 1)?;
    match half.checked_div(&zero) {
        Ok(f) => println!("unexpected success: {f}"),
        Err(e) => println!("{half} / {zero} failed: {e}"),
    }

    Ok(())
}
