use crate::app::api;

pub fn run_options() {
    let listing = api::options();

    println!("Styles:");
    for style in &listing.styles {
        println!("  {}", style);
    }
    println!("Tones:");
    for tone in &listing.tones {
        println!("  {}", tone);
    }
    println!("Audiences:");
    for audience in &listing.audiences {
        println!("  {}", audience);
    }
    let (min, max) = listing.word_count_range;
    println!("Word count: {}-{} (default {})", min, max, listing.default_word_count);
}
