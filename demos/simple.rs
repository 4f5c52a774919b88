use zipf_analyzer::{analyze_text, SourceInfo};

fn main() {
    env_logger::init();

    let text = "The cat sat on the mat. The cat ran after the dog, and the dog ran home.";

    let source_info = SourceInfo::new("simple", "text/plain", text.len() as u64);
    let result = analyze_text("simple", source_info, text).unwrap();

    println!("Zipf fit for the given text \"{}\"", text);
    println!(
        "slope: {:.3}, R²: {:.3}",
        result.fit_metrics().slope,
        result.fit_metrics().r_squared
    );
    for point in result.ranked_points() {
        println!(
            "{:>3} {:<6} {:>3} (ideal {:.2})",
            point.rank, point.word, point.actual_frequency, point.ideal_frequency
        );
    }
}
