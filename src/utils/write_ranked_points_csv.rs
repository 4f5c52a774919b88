use crate::constants::RANKED_POINTS_CSV_HEADER;
use crate::models::{Error, RankedPoint};
use csv::WriterBuilder;
use std::io::Write;

/// Writes the ranked table of an analysis as CSV.
///
/// Log columns are written with 4 decimals, the remaining floating point
/// columns with 2 decimals. Words are quoted only when necessary.
pub fn write_ranked_points_csv<W: Write>(
    ranked_points: &[RankedPoint],
    writer: W,
) -> Result<(), Error> {
    if ranked_points.is_empty() {
        return Err(Error::NoData);
    }

    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(RANKED_POINTS_CSV_HEADER)?;

    for point in ranked_points {
        csv_writer.write_record(&[
            point.rank.to_string(),
            point.word.clone(),
            point.actual_frequency.to_string(),
            format!("{:.4}", point.log_rank),
            format!("{:.4}", point.log_frequency),
            format!("{:.2}", point.ideal_frequency),
            format!("{:.2}", point.fitted_frequency),
            format!("{:.2}", point.percent_divergence_from_ideal),
        ])?;
    }

    csv_writer.flush()?;

    Ok(())
}
