use brunch::{Bench, Benches};
use tg_core::aggregate::Aggregated;
use tg_entities::{builders::*, report::*, time::*, venue::*};

fn main() {
    let mut benches = Benches::default();

    let (venue, reports) = create_venue_with_multiple_reports(1000);
    let at = Timestamp::now();

    benches.push(
        Bench::new("Calculate the median status of 1000 reports for a venue")
            .run(|| venue.aggregate_status(&reports[..], at)),
    );
    benches.finish();
}

fn create_venue_with_multiple_reports(n: usize) -> (Venue, Vec<Report>) {
    let venue = Venue::build().finish();
    let reports = (0..n)
        .map(|i| {
            Report::build()
                .venue(venue.id.as_str())
                .wait_minutes((i % 90) as u32)
                .cover_amount((i % 25) as u32)
                .finish()
        })
        .collect();
    (venue, reports)
}
