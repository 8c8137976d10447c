use super::*;

#[get("/venues")]
pub fn get_venues(connections: sqlite::Connections) -> Result<Vec<json::Venue>> {
    let db = connections.shared()?;
    let venues = usecases::list_venues(&StoredVenues(&db))?;
    Ok(Json(venues.into_iter().map(Into::into).collect()))
}

#[get("/venues/<id>")]
pub fn get_venue(connections: sqlite::Connections, id: &str) -> Result<json::Venue> {
    let db = connections.shared()?;
    let venue = usecases::get_venue(&StoredVenues(&db), id)?;
    Ok(Json(venue.into()))
}

/// Reports newer than `since` (unix timestamp in milliseconds),
/// newest first.
#[get("/venues/<id>/reports?<since>")]
pub fn get_venue_reports(
    connections: sqlite::Connections,
    aggregator: &State<flows::Aggregator>,
    id: &str,
    since: Option<i64>,
) -> Result<Vec<json::Report>> {
    let now = Timestamp::now();
    let window = match since {
        Some(since) => now - Timestamp::from_millis(since),
        None => aggregator.settings().aggregation_window,
    };
    let db = connections.shared()?;
    let reports = usecases::recent_reports(&db, id, now, window)?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}

#[get("/reports/<id>")]
pub fn get_report(connections: sqlite::Connections, id: &str) -> Result<json::Report> {
    let db = connections.shared()?;
    let report = usecases::get_report(&db, id)?;
    Ok(Json(report.into()))
}

#[post("/venues/<id>/reports", data = "<data>")]
pub async fn post_venue_report(
    aggregator: &State<flows::Aggregator>,
    auth: Auth,
    id: &str,
    data: JsonResult<'_, json::NewReport>,
) -> Result<json::PublishedStatus> {
    let json::NewReport {
        wait_minutes,
        cover_amount,
    } = data?.into_inner();
    let new_report = usecases::NewReport {
        venue_id: id.into(),
        reporter_id: auth.reporter()?.cloned(),
        wait_minutes,
        cover_amount,
    };
    let submission = aggregator
        .submit_and_recompute(new_report, Timestamp::now())
        .await?;
    Ok(Json(submission.status.into()))
}

#[post("/venues/<id>/status")]
pub async fn post_venue_status(
    aggregator: &State<flows::Aggregator>,
    id: &str,
) -> Result<json::PublishedStatus> {
    let status = aggregator
        .recompute(&Id::from(id), Timestamp::now())
        .await?;
    Ok(Json(status.into()))
}
