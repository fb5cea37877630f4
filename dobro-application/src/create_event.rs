use super::*;
use usecases::NewEvent;

pub fn create_event(
    connections: &sqlite::Connections,
    created_by: i64,
    new_event: NewEvent,
) -> Result<EventRecord> {
    let mut connection = connections.exclusive()?;
    let record = connection.transaction(|conn| {
        usecases::create_event(conn, created_by, new_event).map_err(|err| {
            warn!("Failed to create event: {err}");
            err
        })
    })?;
    Ok(record)
}
