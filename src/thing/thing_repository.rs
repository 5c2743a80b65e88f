use tracing::info;

use crate::error::ThingError;
use crate::postgres::handle::Handle;
use crate::thing::thing::Thing;

pub const DELETE_ALL_THINGS: &str = "DELETE FROM thing";
pub const INSERT_THING: &str = "INSERT INTO thing (name) VALUES ($1)";
pub const SELECT_THING_BY_NAME: &str = "SELECT id, name FROM thing WHERE name = $1";

pub async fn delete_all_things<H>(handle: &mut H) -> Result<u64, ThingError>
where
    H: Handle + ?Sized,
{
    let deleted = handle.run(DELETE_ALL_THINGS, &[]).await?;
    tracing::debug!("deleted {deleted} things");
    Ok(deleted)
}

/// Inserts `thing-{n}` and reads it back by name to learn the id the database
/// gave it.
pub async fn insert_thing<H>(handle: &mut H, n: u32) -> Result<i32, ThingError>
where
    H: Handle + ?Sized,
{
    let name = Thing::name_for(n);
    info!("adding {name}");

    handle.run(INSERT_THING, &[name.as_str()]).await?;

    let thing = handle.one(SELECT_THING_BY_NAME, &[name.as_str()]).await?;
    info!("added {} as #{}", thing.name, thing.id);

    Ok(thing.id)
}
