//! The insert workflow shared by every connection strategy.
//!
//! It clears the `thing` table and inserts `thing-1` straight away. After a
//! short pause it inserts `thing-2`, and after a much longer one `thing-3`.
//! Clearing the table and the first insert must succeed. The two delayed
//! inserts only log their failures, so the run always reaches the end.

use std::time::Duration;

use tracing::error;

use crate::error::ThingError;
use crate::postgres::handle::Handle;
use crate::thing::thing::Thing;
use crate::thing::thing_repository::{delete_all_things, insert_thing};

pub const SECOND_THING_DELAY: Duration = Duration::from_secs(1);
pub const THIRD_THING_DELAY: Duration = Duration::from_secs(12);

/// Pauses taken before the second and the third insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub second: Duration,
    pub third: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Delays {
            second: SECOND_THING_DELAY,
            third: THIRD_THING_DELAY,
        }
    }
}

pub async fn insert_things<H>(handle: &mut H) -> Result<(), ThingError>
where
    H: Handle + ?Sized,
{
    insert_things_with_delays(handle, &Delays::default()).await
}

/// Runs the workflow against an already acquired handle. The handle is not
/// closed or released here.
///
/// Returns an error only when clearing the table or inserting `thing-1` fails.
pub async fn insert_things_with_delays<H>(handle: &mut H, delays: &Delays) -> Result<(), ThingError>
where
    H: Handle + ?Sized,
{
    delete_all_things(handle).await?;

    insert_thing(handle, 1).await?;

    insert_thing_after(handle, 2, delays.second).await;
    insert_thing_after(handle, 3, delays.third).await;

    Ok(())
}

async fn insert_thing_after<H>(handle: &mut H, n: u32, delay: Duration)
where
    H: Handle + ?Sized,
{
    tokio::time::sleep(delay).await;

    if let Err(err) = insert_thing(handle, n).await {
        error!("failed to add {}: {err}", Thing::name_for(n));
    }
}
