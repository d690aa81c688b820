mod artist;
mod search;

pub(crate) use artist::artist_details;
pub(crate) use search::search;
