use crate::borders::cache::BorderCache;
use crate::cli::Args;
use crate::countries::table::CountryTable;
use crate::session::{self, SessionCodec};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext {
    pub countries: Arc<CountryTable>,
    pub sessions: SessionCodec,
    pub borders: BorderCache,
}

pub fn init(args: &Args, countries: CountryTable) -> AppContext {
    AppContext {
        countries: Arc::new(countries),
        sessions: session::init(args),
        borders: BorderCache::new(args.border_image_size),
    }
}
