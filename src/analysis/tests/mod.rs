mod prices;
pub mod utils;
