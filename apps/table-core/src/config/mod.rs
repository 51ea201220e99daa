pub mod db;
pub mod turns;
