pub mod integer;
pub mod map;
