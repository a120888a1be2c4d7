mod ghanaian_names;

pub use ghanaian_names::GHANAIAN_NAMES;
