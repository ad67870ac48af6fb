mod loader;
mod parse_bad;
