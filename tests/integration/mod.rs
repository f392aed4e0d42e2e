//! Integration test suite for the godot-releases binary

mod helpers;
mod test_metadata;
