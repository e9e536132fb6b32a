//! Utilities shared by the library and its tests
