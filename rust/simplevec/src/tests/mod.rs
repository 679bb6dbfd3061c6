mod drop_tests;
mod model_tests;
#[cfg(feature = "serde")]
mod serde_tests;
