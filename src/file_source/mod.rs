pub mod content_type;
#[cfg(test)]
pub mod impl_fake;
pub mod impl_native;
pub mod interface;
