pub mod definition;
pub mod implementation;
#[cfg(test)]
mod test;

pub use definition::Locate;
