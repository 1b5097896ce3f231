pub mod errors;
pub mod db;
pub mod puppy;

#[cfg(test)]
mod tests;
