pub mod errors;
pub mod db;
pub mod dog;

#[cfg(test)]
mod tests;
