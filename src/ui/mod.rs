pub mod central;
pub mod results;
pub mod top;
