pub mod currency;
pub mod fractions;
pub mod pool;
pub mod route;
pub mod trade;
